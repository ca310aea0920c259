use std::path::Path;

use crate::{CodecOptions, SteganoError};

pub fn hide(
    media: &Path,
    write_to_file: &Path,
    message: &str,
    password: Option<String>,
    options: CodecOptions,
) -> Result<(), SteganoError> {
    crate::api::hide::prepare()
        .with_options(options)
        .with_image(media)
        .with_output(write_to_file)
        .use_password(password)
        .with_message(message)
        .execute()
}
