use std::path::Path;

use crate::{CodecOptions, SteganoError};

/// unveils the hidden text message and stores it in `destination_file`
pub fn unveil(
    secret_media: &Path,
    destination_file: &Path,
    password: Option<String>,
    options: CodecOptions,
) -> Result<(), SteganoError> {
    crate::api::unveil::prepare()
        .with_options(options)
        .from_secret_file(secret_media)
        .into_output_file(destination_file)
        .using_password(password)
        .execute()
}
