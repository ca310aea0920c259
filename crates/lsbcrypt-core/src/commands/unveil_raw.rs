use std::path::Path;

use crate::{CodecOptions, SteganoError};

/// unveil the raw framed data, no checksum verification or decryption is happening.
/// Just a binary dump of header, IV and ciphertext as found in the image.
pub fn unveil_raw(
    secret_media: &Path,
    destination_file: &Path,
    password: Option<String>,
    options: CodecOptions,
) -> Result<(), SteganoError> {
    crate::api::unveil_raw::prepare()
        .with_options(options)
        .from_secret_file(secret_media)
        .into_raw_file(destination_file)
        .using_password(password)
        .execute()
}
