use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use lsbcrypt_cipher::KdfParams;

use crate::{
    media::{
        image::{EmbeddingStrategy, LsbCodec},
        payload::CryptedPayloadCodec,
        Media,
    },
    CodecOptions, SteganoError,
};

use super::shared::Password;

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output_file: Option<PathBuf>,
    password: Password,
    options: CodecOptions,
    kdf: KdfParams,
}

impl UnveilApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// Use the key derivation parameters the message was hidden with
    pub fn with_kdf_params(mut self, kdf: KdfParams) -> Self {
        self.kdf = kdf;
        self
    }

    /// This is the secret image that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the file the message text will be saved to
    pub fn into_output_file(mut self, output_file: impl AsRef<Path>) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    /// Set the password the message was hidden with
    pub fn using_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    /// Unveils the message and returns it, no file is written
    pub fn unveil_message(&self) -> Result<String, SteganoError> {
        let Some(secret_media) = &self.secret_media else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(password) = self.password.as_deref() else {
            return Err(SteganoError::MissingPassword);
        };

        let strategy = EmbeddingStrategy::from_options(&self.options, Some(password))?;
        let carrier = Media::from_file(secret_media)?;
        let framed = LsbCodec::extract(&carrier, &strategy)?;
        let plaintext = CryptedPayloadCodec::with_params(password, &self.kdf).decode(&framed)?;

        Ok(String::from_utf8(plaintext)?)
    }

    /// Execute the unveil process and blocks until it is finished
    pub fn execute(self) -> Result<(), SteganoError> {
        let Some(output_file) = &self.output_file else {
            return Err(SteganoError::TargetNotSet);
        };
        let message = self.unveil_message()?;

        let mut target_file =
            File::create(output_file).map_err(|source| SteganoError::WriteError { source })?;
        target_file
            .write_all(message.as_bytes())
            .map_err(|source| SteganoError::WriteError { source })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::read_to_string;

    use tempfile::tempdir;

    use super::*;
    use crate::media::Concealer;
    use crate::test_utils::{fast_kdf, write_gradient_png};

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = write_gradient_png(temp_dir.path(), 64, 64);
        let secret = temp_dir.path().join("secret.png");
        crate::api::hide::prepare()
            .with_message("Hello World")
            .with_image(&carrier)
            .with_password("Secret42")
            .with_kdf_params(fast_kdf())
            .with_output(&secret)
            .execute()
            .expect("Failed to hide message in image");

        crate::api::unveil::prepare()
            .from_secret_file(&secret)
            .using_password("Secret42")
            .with_kdf_params(fast_kdf())
            .into_output_file(temp_dir.path().join("secret-message.txt"))
            .execute()
            .expect("Failed to unveil message from image");

        let secret_message = read_to_string(
            File::open(temp_dir.path().join("secret-message.txt")).expect("Failed to open file"),
        )
        .expect("Failed to read file");
        assert_eq!(secret_message, "Hello World");
    }

    #[test]
    fn should_unveil_sequentially_hidden_message() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = write_gradient_png(temp_dir.path(), 32, 32);
        let secret = temp_dir.path().join("simple.png");
        let options = || CodecOptions::default().with_concealer(Concealer::Sequential);
        crate::api::hide::prepare()
            .with_message("in plain order")
            .with_image(&carrier)
            .with_password("lab3")
            .with_options(options())
            .with_kdf_params(fast_kdf())
            .with_output(&secret)
            .execute()
            .expect("Failed to hide message in image");

        let message = prepare()
            .from_secret_file(&secret)
            .using_password("lab3")
            .with_options(options())
            .with_kdf_params(fast_kdf())
            .unveil_message()
            .expect("Failed to unveil message");

        assert_eq!(message, "in plain order");
    }

    #[test]
    fn should_require_secret_media_and_password() {
        assert!(matches!(
            prepare().unveil_message(),
            Err(SteganoError::CarrierNotSet)
        ));
        assert!(matches!(
            prepare().from_secret_file("a.png").unveil_message(),
            Err(SteganoError::MissingPassword)
        ));
        assert!(matches!(
            prepare().from_secret_file("a.png").execute(),
            Err(SteganoError::TargetNotSet)
        ));
    }
}
