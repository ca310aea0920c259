use std::path::{Path, PathBuf};

use lsbcrypt_cipher::KdfParams;
use log::info;

use crate::media::image::{EmbeddingStrategy, LsbCodec};
use crate::media::payload::CryptedPayloadCodec;
use crate::media::{Media, Persist};
use crate::{CodecOptions, SteganoError};

use super::shared::Password;

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    password: Password,
    options: CodecOptions,
    kdf: KdfParams,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// Override the key derivation parameters, unveiling must use the same
    pub fn with_kdf_params(mut self, kdf: KdfParams) -> Self {
        self.kdf = kdf;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the password, it encrypts the message and keys the positions
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.into();
        self
    }

    /// Set the password
    /// If `None` is passed, `execute` fails with [`SteganoError::MissingPassword`]
    pub fn use_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    pub fn execute(self) -> Result<(), SteganoError> {
        let Some(message) = self.message else {
            return Err(SteganoError::MissingMessage);
        };
        let Some(image) = self.image else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(SteganoError::TargetNotSet);
        };
        let Some(password) = self.password.as_deref() else {
            return Err(SteganoError::MissingPassword);
        };

        let strategy = EmbeddingStrategy::from_options(&self.options, Some(password))?;
        let carrier = Media::from_file(&image)?;
        let data =
            CryptedPayloadCodec::with_params(password, &self.kdf).encode(message.as_bytes())?;

        LsbCodec::embed(&carrier, &data, &strategy)?.save_as(&output)?;
        info!(
            "hid {} bytes in {output:?} using the {:?} concealer",
            data.len(),
            self.options.concealer
        );

        Ok(())
    }
}
