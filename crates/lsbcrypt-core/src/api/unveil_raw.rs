use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    media::{
        image::{EmbeddingStrategy, LsbCodec},
        Media,
    },
    CodecOptions, SteganoError,
};

use super::shared::Password;

pub fn prepare() -> UnveilRawApi {
    UnveilRawApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilRawApi {
    secret_media: Option<PathBuf>,
    destination_file: Option<PathBuf>,
    password: Password,
    options: CodecOptions,
}

impl UnveilRawApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the secret image that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the raw file where all data will be saved to
    pub fn into_raw_file(mut self, destination_file: impl AsRef<Path>) -> Self {
        self.destination_file = Some(destination_file.as_ref().to_path_buf());
        self
    }

    /// Set the password that keys the positions.
    /// Only the sequential concealer works without one.
    pub fn using_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    /// Execute the unveil process and blocks until it is finished
    pub fn execute(self) -> Result<(), SteganoError> {
        let Some(secret_media) = self.secret_media else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(destination_file) = self.destination_file else {
            return Err(SteganoError::TargetNotSet);
        };

        let strategy = EmbeddingStrategy::from_options(&self.options, self.password.as_deref())?;
        let carrier = Media::from_file(&secret_media)?;
        let framed = LsbCodec::extract(&carrier, &strategy)?;

        let mut destination_file = File::create(destination_file)
            .map_err(|source| SteganoError::WriteError { source })?;
        destination_file
            .write_all(framed.as_slice())
            .map_err(|source| SteganoError::WriteError { source })
    }
}
