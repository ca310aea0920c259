use std::path::PathBuf;

use clap::Args;
use lsbcrypt_core::{CodecOptions, Concealer};

/// Unveils the raw framed bytes without verifying or decrypting them
#[derive(Args, Debug)]
pub struct UnveilRawArgs {
    /// Password that keys the pixel positions
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Source image that contains the secret message
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image source file",
        required = true
    )]
    pub media: PathBuf,

    /// Raw data will be stored as binary file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output_file: PathBuf,
}

impl UnveilRawArgs {
    pub fn run(self, options: CodecOptions) -> crate::CliResult<()> {
        let password = if self.password.is_none() && options.concealer == Concealer::Permuted {
            crate::cli::ask_for_password(false)
        } else {
            self.password
        };

        lsbcrypt_core::commands::unveil_raw(&self.media, &self.output_file, password, options)
    }
}
