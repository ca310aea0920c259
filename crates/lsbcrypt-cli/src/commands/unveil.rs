use std::path::PathBuf;

use clap::Args;
use lsbcrypt_core::CodecOptions;

use crate::CliResult;

/// Unveils the text message from an image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Password the message was hidden with
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

    /// The message will be stored in that text file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output_file: PathBuf,
}

impl UnveilArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let password = self
            .password
            .or_else(|| crate::cli::ask_for_password(false));

        lsbcrypt_core::commands::unveil(&self.media, &self.output_file, password, options)
    }
}
