use std::path::PathBuf;

use clap::Args;
use lsbcrypt_core::CodecOptions;

use crate::CliResult;

/// Hides an encrypted text message in a PNG or BMP image
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Password used to encrypt the message and to pick the pixel positions
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Carrier image such as PNG or BMP, used readonly.
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as PNG file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// A text message that will be hidden
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,
}

impl HideArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let password = self
            .password
            .or_else(|| crate::cli::ask_for_password(true));

        lsbcrypt_core::commands::hide(
            &self.media,
            &self.write_to_file,
            &self.message,
            password,
            options,
        )
    }
}
