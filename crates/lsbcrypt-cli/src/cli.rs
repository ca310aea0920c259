use clap::{Parser, Subcommand};
use dialoguer::Password;
use lsbcrypt_core::{CodecOptions, Concealer};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Use the unkeyed channel order instead of password keyed positions
    #[arg(long, global = true)]
    pub simple: bool,

    /// Mixed into the seed of the position generator, hide and unveil must agree on it
    #[arg(long, global = true, value_name = "n", default_value_t = 0)]
    pub seed_offset: u32,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn codec_options(&self) -> CodecOptions {
        let concealer = if self.simple {
            Concealer::Sequential
        } else {
            Concealer::Permuted
        };

        CodecOptions::default()
            .with_concealer(concealer)
            .with_seed_offset(self.seed_offset)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    UnveilRaw(unveil_raw::UnveilRawArgs),
}

/// Prompts for a password on the terminal, `None` if the prompt was not answered
pub fn ask_for_password(confirm: bool) -> Option<String> {
    let prompt = Password::new().with_prompt("Password");
    let prompt = if confirm {
        prompt.with_confirmation("Repeat password", "Error: the passwords don't match.")
    } else {
        prompt
    };

    prompt.interact().ok()
}
