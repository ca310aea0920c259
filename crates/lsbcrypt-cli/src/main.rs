use std::process::ExitCode;

use clap::Parser;
use log::error;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = lsbcrypt_core::Result<T>;

fn main() -> ExitCode {
    env_logger::init();

    let args = CliArgs::parse();
    let options = args.codec_options();

    let result = match args.command {
        Commands::Hide(cmd) => cmd.run(options),
        Commands::Unveil(cmd) => cmd.run(options),
        Commands::UnveilRaw(cmd) => cmd.run(options),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:?}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
