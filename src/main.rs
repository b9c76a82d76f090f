use clap::Parser;

use crate::errors::ErrorHandler;
use crate::structs::cli::Cli;
use crate::workers::command_runner::CommandRunner;

mod config;
mod enums;
mod errors;
mod helpers;
mod logger;
mod prompts;
mod services;
mod structs;
mod traits;
mod workers;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new();

    if let Err(error) = runner.run_command(cli.command).await {
        ErrorHandler::handle_error(&error);
        std::process::exit(1);
    }
}
