mod adapters;
mod app;
mod core;
mod global_constants;
mod ports;
mod presentation;

#[cfg(test)]
mod test_support;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use app::{AppCommand, GiphyApp};

#[derive(Debug, Parser)]
#[command(name = "giphy-inserter", version, about = "Insert Giphy gifs into Markdown documents")]
struct Cli {
    /// Settings file to use instead of the one in the config directory.
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Insert one random gif into the document.
    Random {
        document: PathBuf,
        /// Byte offset to insert at; defaults to the end of the document.
        #[arg(long)]
        cursor: Option<usize>,
    },
    /// Search gifs interactively and insert the chosen one.
    Search {
        document: PathBuf,
        #[arg(long)]
        cursor: Option<usize>,
    },
    /// Save the Giphy API key.
    SetApiKey {
        api_key: String,
    },
    /// Print the settings panel and the available commands.
    ShowSettings,
}

impl From<CliCommand> for AppCommand {
    fn from(command: CliCommand) -> Self {
        match command {
            CliCommand::Random { document, cursor } => AppCommand::InsertRandom { document, cursor },
            CliCommand::Search { document, cursor } => AppCommand::Search { document, cursor },
            CliCommand::SetApiKey { api_key } => AppCommand::SetApiKey(api_key),
            CliCommand::ShowSettings => AppCommand::ShowSettings,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();

    log::info!("[MAIN] Starting {}", global_constants::APPLICATION_NAME);

    let cli = Cli::parse();

    let mut app = GiphyApp::build(cli.settings)?;
    let outcome = app.run(cli.command.into()).await;
    app.shutdown();

    outcome
}
