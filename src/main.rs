//! ghorg CLI - companion for exploring GitHub organizations

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env().init();
    }

    match cli.command {
        Commands::Org { login, field } => {
            cli::org::get(
                cli.format,
                login.as_deref(),
                field.as_deref(),
                cli.config.as_deref(),
            )
            .await
        }
        Commands::Repos { logins, license } => {
            cli::repo::list(cli.format, logins, license, cli.config.as_deref()).await
        }
        Commands::Status => cli::status::run(cli.config.as_deref()),
        Commands::Version => {
            println!("ghorg version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
