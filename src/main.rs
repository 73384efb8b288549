mod cli;
mod client;
mod commands;
mod config;
mod error;
mod output;
mod types;

use std::error::Error;
use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use cli::{Cli, Commands, IssueCommands};
use client::RedmineClient;
use config::Config;
use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");

        if verbose {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = cause.source();
            }
        }

        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    output::set_json_output(cli.json);
    let verbose = cli.verbose;

    match cli.command {
        // Commands that don't require config/client
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "redmine", &mut io::stdout());
        }
        Commands::Init => {
            commands::init::run()?;
        }
        // Commands that require config and client
        command => {
            let config = Config::load()?;

            // Display label only; the wire only ever sees the base URL.
            if verbose {
                if let Some(name) = config.name.as_deref() {
                    eprintln!("Using server: {name}");
                }
            }

            let client = RedmineClient::new(&config.base_url()?, &config.api_key()?)?;

            match command {
                Commands::Issues(args) => {
                    commands::issues::list(&client, args).await?;
                }
                Commands::Filters { limit } => {
                    commands::filters::list(&client, limit).await?;
                }
                Commands::Issue { action } => match action {
                    IssueCommands::List(args) => {
                        commands::issues::list(&client, args).await?;
                    }
                    IssueCommands::View { id } => {
                        commands::issues::view(&client, id).await?;
                    }
                    IssueCommands::Open { id } => {
                        commands::issues::open(&client, id)?;
                    }
                },
                Commands::Completions { .. } | Commands::Init => {
                    // Already handled above
                }
            }
        }
    }

    Ok(())
}
