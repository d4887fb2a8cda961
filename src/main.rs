//
//  azure-devops-rest
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use azure_devops_rest::cli::{Cli, Commands};
use azure_devops_rest::exit_codes;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::for_error(&e));
        }
    }
}

/// Logging goes to stderr; `ADO_DEBUG` takes an `EnvFilter` directive such
/// as `debug` or `azure_devops_rest::api=trace`.
fn init_logging() {
    let filter = EnvFilter::try_from_env("ADO_DEBUG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Auth(cmd) => cmd.run(&cli.global).await,
        Commands::Repo(cmd) => cmd.run(&cli.global).await,
        Commands::Pr(cmd) => cmd.run(&cli.global).await,
        Commands::Release(cmd) => cmd.run(&cli.global).await,
        Commands::Wiki(cmd) => cmd.run(&cli.global).await,
        Commands::Api(cmd) => cmd.run(&cli.global).await,
        Commands::Config(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("ado version {}", azure_devops_rest::VERSION);
            Ok(())
        }
    }
}
