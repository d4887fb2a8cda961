//
//  azure-devops-rest
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod api;
mod auth;
mod config;
mod pr;
mod release;
mod repo;
mod wiki;

pub use api::ApiCommand;
pub use auth::AuthCommand;
pub use config::ConfigCommand;
pub use pr::PrCommand;
pub use release::ReleaseCommand;
pub use repo::RepoCommand;
pub use wiki::WikiCommand;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::api::Connection;
use crate::auth::{token_from_env, KeyringStore};
use crate::config::{Config, Target};
use crate::output::{OutputFormat, OutputWriter};

/// ado - Work with Azure DevOps from the command line
#[derive(Parser, Debug)]
#[command(
    name = "ado",
    version,
    about = "Work with Azure DevOps from the command line",
    long_about = "ado is a CLI for Azure DevOps Services and Azure DevOps Server.\n\n\
                  It brings repositories, pull requests, releases and wikis to your terminal,\n\
                  and gives raw access to any REST route with 'ado api'.",
    propagate_version = true,
    after_help = "Use 'ado <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Organization name or URL (e.g. contoso or https://dev.azure.com/contoso)
    #[arg(long = "org", short = 'o', global = true, env = "ADO_ORGANIZATION")]
    pub organization: Option<String>,

    /// Project name or id
    #[arg(long, short = 'p', global = true, env = "ADO_PROJECT")]
    pub project: Option<String>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Authenticate with an organization
    #[command(visible_alias = "login")]
    Auth(AuthCommand),

    /// Browse Git repositories
    #[command(visible_alias = "r")]
    Repo(RepoCommand),

    /// Browse pull requests
    Pr(PrCommand),

    /// Browse releases
    Release(ReleaseCommand),

    /// Read wiki pages
    Wiki(WikiCommand),

    /// Make raw REST requests
    Api(ApiCommand),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Print version information
    Version,
}

/// Connection, project and output format shared by the API-backed commands.
pub(crate) struct Session {
    pub connection: Connection,
    pub target: Target,
    pub output: OutputWriter,
}

impl Session {
    /// Resolves the organization from flags and config, and the token from
    /// `ADO_PAT` or the keyring.
    pub async fn open(global: &GlobalOptions) -> Result<Self> {
        let config = Config::load()?;
        let target =
            config.resolve_target(global.organization.as_deref(), global.project.as_deref())?;

        let token = match token_from_env() {
            Some(token) => token,
            None => KeyringStore::new().get(&target.url)?.with_context(|| {
                format!(
                    "Not authenticated with {}. Run 'ado auth login' or set ADO_PAT.",
                    target.url
                )
            })?,
        };

        debug!(organization = %target.url, project = ?target.project, "Opening session");
        let connection = Connection::with_pat(&target.url, &token)?;
        let format = if global.json {
            OutputFormat::Json
        } else {
            config.core.output.parse().unwrap_or_default()
        };

        Ok(Self {
            connection,
            target,
            output: OutputWriter::new(format),
        })
    }

    pub fn project(&self) -> Result<&str> {
        self.target
            .project
            .as_deref()
            .context("No project given. Pass --project, set ADO_PROJECT or configure default_project")
    }
}
