//
//  azure-devops-rest
//  cli/auth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Authentication commands
//!
//! `ado auth login` verifies a personal access token against the
//! organization's connection data, stores it in the keyring and registers
//! the organization in the config file.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;
use serde_json::json;

use crate::auth::{
    read_token_from_stdin, token_from_env, validate_token, KeyringStore, PersonalAccessToken,
};
use crate::config::{normalize_organization_url, Config};

use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Log in to an organization with a personal access token
    Login(LoginArgs),

    /// Forget the token of an organization
    Logout(LogoutArgs),

    /// View authentication status
    Status(StatusArgs),
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Organization name or URL; defaults to --org
    #[arg(value_name = "ORGANIZATION")]
    pub name: Option<String>,

    /// Read the token from standard input instead of ADO_PAT
    #[arg(long)]
    pub with_token: bool,

    /// Project used when commands are run without --project
    #[arg(long)]
    pub default_project: Option<String>,

    /// Store the token without checking it against the organization
    #[arg(long)]
    pub skip_validation: bool,
}

#[derive(Args, Debug)]
pub struct LogoutArgs {
    /// Organization to log out of; defaults to --org or the default organization
    #[arg(value_name = "ORGANIZATION")]
    pub name: Option<String>,

    /// Log out of all organizations
    #[arg(long, conflicts_with = "name")]
    pub all: bool,
}

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Show the stored token (masked)
    #[arg(long, short = 't')]
    pub show_token: bool,
}

impl AuthCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            AuthSubcommand::Login(args) => login(args, global).await,
            AuthSubcommand::Logout(args) => logout(args, global),
            AuthSubcommand::Status(args) => status(args, global).await,
        }
    }
}

async fn login(args: &LoginArgs, global: &GlobalOptions) -> Result<()> {
    let Some(organization) = args.name.as_ref().or(global.organization.as_ref()) else {
        bail!("Organization required. Use 'ado auth login <ORGANIZATION>' or --org");
    };
    let url = normalize_organization_url(organization)?;

    let token = if args.with_token {
        eprintln!("Paste your personal access token:");
        read_token_from_stdin()?
    } else {
        match token_from_env() {
            Some(token) => token,
            None => bail!("No token given. Pass --with-token or set ADO_PAT"),
        }
    };
    if !validate_token(&token) {
        bail!("Invalid token format");
    }

    let pat = PersonalAccessToken::new(token, url.clone());
    let user = if args.skip_validation {
        None
    } else {
        eprintln!("Validating token...");
        match pat.validate().await? {
            Some(data) => data.display_name().map(str::to_string),
            None => bail!("Token was rejected by {url}"),
        }
    };

    KeyringStore::new().store(&url, &pat.token)?;

    let mut config = Config::load()?;
    let name = config.add_organization(&url, args.default_project.clone())?;
    config.save()?;

    if global.json {
        let result = json!({"organization": name, "url": url, "user": user});
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if let Some(user) = user {
        println!("{} Logged in to {} as {}", style("✓").green(), url, user);
    } else {
        println!("{} Logged in to {}", style("✓").green(), url);
    }

    Ok(())
}

fn logout(args: &LogoutArgs, global: &GlobalOptions) -> Result<()> {
    let keyring = KeyringStore::new();
    let mut config = Config::load()?;

    let names: Vec<String> = if args.all {
        config.organizations.keys().cloned().collect()
    } else {
        let requested = args
            .name
            .clone()
            .or_else(|| global.organization.clone())
            .or_else(|| config.core.default_organization.clone());
        let Some(requested) = requested else {
            println!("Not logged in to any organization");
            return Ok(());
        };
        match config.organization(&requested) {
            Some(_) => vec![requested],
            None => {
                // Not configured under that name; forget the token by URL.
                let url = normalize_organization_url(&requested)?;
                keyring.delete(&url)?;
                println!("Logged out of {}", url);
                return Ok(());
            }
        }
    };

    if names.is_empty() {
        println!("Not logged in to any organization");
        return Ok(());
    }

    for name in &names {
        if let Some(org) = config.remove_organization(name) {
            keyring.delete(&org.url)?;
        }
    }
    config.save()?;

    println!("Logged out of {}", names.join(", "));
    Ok(())
}

async fn status(args: &StatusArgs, global: &GlobalOptions) -> Result<()> {
    let keyring = KeyringStore::new();
    let config = Config::load()?;

    if config.organizations.is_empty() {
        println!("Not logged in to any Azure DevOps organization");
        println!();
        println!("Run 'ado auth login <ORGANIZATION>' to authenticate");
        return Ok(());
    }

    let mut names: Vec<&String> = config.organizations.keys().collect();
    names.sort();

    let mut report = Vec::new();
    for name in names {
        let org = &config.organizations[name];
        let token = keyring.get(&org.url)?;
        let user = match &token {
            Some(t) => PersonalAccessToken::new(t.clone(), org.url.clone())
                .validate()
                .await
                .ok()
                .flatten()
                .map(|data| data.display_name().unwrap_or("unknown").to_string()),
            None => None,
        };
        let is_default = config.core.default_organization.as_deref() == Some(name.as_str());

        if global.json {
            report.push(json!({
                "organization": name,
                "url": org.url,
                "default": is_default,
                "defaultProject": org.default_project,
                "user": user,
                "active": user.is_some(),
            }));
            continue;
        }

        let marker = if is_default { " (default)" } else { "" };
        println!("{}{}", style(&org.url).bold(), marker);
        match &user {
            Some(user) => println!("  Logged in as: {}", user),
            None if token.is_some() => println!("  Status: {}", style("Invalid/Expired").red()),
            None => println!("  Status: {}", style("No token stored").yellow()),
        }
        if let Some(project) = &org.default_project {
            println!("  Default project: {}", project);
        }
        if args.show_token {
            if let Some(t) = &token {
                println!("  Token: {}", mask_token(t));
            }
        }
        println!();
    }

    if global.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}

fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token("short"), "*****");
        assert_eq!(mask_token("abcd1234efgh5678"), "abcd...5678");
    }
}
