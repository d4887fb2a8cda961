//
//  azure-devops-rest
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;
use serde_json::json;

use crate::config::{Config, CONFIG_KEYS};
use crate::output::OutputFormat;

use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Print the value of a key
    Get(GetArgs),

    /// Set the value of a key
    Set(SetArgs),

    /// List all keys and configured organizations
    #[command(visible_alias = "ls")]
    List,

    /// Print the path of the config file
    Path,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    pub key: String,

    pub value: String,
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Get(args) => get(args, global),
            ConfigSubcommand::Set(args) => set(args, global),
            ConfigSubcommand::List => list(global),
            ConfigSubcommand::Path => {
                println!("{}", Config::config_path()?.display());
                Ok(())
            }
        }
    }
}

fn check_key(key: &str) -> Result<()> {
    if !CONFIG_KEYS.contains(&key) {
        bail!(
            "Unknown configuration key '{}'. Valid keys: {}",
            key,
            CONFIG_KEYS.join(", ")
        );
    }
    Ok(())
}

fn get(args: &GetArgs, global: &GlobalOptions) -> Result<()> {
    check_key(&args.key)?;
    let value = Config::load()?.get(&args.key);

    if global.json {
        let result = json!({"key": args.key, "value": value});
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if let Some(v) = value {
        println!("{}", v);
    }
    Ok(())
}

fn set(args: &SetArgs, global: &GlobalOptions) -> Result<()> {
    check_key(&args.key)?;
    if args.key == "output" {
        args.value.parse::<OutputFormat>()?;
    }

    let mut config = Config::load()?;
    if args.key == "default_organization" && config.organization(&args.value).is_none() {
        bail!(
            "Organization '{}' is not configured. Run 'ado auth login {}' first",
            args.value,
            args.value
        );
    }
    config.set(&args.key, args.value.clone());
    config.save()?;

    if global.json {
        let result = json!({"success": true, "key": args.key, "value": args.value});
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!(
            "{} Set {} = {}",
            style("✓").green(),
            style(&args.key).cyan(),
            args.value
        );
    }
    Ok(())
}

fn list(global: &GlobalOptions) -> Result<()> {
    let config = Config::load()?;

    if global.json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    for key in CONFIG_KEYS {
        println!("{}={}", key, config.get(key).unwrap_or_default());
    }

    let mut names: Vec<&String> = config.organizations.keys().collect();
    names.sort();
    for name in names {
        let org = &config.organizations[name];
        println!();
        println!("[organizations.{}]", name);
        println!("url={}", org.url);
        if let Some(project) = &org.default_project {
            println!("default_project={}", project);
        }
    }
    Ok(())
}
