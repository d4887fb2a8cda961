//
//  azure-devops-rest
//  cli/release.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Release commands
//!
//! Release management is served from its own host (`vsrm.dev.azure.com`),
//! so the client is always built through resource area resolution.

use anyhow::Result;
use clap::{Args, Subcommand};

use super::{GlobalOptions, Session};
use crate::api::release::{
    GetReleasesOptions, Release, ReleaseClient, ReleaseExpands, ReleaseQueryOrder, ReleaseStatus,
};
use crate::output::{format_status, truncate, TableRow};

/// Browse releases
#[derive(Args, Debug)]
pub struct ReleaseCommand {
    #[command(subcommand)]
    pub command: ReleaseSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ReleaseSubcommand {
    /// List releases, newest first
    #[command(visible_alias = "ls")]
    List(ListArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only releases of this release definition
    #[arg(long, short = 'd')]
    pub definition: Option<i32>,

    /// Filter by status: draft, active or abandoned
    #[arg(long, short = 's', value_parser = parse_release_status)]
    pub status: Option<ReleaseStatus>,

    /// Only releases whose name contains this text
    #[arg(long)]
    pub search: Option<String>,

    /// Maximum number of releases to list
    #[arg(long, short = 'L', default_value = "25")]
    pub limit: i32,
}

fn parse_release_status(s: &str) -> Result<ReleaseStatus, String> {
    ReleaseStatus::parse(s).ok_or_else(|| format!("unknown release status '{s}'"))
}

impl ListArgs {
    fn options(&self) -> GetReleasesOptions {
        GetReleasesOptions {
            definition_id: self.definition,
            status_filter: self.status,
            search_text: self.search.clone(),
            query_order: Some(ReleaseQueryOrder::Descending),
            top: Some(self.limit),
            expand: Some(ReleaseExpands::Environments),
            ..Default::default()
        }
    }
}

impl ReleaseCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let session = Session::open(global).await?;
        let client: ReleaseClient = session.connection.resolve_client().await?;

        match &self.command {
            ReleaseSubcommand::List(args) => {
                let page = client
                    .get_releases(Some(session.project()?), &args.options())
                    .await?;
                if page.has_more() {
                    session
                        .output
                        .write_warning("More releases available; raise --limit to see them");
                }
                session.output.write_list(&page.items)
            }
        }
    }
}

impl TableRow for Release {
    const HEADERS: &'static [&'static str] =
        &["ID", "Name", "Definition", "Status", "Environments", "Created"];

    fn row(&self, color: bool) -> Vec<String> {
        let environments = self
            .environments
            .iter()
            .map(|env| {
                let status = env.status.map(|s| s.to_string()).unwrap_or_default();
                format!(
                    "{}: {}",
                    env.name.as_deref().unwrap_or("?"),
                    format_status(&status, color)
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        vec![
            self.id.map(|id| id.to_string()).unwrap_or_default(),
            truncate(self.name.as_deref().unwrap_or(""), 40),
            self.release_definition
                .as_ref()
                .and_then(|d| d.name.clone())
                .unwrap_or_default(),
            format_status(
                &self.status.map(|s| s.to_string()).unwrap_or_default(),
                color,
            ),
            environments,
            self.created_on
                .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_release_status() {
        assert_eq!(parse_release_status("active").unwrap(), ReleaseStatus::Active);
        assert!(parse_release_status("bogus").is_err());
    }

    #[test]
    fn test_list_options() {
        let args = ListArgs {
            definition: Some(3),
            status: None,
            search: None,
            limit: 5,
        };
        let options = args.options();
        assert_eq!(options.definition_id, Some(3));
        assert_eq!(options.top, Some(5));
        assert_eq!(options.expand, Some(ReleaseExpands::Environments));
    }

    #[test]
    fn test_release_row() {
        let release: Release = serde_json::from_value(serde_json::json!({
            "id": 12,
            "name": "Release-12",
            "status": "active",
            "releaseDefinition": {"id": 1, "name": "Fabrikam CD"},
            "environments": [{"name": "Prod", "status": "succeeded"}]
        }))
        .unwrap();
        let row = release.row(false);
        assert_eq!(row[0], "12");
        assert_eq!(row[2], "Fabrikam CD");
        assert_eq!(row[3], "active");
        assert_eq!(row[4], "Prod: succeeded");
    }
}
