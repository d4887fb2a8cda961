//
//  azure-devops-rest
//  cli/wiki.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Wiki commands

use anyhow::Result;
use clap::{Args, Subcommand};

use super::{GlobalOptions, Session};
use crate::api::git::GitVersionDescriptor;
use crate::api::wiki::{GetPageOptions, WikiClient, WikiV2};
use crate::output::{write_json, OutputFormat, TableRow};

/// Read wiki pages
#[derive(Args, Debug)]
pub struct WikiCommand {
    #[command(subcommand)]
    pub command: WikiSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum WikiSubcommand {
    /// List the wikis of a project
    #[command(visible_alias = "ls")]
    List,

    /// Print a wiki page as markdown
    Show(ShowArgs),
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Wiki name or id
    pub wiki: String,

    /// Page path, e.g. "/Home/Getting Started"
    #[arg(default_value = "/")]
    pub path: String,

    /// Branch of a code wiki
    #[arg(long, short = 'b')]
    pub branch: Option<String>,
}

impl ShowArgs {
    fn options(&self) -> GetPageOptions {
        GetPageOptions {
            path: Some(self.path.clone()),
            version_descriptor: self.branch.as_deref().map(GitVersionDescriptor::branch),
            include_content: Some(true),
            ..Default::default()
        }
    }
}

impl WikiCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let session = Session::open(global).await?;
        let wiki: WikiClient = session.connection.resolve_client().await?;
        let project = session.project()?;

        match &self.command {
            WikiSubcommand::List => {
                let wikis = wiki.get_all_wikis(Some(project)).await?;
                session.output.write_list(&wikis)
            }
            WikiSubcommand::Show(args) => {
                let options = args.options();
                if session.output.format() == OutputFormat::Json {
                    let page = wiki.get_page(project, &args.wiki, &options).await?;
                    return write_json(&page.page);
                }
                let text = wiki.get_page_text(project, &args.wiki, &options).await?;
                println!("{}", text.trim_end());
                Ok(())
            }
        }
    }
}

impl TableRow for WikiV2 {
    const HEADERS: &'static [&'static str] = &["Name", "Type", "Mapped path", "URL"];

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            self.name.clone().unwrap_or_default(),
            self.wiki_type.map(|t| t.to_string()).unwrap_or_default(),
            self.mapped_path.clone().unwrap_or_default(),
            self.remote_url.clone().unwrap_or_default(),
        ]
    }
}
