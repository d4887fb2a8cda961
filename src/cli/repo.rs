//
//  azure-devops-rest
//  cli/repo.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Repository commands
//!
//! - Listing the Git repositories of a project
//! - Viewing repository details
//! - Listing branches and tags
//! - Printing a file at a branch, tag or commit

use anyhow::Result;
use clap::{Args, Subcommand};

use super::{GlobalOptions, Session};
use crate::api::git::{
    GetItemOptions, GetRefsOptions, GetRepositoriesOptions, GitClient, GitRef, GitRepository,
    GitVersionDescriptor, GitVersionType,
};
use crate::output::{print_field, print_header, short_ref, TableOutput, TableRow};

/// Browse Git repositories
#[derive(Args, Debug)]
pub struct RepoCommand {
    #[command(subcommand)]
    pub command: RepoSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum RepoSubcommand {
    /// List repositories
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// View repository details
    View(ViewArgs),

    /// List branches and tags
    Refs(RefsArgs),

    /// Print a file
    Show(ShowArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Include hidden repositories
    #[arg(long)]
    pub hidden: bool,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Repository name or id
    pub repository: String,
}

#[derive(Args, Debug)]
pub struct RefsArgs {
    /// Repository name or id
    pub repository: String,

    /// Ref name prefix without "refs/", e.g. heads/ or tags/
    #[arg(long, short = 'f')]
    pub filter: Option<String>,

    /// Maximum number of refs to list
    #[arg(long, short = 'L')]
    pub limit: Option<i32>,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Repository name or id
    pub repository: String,

    /// Path of the file, e.g. /README.md
    pub path: String,

    /// Branch to read from (default branch when omitted)
    #[arg(long, short = 'b', conflicts_with_all = ["tag", "commit"])]
    pub branch: Option<String>,

    /// Tag to read from
    #[arg(long)]
    pub tag: Option<String>,

    /// Commit to read from
    #[arg(long)]
    pub commit: Option<String>,
}

impl ShowArgs {
    fn version_descriptor(&self) -> Option<GitVersionDescriptor> {
        let (version, version_type) = match (&self.branch, &self.tag, &self.commit) {
            (Some(branch), _, _) => (branch, GitVersionType::Branch),
            (_, Some(tag), _) => (tag, GitVersionType::Tag),
            (_, _, Some(commit)) => (commit, GitVersionType::Commit),
            _ => return None,
        };
        Some(GitVersionDescriptor {
            version: Some(version.clone()),
            version_type: Some(version_type),
            ..Default::default()
        })
    }
}

impl RepoCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let session = Session::open(global).await?;
        let git: GitClient = session.connection.resolve_client().await?;

        match &self.command {
            RepoSubcommand::List(args) => list(&session, &git, args).await,
            RepoSubcommand::View(args) => view(&session, &git, args).await,
            RepoSubcommand::Refs(args) => refs(&session, &git, args).await,
            RepoSubcommand::Show(args) => show(&session, &git, args).await,
        }
    }
}

async fn list(session: &Session, git: &GitClient, args: &ListArgs) -> Result<()> {
    let options = GetRepositoriesOptions {
        include_hidden: args.hidden.then_some(true),
        ..Default::default()
    };
    let repositories = git.get_repositories(Some(session.project()?), &options).await?;
    session.output.write_list(&repositories)
}

async fn view(session: &Session, git: &GitClient, args: &ViewArgs) -> Result<()> {
    let repository = git
        .get_repository(&args.repository, Some(session.project()?))
        .await?;
    session.output.write(&repository)
}

async fn refs(session: &Session, git: &GitClient, args: &RefsArgs) -> Result<()> {
    let options = GetRefsOptions {
        filter: args.filter.clone(),
        top: args.limit,
        ..Default::default()
    };
    let page = git
        .get_refs(&args.repository, Some(session.project()?), &options)
        .await?;
    if page.has_more() {
        session
            .output
            .write_warning("More refs available; raise --limit to see them");
    }
    session.output.write_list(&page.items)
}

async fn show(session: &Session, git: &GitClient, args: &ShowArgs) -> Result<()> {
    let options = GetItemOptions {
        version_descriptor: args.version_descriptor(),
        ..Default::default()
    };
    let text = git
        .get_item_text(&args.repository, &args.path, Some(session.project()?), &options)
        .await?;
    print!("{}", text);
    Ok(())
}

impl TableRow for GitRepository {
    const HEADERS: &'static [&'static str] = &["Name", "Default branch", "Size", "URL"];

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            self.name.clone().unwrap_or_default(),
            self.default_branch
                .as_deref()
                .map(short_ref)
                .unwrap_or("-")
                .to_string(),
            self.size.map(format_size).unwrap_or_else(|| "-".into()),
            self.web_url.clone().unwrap_or_default(),
        ]
    }
}

impl TableOutput for GitRepository {
    fn print_table(&self, color: bool) {
        print_header(self.name.as_deref().unwrap_or("(unnamed)"));
        println!();

        if let Some(project) = self.project.as_ref().and_then(|p| p.name.as_deref()) {
            print_field("Project", project, color);
        }
        if let Some(id) = &self.id {
            print_field("ID", id, color);
        }
        if let Some(branch) = &self.default_branch {
            print_field("Default branch", short_ref(branch), color);
        }
        if let Some(size) = self.size {
            print_field("Size", &format_size(size), color);
        }
        if self.is_fork == Some(true) {
            print_field("Fork", "yes", color);
        }
        if self.is_disabled == Some(true) {
            print_field("Disabled", "yes", color);
        }
        if let Some(url) = &self.remote_url {
            print_field("Clone (HTTPS)", url, color);
        }
        if let Some(url) = &self.ssh_url {
            print_field("Clone (SSH)", url, color);
        }
        if let Some(url) = &self.web_url {
            print_field("Web", url, color);
        }
    }
}

impl TableRow for GitRef {
    const HEADERS: &'static [&'static str] = &["Name", "Object", "Creator"];

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            self.name.clone().unwrap_or_default(),
            self.object_id
                .as_deref()
                .map(|id| id.chars().take(8).collect())
                .unwrap_or_default(),
            self.creator
                .as_ref()
                .and_then(|c| c.display_name.clone())
                .unwrap_or_default(),
        ]
    }
}

fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}
