//
//  azure-devops-rest
//  cli/pr.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pull request commands

use anyhow::Result;
use clap::{Args, Subcommand};

use super::{GlobalOptions, Session};
use crate::api::git::{
    GetPullRequestsOptions, GitClient, GitPullRequest, GitPullRequestSearchCriteria,
    PullRequestStatus,
};
use crate::output::{
    format_bool, format_status, print_field, print_header, short_ref, truncate, TableOutput,
    TableRow,
};

/// Browse pull requests
#[derive(Args, Debug)]
pub struct PrCommand {
    #[command(subcommand)]
    pub command: PrSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PrSubcommand {
    /// List pull requests of a project or repository
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// View a pull request
    View(ViewArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only pull requests of this repository (name or id)
    #[arg(long, short = 'r')]
    pub repository: Option<String>,

    /// Filter by status: active, abandoned, completed or all
    #[arg(long, short = 's', default_value = "active")]
    pub status: PullRequestStatus,

    /// Filter by target branch, e.g. main
    #[arg(long, short = 'B')]
    pub target: Option<String>,

    /// Filter by creator id
    #[arg(long)]
    pub creator: Option<String>,

    /// Maximum number of pull requests to list
    #[arg(long, short = 'L', default_value = "30")]
    pub limit: i32,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Pull request id
    pub id: i32,
}

impl ListArgs {
    fn options(&self) -> GetPullRequestsOptions {
        GetPullRequestsOptions {
            search_criteria: Some(GitPullRequestSearchCriteria {
                status: Some(self.status),
                creator_id: self.creator.clone(),
                target_ref_name: self.target.as_deref().map(full_ref),
                ..Default::default()
            }),
            top: Some(self.limit),
            ..Default::default()
        }
    }
}

fn full_ref(branch: &str) -> String {
    if branch.starts_with("refs/") {
        branch.to_string()
    } else {
        format!("refs/heads/{branch}")
    }
}

impl PrCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let session = Session::open(global).await?;
        let git: GitClient = session.connection.resolve_client().await?;
        let project = session.project()?;

        match &self.command {
            PrSubcommand::List(args) => {
                let options = args.options();
                let pull_requests = match &args.repository {
                    Some(repository) => {
                        git.get_pull_requests(repository, Some(project), &options)
                            .await?
                    }
                    None => git.get_pull_requests_by_project(project, &options).await?,
                };
                session.output.write_list(&pull_requests)
            }
            PrSubcommand::View(args) => {
                let pull_request = git.get_pull_request_by_id(args.id, Some(project)).await?;
                session.output.write(&pull_request)
            }
        }
    }
}

fn author(pr: &GitPullRequest) -> String {
    pr.created_by
        .as_ref()
        .and_then(|c| c.display_name.clone())
        .unwrap_or_default()
}

fn status_label(pr: &GitPullRequest) -> String {
    match (pr.status, pr.is_draft) {
        (Some(PullRequestStatus::Active), Some(true)) => "draft".to_string(),
        (Some(status), _) => status.to_string(),
        (None, _) => "-".to_string(),
    }
}

impl TableRow for GitPullRequest {
    const HEADERS: &'static [&'static str] = &["ID", "Title", "Branches", "Author", "Status"];

    fn row(&self, color: bool) -> Vec<String> {
        let branches = format!(
            "{} → {}",
            short_ref(self.source_ref_name.as_deref().unwrap_or("?")),
            short_ref(self.target_ref_name.as_deref().unwrap_or("?"))
        );
        vec![
            self.pull_request_id.map(|id| id.to_string()).unwrap_or_default(),
            truncate(self.title.as_deref().unwrap_or(""), 60),
            branches,
            author(self),
            format_status(&status_label(self), color),
        ]
    }
}

impl TableOutput for GitPullRequest {
    fn print_table(&self, color: bool) {
        let id = self.pull_request_id.unwrap_or_default();
        print_header(&format!("#{} {}", id, self.title.as_deref().unwrap_or("")));
        println!();

        print_field("Status", &format_status(&status_label(self), color), color);
        print_field("Author", &author(self), color);
        if let Some(repository) = self.repository.as_ref().and_then(|r| r.name.as_deref()) {
            print_field("Repository", repository, color);
        }
        print_field(
            "Branches",
            &format!(
                "{} → {}",
                short_ref(self.source_ref_name.as_deref().unwrap_or("?")),
                short_ref(self.target_ref_name.as_deref().unwrap_or("?"))
            ),
            color,
        );
        if let Some(created) = self.creation_date {
            print_field("Created", &created.format("%Y-%m-%d %H:%M").to_string(), color);
        }
        if let Some(merge_status) = self.merge_status {
            print_field("Merge status", &merge_status.to_string(), color);
        }
        if self.auto_complete_set_by.is_some() {
            print_field("Auto-complete", &format_bool(true, color), color);
        }

        if !self.reviewers.is_empty() {
            println!();
            println!("Reviewers:");
            for reviewer in &self.reviewers {
                let name = reviewer.identity.display_name.as_deref().unwrap_or("unknown");
                let required = if reviewer.is_required == Some(true) {
                    " (required)"
                } else {
                    ""
                };
                println!("  {}{}: {}", name, required, vote_label(reviewer.vote));
            }
        }

        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            println!();
            println!("{}", description);
        }
    }
}

fn vote_label(vote: Option<i16>) -> &'static str {
    match vote.unwrap_or(0) {
        10 => "approved",
        5 => "approved with suggestions",
        -5 => "waiting for author",
        -10 => "rejected",
        _ => "no vote",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_options_expand_branch() {
        let args = ListArgs {
            repository: None,
            status: PullRequestStatus::Completed,
            target: Some("main".into()),
            creator: None,
            limit: 10,
        };
        let options = args.options();
        let criteria = options.search_criteria.unwrap();

        assert_eq!(criteria.status, Some(PullRequestStatus::Completed));
        assert_eq!(criteria.target_ref_name.as_deref(), Some("refs/heads/main"));
        assert_eq!(options.top, Some(10));
    }

    #[test]
    fn test_full_ref_keeps_qualified_names() {
        assert_eq!(full_ref("refs/heads/dev"), "refs/heads/dev");
        assert_eq!(full_ref("dev"), "refs/heads/dev");
    }

    #[test]
    fn test_status_label_marks_drafts() {
        let pr: GitPullRequest = serde_json::from_value(serde_json::json!({
            "pullRequestId": 7,
            "status": "active",
            "isDraft": true
        }))
        .unwrap();
        assert_eq!(status_label(&pr), "draft");
    }

    #[test]
    fn test_vote_label() {
        assert_eq!(vote_label(Some(10)), "approved");
        assert_eq!(vote_label(None), "no vote");
    }
}
