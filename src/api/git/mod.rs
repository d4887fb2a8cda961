//
//  azure-devops-rest
//  api/git/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Git
//!
//! Repositories, items, refs, commits, pushes, blobs, annotated tags, commit
//! statuses and pull requests (reviewers, threads, comments, conflicts,
//! attachments), plus server-side merges, cherry-picks and reverts.
//!
//! ## Example
//!
//! ```rust,no_run
//! use azure_devops_rest::api::git::{GetItemOptions, GitClient};
//! use azure_devops_rest::api::Connection;
//!
//! # async fn run() -> Result<(), azure_devops_rest::api::ApiError> {
//! let connection = Connection::with_pat("https://dev.azure.com/contoso", "my-pat")?;
//! let git: GitClient = connection.resolve_client().await?;
//!
//! let readme = git
//!     .get_item_text("my-repo", "/README.md", Some("Fabrikam"), &GetItemOptions::default())
//!     .await?;
//! println!("{readme}");
//! # Ok(())
//! # }
//! ```

mod client;
mod models;
mod operations;
mod options;
mod pull_requests;

pub use client::GitClient;
pub use models::*;
pub use operations::*;
pub use options::*;
pub use pull_requests::*;
