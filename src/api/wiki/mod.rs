//
//  azure-devops-rest
//  api/wiki/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Wiki
//!
//! Project and code wikis, their pages, page moves, view stats and
//! attachments.
//!
//! Page writes use optimistic concurrency: every page response carries the
//! page's `ETag`, which is sent back as `If-Match` when updating the page.
//!
//! ```rust,no_run
//! use azure_devops_rest::api::wiki::{GetPageOptions, PageChangeOptions, WikiClient, WikiPageCreateOrUpdateParameters};
//! use azure_devops_rest::api::Connection;
//!
//! # async fn run() -> Result<(), azure_devops_rest::api::ApiError> {
//! let connection = Connection::with_pat("https://dev.azure.com/contoso", "my-pat")?;
//! let wiki: WikiClient = connection.resolve_client().await?;
//!
//! let options = GetPageOptions {
//!     path: Some("/Home".into()),
//!     include_content: Some(true),
//!     ..Default::default()
//! };
//! let current = wiki.get_page("Fabrikam", "Fabrikam.wiki", &options).await?;
//!
//! let content = format!("{}\n\nEdited.", current.page.content.unwrap_or_default());
//! wiki.create_or_update_page(
//!     &WikiPageCreateOrUpdateParameters { content },
//!     "Fabrikam",
//!     "Fabrikam.wiki",
//!     "/Home",
//!     current.e_tag.first().map(String::as_str),
//!     &PageChangeOptions::default(),
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod models;

pub use client::*;
pub use models::*;
