//
//  azure-devops-rest
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Azure DevOps REST
//!
//! Typed REST clients for Azure DevOps Services and Azure DevOps Server, and
//! the `ado` command-line tool built on them.
//!
//! ## Overview
//!
//! Every client method builds one [`api::RestRequest`] (HTTP method, route
//! template, route values, query, body, API version) and hands it to the
//! shared [`api::RestClientBase`], which resolves the URL, sends it over a
//! pluggable [`api::Transport`] and decodes the answer.
//!
//! ## Service Areas
//!
//! | Module | Covers |
//! |--------|--------|
//! | [`api::git`] | Repositories, refs, items, commits, pushes, pull requests |
//! | [`api::release`] | Release definitions, releases, approvals, deployments |
//! | [`api::service_endpoint`] | Service connections and endpoint types |
//! | [`api::service_hooks`] | Publishers, consumers, subscriptions, notifications |
//! | [`api::wiki`] | Wikis, pages, attachments |
//! | [`api::work_item_tracking_process`] | Inherited processes and their customizations |
//!
//! ## Module Structure
//!
//! - [`api`]: request primitive, transport and the service clients
//! - [`auth`]: credentials, token validation and keyring storage
//! - [`config`]: the `ado` config file and organization URL handling
//! - [`output`]: table and JSON output for the CLI
//! - [`cli`]: command-line interface definitions using clap
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use azure_devops_rest::api::git::{GitClient, GetPullRequestsOptions};
//! use azure_devops_rest::api::Connection;
//!
//! # async fn run() -> Result<(), azure_devops_rest::api::ApiError> {
//! let connection = Connection::with_pat("https://dev.azure.com/contoso", "my-pat")?;
//! let git: GitClient = connection.resolve_client().await?;
//!
//! let pull_requests = git
//!     .get_pull_requests_by_project("Fabrikam", &GetPullRequestsOptions::default())
//!     .await?;
//! for pr in pull_requests {
//!     println!("#{:?} {:?}", pr.pull_request_id, pr.title);
//! }
//! # Ok(())
//! # }
//! ```

/// REST clients for the Azure DevOps service areas.
///
/// One client per area, all sharing the request primitive in [`api::client`].
pub mod api;

/// Authentication and credential management.
///
/// - Personal access tokens, bearer tokens and basic credentials
/// - Token validation against `_apis/connectionData`
/// - Secure token storage via the system keychain
pub mod auth;

/// Command-line interface definitions.
pub mod cli;

/// Configuration file management.
///
/// Manages the CLI's configuration stored in platform-specific locations:
/// - Linux: `~/.config/ado/config.toml`
/// - macOS: `~/Library/Application Support/ado/config.toml`
/// - Windows: `%APPDATA%\ado\config\config.toml`
pub mod config;

/// Table and JSON output for the CLI.
pub mod output;

pub use api::{ApiError, Connection};
pub use cli::Cli;
pub use config::Config;

/// Name of the CLI binary, also used for the config directory.
pub const APP_NAME: &str = "ado";

/// The crate version, from Cargo.toml.
///
/// # Example
///
/// ```rust
/// use azure_devops_rest::VERSION;
///
/// println!("ado version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
///
/// # Example
///
/// ```rust,no_run
/// use azure_devops_rest::exit_codes;
/// use std::process;
///
/// process::exit(exit_codes::AUTH_ERROR);
/// ```
pub mod exit_codes {
    use crate::api::ApiError;

    /// The command completed without errors.
    pub const SUCCESS: i32 = 0;

    /// An unspecified error occurred. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid arguments or options.
    pub const USAGE: i32 = 2;

    /// The token is missing, invalid or lacks the required scope.
    ///
    /// Run `ado auth login` to authenticate.
    pub const AUTH_ERROR: i32 = 4;

    /// The requested resource does not exist or is not visible to the user.
    pub const NOT_FOUND: i32 = 8;

    /// Exit code for an error, based on the HTTP status of the first
    /// [`ApiError`] in its chain.
    pub fn for_error(error: &anyhow::Error) -> i32 {
        let api_error = error
            .chain()
            .find_map(|cause| cause.downcast_ref::<ApiError>());
        match api_error {
            Some(e) if e.is_unauthorized() => AUTH_ERROR,
            Some(e) if e.is_not_found() => NOT_FOUND,
            _ => ERROR,
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use anyhow::Context;
        use reqwest::StatusCode;

        #[test]
        fn test_for_error_maps_statuses() {
            let not_found: anyhow::Error = Err::<(), _>(ApiError::from_response(
                StatusCode::NOT_FOUND,
                r#"{"message":"TF401019: repository not found"}"#,
            ))
            .context("Failed to load repository")
            .unwrap_err();
            assert_eq!(for_error(&not_found), NOT_FOUND);

            let unauthorized =
                anyhow::Error::from(ApiError::from_response(StatusCode::UNAUTHORIZED, ""));
            assert_eq!(for_error(&unauthorized), AUTH_ERROR);

            assert_eq!(for_error(&anyhow::anyhow!("boom")), ERROR);
        }
    }
}
