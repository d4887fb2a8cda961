//
//  azure-devops-rest
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Credentials for Azure DevOps Services and Azure DevOps Server.
//!
//! ## Supported Authentication Methods
//!
//! - **Personal Access Token (PAT)**: the common case. Sent as HTTP Basic with
//!   an empty user name and the token as the password.
//! - **Bearer**: a Microsoft Entra access token or a pipeline `System.AccessToken`.
//! - **Basic**: explicit user name and password, for on-premises servers.
//!
//! ## Module Structure
//!
//! - [`token`]: reading, validating and verifying personal access tokens
//! - [`keyring`]: storage of tokens in the system keyring
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use azure_devops_rest::api::{Connection, ReqwestTransport};
//! use azure_devops_rest::auth::AuthCredential;
//!
//! # fn main() -> Result<(), azure_devops_rest::api::ApiError> {
//! let transport = ReqwestTransport::new()?.with_auth(AuthCredential::PersonalAccessToken {
//!     token: std::env::var("ADO_PAT").unwrap_or_default(),
//! });
//! let connection = Connection::new("https://dev.azure.com/contoso", Arc::new(transport))?;
//! # Ok(())
//! # }
//! ```

mod keyring;
mod token;

pub use keyring::*;
pub use token::*;

use reqwest::RequestBuilder;

/// Credential attached to every request sent by a transport.
#[derive(Clone)]
pub enum AuthCredential {
    PersonalAccessToken { token: String },

    Bearer { token: String },

    Basic { username: String, password: String },
}

impl std::fmt::Debug for AuthCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PersonalAccessToken { .. } => f.write_str("PersonalAccessToken { .. }"),
            Self::Bearer { .. } => f.write_str("Bearer { .. }"),
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .finish_non_exhaustive(),
        }
    }
}

impl AuthCredential {
    /// Adds the `Authorization` header for this credential.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::PersonalAccessToken { token } => request.basic_auth("", Some(token)),
            Self::Bearer { token } => request.bearer_auth(token),
            Self::Basic { username, password } => request.basic_auth(username, Some(password)),
        }
    }

    /// Short name shown by `ado auth status`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::PersonalAccessToken { .. } => "personal access token",
            Self::Bearer { .. } => "bearer token",
            Self::Basic { .. } => "basic",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authorization(credential: &AuthCredential) -> String {
        let request = credential
            .apply_to_request(reqwest::Client::new().get("https://dev.azure.com/contoso"))
            .build()
            .unwrap();
        request
            .headers()
            .get("authorization")
            .unwrap()
            .to_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_pat_uses_basic_with_empty_user() {
        let credential = AuthCredential::PersonalAccessToken {
            token: "pat".into(),
        };
        assert_eq!(authorization(&credential), "Basic OnBhdA==");
    }

    #[test]
    fn test_bearer() {
        let credential = AuthCredential::Bearer {
            token: "abc".into(),
        };
        assert_eq!(authorization(&credential), "Bearer abc");
    }

    #[test]
    fn test_basic() {
        let credential = AuthCredential::Basic {
            username: "me".into(),
            password: "secret".into(),
        };
        assert_eq!(authorization(&credential), "Basic bWU6c2VjcmV0");
    }

    #[test]
    fn test_debug_hides_secrets() {
        let credential = AuthCredential::PersonalAccessToken {
            token: "very-secret".into(),
        };
        assert!(!format!("{credential:?}").contains("very-secret"));
    }
}
