//
//  azure-devops-rest
//  auth/token.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Personal Access Tokens
//!
//! Reading a token from stdin or the environment and checking it against an
//! organization.
//!
//! ## Environment
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `ADO_PAT` | Token used instead of the keyring |
//! | `AZURE_DEVOPS_EXT_PAT` | Alias of `ADO_PAT`, as read by the Azure CLI extension |
//!
//! ## Example
//!
//! ```rust,no_run
//! use azure_devops_rest::auth::{read_token_from_stdin, validate_token, PersonalAccessToken};
//!
//! async fn login() -> anyhow::Result<()> {
//!     let token = read_token_from_stdin()?;
//!     anyhow::ensure!(validate_token(&token), "Invalid token format");
//!
//!     let pat = PersonalAccessToken::new(token, "https://dev.azure.com/contoso");
//!     match pat.validate().await? {
//!         Some(data) => println!("Signed in as {}", data.display_name().unwrap_or("unknown")),
//!         None => anyhow::bail!("Token rejected"),
//!     }
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::api::client::decode;
use crate::api::{ReqwestTransport, RestClientBase, RestRequest, Transport};
use crate::auth::AuthCredential;

const CONNECTION_DATA_ROUTE: &str = "_apis/connectionData";
const CONNECTION_DATA_VERSION: &str = "7.1-preview.1";

/// Environment variables consulted for a token, in order.
pub const TOKEN_ENV_VARS: [&str; 2] = ["ADO_PAT", "AZURE_DEVOPS_EXT_PAT"];

pub fn read_token_from_stdin() -> Result<String> {
    use std::io::{self, BufRead};

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    Ok(line.trim().to_string())
}

/// A token must be non-empty and free of whitespace.
pub fn validate_token(token: &str) -> bool {
    !token.is_empty() && !token.chars().any(char::is_whitespace)
}

/// The token from `ADO_PAT`, or `AZURE_DEVOPS_EXT_PAT` when the former is unset.
pub fn token_from_env() -> Option<String> {
    token_from(|name| std::env::var(name).ok())
}

fn token_from(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    TOKEN_ENV_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .map(|token| token.trim().to_string())
        .find(|token| !token.is_empty())
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_display_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_display_name: Option<String>,
}

/// Response of `_apis/connectionData`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authenticated_user: Option<AuthenticatedUser>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_type: Option<String>,
}

impl ConnectionData {
    pub fn display_name(&self) -> Option<&str> {
        let user = self.authenticated_user.as_ref()?;
        user.custom_display_name
            .as_deref()
            .or(user.provider_display_name.as_deref())
    }
}

#[derive(Debug, Clone)]
pub struct PersonalAccessToken {
    pub token: String,

    pub organization_url: String,
}

impl PersonalAccessToken {
    pub fn new(token: impl Into<String>, organization_url: impl Into<String>) -> Self {
        let organization_url = organization_url.into().trim_end_matches('/').to_string();
        Self {
            token: token.into(),
            organization_url,
        }
    }

    pub fn credential(&self) -> AuthCredential {
        AuthCredential::PersonalAccessToken {
            token: self.token.clone(),
        }
    }

    /// Checks the token against the organization.
    ///
    /// Returns `Ok(None)` when the token is rejected. Azure DevOps answers a bad
    /// token either with 401 or with a 203 sign-in page.
    ///
    /// # Errors
    ///
    /// Fails when the organization cannot be reached or answers with another
    /// error status.
    pub async fn validate(&self) -> Result<Option<ConnectionData>> {
        let transport = ReqwestTransport::new()
            .context("Failed to create HTTP client")?
            .with_auth(self.credential());
        self.validate_with(Arc::new(transport)).await
    }

    /// [`validate`](Self::validate) over an explicit transport.
    pub async fn validate_with(
        &self,
        transport: Arc<dyn Transport>,
    ) -> Result<Option<ConnectionData>> {
        let base_url = Url::parse(&self.organization_url)
            .with_context(|| format!("Invalid organization URL: {}", self.organization_url))?;
        let base = RestClientBase::new(base_url, transport);
        let request = RestRequest::get(CONNECTION_DATA_ROUTE, CONNECTION_DATA_VERSION);

        match base.send_raw(request).await {
            Ok(response) if response.status == StatusCode::NON_AUTHORITATIVE_INFORMATION => Ok(None),
            Ok(response) => Ok(Some(decode(&response)?)),
            Err(e) if e.is_unauthorized() => Ok(None),
            Err(e) => Err(e).context("Failed to connect to Azure DevOps"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::MockTransport;
    use serde_json::json;

    #[test]
    fn test_validate_token() {
        assert!(validate_token("abc123"));
        assert!(!validate_token(""));
        assert!(!validate_token("abc 123"));
    }

    #[test]
    fn test_env_token_prefers_ado_pat() {
        let token = token_from(|name| match name {
            "ADO_PAT" => Some("primary".into()),
            "AZURE_DEVOPS_EXT_PAT" => Some("alias".into()),
            _ => None,
        });
        assert_eq!(token.as_deref(), Some("primary"));
    }

    #[test]
    fn test_env_token_falls_back_to_alias() {
        let token = token_from(|name| match name {
            "ADO_PAT" => Some("  ".into()),
            "AZURE_DEVOPS_EXT_PAT" => Some("alias".into()),
            _ => None,
        });
        assert_eq!(token.as_deref(), Some("alias"));
        assert_eq!(token_from(|_| None), None);
    }

    #[test]
    fn test_validate_returns_user() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(
            200,
            json!({"authenticatedUser": {"id": "u1", "providerDisplayName": "Jamal Hartnett"}}),
        );

        let pat = PersonalAccessToken::new("pat", "https://dev.azure.com/contoso/");
        let data = tokio_test::block_on(pat.validate_with(transport.clone()))
            .unwrap()
            .unwrap();

        assert_eq!(data.display_name(), Some("Jamal Hartnett"));
        assert_eq!(
            transport.last_request().unwrap().url.path(),
            "/contoso/_apis/connectionData"
        );
    }

    #[test]
    fn test_validate_rejected_token() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(401, json!({"message": "Unauthorized"}));
        transport.push_with_headers(203, &[("content-type", "text/html")], b"<html/>".to_vec());

        let pat = PersonalAccessToken::new("pat", "https://dev.azure.com/contoso");

        assert!(tokio_test::block_on(pat.validate_with(transport.clone()))
            .unwrap()
            .is_none());
        assert!(tokio_test::block_on(pat.validate_with(transport))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_validate_server_error() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(500, json!({"message": "boom"}));

        let pat = PersonalAccessToken::new("pat", "https://dev.azure.com/contoso");
        assert!(tokio_test::block_on(pat.validate_with(transport)).is_err());
    }
}
