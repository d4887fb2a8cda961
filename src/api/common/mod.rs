//
//  azure-devops-rest
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types shared by every Azure DevOps service client
//!
//! This module provides the types used across all service areas: the unified
//! error type, the server's exception payload, list and pagination wrappers,
//! JSON Patch documents, and the small reference records that show up in almost
//! every resource (identities, projects, links).
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`WrappedException`] - The server's JSON error payload
//! - [`PagedList`] - Items plus the `x-ms-continuationtoken` header value
//! - [`JsonPatchOperation`] - One operation of an `application/json-patch+json` body
//! - [`IdentityRef`], [`TeamProjectReference`], [`ReferenceLinks`] - Shared references
//!
//! # Example
//!
//! ```rust
//! use azure_devops_rest::api::common::ApiError;
//!
//! fn handle_result<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(e) if e.is_not_found() => println!("Resource not found"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use std::collections::HashMap;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod enums;
mod json_patch;
mod models;
mod pagination;

pub(crate) use enums::{vss_enum, vss_flags, WireValue};
pub use json_patch::*;
pub use models::*;
pub use pagination::*;

/// Errors returned by every client operation.
///
/// Non-success HTTP statuses are surfaced as [`ApiError::Status`] with whatever
/// message the server put in its exception payload. No attempt is made to
/// classify errors as retryable; callers decide.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server answered with a non-success status code.
    #[error("{message} (HTTP {status})")]
    Status {
        /// HTTP status returned by the server
        status: StatusCode,
        /// Message from the exception payload, or the raw body when unparseable
        message: String,
        /// Exception `typeKey`, e.g. `GitRepositoryNotFoundException`
        type_key: Option<String>,
        /// Raw response body
        body: String,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A success body could not be decoded into the declared result type.
    #[error("Failed to decode response: {source}")]
    Deserialize {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error("Failed to encode request: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("Invalid query parameters: {0}")]
    InvalidQuery(String),
}

impl ApiError {
    /// Builds an [`ApiError::Status`] from a failed response.
    ///
    /// Azure DevOps returns errors in the format:
    /// ```json
    /// {"$id": "1", "message": "TF401019: ...", "typeKey": "GitRepositoryNotFoundException", "errorCode": 0}
    /// ```
    ///
    /// When the body is not such a payload the raw text is used as the message,
    /// falling back to the status' canonical reason for empty bodies.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let exception = serde_json::from_str::<WrappedException>(body).ok();

        let message = exception
            .as_ref()
            .and_then(|e| e.message.clone())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("Request failed")
                        .to_string()
                } else {
                    trimmed.to_string()
                }
            });

        Self::Status {
            status,
            message,
            type_key: exception.and_then(|e| e.type_key),
            body: body.to_string(),
        }
    }

    /// Returns the HTTP status for [`ApiError::Status`] errors.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self.status(),
            Some(StatusCode::UNAUTHORIZED) | Some(StatusCode::FORBIDDEN)
        )
    }
}

/// The exception payload the server sends with error statuses.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WrappedException {
    #[serde(default, rename = "$id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_exception: Option<Box<WrappedException>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_properties: Option<HashMap<String, serde_json::Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_from_exception_payload() {
        let body = r#"{"$id":"1","innerException":null,"message":"TF401019: The Git repository with name or identifier nope does not exist.","typeName":"Microsoft.TeamFoundation.Git.Server.GitRepositoryNotFoundException","typeKey":"GitRepositoryNotFoundException","errorCode":0,"eventId":3000}"#;
        let err = ApiError::from_response(StatusCode::NOT_FOUND, body);

        assert!(err.is_not_found());
        match err {
            ApiError::Status {
                message, type_key, ..
            } => {
                assert!(message.starts_with("TF401019"));
                assert_eq!(type_key.as_deref(), Some("GitRepositoryNotFoundException"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_from_plain_body() {
        let err = ApiError::from_response(StatusCode::BAD_GATEWAY, "upstream unavailable");
        assert_eq!(err.to_string(), "upstream unavailable (HTTP 502 Bad Gateway)");
    }

    #[test]
    fn test_error_from_empty_body() {
        let err = ApiError::from_response(StatusCode::UNAUTHORIZED, "");
        assert!(err.is_unauthorized());
        assert!(err.to_string().starts_with("Unauthorized"));
    }
}
