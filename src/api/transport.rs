//
//  azure-devops-rest
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Transport
//!
//! The request primitive builds a fully resolved [`HttpRequest`] and hands it to
//! a [`Transport`] for exactly one round trip. Timeouts, proxies, TLS settings
//! and cancellation belong to the transport, not to the service clients.
//!
//! [`ReqwestTransport`] is the default implementation; tests and embedders can
//! supply their own (see [`crate::api::testing::MockTransport`]).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, StatusCode};
use url::Url;

use super::common::ApiError;
use crate::auth::AuthCredential;

/// A fully resolved HTTP request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Decodes the body as JSON, mostly useful in tests.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|b| serde_json::from_slice(b).ok())
    }
}

/// A raw HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Performs one HTTP round trip.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// [`Transport`] backed by a shared `reqwest::Client`.
///
/// # Example
///
/// ```rust,no_run
/// use azure_devops_rest::api::ReqwestTransport;
/// use azure_devops_rest::auth::AuthCredential;
///
/// let transport = ReqwestTransport::new()?
///     .with_auth(AuthCredential::PersonalAccessToken { token: "pat".into() });
/// # Ok::<(), azure_devops_rest::api::ApiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
    auth: Option<AuthCredential>,
}

impl ReqwestTransport {
    /// Creates a transport with the crate's user agent and no timeout.
    pub fn new() -> Result<Self, ApiError> {
        Ok(Self::from_client(Self::client_builder().build()?))
    }

    /// Creates a transport whose requests fail after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, ApiError> {
        Ok(Self::from_client(
            Self::client_builder().timeout(timeout).build()?,
        ))
    }

    pub fn from_client(http: Client) -> Self {
        Self { http, auth: None }
    }

    pub fn with_auth(mut self, auth: AuthCredential) -> Self {
        self.auth = Some(auth);
        self
    }

    fn client_builder() -> reqwest::ClientBuilder {
        Client::builder().user_agent(format!("{}/{}", crate::APP_NAME, crate::VERSION))
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = self
            .http
            .request(request.method, request.url)
            .headers(request.headers);

        if let Some(auth) = &self.auth {
            builder = auth.apply_to_request(builder);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
