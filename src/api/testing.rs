//
//  azure-devops-rest
//  api/testing.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! In-memory transport for testing code built on the service clients.
//!
//! [`MockTransport`] records every request it receives and answers from a
//! queue of canned responses (or `200 {}` once the queue is empty).
//!
//! ```rust
//! use std::sync::Arc;
//! use azure_devops_rest::api::testing::MockTransport;
//! use azure_devops_rest::api::wiki::WikiClient;
//! use azure_devops_rest::api::Connection;
//!
//! # tokio_test::block_on(async {
//! let transport = Arc::new(MockTransport::new());
//! transport.push_json(200, serde_json::json!({"count": 0, "value": []}));
//!
//! let connection = Connection::new("https://dev.azure.com/contoso", transport.clone()).unwrap();
//! let wikis = connection.client::<WikiClient>().get_all_wikis(Some("Fabrikam")).await.unwrap();
//!
//! assert!(wikis.is_empty());
//! assert_eq!(
//!     transport.last_request().unwrap().url.path(),
//!     "/contoso/Fabrikam/_apis/wiki/wikis"
//! );
//! # });
//! ```

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::StatusCode;

use super::common::ApiError;
use super::transport::{HttpRequest, HttpResponse, Transport};

/// Recording [`Transport`] that never touches the network.
#[derive(Debug, Default)]
pub struct MockTransport {
    requests: Mutex<Vec<HttpRequest>>,
    responses: Mutex<VecDeque<HttpResponse>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a raw response.
    pub fn push(&self, response: HttpResponse) {
        if let Ok(mut queue) = self.responses.lock() {
            queue.push_back(response);
        }
    }

    /// Queues a JSON response with the given status.
    pub fn push_json(&self, status: u16, body: serde_json::Value) {
        self.push_with_headers(
            status,
            &[("content-type", "application/json")],
            body.to_string().into_bytes(),
        );
    }

    /// Queues a response with explicit headers and body.
    pub fn push_with_headers(&self, status: u16, headers: &[(&str, &str)], body: Vec<u8>) {
        let mut map = HeaderMap::new();
        for (name, value) in headers {
            if let (Ok(name), Ok(value)) = (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                map.append(name, value);
            }
        }
        self.push(HttpResponse {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::OK),
            headers: map,
            body,
        });
    }

    /// Every request received so far.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests().pop()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }

        let next = self.responses.lock().ok().and_then(|mut q| q.pop_front());
        Ok(next.unwrap_or_else(|| HttpResponse {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: b"{}".to_vec(),
        }))
    }
}
