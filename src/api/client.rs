//
//  azure-devops-rest
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Shared REST Client Primitive
//!
//! This module provides the core machinery every service client delegates to.
//!
//! ## Features
//!
//! - Route resolution and URL building via [`RestRequest`]
//! - API version negotiation through the `Accept` header
//! - JSON, list, paged, binary, text and raw response decoding
//! - Mapping of non-success statuses to [`ApiError::Status`]
//! - Resource area lookup so clients can be rooted at their service host
//!
//! ## Response Shapes
//!
//! | Method | Result |
//! |--------|--------|
//! | [`RestClientBase::send_json`] | One decoded value |
//! | [`RestClientBase::send_list`] | `Vec<T>` from a bare array or `{ count, value }` |
//! | [`RestClientBase::send_paged`] | [`PagedList<T>`] with the continuation token |
//! | [`RestClientBase::send_empty`] | `()`; the body is discarded |
//! | [`RestClientBase::send_bytes`] | Raw bytes (zip, octet-stream) |
//! | [`RestClientBase::send_text`] | Body as text |
//! | [`RestClientBase::send_raw`] | Status, headers and body |
//!
//! Every call performs exactly one round trip through the configured
//! [`Transport`]; nothing is retried or cached.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use super::common::{ApiError, PagedList, ResourceArea, CONTINUATION_TOKEN_HEADER};
use super::request::RestRequest;
use super::transport::{HttpResponse, ReqwestTransport, Transport};
use crate::auth::AuthCredential;

/// Route of the resource area lookup.
const RESOURCE_AREAS_ROUTE: &str = "_apis/resourceAreas/{areaId}";
const RESOURCE_AREAS_VERSION: &str = "7.1-preview.1";

/// The request primitive shared by all service clients.
///
/// Holds the service root URL and the transport; cheap to clone.
#[derive(Clone)]
pub struct RestClientBase {
    base_url: Url,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for RestClientBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestClientBase")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl RestClientBase {
    pub fn new(base_url: Url, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url,
            transport,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends a request and returns the response if its status is a success.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Status`] for non-2xx responses, with the server's message
    /// - [`ApiError::Network`] when the transport fails
    pub async fn send_raw(&self, request: RestRequest) -> Result<HttpResponse, ApiError> {
        let api_version = request.api_version().to_string();
        let http = request.into_http(&self.base_url)?;

        debug!(method = %http.method, url = %http.url, api_version = %api_version, "Sending request");

        let method = http.method.clone();
        let url = http.url.clone();
        let response = self.transport.execute(http).await?;

        if !response.status.is_success() {
            debug!(method = %method, url = %url, status = %response.status, "Request failed");
            return Err(ApiError::from_response(response.status, &response.text()));
        }

        debug!(status = %response.status, bytes = response.body.len(), "Received response");
        Ok(response)
    }

    /// Sends a request and decodes the JSON body.
    pub async fn send_json<T: DeserializeOwned>(&self, request: RestRequest) -> Result<T, ApiError> {
        let response = self.send_raw(request).await?;
        decode(&response)
    }

    /// Sends a request whose body is a list, bare or wrapped.
    pub async fn send_list<T: DeserializeOwned>(
        &self,
        request: RestRequest,
    ) -> Result<Vec<T>, ApiError> {
        let response = self.send_raw(request).await?;
        decode_list(&response)
    }

    /// Sends a request to a paginated list endpoint.
    ///
    /// The continuation token is read from the `x-ms-continuationtoken` header.
    pub async fn send_paged<T: DeserializeOwned>(
        &self,
        request: RestRequest,
    ) -> Result<PagedList<T>, ApiError> {
        let response = self.send_raw(request).await?;
        let token = response
            .header(CONTINUATION_TOKEN_HEADER)
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        Ok(PagedList::new(decode_list(&response)?, token))
    }

    /// Sends a request and discards the response body.
    pub async fn send_empty(&self, request: RestRequest) -> Result<(), ApiError> {
        self.send_raw(request).await.map(|_| ())
    }

    /// Sends a request and returns the body bytes unchanged.
    pub async fn send_bytes(&self, request: RestRequest) -> Result<Vec<u8>, ApiError> {
        Ok(self.send_raw(request).await?.body)
    }

    /// Sends a request and returns the body as text.
    pub async fn send_text(&self, request: RestRequest) -> Result<String, ApiError> {
        Ok(self.send_raw(request).await?.text())
    }
}

pub(crate) fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_slice(&response.body).map_err(|source| ApiError::Deserialize {
        source,
        body: response.text(),
    })
}

fn decode_list<T: DeserializeOwned>(response: &HttpResponse) -> Result<Vec<T>, ApiError> {
    if response.body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    let value: Value = decode(response)?;
    let items = match value {
        Value::Object(mut map) => map.remove("value").unwrap_or(Value::Array(Vec::new())),
        Value::Null => Value::Array(Vec::new()),
        other => other,
    };

    serde_json::from_value(items).map_err(|source| ApiError::Deserialize {
        source,
        body: response.text(),
    })
}

/// A per-service client that can be built from a [`RestClientBase`].
pub trait ServiceClient: Sized {
    /// GUID of the service's resource area; `None` for areas hosted at the
    /// organization URL itself.
    const RESOURCE_AREA_ID: Option<&'static str>;

    fn from_base(base: RestClientBase) -> Self;

    fn base(&self) -> &RestClientBase;
}

/// An organization URL plus the transport used to reach it.
///
/// # Example
///
/// ```rust,no_run
/// use azure_devops_rest::api::Connection;
/// use azure_devops_rest::api::git::GitClient;
///
/// # async fn run() -> Result<(), azure_devops_rest::api::ApiError> {
/// let connection = Connection::with_pat("https://dev.azure.com/contoso", "my-pat")?;
/// let git: GitClient = connection.resolve_client().await?;
/// let repos = git.get_repositories(Some("Fabrikam"), &Default::default()).await?;
/// println!("{} repositories", repos.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Connection {
    organization_url: Url,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("organization_url", &self.organization_url.as_str())
            .finish_non_exhaustive()
    }
}

impl Connection {
    pub fn new(organization_url: &str, transport: Arc<dyn Transport>) -> Result<Self, ApiError> {
        Ok(Self {
            organization_url: Url::parse(organization_url)?,
            transport,
        })
    }

    /// Connects with a personal access token over the default transport.
    pub fn with_pat(organization_url: &str, token: &str) -> Result<Self, ApiError> {
        let transport = ReqwestTransport::new()?.with_auth(AuthCredential::PersonalAccessToken {
            token: token.to_string(),
        });
        Self::new(organization_url, Arc::new(transport))
    }

    pub fn organization_url(&self) -> &Url {
        &self.organization_url
    }

    pub fn transport(&self) -> Arc<dyn Transport> {
        Arc::clone(&self.transport)
    }

    /// Builds a client rooted at the organization URL.
    pub fn client<C: ServiceClient>(&self) -> C {
        C::from_base(self.rest(self.organization_url.clone()))
    }

    /// Builds a client rooted at an explicit service URL.
    pub fn client_at<C: ServiceClient>(&self, url: &str) -> Result<C, ApiError> {
        Ok(C::from_base(self.rest(Url::parse(url)?)))
    }

    /// Builds a client rooted at the location of its resource area.
    ///
    /// Clients without a resource area, and areas the organization does not
    /// know (404), are rooted at the organization URL.
    pub async fn resolve_client<C: ServiceClient>(&self) -> Result<C, ApiError> {
        let Some(area_id) = C::RESOURCE_AREA_ID else {
            return Ok(self.client());
        };

        match self.get_resource_area(area_id).await {
            Ok(area) if !area.location_url.is_empty() => self.client_at(&area.location_url),
            Ok(_) => Ok(self.client()),
            Err(e) if e.is_not_found() => {
                warn!(area_id, "Resource area not found, using organization URL");
                Ok(self.client())
            }
            Err(e) => Err(e),
        }
    }

    pub async fn get_resource_area(&self, area_id: &str) -> Result<ResourceArea, ApiError> {
        let request =
            RestRequest::get(RESOURCE_AREAS_ROUTE, RESOURCE_AREAS_VERSION).route("areaId", area_id);
        self.rest(self.organization_url.clone())
            .send_json(request)
            .await
    }

    pub async fn get_resource_areas(&self) -> Result<Vec<ResourceArea>, ApiError> {
        let request = RestRequest::get(RESOURCE_AREAS_ROUTE, RESOURCE_AREAS_VERSION);
        self.rest(self.organization_url.clone())
            .send_list(request)
            .await
    }

    fn rest(&self, base_url: Url) -> RestClientBase {
        RestClientBase::new(base_url, Arc::clone(&self.transport))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::MockTransport;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: i32,
    }

    fn client(transport: &Arc<MockTransport>) -> RestClientBase {
        RestClientBase::new(
            Url::parse("https://dev.azure.com/contoso").unwrap(),
            transport.clone(),
        )
    }

    #[test]
    fn test_list_accepts_wrapped_and_bare_arrays() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, serde_json::json!({"count": 1, "value": [{"id": 1}]}));
        transport.push_json(200, serde_json::json!([{"id": 2}]));
        let base = client(&transport);

        tokio_test::block_on(async {
            let wrapped: Vec<Item> = base.send_list(RestRequest::get("_apis/a", "1.0")).await.unwrap();
            let bare: Vec<Item> = base.send_list(RestRequest::get("_apis/b", "1.0")).await.unwrap();

            assert_eq!(wrapped, vec![Item { id: 1 }]);
            assert_eq!(bare, vec![Item { id: 2 }]);
        });
    }

    #[test]
    fn test_paged_reads_continuation_header() {
        let transport = Arc::new(MockTransport::new());
        transport.push_with_headers(
            200,
            &[(CONTINUATION_TOKEN_HEADER, "next-page")],
            br#"{"count":1,"value":[{"id":1}]}"#.to_vec(),
        );
        transport.push_json(200, serde_json::json!({"count": 0, "value": []}));
        let base = client(&transport);

        tokio_test::block_on(async {
            let first: PagedList<Item> = base.send_paged(RestRequest::get("_apis/a", "1.0")).await.unwrap();
            let last: PagedList<Item> = base.send_paged(RestRequest::get("_apis/a", "1.0")).await.unwrap();

            assert_eq!(first.continuation_token.as_deref(), Some("next-page"));
            assert_eq!(first.len(), 1);
            assert_eq!(last.continuation_token, None);
            assert!(last.is_empty());
        });
    }

    #[test]
    fn test_error_status_is_mapped() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(404, serde_json::json!({"message": "gone", "typeKey": "NotFound"}));
        let base = client(&transport);

        let err = tokio_test::block_on(base.send_json::<Item>(RestRequest::get("_apis/a", "1.0")))
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(err.to_string().starts_with("gone"));
    }

    #[test]
    fn test_mismatched_body_is_a_decode_error() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, serde_json::json!({"id": "not a number"}));
        let base = client(&transport);

        let err = tokio_test::block_on(base.send_json::<Item>(RestRequest::get("_apis/a", "1.0")))
            .unwrap_err();

        assert!(matches!(err, ApiError::Deserialize { .. }));
    }

    struct Probe(RestClientBase);

    impl ServiceClient for Probe {
        const RESOURCE_AREA_ID: Option<&'static str> = Some("4e080c62-fa21-4fbc-8fef-2a10a2b38049");

        fn from_base(base: RestClientBase) -> Self {
            Self(base)
        }

        fn base(&self) -> &RestClientBase {
            &self.0
        }
    }

    #[test]
    fn test_resolve_client_uses_location_url() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(
            200,
            serde_json::json!({
                "id": "4e080c62-fa21-4fbc-8fef-2a10a2b38049",
                "name": "git",
                "locationUrl": "https://contoso.visualstudio.com/"
            }),
        );
        let connection = Connection::new("https://dev.azure.com/contoso", transport.clone()).unwrap();

        let probe: Probe = tokio_test::block_on(connection.resolve_client()).unwrap();

        assert_eq!(probe.base().base_url().as_str(), "https://contoso.visualstudio.com/");
        let request = transport.last_request().unwrap();
        assert_eq!(
            request.url.path(),
            "/contoso/_apis/resourceAreas/4e080c62-fa21-4fbc-8fef-2a10a2b38049"
        );
    }

    #[test]
    fn test_resolve_client_falls_back_on_404() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(404, serde_json::json!({"message": "unknown area"}));
        let connection = Connection::new("https://dev.azure.com/contoso", transport.clone()).unwrap();

        let probe: Probe = tokio_test::block_on(connection.resolve_client()).unwrap();

        assert_eq!(probe.base().base_url().as_str(), "https://dev.azure.com/contoso");
    }
}
