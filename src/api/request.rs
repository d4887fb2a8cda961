//
//  azure-devops-rest
//  api/request.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Request Descriptors
//!
//! A [`RestRequest`] captures everything one operation needs to send: the HTTP
//! verb, the route template and its values, the pinned API version, query
//! parameters, an optional body, custom headers and the expected response media
//! type. Service clients build one per call and hand it to
//! [`RestClientBase`](super::RestClientBase).
//!
//! ## Example
//!
//! ```rust
//! use azure_devops_rest::api::RestRequest;
//! use url::Url;
//!
//! let base = Url::parse("https://dev.azure.com/contoso").unwrap();
//! let request = RestRequest::get(
//!     "{project}/_apis/git/repositories/{repositoryId}/Items/{*path}",
//!     "7.1-preview.1",
//! )
//! .route("repositoryId", "abc")
//! .route("path", "/src/file.ts");
//!
//! let http = request.into_http(&base).unwrap();
//! assert_eq!(http.url.as_str(), "https://dev.azure.com/contoso/_apis/git/repositories/abc/Items/src/file.ts");
//! assert_eq!(http.header("accept"), Some("application/json;api-version=7.1-preview.1"));
//! assert!(http.body.is_none());
//! ```
//!
//! ## Headers
//!
//! | Header | Value |
//! |--------|-------|
//! | `Accept` | `<media type>;api-version=<version>` |
//! | `Content-Type` | `application/json` for JSON bodies, `application/octet-stream` for raw bodies, or an explicit override such as `application/json-patch+json` |

use std::fmt::Display;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use url::Url;

use super::common::{ApiError, JsonPatchDocument, JSON_PATCH_CONTENT_TYPE};
use super::query::to_query_pairs;
use super::route::{RouteTemplate, RouteValues};
use super::transport::HttpRequest;

pub const JSON_MEDIA_TYPE: &str = "application/json";
pub const OCTET_STREAM_MEDIA_TYPE: &str = "application/octet-stream";
pub const ZIP_MEDIA_TYPE: &str = "application/zip";
pub const TEXT_MEDIA_TYPE: &str = "text/plain";

/// Request body payload.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Serialized JSON.
    Json(Vec<u8>),
    /// Bytes sent verbatim as `application/octet-stream`.
    Raw(Vec<u8>),
}

/// Descriptor for one REST operation call.
#[derive(Debug, Clone)]
pub struct RestRequest {
    method: Method,
    route_template: String,
    api_version: String,
    route_values: RouteValues,
    query: Vec<(String, String)>,
    body: Option<RequestBody>,
    headers: Vec<(String, String)>,
    accept: String,
    content_type: Option<String>,
}

impl RestRequest {
    pub fn new(
        method: Method,
        route_template: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Self {
        Self {
            method,
            route_template: route_template.into(),
            api_version: api_version.into(),
            route_values: RouteValues::new(),
            query: Vec::new(),
            body: None,
            headers: Vec::new(),
            accept: JSON_MEDIA_TYPE.to_string(),
            content_type: None,
        }
    }

    pub fn get(route_template: impl Into<String>, api_version: impl Into<String>) -> Self {
        Self::new(Method::GET, route_template, api_version)
    }

    pub fn post(route_template: impl Into<String>, api_version: impl Into<String>) -> Self {
        Self::new(Method::POST, route_template, api_version)
    }

    pub fn put(route_template: impl Into<String>, api_version: impl Into<String>) -> Self {
        Self::new(Method::PUT, route_template, api_version)
    }

    pub fn patch(route_template: impl Into<String>, api_version: impl Into<String>) -> Self {
        Self::new(Method::PATCH, route_template, api_version)
    }

    pub fn delete(route_template: impl Into<String>, api_version: impl Into<String>) -> Self {
        Self::new(Method::DELETE, route_template, api_version)
    }

    /// Supplies a route value.
    pub fn route(mut self, name: &str, value: impl Display) -> Self {
        self.route_values.insert(name, value.to_string());
        self
    }

    /// Supplies a route value only when present.
    pub fn route_opt<V: Display>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.route(name, value),
            None => self,
        }
    }

    /// Merges a serializable parameter bag into the query string.
    ///
    /// # Errors
    ///
    /// Fails if `params` does not serialize to an object.
    pub fn query<T: Serialize + ?Sized>(mut self, params: &T) -> Result<Self, ApiError> {
        self.query.extend(to_query_pairs(params)?);
        Ok(self)
    }

    /// Adds a single query parameter.
    pub fn query_param(mut self, name: &str, value: impl Display) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    pub fn query_param_opt<V: Display>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query_param(name, value),
            None => self,
        }
    }

    /// Sets a JSON body.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ApiError> {
        self.body = Some(RequestBody::Json(serde_json::to_vec(body)?));
        Ok(self)
    }

    /// Sets a JSON Patch body (`application/json-patch+json`).
    pub fn json_patch(self, document: &JsonPatchDocument) -> Result<Self, ApiError> {
        Ok(self.json(document)?.content_type(JSON_PATCH_CONTENT_TYPE))
    }

    /// Sets a raw body sent as `application/octet-stream`.
    pub fn raw(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.body = Some(RequestBody::Raw(bytes.into()));
        self
    }

    /// Adds a custom request header.
    pub fn header(mut self, name: &str, value: impl Display) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Sets the expected response media type (default `application/json`).
    pub fn accept(mut self, media_type: &str) -> Self {
        self.accept = media_type.to_string();
        self
    }

    /// Overrides the body's content type.
    pub fn content_type(mut self, media_type: &str) -> Self {
        self.content_type = Some(media_type.to_string());
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn route_template(&self) -> &str {
        &self.route_template
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn body(&self) -> Option<&RequestBody> {
        self.body.as_ref()
    }

    /// Resolves the route and query against a service root URL.
    pub fn build_url(&self, base: &Url) -> Result<Url, ApiError> {
        let mut url = base.clone();
        let segments = RouteTemplate::parse(&self.route_template).resolve(&self.route_values);

        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);

        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }

        Ok(url)
    }

    /// Builds the [`HttpRequest`] sent by the transport.
    pub fn into_http(self, base: &Url) -> Result<HttpRequest, ApiError> {
        let url = self.build_url(base)?;
        let mut headers = HeaderMap::new();

        headers.insert(
            ACCEPT,
            header_value(&format!("{};api-version={}", self.accept, self.api_version))?,
        );

        let body = match self.body {
            Some(body) => {
                let (default_type, bytes) = match body {
                    RequestBody::Json(bytes) => (JSON_MEDIA_TYPE, bytes),
                    RequestBody::Raw(bytes) => (OCTET_STREAM_MEDIA_TYPE, bytes),
                };
                let content_type = self.content_type.as_deref().unwrap_or(default_type);
                headers.insert(CONTENT_TYPE, header_value(content_type)?);
                Some(bytes)
            }
            None => None,
        };

        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ApiError::InvalidHeader(format!("{name}: {e}")))?;
            headers.append(name, header_value(value)?);
        }

        Ok(HttpRequest {
            method: self.method,
            url,
            headers,
            body,
        })
    }
}

fn header_value(value: &str) -> Result<HeaderValue, ApiError> {
    HeaderValue::from_str(value).map_err(|e| ApiError::InvalidHeader(format!("{value}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::JsonPatchOperation;

    fn base() -> Url {
        Url::parse("https://dev.azure.com/contoso/").unwrap()
    }

    #[test]
    fn test_project_scoped_route() {
        let http = RestRequest::get(
            "{project}/_apis/git/Repositories/{repositoryId}",
            "7.1-preview.1",
        )
        .route("project", "Fabrikam Fiber")
        .into_http(&base())
        .unwrap();

        assert_eq!(
            http.url.as_str(),
            "https://dev.azure.com/contoso/Fabrikam%20Fiber/_apis/git/Repositories"
        );
        assert_eq!(http.method, Method::GET);
    }

    #[test]
    fn test_query_is_appended() {
        #[derive(Serialize)]
        struct Params {
            #[serde(rename = "$top")]
            top: i32,
        }

        let url = RestRequest::get("_apis/things", "1.0")
            .query(&Params { top: 5 })
            .unwrap()
            .query_param("includeLinks", true)
            .build_url(&base())
            .unwrap();

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("$top".to_string(), "5".to_string()),
                ("includeLinks".to_string(), "true".to_string())
            ]
        );
    }

    #[test]
    fn test_json_body_sets_content_type() {
        let http = RestRequest::post("_apis/things", "1.0")
            .json(&serde_json::json!({"name": "x"}))
            .unwrap()
            .into_http(&base())
            .unwrap();

        assert_eq!(http.header("content-type"), Some("application/json"));
        assert_eq!(http.json_body(), Some(serde_json::json!({"name": "x"})));
    }

    #[test]
    fn test_raw_body_is_octet_stream() {
        let http = RestRequest::post("_apis/things", "1.0")
            .raw(vec![1u8, 2, 3])
            .into_http(&base())
            .unwrap();

        assert_eq!(http.header("content-type"), Some("application/octet-stream"));
        assert_eq!(http.body, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_json_patch_content_type_and_custom_headers() {
        let http = RestRequest::patch("_apis/things/{id}/properties", "1.0")
            .route("id", 4)
            .json_patch(&vec![JsonPatchOperation::add("/a", 1)])
            .unwrap()
            .header("If-Match", "\"etag\"")
            .accept(TEXT_MEDIA_TYPE)
            .into_http(&base())
            .unwrap();

        assert_eq!(http.header("content-type"), Some("application/json-patch+json"));
        assert_eq!(http.header("if-match"), Some("\"etag\""));
        assert_eq!(http.header("accept"), Some("text/plain;api-version=1.0"));
        assert!(http.url.path().ends_with("/things/4/properties"));
    }

    #[test]
    fn test_invalid_header_is_reported() {
        let result = RestRequest::get("_apis/things", "1.0")
            .header("bad header", "x")
            .into_http(&base());

        assert!(matches!(result, Err(ApiError::InvalidHeader(_))));
    }
}
