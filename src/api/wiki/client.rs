//
//  azure-devops-rest
//  api/wiki/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use reqwest::header::ETAG;
use serde::Serialize;

use super::models::*;
use crate::api::client::{decode, RestClientBase, ServiceClient};
use crate::api::common::{ApiError, PagedList};
use crate::api::git::{GitVersionDescriptor, VersionControlRecursionType};
use crate::api::request::{RestRequest, TEXT_MEDIA_TYPE, ZIP_MEDIA_TYPE};
use crate::api::transport::HttpResponse;

const WIKIS: &str = "{project}/_apis/wiki/wikis/{wikiIdentifier}";
const PAGES: &str = "{project}/_apis/wiki/wikis/{wikiIdentifier}/pages";
const PAGE_BY_ID: &str = "{project}/_apis/wiki/wikis/{wikiIdentifier}/pages/{id}";
const PAGE_MOVES: &str = "{project}/_apis/wiki/wikis/{wikiIdentifier}/pagemoves";
const PAGES_BATCH: &str = "{project}/_apis/wiki/wikis/{wikiIdentifier}/pagesbatch";
const PAGE_STATS: &str = "{project}/_apis/wiki/wikis/{wikiIdentifier}/pages/{pageId}/stats";
const ATTACHMENTS: &str = "{project}/_apis/wiki/wikis/{wikiIdentifier}/attachments";

const WIKIS_VERSION: &str = "7.1-preview.2";
const V1: &str = "7.1-preview.1";

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetPageOptions {
    /// Page path, e.g. `/Home/Getting Started`. The root page when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recursion_level: Option<VersionControlRecursionType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_descriptor: Option<GitVersionDescriptor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_content: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetPageByIdOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recursion_level: Option<VersionControlRecursionType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_content: Option<bool>,
}

/// Query of the page write operations (create, update, delete, move).
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageChangeOptions {
    /// Commit message of the change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_descriptor: Option<GitVersionDescriptor>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VersionQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    version_descriptor: Option<&'a GitVersionDescriptor>,
}

/// Client for project and code wikis, their pages and attachments.
#[derive(Debug, Clone)]
pub struct WikiClient {
    base: RestClientBase,
}

impl ServiceClient for WikiClient {
    const RESOURCE_AREA_ID: Option<&'static str> = Some("bf7d82a0-8aa5-4613-94ef-6172a5ea01f3");

    fn from_base(base: RestClientBase) -> Self {
        Self { base }
    }

    fn base(&self) -> &RestClientBase {
        &self.base
    }
}

/// Every `ETag` header value, in order.
fn e_tags(response: &HttpResponse) -> Vec<String> {
    response
        .headers
        .get_all(ETAG)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(str::to_string)
        .collect()
}

impl WikiClient {
    pub async fn create_wiki(
        &self,
        parameters: &WikiCreateParametersV2,
        project: Option<&str>,
    ) -> Result<WikiV2, ApiError> {
        let request = RestRequest::post(WIKIS, WIKIS_VERSION)
            .route_opt("project", project)
            .json(parameters)?;
        self.base.send_json(request).await
    }

    /// Lists the wikis of a project, or of the whole organization.
    pub async fn get_all_wikis(&self, project: Option<&str>) -> Result<Vec<WikiV2>, ApiError> {
        let request = RestRequest::get(WIKIS, WIKIS_VERSION).route_opt("project", project);
        self.base.send_list(request).await
    }

    /// Gets a wiki by name or id.
    pub async fn get_wiki(
        &self,
        wiki_identifier: &str,
        project: Option<&str>,
    ) -> Result<WikiV2, ApiError> {
        let request = RestRequest::get(WIKIS, WIKIS_VERSION)
            .route_opt("project", project)
            .route("wikiIdentifier", wiki_identifier);
        self.base.send_json(request).await
    }

    pub async fn update_wiki(
        &self,
        parameters: &WikiUpdateParameters,
        wiki_identifier: &str,
        project: Option<&str>,
    ) -> Result<WikiV2, ApiError> {
        let request = RestRequest::patch(WIKIS, WIKIS_VERSION)
            .route_opt("project", project)
            .route("wikiIdentifier", wiki_identifier)
            .json(parameters)?;
        self.base.send_json(request).await
    }

    /// Deletes a wiki. Only code wikis can be deleted; the server returns the
    /// removed wiki.
    pub async fn delete_wiki(
        &self,
        wiki_identifier: &str,
        project: Option<&str>,
    ) -> Result<WikiV2, ApiError> {
        let request = RestRequest::delete(WIKIS, WIKIS_VERSION)
            .route_opt("project", project)
            .route("wikiIdentifier", wiki_identifier);
        self.base.send_json(request).await
    }

    fn page_request(
        project: &str,
        wiki_identifier: &str,
        options: &GetPageOptions,
    ) -> Result<RestRequest, ApiError> {
        RestRequest::get(PAGES, V1)
            .route("project", project)
            .route("wikiIdentifier", wiki_identifier)
            .query(options)
    }

    /// Gets page metadata (and content with `include_content`) by path.
    ///
    /// # Errors
    ///
    /// [`ApiError::Status`] with 404 when the page does not exist.
    pub async fn get_page(
        &self,
        project: &str,
        wiki_identifier: &str,
        options: &GetPageOptions,
    ) -> Result<WikiPageResponse, ApiError> {
        let request = Self::page_request(project, wiki_identifier, options)?;
        let response = self.base.send_raw(request).await?;
        Ok(WikiPageResponse {
            page: decode(&response)?,
            e_tag: e_tags(&response),
        })
    }

    /// Gets the page's markdown.
    pub async fn get_page_text(
        &self,
        project: &str,
        wiki_identifier: &str,
        options: &GetPageOptions,
    ) -> Result<String, ApiError> {
        let request =
            Self::page_request(project, wiki_identifier, options)?.accept(TEXT_MEDIA_TYPE);
        self.base.send_text(request).await
    }

    /// Downloads the page (and its sub pages with `recursion_level`) as a zip.
    pub async fn get_page_zip(
        &self,
        project: &str,
        wiki_identifier: &str,
        options: &GetPageOptions,
    ) -> Result<Vec<u8>, ApiError> {
        let request =
            Self::page_request(project, wiki_identifier, options)?.accept(ZIP_MEDIA_TYPE);
        self.base.send_bytes(request).await
    }

    pub async fn get_page_by_id(
        &self,
        project: &str,
        wiki_identifier: &str,
        id: i32,
        options: &GetPageByIdOptions,
    ) -> Result<WikiPageResponse, ApiError> {
        let request = RestRequest::get(PAGE_BY_ID, V1)
            .route("project", project)
            .route("wikiIdentifier", wiki_identifier)
            .route("id", id)
            .query(options)?;
        let response = self.base.send_raw(request).await?;
        Ok(WikiPageResponse {
            page: decode(&response)?,
            e_tag: e_tags(&response),
        })
    }

    /// Creates a page, or updates it when `version` (the page's ETag) is given.
    ///
    /// The server rejects an update whose `version` is stale with 412.
    pub async fn create_or_update_page(
        &self,
        parameters: &WikiPageCreateOrUpdateParameters,
        project: &str,
        wiki_identifier: &str,
        path: &str,
        version: Option<&str>,
        options: &PageChangeOptions,
    ) -> Result<WikiPageResponse, ApiError> {
        let mut request = RestRequest::put(PAGES, V1)
            .route("project", project)
            .route("wikiIdentifier", wiki_identifier)
            .query_param("path", path)
            .query(options)?
            .json(parameters)?;
        if let Some(version) = version {
            request = request.header("If-Match", version);
        }

        let response = self.base.send_raw(request).await?;
        Ok(WikiPageResponse {
            page: decode(&response)?,
            e_tag: e_tags(&response),
        })
    }

    /// Deletes a page and its sub pages.
    pub async fn delete_page(
        &self,
        project: &str,
        wiki_identifier: &str,
        path: &str,
        options: &PageChangeOptions,
    ) -> Result<WikiPageResponse, ApiError> {
        let request = RestRequest::delete(PAGES, V1)
            .route("project", project)
            .route("wikiIdentifier", wiki_identifier)
            .query_param("path", path)
            .query(options)?;
        let response = self.base.send_raw(request).await?;
        Ok(WikiPageResponse {
            page: decode(&response)?,
            e_tag: e_tags(&response),
        })
    }

    /// Moves or reorders a page.
    pub async fn create_page_move(
        &self,
        parameters: &WikiPageMoveParameters,
        project: &str,
        wiki_identifier: &str,
        options: &PageChangeOptions,
    ) -> Result<WikiPageMoveResponse, ApiError> {
        let request = RestRequest::post(PAGE_MOVES, V1)
            .route("project", project)
            .route("wikiIdentifier", wiki_identifier)
            .query(options)?
            .json(parameters)?;
        let response = self.base.send_raw(request).await?;
        Ok(WikiPageMoveResponse {
            page_move: decode(&response)?,
            e_tag: e_tags(&response),
        })
    }

    /// Lists pages with view stats, `top` at a time.
    pub async fn get_pages_batch(
        &self,
        pages_batch_request: &WikiPagesBatchRequest,
        project: &str,
        wiki_identifier: &str,
        version_descriptor: Option<&GitVersionDescriptor>,
    ) -> Result<PagedList<WikiPageDetail>, ApiError> {
        let request = RestRequest::post(PAGES_BATCH, V1)
            .route("project", project)
            .route("wikiIdentifier", wiki_identifier)
            .query(&VersionQuery { version_descriptor })?
            .json(pages_batch_request)?;
        self.base.send_paged(request).await
    }

    pub async fn get_page_data(
        &self,
        project: &str,
        wiki_identifier: &str,
        page_id: i32,
        page_views_for_days: Option<i32>,
    ) -> Result<WikiPageDetail, ApiError> {
        let request = RestRequest::get(PAGE_STATS, V1)
            .route("project", project)
            .route("wikiIdentifier", wiki_identifier)
            .route("pageId", page_id)
            .query_param_opt("pageViewsForDays", page_views_for_days);
        self.base.send_json(request).await
    }

    /// Uploads an attachment that pages can link to.
    pub async fn create_attachment(
        &self,
        content: impl Into<Vec<u8>>,
        project: &str,
        wiki_identifier: &str,
        name: &str,
        version_descriptor: Option<&GitVersionDescriptor>,
    ) -> Result<WikiAttachmentResponse, ApiError> {
        let request = RestRequest::put(ATTACHMENTS, V1)
            .route("project", project)
            .route("wikiIdentifier", wiki_identifier)
            .query_param("name", name)
            .query(&VersionQuery { version_descriptor })?
            .raw(content);

        let response = self.base.send_raw(request).await?;
        Ok(WikiAttachmentResponse {
            attachment: decode(&response)?,
            e_tag: e_tags(&response),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use reqwest::Method;
    use serde_json::json;

    use super::*;
    use crate::api::testing::MockTransport;
    use crate::api::Connection;

    fn wiki(transport: &Arc<MockTransport>) -> WikiClient {
        Connection::new("https://dev.azure.com/contoso", transport.clone())
            .unwrap()
            .client()
    }

    fn sorted_pairs(request: &crate::api::HttpRequest) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = request.url.query_pairs().into_owned().collect();
        pairs.sort();
        pairs
    }

    #[test]
    fn test_get_all_wikis_without_project() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, json!({"count": 1, "value": [{"id": "w1", "type": "projectWiki"}]}));

        let wikis = tokio_test::block_on(wiki(&transport).get_all_wikis(None)).unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(wikis[0].wiki_type, Some(WikiType::ProjectWiki));
        assert_eq!(request.url.path(), "/contoso/_apis/wiki/wikis");
        assert_eq!(
            request.header("accept"),
            Some("application/json;api-version=7.1-preview.2")
        );
    }

    #[test]
    fn test_get_page_reads_etag() {
        let transport = Arc::new(MockTransport::new());
        transport.push_with_headers(
            200,
            &[("etag", "\"6f8a1b\""), ("content-type", "application/json")],
            br##"{"id":7,"path":"/Home","content":"# Home"}"##.to_vec(),
        );

        let response = tokio_test::block_on(wiki(&transport).get_page(
            "Fabrikam",
            "Fabrikam.wiki",
            &GetPageOptions {
                path: Some("/Home".into()),
                include_content: Some(true),
                version_descriptor: Some(GitVersionDescriptor::branch("wikiMaster")),
                ..Default::default()
            },
        ))
        .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(response.page.content.as_deref(), Some("# Home"));
        assert_eq!(response.version(), Some("\"6f8a1b\""));
        assert_eq!(
            request.url.path(),
            "/contoso/Fabrikam/_apis/wiki/wikis/Fabrikam.wiki/pages"
        );
        assert_eq!(
            sorted_pairs(&request),
            vec![
                ("includeContent".to_string(), "true".to_string()),
                ("path".to_string(), "/Home".to_string()),
                ("versionDescriptor.version".to_string(), "wikiMaster".to_string()),
                ("versionDescriptor.versionType".to_string(), "branch".to_string()),
            ]
        );
    }

    #[test]
    fn test_update_page_sends_if_match() {
        let transport = Arc::new(MockTransport::new());
        transport.push_with_headers(200, &[("etag", "\"2\"")], br#"{"id":7,"path":"/Home"}"#.to_vec());

        let response = tokio_test::block_on(wiki(&transport).create_or_update_page(
            &WikiPageCreateOrUpdateParameters {
                content: "updated".into(),
            },
            "Fabrikam",
            "Fabrikam.wiki",
            "/Home",
            Some("\"1\""),
            &PageChangeOptions {
                comment: Some("Reword".into()),
                ..Default::default()
            },
        ))
        .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(response.e_tag, vec!["\"2\"".to_string()]);
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.header("if-match"), Some("\"1\""));
        assert_eq!(request.json_body().unwrap(), json!({"content": "updated"}));
        assert_eq!(
            sorted_pairs(&request),
            vec![
                ("comment".to_string(), "Reword".to_string()),
                ("path".to_string(), "/Home".to_string()),
            ]
        );
    }

    #[test]
    fn test_create_page_without_version_has_no_if_match() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(201, json!({"id": 8, "path": "/New"}));

        tokio_test::block_on(wiki(&transport).create_or_update_page(
            &WikiPageCreateOrUpdateParameters {
                content: "new".into(),
            },
            "Fabrikam",
            "Fabrikam.wiki",
            "/New",
            None,
            &PageChangeOptions::default(),
        ))
        .unwrap();

        assert_eq!(transport.last_request().unwrap().header("if-match"), None);
    }

    #[test]
    fn test_page_text_and_zip_accept_headers() {
        let transport = Arc::new(MockTransport::new());
        transport.push_with_headers(200, &[("content-type", "text/plain")], b"# Home".to_vec());
        transport.push_with_headers(200, &[("content-type", "application/zip")], vec![0x50, 0x4b]);
        let client = wiki(&transport);
        let options = GetPageOptions {
            path: Some("/Home".into()),
            ..Default::default()
        };

        let text = tokio_test::block_on(client.get_page_text("P", "W", &options)).unwrap();
        let zip = tokio_test::block_on(client.get_page_zip("P", "W", &options)).unwrap();

        let requests = transport.requests();
        assert_eq!(text, "# Home");
        assert_eq!(zip, vec![0x50, 0x4b]);
        assert_eq!(
            requests[0].header("accept"),
            Some("text/plain;api-version=7.1-preview.1")
        );
        assert_eq!(
            requests[1].header("accept"),
            Some("application/zip;api-version=7.1-preview.1")
        );
    }

    #[test]
    fn test_pages_batch_is_paged() {
        let transport = Arc::new(MockTransport::new());
        transport.push_with_headers(
            200,
            &[("x-ms-continuationtoken", "next")],
            br#"{"count":1,"value":[{"id":1,"path":"/Home","viewStats":[{"count":3}]}]}"#.to_vec(),
        );

        let page = tokio_test::block_on(wiki(&transport).get_pages_batch(
            &WikiPagesBatchRequest {
                top: Some(1),
                page_views_for_days: Some(7),
                ..Default::default()
            },
            "P",
            "W",
            None,
        ))
        .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(page.continuation_token.as_deref(), Some("next"));
        assert_eq!(page[0].view_stats[0].count, Some(3));
        assert_eq!(request.url.path(), "/contoso/P/_apis/wiki/wikis/W/pagesbatch");
        assert_eq!(request.url.query(), None);
        assert_eq!(request.json_body().unwrap(), json!({"top": 1, "pageViewsForDays": 7}));
    }

    #[test]
    fn test_attachment_upload_is_raw() {
        let transport = Arc::new(MockTransport::new());
        transport.push_with_headers(
            201,
            &[("etag", "\"a1\"")],
            br#"{"name":"diagram.png","path":"/.attachments/diagram.png"}"#.to_vec(),
        );

        let uploaded = tokio_test::block_on(wiki(&transport).create_attachment(
            vec![1u8, 2, 3],
            "P",
            "W",
            "diagram.png",
            None,
        ))
        .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(uploaded.attachment.path.as_deref(), Some("/.attachments/diagram.png"));
        assert_eq!(uploaded.e_tag, vec!["\"a1\"".to_string()]);
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.url.query(), Some("name=diagram.png"));
        assert_eq!(request.header("content-type"), Some("application/octet-stream"));
        assert_eq!(request.body.as_deref(), Some(&[1u8, 2, 3][..]));
    }
}
