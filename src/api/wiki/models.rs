//
//  azure-devops-rest
//  api/wiki/models.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::common::vss_enum;
use crate::api::git::GitVersionDescriptor;

vss_enum! {
    /// A project wiki lives in a hidden repository; a code wiki publishes a
    /// folder of an existing repository.
    pub enum WikiType {
        ProjectWiki = 0 => "projectWiki",
        CodeWiki = 1 => "codeWiki",
    }
}

impl Default for WikiType {
    fn default() -> Self {
        WikiType::ProjectWiki
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WikiV2 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub wiki_type: Option<WikiType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapped_path: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub versions: Vec<GitVersionDescriptor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<HashMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_disabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WikiCreateParametersV2 {
    pub name: String,

    pub project_id: String,

    #[serde(rename = "type")]
    pub wiki_type: WikiType,

    /// Required for code wikis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapped_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<GitVersionDescriptor>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WikiUpdateParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Branches published for a code wiki.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub versions: Vec<GitVersionDescriptor>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WikiPage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_item_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_parent_page: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_non_conformant: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_pages: Vec<WikiPage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A page together with the `ETag` values the server returned for it.
///
/// The first ETag is the page version expected in `If-Match` by
/// [`WikiClient::create_or_update_page`](super::WikiClient::create_or_update_page).
#[derive(Debug, Clone, Default)]
pub struct WikiPageResponse {
    pub page: WikiPage,
    pub e_tag: Vec<String>,
}

impl WikiPageResponse {
    pub fn version(&self) -> Option<&str> {
        self.e_tag.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WikiPageCreateOrUpdateParameters {
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WikiPageMoveParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_order: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WikiPageMove {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_order: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<WikiPage>,
}

#[derive(Debug, Clone, Default)]
pub struct WikiPageMoveResponse {
    pub page_move: WikiPageMove,
    pub e_tag: Vec<String>,
}

/// Body of a pages batch request.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WikiPagesBatchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<String>,

    /// Include view stats for the last N days (at most 30).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_views_for_days: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WikiPageStat {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WikiPageDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub view_stats: Vec<WikiPageStat>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WikiAttachment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Path to link the attachment from page markdown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct WikiAttachmentResponse {
    pub attachment: WikiAttachment,
    pub e_tag: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::git::GitVersionType;

    #[test]
    fn test_code_wiki_create_body() {
        let params = WikiCreateParametersV2 {
            name: "docs".into(),
            project_id: "p1".into(),
            wiki_type: WikiType::CodeWiki,
            repository_id: Some("r1".into()),
            mapped_path: Some("/docs".into()),
            version: Some(GitVersionDescriptor::branch("main")),
        };

        let json = serde_json::to_value(&params).unwrap();

        assert_eq!(json["type"], "codeWiki");
        assert_eq!(json["mappedPath"], "/docs");
        assert_eq!(json["version"]["versionType"], "branch");
    }

    #[test]
    fn test_wiki_reads_numeric_type_and_versions() {
        let wiki: WikiV2 = serde_json::from_str(
            r#"{"id":"w1","name":"Fabrikam.wiki","type":0,"versions":[{"version":"wikiMaster"}]}"#,
        )
        .unwrap();

        assert_eq!(wiki.wiki_type, Some(WikiType::ProjectWiki));
        assert_eq!(wiki.versions[0].version.as_deref(), Some("wikiMaster"));
        assert_eq!(wiki.versions[0].version_type, None::<GitVersionType>);
    }

    #[test]
    fn test_page_tree() {
        let page: WikiPage = serde_json::from_str(
            r#"{"id":1,"path":"/","isParentPage":true,"subPages":[{"id":2,"path":"/Home","order":0}]}"#,
        )
        .unwrap();

        assert_eq!(page.sub_pages.len(), 1);
        assert_eq!(page.sub_pages[0].path.as_deref(), Some("/Home"));
    }
}
