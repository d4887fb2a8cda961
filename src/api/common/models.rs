//
//  azure-devops-rest
//  api/common/models.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Reference records embedded in resources across all service areas.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::vss_enum;

/// The `_links` object of a resource: link name to `{ "href": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(transparent)]
pub struct ReferenceLinks(pub HashMap<String, Value>);

impl ReferenceLinks {
    /// Returns the `href` of the named link, if present.
    pub fn href(&self, name: &str) -> Option<&str> {
        self.0.get(name)?.get("href")?.as_str()
    }
}

/// A lightweight reference to a user or group.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory_alias: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inactive: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_aad_identity: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_container: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_deleted_in_origin: Option<bool>,

    #[serde(default, rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<ReferenceLinks>,
}

impl IdentityRef {
    /// Reference by id only, as accepted in request bodies.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }
}

vss_enum! {
    /// Visibility of a team project.
    pub enum ProjectVisibility {
        Unchanged = -1 => "unchanged",
        Private = 0 => "private",
        Organization = 1 => "organization",
        Public = 2 => "public",
        SystemPrivate = 3 => "systemPrivate",
    }
}

/// Shallow reference to a team project.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TeamProjectReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// `wellFormed`, `createPending`, `deleting`, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<ProjectVisibility>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update_time: Option<DateTime<Utc>>,
}

/// Project identified by id and name only.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Generic `{ id, url }` reference.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A service area and the URL it is hosted at.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResourceArea {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub location_url: String,
}

/// A typed property value as the server writes it: `{ "$type": ..., "$value": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PropertyValue {
    #[serde(default, rename = "$type", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,

    #[serde(default, rename = "$value")]
    pub value: Value,
}

/// Property bag returned by the `properties` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PropertiesCollection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,

    #[serde(default)]
    pub value: HashMap<String, PropertyValue>,
}

impl PropertiesCollection {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.value.get(key).map(|p| &p.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_links_href() {
        let links: ReferenceLinks = serde_json::from_str(
            r#"{"self":{"href":"https://dev.azure.com/o/_apis/git/repositories/1"},"web":{"href":"https://dev.azure.com/o/p/_git/r"}}"#,
        )
        .unwrap();

        assert_eq!(links.href("web"), Some("https://dev.azure.com/o/p/_git/r"));
        assert_eq!(links.href("missing"), None);
    }

    #[test]
    fn test_project_reference_ignores_unknown_fields() {
        let project: TeamProjectReference = serde_json::from_str(
            r#"{"id":"p1","name":"Fabrikam","state":"wellFormed","visibility":"private","somethingNew":42}"#,
        )
        .unwrap();

        assert_eq!(project.name.as_deref(), Some("Fabrikam"));
        assert_eq!(project.visibility, Some(ProjectVisibility::Private));
    }

    #[test]
    fn test_properties_collection_lookup() {
        let props: PropertiesCollection = serde_json::from_str(
            r#"{"count":1,"value":{"ci.build":{"$type":"System.String","$value":"42"}}}"#,
        )
        .unwrap();

        assert_eq!(props.get("ci.build"), Some(&Value::String("42".into())));
    }
}
