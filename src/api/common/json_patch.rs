//
//  azure-devops-rest
//  api/common/json_patch.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! JSON Patch (RFC 6902) documents sent as `application/json-patch+json`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::vss_enum;

/// Content type for JSON Patch request bodies.
pub const JSON_PATCH_CONTENT_TYPE: &str = "application/json-patch+json";

vss_enum! {
    /// JSON Patch operation kind.
    pub enum Operation {
        Add = 0 => "add",
        Remove = 1 => "remove",
        Replace = 2 => "replace",
        Move = 3 => "move",
        Copy = 4 => "copy",
        Test = 5 => "test",
    }
}

/// One operation of a JSON Patch document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonPatchOperation {
    pub op: Operation,

    pub path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

/// An ordered list of patch operations.
pub type JsonPatchDocument = Vec<JsonPatchOperation>;

impl JsonPatchOperation {
    pub fn add(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            op: Operation::Add,
            path: path.into(),
            from: None,
            value: Some(value.into()),
        }
    }

    pub fn replace(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            op: Operation::Replace,
            path: path.into(),
            from: None,
            value: Some(value.into()),
        }
    }

    pub fn remove(path: impl Into<String>) -> Self {
        Self {
            op: Operation::Remove,
            path: path.into(),
            from: None,
            value: None,
        }
    }

    pub fn test(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            op: Operation::Test,
            path: path.into(),
            from: None,
            value: Some(value.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_document_shape() {
        let doc: JsonPatchDocument = vec![
            JsonPatchOperation::add("/ci.build", "42"),
            JsonPatchOperation::remove("/stale"),
        ];

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"op": "add", "path": "/ci.build", "value": "42"},
                {"op": "remove", "path": "/stale"}
            ])
        );
    }
}
