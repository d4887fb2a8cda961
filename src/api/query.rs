//
//  azure-devops-rest
//  api/query.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Query String Encoding
//!
//! Optional parameters of an operation are declared as a serializable struct
//! (`GetRefsOptions`, `GetReleasesOptions`, ...). This module turns such a struct
//! into query pairs following the server's conventions:
//!
//! | Field value | Query form |
//! |-------------|------------|
//! | `None` / `null` | omitted |
//! | `bool` | `true` / `false` |
//! | number, string, enum | its string form |
//! | timestamp | ISO-8601 (`chrono`'s serde form) |
//! | nested struct | flattened with dots: `searchCriteria.status=active` |
//! | sequence | the key repeated once per element |
//!
//! Fields the server expects as a single comma separated value use
//! [`comma_separated`] as their `serialize_with`.

use std::fmt::Display;

use serde::{Serialize, Serializer};
use serde_json::Value;

use super::common::ApiError;

/// Flattens a serializable parameter bag into ordered query pairs.
///
/// # Errors
///
/// Returns [`ApiError::InvalidQuery`] if `params` does not serialize to a JSON
/// object (or `null`).
pub fn to_query_pairs<T: Serialize + ?Sized>(params: &T) -> Result<Vec<(String, String)>, ApiError> {
    let value = serde_json::to_value(params)?;
    let mut pairs = Vec::new();

    match value {
        Value::Null => {}
        Value::Object(map) => {
            for (key, value) in map {
                flatten(&key, value, &mut pairs);
            }
        }
        other => {
            return Err(ApiError::InvalidQuery(format!(
                "expected a struct or map of parameters, got {other}"
            )))
        }
    }

    Ok(pairs)
}

fn flatten(key: &str, value: Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => pairs.push((key.to_string(), b.to_string())),
        Value::Number(n) => pairs.push((key.to_string(), n.to_string())),
        Value::String(s) => pairs.push((key.to_string(), s)),
        Value::Array(items) => {
            for item in items {
                flatten(key, item, pairs);
            }
        }
        Value::Object(map) => {
            for (child, value) in map {
                flatten(&format!("{key}.{child}"), value, pairs);
            }
        }
    }
}

/// Serializes an optional list as one comma separated string.
///
/// Used with `#[serde(serialize_with = "comma_separated", skip_serializing_if = "Option::is_none")]`
/// for parameters such as `tagFilter`, `propertyFilters` or `projectIds`.
pub fn comma_separated<S, T>(value: &Option<Vec<T>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Display,
{
    match value {
        Some(items) => serializer.collect_str(&join(items)),
        None => serializer.serialize_none(),
    }
}

pub(crate) fn join<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[derive(Serialize, Default)]
    #[serde(rename_all = "camelCase")]
    struct Criteria {
        #[serde(skip_serializing_if = "Option::is_none")]
        status: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        creator_id: Option<String>,
    }

    #[derive(Serialize, Default)]
    #[serde(rename_all = "camelCase")]
    struct Options {
        #[serde(skip_serializing_if = "Option::is_none")]
        search_criteria: Option<Criteria>,
        #[serde(rename = "$top", skip_serializing_if = "Option::is_none")]
        top: Option<i32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        include_links: Option<bool>,
        #[serde(
            serialize_with = "comma_separated",
            skip_serializing_if = "Option::is_none"
        )]
        tag_filter: Option<Vec<String>>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        ids: Vec<i32>,
        min_created_time: Option<chrono::DateTime<Utc>>,
    }

    fn find<'a>(pairs: &'a [(String, String)], key: &str) -> Vec<&'a str> {
        pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    #[test]
    fn test_empty_options_produce_no_pairs() {
        let pairs = to_query_pairs(&Options::default()).unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_nested_and_renamed_fields() {
        let options = Options {
            search_criteria: Some(Criteria {
                status: Some("active".into()),
                creator_id: None,
            }),
            top: Some(10),
            include_links: Some(true),
            ..Default::default()
        };

        let pairs = to_query_pairs(&options).unwrap();
        assert_eq!(find(&pairs, "searchCriteria.status"), vec!["active"]);
        assert!(find(&pairs, "searchCriteria.creatorId").is_empty());
        assert_eq!(find(&pairs, "$top"), vec!["10"]);
        assert_eq!(find(&pairs, "includeLinks"), vec!["true"]);
    }

    #[test]
    fn test_lists_and_timestamps() {
        let options = Options {
            tag_filter: Some(vec!["prod".into(), "hotfix".into()]),
            ids: vec![1, 2],
            min_created_time: Some(Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap()),
            ..Default::default()
        };

        let pairs = to_query_pairs(&options).unwrap();
        assert_eq!(find(&pairs, "tagFilter"), vec!["prod,hotfix"]);
        assert_eq!(find(&pairs, "ids"), vec!["1", "2"]);
        assert_eq!(find(&pairs, "minCreatedTime"), vec!["2024-05-01T08:30:00Z"]);
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(matches!(
            to_query_pairs(&42),
            Err(ApiError::InvalidQuery(_))
        ));
    }
}
