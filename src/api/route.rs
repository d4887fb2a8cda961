//
//  azure-devops-rest
//  api/route.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Route Templates
//!
//! Every operation is addressed by a route template relative to the service
//! root, for example:
//!
//! ```text
//! {project}/_apis/git/repositories/{repositoryId}/Items/{*path}
//! ```
//!
//! ## Rules
//!
//! | Segment | Resolution |
//! |---------|------------|
//! | literal (`_apis`) | kept as-is |
//! | `{name}` | replaced by the route value, encoded as one path segment |
//! | `{*name}` | wildcard: the value's `/` separators are kept |
//! | any placeholder without a value | the whole segment is dropped |
//!
//! Dropping unresolved segments is what lets optional route values (such as
//! `{project}`) and "list" variants (which never supply the trailing id
//! placeholder) share a single template with their "get one" counterpart.
//!
//! Placeholder names are matched case-insensitively.

/// Route values supplied for one request, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteValues(Vec<(String, String)>);

impl RouteValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a value, replacing any earlier value with the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| n.eq_ignore_ascii_case(&name)) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Looks up a value; empty values count as missing.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
            .filter(|v| !v.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Part<'a> {
    Literal(&'a str),
    Param { name: &'a str, wildcard: bool },
}

/// A parsed route template.
#[derive(Debug, Clone)]
pub struct RouteTemplate<'a> {
    segments: Vec<Vec<Part<'a>>>,
}

impl<'a> RouteTemplate<'a> {
    pub fn parse(template: &'a str) -> Self {
        let segments = template
            .split('/')
            .filter(|s| !s.is_empty())
            .map(parse_segment)
            .collect();
        Self { segments }
    }

    /// Names of every placeholder in the template, in order.
    pub fn placeholders(&self) -> Vec<&'a str> {
        self.segments
            .iter()
            .flatten()
            .filter_map(|part| match part {
                Part::Param { name, .. } => Some(*name),
                Part::Literal(_) => None,
            })
            .collect()
    }

    /// Resolves the template into unencoded path segments.
    ///
    /// Each returned segment is meant to be percent-encoded on its own (see
    /// [`url::PathSegmentsMut::extend`]); wildcard values expand into several
    /// segments so their separators survive encoding. A wildcard value loses
    /// its leading and trailing `/` but keeps empty inner segments.
    pub fn resolve(&self, values: &RouteValues) -> Vec<String> {
        let mut resolved = Vec::new();

        for parts in &self.segments {
            if let [Part::Param {
                name,
                wildcard: true,
            }] = parts.as_slice()
            {
                // Only the outer separators are trimmed; inner empty segments stay.
                if let Some(value) = values.get(name) {
                    let trimmed = value.trim_matches('/');
                    if !trimmed.is_empty() {
                        resolved.extend(trimmed.split('/').map(str::to_string));
                    }
                }
                continue;
            }

            let mut segment = String::new();
            let mut complete = true;
            for part in parts {
                match part {
                    Part::Literal(text) => segment.push_str(text),
                    Part::Param { name, .. } => match values.get(name) {
                        Some(value) => segment.push_str(value),
                        None => {
                            complete = false;
                            break;
                        }
                    },
                }
            }

            if complete && !segment.is_empty() {
                resolved.push(segment);
            }
        }

        resolved
    }
}

fn parse_segment(segment: &str) -> Vec<Part<'_>> {
    let mut parts = Vec::new();
    let mut rest = segment;

    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}').map(|i| open + i) else {
            break;
        };
        if open > 0 {
            parts.push(Part::Literal(&rest[..open]));
        }
        let inner = &rest[open + 1..close];
        let (name, wildcard) = match inner.strip_prefix('*') {
            Some(name) => (name, true),
            None => (inner, false),
        };
        parts.push(Part::Param { name, wildcard });
        rest = &rest[close + 1..];
    }

    if !rest.is_empty() {
        parts.push(Part::Literal(rest));
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEMS: &str = "{project}/_apis/git/repositories/{repositoryId}/Items/{*path}";

    fn values(pairs: &[(&str, &str)]) -> RouteValues {
        let mut values = RouteValues::new();
        for (name, value) in pairs {
            values.insert(*name, *value);
        }
        values
    }

    #[test]
    fn test_missing_project_segment_is_dropped() {
        let segments = RouteTemplate::parse(ITEMS)
            .resolve(&values(&[("repositoryId", "abc"), ("path", "/src/file.ts")]));

        assert_eq!(
            segments,
            vec!["_apis", "git", "repositories", "abc", "Items", "src", "file.ts"]
        );
    }

    #[test]
    fn test_list_variant_drops_unresolved_id() {
        let template = "{project}/_apis/git/repositories/{repositoryId}/pullRequests/{pullRequestId}/conflicts/{conflictId}";
        let segments = RouteTemplate::parse(template).resolve(&values(&[
            ("project", "Fabrikam"),
            ("repositoryId", "r1"),
            ("pullRequestId", "7"),
        ]));

        assert_eq!(segments.last().map(String::as_str), Some("conflicts"));
        assert_eq!(segments.first().map(String::as_str), Some("Fabrikam"));
    }

    #[test]
    fn test_names_match_case_insensitively() {
        let segments = RouteTemplate::parse("_apis/hooks/subscriptions/{subscriptionId}")
            .resolve(&values(&[("SubscriptionID", "s-1")]));

        assert_eq!(segments, vec!["_apis", "hooks", "subscriptions", "s-1"]);
    }

    #[test]
    fn test_plain_values_stay_one_segment() {
        let segments = RouteTemplate::parse("{project}/_apis/wiki/wikis/{wikiIdentifier}")
            .resolve(&values(&[("wikiIdentifier", "a/b")]));

        assert_eq!(segments, vec!["_apis", "wiki", "wikis", "a/b"]);
    }

    #[test]
    fn test_literal_and_param_in_one_segment() {
        let template = RouteTemplate::parse("_apis/things/v{version}.json");

        assert_eq!(
            template.resolve(&values(&[("version", "2")])),
            vec!["_apis", "things", "v2.json"]
        );
        assert_eq!(template.resolve(&RouteValues::new()), vec!["_apis", "things"]);
        assert_eq!(template.placeholders(), vec!["version"]);
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let segments = RouteTemplate::parse(ITEMS)
            .resolve(&values(&[("project", ""), ("repositoryId", "abc")]));

        assert_eq!(segments, vec!["_apis", "git", "repositories", "abc", "Items"]);
    }

    #[test]
    fn test_wildcard_keeps_inner_empty_segments() {
        let segments = RouteTemplate::parse(ITEMS)
            .resolve(&values(&[("repositoryId", "abc"), ("path", "/a//b/c d.ts/")]));

        assert_eq!(
            segments,
            vec!["_apis", "git", "repositories", "abc", "Items", "a", "", "b", "c d.ts"]
        );
    }

    #[test]
    fn test_root_wildcard_adds_no_segment() {
        let segments = RouteTemplate::parse(ITEMS)
            .resolve(&values(&[("repositoryId", "abc"), ("path", "/")]));

        assert_eq!(segments, vec!["_apis", "git", "repositories", "abc", "Items"]);
    }
}
