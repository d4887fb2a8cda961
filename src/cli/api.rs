//
//  azure-devops-rest
//  cli/api.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Direct API access command
//!
//! Sends one request (or a chain of continuation requests) to any route
//! under the organization, using the same request primitive as the typed
//! clients. `{project}` in the route is filled from `--project`.
//!
//! ## Examples
//!
//! ```bash
//! # List repositories of the default project
//! ado api '{project}/_apis/git/repositories'
//!
//! # Create a wiki page comment with POST
//! ado api -X POST '{project}/_apis/wit/workItems/42/comments' \
//!     --api-version 7.1-preview.4 -F text="Looks good"
//!
//! # Release routes live on another host; resolve it through the resource area
//! ado api --area efc2f575-36ef-48e9-b672-0c6fb4a48ac5 '{project}/_apis/release/releases'
//!
//! # Follow x-ms-continuationtoken until the last page
//! ado api '_apis/projects' --paginate
//! ```

use std::fs;

use anyhow::{bail, Context, Result};
use clap::Args;
use console::style;
use reqwest::Method;
use serde_json::{Map, Value};
use url::Url;

use crate::api::common::CONTINUATION_TOKEN_HEADER;
use crate::api::{RestClientBase, RestRequest};
use crate::output::write_json_lines;

use super::{GlobalOptions, Session};

const MAX_PAGES: usize = 100;

/// Make direct API requests
#[derive(Args, Debug)]
pub struct ApiCommand {
    /// Route relative to the organization, e.g. {project}/_apis/git/repositories
    pub route: String,

    /// HTTP method (GET, POST, PUT, PATCH, DELETE)
    #[arg(long, short = 'X', default_value = "GET")]
    pub method: String,

    /// API version sent in the Accept header
    #[arg(long, default_value = "7.1")]
    pub api_version: String,

    /// Request headers as 'Name: Value' (can be repeated)
    #[arg(long, short = 'H', action = clap::ArgAction::Append)]
    pub header: Vec<String>,

    /// Fields as key=value; query parameters for GET and DELETE, JSON body
    /// members otherwise (nested with dots, values parsed as JSON when possible)
    #[arg(long, short = 'F', action = clap::ArgAction::Append)]
    pub field: Vec<String>,

    /// Read the JSON request body from a file (- for stdin)
    #[arg(long, short = 'i')]
    pub input: Option<String>,

    /// Resource area id whose location is used instead of the organization URL
    #[arg(long)]
    pub area: Option<String>,

    /// Follow continuation tokens and print every item, one per line
    #[arg(long)]
    pub paginate: bool,
}

impl ApiCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let session = Session::open(global).await?;
        let method = parse_method(&self.method)?;

        let base_url = match &self.area {
            Some(area) => {
                let area = session.connection.get_resource_area(area).await?;
                Url::parse(&area.location_url)
                    .with_context(|| format!("Invalid area location: {}", area.location_url))?
            }
            None => session.connection.organization_url().clone(),
        };
        let base = RestClientBase::new(base_url, session.connection.transport());

        let request = self.build_request(method, session.target.project.as_deref())?;

        if self.paginate {
            self.execute_paginated(&base, request).await
        } else {
            let response = base.send_raw(request).await?;
            print_body(&response.text())
        }
    }

    fn build_request(&self, method: Method, project: Option<&str>) -> Result<RestRequest> {
        let route = self.route.trim_start_matches('/');
        let (path, query) = route.split_once('?').unwrap_or((route, ""));

        let mut request = RestRequest::new(method.clone(), path, &self.api_version)
            .route_opt("project", project);

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            request = request.query_param(&key, value);
        }

        for header in &self.header {
            let (name, value) = header
                .split_once(':')
                .with_context(|| format!("Invalid header format: {header}. Expected 'Name: Value'"))?;
            request = request.header(name.trim(), value.trim());
        }

        if let Some(body) = self.read_input()? {
            return Ok(request.json(&body)?);
        }

        if self.field.is_empty() {
            return Ok(request);
        }

        if method == Method::GET || method == Method::DELETE {
            for field in &self.field {
                let (key, value) = split_field(field)?;
                request = request.query_param(key, value);
            }
            Ok(request)
        } else {
            let mut body = Map::new();
            for field in &self.field {
                let (key, value) = split_field(field)?;
                set_nested_value(&mut body, key, parse_value(value));
            }
            Ok(request.json(&Value::Object(body))?)
        }
    }

    fn read_input(&self) -> Result<Option<Value>> {
        let Some(input) = &self.input else {
            return Ok(None);
        };
        let content = if input == "-" {
            let mut buffer = String::new();
            std::io::Read::read_to_string(&mut std::io::stdin(), &mut buffer)?;
            buffer
        } else {
            fs::read_to_string(input).with_context(|| format!("Failed to read {input}"))?
        };
        Ok(Some(serde_json::from_str(&content).context("Input is not valid JSON")?))
    }

    async fn execute_paginated(&self, base: &RestClientBase, request: RestRequest) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let mut next = request.clone();

        for page in 1..=MAX_PAGES {
            let response = base.send_raw(next.clone()).await?;
            let json: Value = serde_json::from_slice(&response.body)
                .context("Paginated responses must be JSON")?;
            write_json_lines(&mut out, &page_items(json))?;

            let token = response
                .header(CONTINUATION_TOKEN_HEADER)
                .filter(|t| !t.is_empty());
            match token {
                Some(token) => next = request.clone().query_param("continuationToken", token),
                None => return Ok(()),
            }

            if page == MAX_PAGES {
                eprintln!("{} Stopping at {} pages", style("!").yellow(), MAX_PAGES);
            }
        }
        Ok(())
    }
}

fn parse_method(method: &str) -> Result<Method> {
    match method.to_uppercase().as_str() {
        "GET" => Ok(Method::GET),
        "POST" => Ok(Method::POST),
        "PUT" => Ok(Method::PUT),
        "PATCH" => Ok(Method::PATCH),
        "DELETE" => Ok(Method::DELETE),
        "HEAD" => Ok(Method::HEAD),
        _ => bail!("Unsupported HTTP method: {}", method),
    }
}

fn split_field(field: &str) -> Result<(&str, &str)> {
    field
        .split_once('=')
        .with_context(|| format!("Invalid field format: {field}. Expected key=value"))
}

fn parse_value(value: &str) -> Value {
    match value {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" => Value::Null,
        _ => value
            .parse::<i64>()
            .map(Value::from)
            .ok()
            .or_else(|| {
                (value.starts_with('[') || value.starts_with('{'))
                    .then(|| serde_json::from_str(value).ok())
                    .flatten()
            })
            .unwrap_or_else(|| Value::String(value.to_string())),
    }
}

fn set_nested_value(obj: &mut Map<String, Value>, key: &str, value: Value) {
    match key.split_once('.') {
        None => {
            obj.insert(key.to_string(), value);
        }
        Some((first, rest)) => {
            let entry = obj
                .entry(first.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            if let Value::Object(nested) = entry {
                set_nested_value(nested, rest, value);
            }
        }
    }
}

/// Items of one page: the `value` member of a collection wrapper, a bare
/// array, or the whole document.
fn page_items(json: Value) -> Vec<Value> {
    match json {
        Value::Object(mut map) if map.contains_key("value") => match map.remove("value") {
            Some(Value::Array(items)) => items,
            Some(other) => vec![other],
            None => Vec::new(),
        },
        Value::Array(items) => items,
        other => vec![other],
    }
}

fn print_body(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Ok(());
    }
    match serde_json::from_str::<Value>(text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn command(route: &str, method: &str, fields: &[&str]) -> ApiCommand {
        ApiCommand {
            route: route.into(),
            method: method.into(),
            api_version: "7.1".into(),
            header: vec!["X-TFS-FedAuthRedirect: Suppress".into()],
            field: fields.iter().map(|f| f.to_string()).collect(),
            input: None,
            area: None,
            paginate: false,
        }
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("42"), json!(42));
        assert_eq!(parse_value("true"), json!(true));
        assert_eq!(parse_value("[1,2]"), json!([1, 2]));
        assert_eq!(parse_value("{broken"), json!("{broken"));
        assert_eq!(parse_value("main"), json!("main"));
    }

    #[test]
    fn test_nested_fields() {
        let mut body = Map::new();
        set_nested_value(&mut body, "repository.id", json!("r1"));
        set_nested_value(&mut body, "repository.name", json!("Fabrikam"));
        set_nested_value(&mut body, "title", json!("Fix"));

        assert_eq!(
            Value::Object(body),
            json!({"repository": {"id": "r1", "name": "Fabrikam"}, "title": "Fix"})
        );
    }

    #[test]
    fn test_get_fields_become_query() {
        let base = Url::parse("https://dev.azure.com/contoso").unwrap();
        let request = command("/{project}/_apis/git/repositories?includeHidden=true", "get", &["$top=5"])
            .build_request(Method::GET, Some("Fabrikam"))
            .unwrap();

        let http = request.into_http(&base).unwrap();
        assert_eq!(http.url.path(), "/contoso/Fabrikam/_apis/git/repositories");
        let pairs: Vec<(String, String)> = http.url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("includeHidden".into(), "true".into())));
        assert!(pairs.contains(&("$top".into(), "5".into())));
        assert_eq!(http.header("x-tfs-fedauthredirect"), Some("Suppress"));
        assert_eq!(http.header("accept"), Some("application/json;api-version=7.1"));
    }

    #[test]
    fn test_post_fields_become_body() {
        let base = Url::parse("https://dev.azure.com/contoso").unwrap();
        let request = command("_apis/projects", "POST", &["name=Fabrikam", "capabilities.versioncontrol.sourceControlType=Git"])
            .build_request(Method::POST, None)
            .unwrap();

        let http = request.into_http(&base).unwrap();
        assert_eq!(http.url.path(), "/contoso/_apis/projects");
        assert_eq!(
            http.json_body().unwrap(),
            json!({"name": "Fabrikam", "capabilities": {"versioncontrol": {"sourceControlType": "Git"}}})
        );
    }

    #[test]
    fn test_page_items() {
        assert_eq!(page_items(json!({"count": 2, "value": [1, 2]})), vec![json!(1), json!(2)]);
        assert_eq!(page_items(json!([3])), vec![json!(3)]);
        assert_eq!(page_items(json!({"id": 1})), vec![json!({"id": 1})]);
    }

    #[test]
    fn test_parse_method() {
        assert_eq!(parse_method("patch").unwrap(), Method::PATCH);
        assert!(parse_method("TRACE").is_err());
    }
}
