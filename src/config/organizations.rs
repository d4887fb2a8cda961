//
//  azure-devops-rest
//  config/organizations.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Organization URL normalization
//!
//! | Input | Canonical URL |
//! |-------|---------------|
//! | `contoso` | `https://dev.azure.com/contoso` |
//! | `dev.azure.com/contoso` | `https://dev.azure.com/contoso` |
//! | `https://dev.azure.com/contoso/Fabrikam/` | `https://dev.azure.com/contoso` |
//! | `https://contoso.visualstudio.com/` | `https://contoso.visualstudio.com` |
//! | `https://tfs.corp:8080/tfs/DefaultCollection/` | `https://tfs.corp:8080/tfs/DefaultCollection` |

use anyhow::{bail, Context, Result};
use url::Url;

pub const SERVICES_HOST: &str = "dev.azure.com";

pub const LEGACY_HOST_SUFFIX: &str = ".visualstudio.com";

/// Turns an organization name or URL into its canonical URL, without a
/// trailing slash.
///
/// # Errors
///
/// Fails on empty input, unparsable URLs, non-HTTP schemes and
/// `dev.azure.com` URLs that name no organization.
pub fn normalize_organization_url(input: &str) -> Result<String> {
    let input = input.trim().trim_end_matches('/');
    if input.is_empty() {
        bail!("Organization must not be empty");
    }

    let candidate = if input.contains("://") {
        input.to_string()
    } else if input.contains('/') || input.contains('.') {
        format!("https://{input}")
    } else {
        format!("https://{SERVICES_HOST}/{input}")
    };

    let url = Url::parse(&candidate).with_context(|| format!("Invalid organization URL: {input}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("Unsupported scheme in organization URL: {}", url.scheme());
    }
    let host = url
        .host_str()
        .with_context(|| format!("Organization URL has no host: {input}"))?
        .to_ascii_lowercase();

    if host == SERVICES_HOST {
        let organization = url
            .path_segments()
            .and_then(|mut segments| segments.find(|s| !s.is_empty()))
            .with_context(|| format!("No organization in URL: {input}"))?;
        return Ok(format!("https://{SERVICES_HOST}/{organization}"));
    }

    if host.ends_with(LEGACY_HOST_SUFFIX) {
        return Ok(format!("https://{host}"));
    }

    let port = url.port().map(|p| format!(":{p}")).unwrap_or_default();
    let path = url.path().trim_end_matches('/');
    Ok(format!("{}://{host}{port}{path}", url.scheme()))
}

/// Short organization name used as the key in the config file.
pub fn organization_name(url: &str) -> Option<String> {
    let url = Url::parse(url).ok()?;
    let host = url.host_str()?;

    if host.eq_ignore_ascii_case(SERVICES_HOST) {
        return url
            .path_segments()?
            .find(|s| !s.is_empty())
            .map(str::to_string);
    }
    if let Some(name) = host.strip_suffix(LEGACY_HOST_SUFFIX) {
        return Some(name.to_string());
    }

    url.path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .map(str::to_string)
        .or_else(|| Some(host.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_bare_name() {
        assert_eq!(
            normalize_organization_url("contoso").unwrap(),
            "https://dev.azure.com/contoso"
        );
    }

    #[test]
    fn test_normalize_services_urls() {
        for input in [
            "dev.azure.com/contoso",
            "https://dev.azure.com/contoso/",
            "https://dev.azure.com/contoso/Fabrikam",
            "  https://DEV.azure.com/contoso  ",
        ] {
            assert_eq!(
                normalize_organization_url(input).unwrap(),
                "https://dev.azure.com/contoso",
                "input: {input}"
            );
        }
    }

    #[test]
    fn test_normalize_legacy_url() {
        assert_eq!(
            normalize_organization_url("https://contoso.visualstudio.com/").unwrap(),
            "https://contoso.visualstudio.com"
        );
        assert_eq!(
            normalize_organization_url("contoso.visualstudio.com").unwrap(),
            "https://contoso.visualstudio.com"
        );
    }

    #[test]
    fn test_normalize_server_collection() {
        assert_eq!(
            normalize_organization_url("https://tfs.corp:8080/tfs/DefaultCollection/").unwrap(),
            "https://tfs.corp:8080/tfs/DefaultCollection"
        );
    }

    #[test]
    fn test_normalize_rejects_bad_input() {
        assert!(normalize_organization_url("").is_err());
        assert!(normalize_organization_url("https://dev.azure.com/").is_err());
        assert!(normalize_organization_url("ftp://dev.azure.com/contoso").is_err());
    }

    #[test]
    fn test_organization_name() {
        assert_eq!(
            organization_name("https://dev.azure.com/contoso").as_deref(),
            Some("contoso")
        );
        assert_eq!(
            organization_name("https://contoso.visualstudio.com").as_deref(),
            Some("contoso")
        );
        assert_eq!(
            organization_name("https://tfs.corp/tfs/DefaultCollection").as_deref(),
            Some("DefaultCollection")
        );
    }
}
