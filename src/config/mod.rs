//
//  azure-devops-rest
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration
//!
//! The `ado` tool keeps its settings in a TOML file under the platform config
//! directory (`~/.config/ado/config.toml` on Linux). Setting `ADO_CONFIG_DIR`
//! moves the whole directory, which is how tests isolate themselves.
//!
//! ## Example Configuration File
//!
//! ```toml
//! [core]
//! default_organization = "contoso"
//! pager = "less"
//! output = "table"
//!
//! [organizations.contoso]
//! url = "https://dev.azure.com/contoso"
//! default_project = "Fabrikam"
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use azure_devops_rest::config::Config;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut config = Config::load()?;
//! config.add_organization("contoso", Some("Fabrikam".into()))?;
//! config.save()?;
//!
//! let target = config.resolve_target(None, None)?;
//! println!("{} / {:?}", target.url, target.project);
//! # Ok(())
//! # }
//! ```
//!
//! Tokens are never written here; see [`crate::auth::KeyringStore`].

mod file;
mod organizations;

pub use file::*;
pub use organizations::*;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "ADO_CONFIG_DIR";

const CONFIG_FILE: &str = "config.toml";

/// Keys accepted by [`Config::get`] and [`Config::set`].
pub const CONFIG_KEYS: [&str; 3] = ["default_organization", "pager", "output"];

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub core: CoreConfig,

    #[serde(default)]
    pub organizations: HashMap<String, OrganizationConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_organization: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pager: Option<String>,

    /// `table` or `json`.
    #[serde(default = "default_output")]
    pub output: String,
}

fn default_output() -> String {
    "table".to_string()
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            default_organization: None,
            pager: None,
            output: default_output(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OrganizationConfig {
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_project: Option<String>,
}

/// Organization and project a command runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub url: String,
    pub project: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads from an explicit path; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        match read_config_file(path)? {
            Some(content) => toml::from_str(&content)
                .with_context(|| format!("Invalid config file {}", path.display())),
            None => Ok(Self::default()),
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().to_path_buf())
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "default_organization" => self.core.default_organization.clone(),
            "pager" => self.core.pager.clone(),
            "output" => Some(self.core.output.clone()),
            _ => None,
        }
    }

    /// Sets a core key. Returns `false` for unknown keys.
    pub fn set(&mut self, key: &str, value: String) -> bool {
        match key {
            "default_organization" => self.core.default_organization = Some(value),
            "pager" => self.core.pager = Some(value),
            "output" => self.core.output = value,
            _ => return false,
        }
        true
    }

    pub fn organization(&self, name: &str) -> Option<&OrganizationConfig> {
        self.organizations.get(name)
    }

    /// Registers an organization under its short name and returns that name.
    ///
    /// The first organization added becomes the default.
    pub fn add_organization(
        &mut self,
        organization: &str,
        default_project: Option<String>,
    ) -> Result<String> {
        let url = normalize_organization_url(organization)?;
        let name = organization_name(&url).unwrap_or_else(|| url.clone());

        let entry = self.organizations.entry(name.clone()).or_default();
        entry.url = url;
        if default_project.is_some() {
            entry.default_project = default_project;
        }
        if self.core.default_organization.is_none() {
            self.core.default_organization = Some(name.clone());
        }
        Ok(name)
    }

    pub fn remove_organization(&mut self, name: &str) -> Option<OrganizationConfig> {
        let removed = self.organizations.remove(name);
        if self.core.default_organization.as_deref() == Some(name) {
            self.core.default_organization = None;
        }
        removed
    }

    /// Picks the organization URL and project for a command.
    ///
    /// An explicit organization (flag or `ADO_ORGANIZATION`) may be a
    /// configured short name or anything [`normalize_organization_url`]
    /// accepts. The project falls back to the organization's
    /// `default_project`.
    ///
    /// # Errors
    ///
    /// Fails when no organization is given and none is configured as default.
    pub fn resolve_target(
        &self,
        organization: Option<&str>,
        project: Option<&str>,
    ) -> Result<Target> {
        let name = organization
            .map(str::to_string)
            .or_else(|| self.core.default_organization.clone())
            .context(
                "No organization configured. Pass --org, set ADO_ORGANIZATION or run 'ado auth login'",
            )?;

        let (url, default_project) = match self.organization(&name) {
            Some(org) => (org.url.clone(), org.default_project.clone()),
            None => {
                let url = normalize_organization_url(&name)?;
                let default_project = organization_name(&url)
                    .and_then(|short| self.organization(&short))
                    .and_then(|org| org.default_project.clone());
                (url, default_project)
            }
        };

        Ok(Target {
            url,
            project: project.map(str::to_string).or(default_project),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.core.output, "table");
        assert!(config.organizations.is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set("pager", "less".into());
        config
            .add_organization("https://dev.azure.com/contoso/", Some("Fabrikam".into()))
            .unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.get("pager").as_deref(), Some("less"));
        assert_eq!(loaded.get("default_organization").as_deref(), Some("contoso"));
        let org = loaded.organization("contoso").unwrap();
        assert_eq!(org.url, "https://dev.azure.com/contoso");
        assert_eq!(org.default_project.as_deref(), Some("Fabrikam"));
    }

    #[test]
    fn test_parse_file() {
        let config: Config = toml::from_str(
            r#"
            [core]
            default_organization = "contoso"

            [organizations.contoso]
            url = "https://dev.azure.com/contoso"
            default_project = "Fabrikam"
            "#,
        )
        .unwrap();

        assert_eq!(config.core.output, "table");
        assert_eq!(
            config.organization("contoso").unwrap().default_project.as_deref(),
            Some("Fabrikam")
        );
    }

    #[test]
    fn test_set_unknown_key() {
        let mut config = Config::default();
        assert!(!config.set("editor", "vim".into()));
        assert!(config.set("output", "json".into()));
        assert_eq!(config.get("output").as_deref(), Some("json"));
        assert_eq!(config.get("editor"), None);
    }

    #[test]
    fn test_resolve_target() {
        let mut config = Config::default();
        config.add_organization("contoso", Some("Fabrikam".into())).unwrap();

        let target = config.resolve_target(None, None).unwrap();
        assert_eq!(
            target,
            Target {
                url: "https://dev.azure.com/contoso".into(),
                project: Some("Fabrikam".into()),
            }
        );

        let target = config.resolve_target(None, Some("Other")).unwrap();
        assert_eq!(target.project.as_deref(), Some("Other"));

        let target = config
            .resolve_target(Some("https://fabrikam.visualstudio.com"), None)
            .unwrap();
        assert_eq!(target.url, "https://fabrikam.visualstudio.com");
        assert_eq!(target.project, None);
    }

    #[test]
    fn test_resolve_target_without_organization() {
        assert!(Config::default().resolve_target(None, None).is_err());
    }

    #[test]
    fn test_remove_default_organization() {
        let mut config = Config::default();
        config.add_organization("contoso", None).unwrap();
        assert!(config.remove_organization("contoso").is_some());
        assert_eq!(config.core.default_organization, None);
    }
}
