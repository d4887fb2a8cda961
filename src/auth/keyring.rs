//
//  azure-devops-rest
//  auth/keyring.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Secure Credential Storage
//!
//! Tokens are kept in the platform keyring (macOS Keychain, Secret Service on
//! Linux, Windows Credential Manager):
//!
//! | Keyring field | Value |
//! |---------------|-------|
//! | Service | `azure-devops-rest` |
//! | Account | canonical organization URL, e.g. `https://dev.azure.com/contoso` |
//! | Secret | the personal access token |
//!
//! ## Example
//!
//! ```rust,no_run
//! use azure_devops_rest::auth::KeyringStore;
//!
//! fn remember(token: &str) -> anyhow::Result<()> {
//!     let store = KeyringStore::new();
//!     store.store("https://dev.azure.com/contoso", token)?;
//!     assert!(store.get("https://dev.azure.com/contoso")?.is_some());
//!     Ok(())
//! }
//! ```

use anyhow::Result;
use keyring::Entry;
use tracing::debug;

const SERVICE_NAME: &str = "azure-devops-rest";

pub struct KeyringStore {
    service: String,
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyringStore {
    pub fn new() -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
        }
    }

    /// A store under a different service name, used to keep test runs away
    /// from real credentials.
    pub fn with_service(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn store(&self, organization_url: &str, token: &str) -> Result<()> {
        let entry = Entry::new(&self.service, organization_url)?;
        entry.set_password(token)?;
        debug!(organization_url, "Stored token in keyring");
        Ok(())
    }

    pub fn get(&self, organization_url: &str) -> Result<Option<String>> {
        let entry = Entry::new(&self.service, organization_url)?;
        match entry.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Removes the token; a missing entry is not an error.
    pub fn delete(&self, organization_url: &str) -> Result<()> {
        let entry = Entry::new(&self.service, organization_url)?;
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_service_name() {
        assert_eq!(KeyringStore::default().service(), "azure-devops-rest");
        assert_eq!(KeyringStore::with_service("ado-test").service(), "ado-test");
    }
}
