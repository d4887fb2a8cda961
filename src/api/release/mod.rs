//
//  azure-devops-rest
//  api/release/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Release Management
//!
//! Release definitions, releases and their stages, approvals, gates, manual
//! interventions, deployments and logs.
//!
//! The release service lives on its own host (`vsrm.dev.azure.com`); use
//! [`Connection::resolve_client`](crate::api::Connection::resolve_client) to
//! root the client there.
//!
//! ## Paging
//!
//! | Operation | Token option |
//! |-----------|--------------|
//! | [`ReleaseClient::get_release_definitions`] | `continuation_token: Option<String>` |
//! | [`ReleaseClient::get_releases`] | `continuation_token: Option<i32>` |
//! | [`ReleaseClient::get_approvals`] | `continuation_token: Option<i32>` |
//! | [`ReleaseClient::get_deployments`] | `continuation_token: Option<i32>` |

mod client;
mod models;
mod options;

pub use client::ReleaseClient;
pub use models::*;
pub use options::*;
