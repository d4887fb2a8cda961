//
//  azure-devops-rest
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Azure DevOps REST API clients
//!
//! One client per service area, all delegating to the shared
//! [`RestClientBase`] request primitive.
//!
//! | Client | Area | Resource area id |
//! |--------|------|------------------|
//! | [`git::GitClient`] | Repositories, refs, commits, pushes, pull requests | `4e080c62-fa21-4fbc-8fef-2a10a2b38049` |
//! | [`release::ReleaseClient`] | Release definitions, releases, approvals, deployments | `efc2f575-36ef-48e9-b672-0c6fb4a48ac5` |
//! | [`service_endpoint::ServiceEndpointClient`] | Service connections | `1814ab31-2f4f-4a9f-8761-f4d77dc5a5d7` |
//! | [`service_hooks::ServiceHooksClient`] | Publishers, consumers, subscriptions | none |
//! | [`wiki::WikiClient`] | Wikis and wiki pages | `bf7d82a0-8aa5-4613-94ef-6172a5ea01f3` |
//! | [`work_item_tracking_process::WorkItemTrackingProcessClient`] | Inherited processes | `5264459e-e5e0-4bd8-b118-0985e68a4ec5` |

/// Shared request primitive and connection.
pub mod client;

/// Types shared by every service area.
pub mod common;

/// Form input descriptors used by service endpoints and service hooks.
pub mod form_input;

/// Git repositories, refs, commits, pushes and pull requests.
pub mod git;

/// Query string encoding of option structs.
pub mod query;

/// Release management.
pub mod release;

/// Request descriptors.
pub mod request;

/// Route template resolution.
pub mod route;

/// Service endpoints (service connections).
pub mod service_endpoint;

/// Service hooks: publishers, consumers and subscriptions.
pub mod service_hooks;

/// In-memory transport for tests.
pub mod testing;

/// Pluggable HTTP transport.
pub mod transport;

/// Wikis and wiki pages.
pub mod wiki;

/// Inherited process customization.
pub mod work_item_tracking_process;

pub use client::{Connection, RestClientBase, ServiceClient};
pub use common::{ApiError, PagedList};
pub use request::RestRequest;
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
