//
//  azure-devops-rest
//  api/service_hooks/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Service hooks: publishers, consumers, subscriptions and notifications.
//!
//! # Example
//!
//! ```rust,no_run
//! use azure_devops_rest::api::service_hooks::{ListSubscriptionsOptions, ServiceHooksClient};
//! use azure_devops_rest::api::Connection;
//!
//! # async fn run() -> Result<(), azure_devops_rest::api::ApiError> {
//! let connection = Connection::with_pat("https://dev.azure.com/contoso", "my-pat")?;
//! let hooks: ServiceHooksClient = connection.client();
//!
//! let options = ListSubscriptionsOptions {
//!     publisher_id: Some("tfs".into()),
//!     ..Default::default()
//! };
//! for subscription in hooks.list_subscriptions(&options).await? {
//!     println!("{:?} -> {:?}", subscription.event_type, subscription.consumer_id);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod models;

pub use client::*;
pub use models::*;
