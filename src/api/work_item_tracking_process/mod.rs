//
//  azure-devops-rest
//  api/work_item_tracking_process/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Work Item Tracking Process
//!
//! Customization of inherited processes.
//!
//! | Resource | Identified by |
//! |----------|---------------|
//! | Process | type id (GUID) |
//! | Work item type | process id + reference name (`Agile2.Bug`) |
//! | Field | work item type + field reference name (`Custom.Team`) |
//! | State | work item type + state id |
//! | Rule | work item type + rule id |
//! | Behavior | process id + behavior reference name |
//! | Picklist | list id (organization wide) |
//!
//! ```rust,no_run
//! use azure_devops_rest::api::work_item_tracking_process::{GetWorkItemTypeExpand, WorkItemTrackingProcessClient};
//! use azure_devops_rest::api::Connection;
//!
//! # async fn run() -> Result<(), azure_devops_rest::api::ApiError> {
//! let connection = Connection::with_pat("https://dev.azure.com/contoso", "my-pat")?;
//! let processes: WorkItemTrackingProcessClient = connection.resolve_client().await?;
//!
//! for process in processes.get_list_of_processes(None).await? {
//!     let Some(id) = process.type_id else { continue };
//!     let types = processes
//!         .get_process_work_item_types(&id, Some(GetWorkItemTypeExpand::States))
//!         .await?;
//!     println!("{:?}: {} work item types", process.name, types.len());
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod layout;
mod models;

pub use client::*;
pub use layout::*;
pub use models::*;
