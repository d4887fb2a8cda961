//
//  azure-devops-rest
//  api/service_endpoint/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Service endpoints (service connections): credentials to external systems
//! that pipelines use, their types and execution history.

mod client;
mod models;

pub use client::*;
pub use models::*;
