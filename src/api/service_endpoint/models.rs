//
//  azure-devops-rest
//  api/service_endpoint/models.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::common::{vss_enum, IdentityRef, ProjectReference};
use crate::api::form_input::InputDescriptor;

vss_enum! {
    /// Permission the caller must hold on the endpoints returned.
    pub enum ServiceEndpointActionFilter {
        None = 0 => "none",
        Manage = 2 => "manage",
        Use = 16 => "use",
        View = 32 => "view",
    }
}

vss_enum! {
    pub enum ServiceEndpointExecutionResult {
        Succeeded = 0 => "succeeded",
        SucceededWithIssues = 1 => "succeededWithIssues",
        Failed = 2 => "failed",
        Canceled = 3 => "canceled",
        Skipped = 4 => "skipped",
        Abandoned = 5 => "abandoned",
    }
}

vss_enum! {
    pub enum ServiceEndpointUpdateOperation {
        UpdateServiceEndpoint = 0 => "updateServiceEndpoint",
        RefreshAuthenticationParameters = 1 => "refreshAuthenticationParameters",
    }
}

/// Credentials of an endpoint: a scheme (`UsernamePassword`, `Token`,
/// `ServicePrincipal`, ...) and its parameters.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EndpointAuthorization {
    pub scheme: String,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub parameters: HashMap<String, String>,
}

/// Binds an endpoint into a project under a project-local name.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEndpointProjectReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_reference: Option<ProjectReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEndpoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub endpoint_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<EndpointAuthorization>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<HashMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<IdentityRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_ready: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_shared: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_status: Option<Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub service_endpoint_project_references: Vec<ServiceEndpointProjectReference>,
}

/// Body of an endpoint proxy request: runs a data source of the endpoint type.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEndpointRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_details: Option<DataSourceDetails>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_transformation_details: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_endpoint_details: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_verb: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_selector: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEndpointRequestResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_result_set: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEndpointAuthenticationScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub input_descriptors: Vec<InputDescriptor>,
}

/// An endpoint type (`azurerm`, `github`, `generic`, ...) and the inputs it takes.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEndpointType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui_contribution_id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authentication_schemes: Vec<ServiceEndpointAuthenticationScheme>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub input_descriptors: Vec<InputDescriptor>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data_sources: Vec<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEndpointExecutionOwner {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEndpointExecutionData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ServiceEndpointExecutionResult>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<ServiceEndpointExecutionOwner>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<ServiceEndpointExecutionOwner>,
}

/// One pipeline run that used an endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEndpointExecutionRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ServiceEndpointExecutionData>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_type_field_is_named_type() {
        let endpoint = ServiceEndpoint {
            name: Some("github".into()),
            endpoint_type: Some("GitHub".into()),
            authorization: Some(EndpointAuthorization {
                scheme: "Token".into(),
                parameters: HashMap::from([("accessToken".to_string(), "x".to_string())]),
            }),
            ..Default::default()
        };

        let json = serde_json::to_value(&endpoint).unwrap();
        assert_eq!(json["type"], "GitHub");
        assert_eq!(json["authorization"]["scheme"], "Token");
        assert!(json.get("endpointType").is_none());
    }

    #[test]
    fn test_execution_record_reads_result_by_number() {
        let record: ServiceEndpointExecutionRecord = serde_json::from_str(
            r#"{"endpointId":"e1","data":{"id":4,"planType":"Build","result":2}}"#,
        )
        .unwrap();

        assert_eq!(
            record.data.and_then(|d| d.result),
            Some(ServiceEndpointExecutionResult::Failed)
        );
    }
}
