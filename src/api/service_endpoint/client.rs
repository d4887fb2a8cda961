//
//  azure-devops-rest
//  api/service_endpoint/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use serde::Serialize;

use super::models::*;
use crate::api::client::{RestClientBase, ServiceClient};
use crate::api::common::{ApiError, PagedList};
use crate::api::query::comma_separated;
use crate::api::request::RestRequest;

const ENDPOINTS: &str = "_apis/serviceendpoint/endpoints/{endpointId}";
const PROJECT_ENDPOINTS: &str = "{project}/_apis/serviceendpoint/endpoints/{endpointId}";
const ENDPOINT_PROXY: &str = "{project}/_apis/serviceendpoint/endpointproxy";
const TYPES: &str = "_apis/serviceendpoint/types";
const EXECUTION_HISTORY: &str = "{project}/_apis/serviceendpoint/{endpointId}/executionhistory";

const ENDPOINTS_VERSION: &str = "7.1-preview.4";
const V1: &str = "7.1-preview.1";

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeleteServiceEndpointOptions {
    #[serde(serialize_with = "comma_separated", skip_serializing_if = "Option::is_none")]
    pub project_ids: Option<Vec<String>>,

    /// Also deletes the Azure service principal created for the endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deep: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetServiceEndpointsOptions {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub endpoint_type: Option<String>,

    #[serde(serialize_with = "comma_separated", skip_serializing_if = "Option::is_none")]
    pub auth_schemes: Option<Vec<String>>,

    #[serde(serialize_with = "comma_separated", skip_serializing_if = "Option::is_none")]
    pub endpoint_ids: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_failed: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_details: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_filter: Option<ServiceEndpointActionFilter>,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetServiceEndpointsByNamesOptions {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub endpoint_type: Option<String>,

    #[serde(serialize_with = "comma_separated", skip_serializing_if = "Option::is_none")]
    pub auth_schemes: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_failed: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_details: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct GetExecutionRecordsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<i32>,

    #[serde(rename = "continuationToken", skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<i64>,
}

/// Client for service endpoints (service connections).
#[derive(Debug, Clone)]
pub struct ServiceEndpointClient {
    base: RestClientBase,
}

impl ServiceClient for ServiceEndpointClient {
    const RESOURCE_AREA_ID: Option<&'static str> = Some("1814ab31-2f4f-4a9f-8761-f4d77dc5a5d7");

    fn from_base(base: RestClientBase) -> Self {
        Self { base }
    }

    fn base(&self) -> &RestClientBase {
        &self.base
    }
}

impl ServiceEndpointClient {
    /// Creates an endpoint. Project bindings come from
    /// `service_endpoint_project_references`.
    pub async fn create_service_endpoint(
        &self,
        endpoint: &ServiceEndpoint,
    ) -> Result<ServiceEndpoint, ApiError> {
        let request = RestRequest::post(ENDPOINTS, ENDPOINTS_VERSION).json(endpoint)?;
        self.base.send_json(request).await
    }

    /// Removes the endpoint from the given projects; it is deleted once no
    /// project references it.
    pub async fn delete_service_endpoint(
        &self,
        endpoint_id: &str,
        options: &DeleteServiceEndpointOptions,
    ) -> Result<(), ApiError> {
        let request = RestRequest::delete(ENDPOINTS, ENDPOINTS_VERSION)
            .route("endpointId", endpoint_id)
            .query(options)?;
        self.base.send_empty(request).await
    }

    /// Shares the endpoint with more projects.
    pub async fn share_service_endpoint(
        &self,
        references: &[ServiceEndpointProjectReference],
        endpoint_id: &str,
    ) -> Result<(), ApiError> {
        let request = RestRequest::patch(ENDPOINTS, ENDPOINTS_VERSION)
            .route("endpointId", endpoint_id)
            .json(references)?;
        self.base.send_empty(request).await
    }

    pub async fn update_service_endpoint(
        &self,
        endpoint: &ServiceEndpoint,
        endpoint_id: &str,
        operation: Option<ServiceEndpointUpdateOperation>,
    ) -> Result<ServiceEndpoint, ApiError> {
        let request = RestRequest::put(ENDPOINTS, ENDPOINTS_VERSION)
            .route("endpointId", endpoint_id)
            .query_param_opt("operation", operation)
            .json(endpoint)?;
        self.base.send_json(request).await
    }

    pub async fn update_service_endpoints(
        &self,
        endpoints: &[ServiceEndpoint],
    ) -> Result<Vec<ServiceEndpoint>, ApiError> {
        let request = RestRequest::put(ENDPOINTS, ENDPOINTS_VERSION).json(endpoints)?;
        self.base.send_list(request).await
    }

    pub async fn get_service_endpoint_details(
        &self,
        project: &str,
        endpoint_id: &str,
        action_filter: Option<ServiceEndpointActionFilter>,
    ) -> Result<ServiceEndpoint, ApiError> {
        let request = RestRequest::get(PROJECT_ENDPOINTS, ENDPOINTS_VERSION)
            .route("project", project)
            .route("endpointId", endpoint_id)
            .query_param_opt("actionFilter", action_filter);
        self.base.send_json(request).await
    }

    pub async fn get_service_endpoints(
        &self,
        project: &str,
        options: &GetServiceEndpointsOptions,
    ) -> Result<Vec<ServiceEndpoint>, ApiError> {
        let request = RestRequest::get(PROJECT_ENDPOINTS, ENDPOINTS_VERSION)
            .route("project", project)
            .query(options)?;
        self.base.send_list(request).await
    }

    pub async fn get_service_endpoints_by_names(
        &self,
        project: &str,
        endpoint_names: &[String],
        options: &GetServiceEndpointsByNamesOptions,
    ) -> Result<Vec<ServiceEndpoint>, ApiError> {
        let request = RestRequest::get(PROJECT_ENDPOINTS, ENDPOINTS_VERSION)
            .route("project", project)
            .query_param("endpointNames", endpoint_names.join(","))
            .query(options)?;
        self.base.send_list(request).await
    }

    /// Runs a data source request through the endpoint.
    pub async fn execute_service_endpoint_request(
        &self,
        service_endpoint_request: &ServiceEndpointRequest,
        project: &str,
        endpoint_id: &str,
    ) -> Result<ServiceEndpointRequestResult, ApiError> {
        let request = RestRequest::post(ENDPOINT_PROXY, V1)
            .route("project", project)
            .query_param("endpointId", endpoint_id)
            .json(service_endpoint_request)?;
        self.base.send_json(request).await
    }

    pub async fn get_service_endpoint_types(
        &self,
        endpoint_type: Option<&str>,
        scheme: Option<&str>,
    ) -> Result<Vec<ServiceEndpointType>, ApiError> {
        let request = RestRequest::get(TYPES, V1)
            .query_param_opt("type", endpoint_type)
            .query_param_opt("scheme", scheme);
        self.base.send_list(request).await
    }

    pub async fn get_service_endpoint_execution_records(
        &self,
        project: &str,
        endpoint_id: &str,
        options: &GetExecutionRecordsOptions,
    ) -> Result<PagedList<ServiceEndpointExecutionRecord>, ApiError> {
        let request = RestRequest::get(EXECUTION_HISTORY, V1)
            .route("project", project)
            .route("endpointId", endpoint_id)
            .query(options)?;
        self.base.send_paged(request).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use reqwest::Method;
    use serde_json::json;

    use super::*;
    use crate::api::common::CONTINUATION_TOKEN_HEADER;
    use crate::api::testing::MockTransport;
    use crate::api::Connection;

    fn endpoints(transport: &Arc<MockTransport>) -> ServiceEndpointClient {
        Connection::new("https://dev.azure.com/contoso", transport.clone())
            .unwrap()
            .client()
    }

    #[test]
    fn test_delete_joins_project_ids() {
        let transport = Arc::new(MockTransport::new());
        transport.push_with_headers(204, &[], Vec::new());

        tokio_test::block_on(endpoints(&transport).delete_service_endpoint(
            "e1",
            &DeleteServiceEndpointOptions {
                project_ids: Some(vec!["p1".into(), "p2".into()]),
                deep: None,
            },
        ))
        .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::DELETE);
        assert_eq!(request.url.path(), "/contoso/_apis/serviceendpoint/endpoints/e1");
        assert_eq!(request.url.query(), Some("projectIds=p1%2Cp2"));
        assert_eq!(
            request.header("accept"),
            Some("application/json;api-version=7.1-preview.4")
        );
    }

    #[test]
    fn test_list_uses_project_route_without_endpoint_id() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, json!({"count": 1, "value": [{"id": "e1", "name": "gh", "type": "github"}]}));

        let list = tokio_test::block_on(endpoints(&transport).get_service_endpoints(
            "Fabrikam",
            &GetServiceEndpointsOptions {
                endpoint_type: Some("github".into()),
                action_filter: Some(ServiceEndpointActionFilter::Manage),
                ..Default::default()
            },
        ))
        .unwrap();

        let request = transport.last_request().unwrap();
        let mut pairs: Vec<(String, String)> = request.url.query_pairs().into_owned().collect();
        pairs.sort();

        assert_eq!(list[0].endpoint_type.as_deref(), Some("github"));
        assert_eq!(request.url.path(), "/contoso/Fabrikam/_apis/serviceendpoint/endpoints");
        assert_eq!(
            pairs,
            vec![
                ("actionFilter".to_string(), "manage".to_string()),
                ("type".to_string(), "github".to_string()),
            ]
        );
    }

    #[test]
    fn test_execution_records_are_paged() {
        let transport = Arc::new(MockTransport::new());
        transport.push_with_headers(
            200,
            &[(CONTINUATION_TOKEN_HEADER, "638400000000000000")],
            br#"{"count":1,"value":[{"endpointId":"e1","data":{"id":1,"result":"succeeded"}}]}"#.to_vec(),
        );

        let page = tokio_test::block_on(endpoints(&transport).get_service_endpoint_execution_records(
            "P",
            "e1",
            &GetExecutionRecordsOptions {
                top: Some(1),
                ..Default::default()
            },
        ))
        .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(page.continuation_token.as_deref(), Some("638400000000000000"));
        assert_eq!(request.url.path(), "/contoso/P/_apis/serviceendpoint/e1/executionhistory");
        assert_eq!(request.url.query(), Some("top=1"));
    }
}
