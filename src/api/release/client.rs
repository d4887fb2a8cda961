//
//  azure-devops-rest
//  api/release/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use super::models::*;
use super::options::*;
use crate::api::client::{RestClientBase, ServiceClient};
use crate::api::common::{ApiError, PagedList};
use crate::api::query::join;
use crate::api::request::{RestRequest, TEXT_MEDIA_TYPE, ZIP_MEDIA_TYPE};

const DEFINITIONS: &str = "{project}/_apis/Release/definitions/{definitionId}";
const RELEASES: &str = "{project}/_apis/Release/releases/{releaseId}";
const ENVIRONMENTS: &str = "{project}/_apis/Release/releases/{releaseId}/environments/{environmentId}";
const APPROVALS: &str = "{project}/_apis/Release/approvals/{approvalId}";
const DEPLOYMENTS: &str = "{project}/_apis/Release/deployments";
const GATES: &str = "{project}/_apis/Release/gates/{gateStepId}";
const MANUAL_INTERVENTIONS: &str =
    "{project}/_apis/Release/releases/{releaseId}/manualInterventions/{manualInterventionId}";
const LOGS: &str = "{project}/_apis/Release/releases/{releaseId}/logs";
const TASK_LOG: &str = "{project}/_apis/Release/releases/{releaseId}/environments/{environmentId}/deployPhases/{releaseDeployPhaseId}/tasks/{taskId}/logs";

/// Client for release management.
///
/// List operations that page server-side return a [`PagedList`]; feed its
/// `continuation_token` back through the options to fetch the next page.
#[derive(Debug, Clone)]
pub struct ReleaseClient {
    base: RestClientBase,
}

impl ServiceClient for ReleaseClient {
    const RESOURCE_AREA_ID: Option<&'static str> = Some("efc2f575-36ef-48e9-b672-0c6fb4a48ac5");

    fn from_base(base: RestClientBase) -> Self {
        Self { base }
    }

    fn base(&self) -> &RestClientBase {
        &self.base
    }
}

impl ReleaseClient {
    // Definitions

    pub async fn get_release_definitions(
        &self,
        project: &str,
        options: &GetReleaseDefinitionsOptions,
    ) -> Result<PagedList<ReleaseDefinition>, ApiError> {
        let request = RestRequest::get(DEFINITIONS, "7.1-preview.4")
            .route("project", project)
            .query(options)?;
        self.base.send_paged(request).await
    }

    pub async fn get_release_definition(
        &self,
        project: &str,
        definition_id: i32,
        property_filters: Option<&[String]>,
    ) -> Result<ReleaseDefinition, ApiError> {
        let request = RestRequest::get(DEFINITIONS, "7.1-preview.4")
            .route("project", project)
            .route("definitionId", definition_id)
            .query_param_opt("propertyFilters", property_filters.map(join));
        self.base.send_json(request).await
    }

    pub async fn create_release_definition(
        &self,
        definition: &ReleaseDefinition,
        project: &str,
    ) -> Result<ReleaseDefinition, ApiError> {
        let request = RestRequest::post(DEFINITIONS, "7.1-preview.4")
            .route("project", project)
            .json(definition)?;
        self.base.send_json(request).await
    }

    /// Replaces a definition. The body must carry the current `revision`.
    pub async fn update_release_definition(
        &self,
        definition: &ReleaseDefinition,
        project: &str,
    ) -> Result<ReleaseDefinition, ApiError> {
        let request = RestRequest::put(DEFINITIONS, "7.1-preview.4")
            .route("project", project)
            .json(definition)?;
        self.base.send_json(request).await
    }

    pub async fn delete_release_definition(
        &self,
        project: &str,
        definition_id: i32,
        options: &DeleteReleaseDefinitionOptions,
    ) -> Result<(), ApiError> {
        let request = RestRequest::delete(DEFINITIONS, "7.1-preview.4")
            .route("project", project)
            .route("definitionId", definition_id)
            .query(options)?;
        self.base.send_empty(request).await
    }

    // Releases

    /// Lists releases, one page at a time.
    ///
    /// The next page is requested with [`GetReleasesOptions::advance`], which
    /// turns the text token of the returned page back into the numeric
    /// `continuationToken`:
    ///
    /// ```rust,no_run
    /// use azure_devops_rest::api::release::{GetReleasesOptions, ReleaseClient};
    ///
    /// # async fn run(client: ReleaseClient) -> Result<(), azure_devops_rest::api::ApiError> {
    /// let mut options = GetReleasesOptions::default();
    /// loop {
    ///     let page = client.get_releases(Some("Fabrikam"), &options).await?;
    ///     for release in &page.items {
    ///         println!("{:?}", release.name);
    ///     }
    ///     if !options.advance(&page) {
    ///         break;
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_releases(
        &self,
        project: Option<&str>,
        options: &GetReleasesOptions,
    ) -> Result<PagedList<Release>, ApiError> {
        let request = RestRequest::get(RELEASES, "7.1-preview.8")
            .route_opt("project", project)
            .query(options)?;
        self.base.send_paged(request).await
    }

    pub async fn get_release(
        &self,
        project: &str,
        release_id: i32,
        options: &GetReleaseOptions,
    ) -> Result<Release, ApiError> {
        let request = RestRequest::get(RELEASES, "7.1-preview.8")
            .route("project", project)
            .route("releaseId", release_id)
            .query(options)?;
        self.base.send_json(request).await
    }

    /// Starts a release of a definition.
    pub async fn create_release(
        &self,
        metadata: &ReleaseStartMetadata,
        project: &str,
    ) -> Result<Release, ApiError> {
        let request = RestRequest::post(RELEASES, "7.1-preview.8")
            .route("project", project)
            .json(metadata)?;
        self.base.send_json(request).await
    }

    pub async fn update_release(
        &self,
        release: &Release,
        project: &str,
        release_id: i32,
    ) -> Result<Release, ApiError> {
        let request = RestRequest::put(RELEASES, "7.1-preview.8")
            .route("project", project)
            .route("releaseId", release_id)
            .json(release)?;
        self.base.send_json(request).await
    }

    /// Patches selected attributes of a release (status, keep-forever, ...).
    pub async fn update_release_resource(
        &self,
        metadata: &ReleaseUpdateMetadata,
        project: &str,
        release_id: i32,
    ) -> Result<Release, ApiError> {
        let request = RestRequest::patch(RELEASES, "7.1-preview.8")
            .route("project", project)
            .route("releaseId", release_id)
            .json(metadata)?;
        self.base.send_json(request).await
    }

    // Environments

    pub async fn get_release_environment(
        &self,
        project: &str,
        release_id: i32,
        environment_id: i32,
        options: &GetReleaseEnvironmentOptions,
    ) -> Result<ReleaseEnvironment, ApiError> {
        let request = RestRequest::get(ENVIRONMENTS, "7.1-preview.7")
            .route("project", project)
            .route("releaseId", release_id)
            .route("environmentId", environment_id)
            .query(options)?;
        self.base.send_json(request).await
    }

    /// Deploys, cancels or reschedules a stage.
    pub async fn update_release_environment(
        &self,
        metadata: &ReleaseEnvironmentUpdateMetadata,
        project: &str,
        release_id: i32,
        environment_id: i32,
    ) -> Result<ReleaseEnvironment, ApiError> {
        let request = RestRequest::patch(ENVIRONMENTS, "7.1-preview.7")
            .route("project", project)
            .route("releaseId", release_id)
            .route("environmentId", environment_id)
            .json(metadata)?;
        self.base.send_json(request).await
    }

    // Approvals

    /// Pages like [`ReleaseClient::get_releases`]; see [`GetApprovalsOptions::advance`].
    pub async fn get_approvals(
        &self,
        project: &str,
        options: &GetApprovalsOptions,
    ) -> Result<PagedList<ReleaseApproval>, ApiError> {
        let request = RestRequest::get(APPROVALS, "7.1-preview.3")
            .route("project", project)
            .query(options)?;
        self.base.send_paged(request).await
    }

    pub async fn update_release_approval(
        &self,
        approval: &ReleaseApproval,
        project: &str,
        approval_id: i32,
    ) -> Result<ReleaseApproval, ApiError> {
        let request = RestRequest::patch(APPROVALS, "7.1-preview.3")
            .route("project", project)
            .route("approvalId", approval_id)
            .json(approval)?;
        self.base.send_json(request).await
    }

    // Deployments

    /// Pages like [`ReleaseClient::get_releases`]; see [`GetDeploymentsOptions::advance`].
    pub async fn get_deployments(
        &self,
        project: &str,
        options: &GetDeploymentsOptions,
    ) -> Result<PagedList<Deployment>, ApiError> {
        let request = RestRequest::get(DEPLOYMENTS, "7.1-preview.2")
            .route("project", project)
            .query(options)?;
        self.base.send_paged(request).await
    }

    // Gates and manual interventions

    pub async fn update_gates(
        &self,
        metadata: &GateUpdateMetadata,
        project: &str,
        gate_step_id: i32,
    ) -> Result<ReleaseGates, ApiError> {
        let request = RestRequest::patch(GATES, "7.1-preview.1")
            .route("project", project)
            .route("gateStepId", gate_step_id)
            .json(metadata)?;
        self.base.send_json(request).await
    }

    pub async fn get_manual_interventions(
        &self,
        project: &str,
        release_id: i32,
    ) -> Result<Vec<ManualIntervention>, ApiError> {
        let request = RestRequest::get(MANUAL_INTERVENTIONS, "7.1-preview.1")
            .route("project", project)
            .route("releaseId", release_id);
        self.base.send_list(request).await
    }

    pub async fn get_manual_intervention(
        &self,
        project: &str,
        release_id: i32,
        manual_intervention_id: i32,
    ) -> Result<ManualIntervention, ApiError> {
        let request = RestRequest::get(MANUAL_INTERVENTIONS, "7.1-preview.1")
            .route("project", project)
            .route("releaseId", release_id)
            .route("manualInterventionId", manual_intervention_id);
        self.base.send_json(request).await
    }

    pub async fn update_manual_intervention(
        &self,
        metadata: &ManualInterventionUpdateMetadata,
        project: &str,
        release_id: i32,
        manual_intervention_id: i32,
    ) -> Result<ManualIntervention, ApiError> {
        let request = RestRequest::patch(MANUAL_INTERVENTIONS, "7.1-preview.1")
            .route("project", project)
            .route("releaseId", release_id)
            .route("manualInterventionId", manual_intervention_id)
            .json(metadata)?;
        self.base.send_json(request).await
    }

    // Logs

    /// Downloads every log of a release as a zip archive.
    pub async fn get_logs(&self, project: &str, release_id: i32) -> Result<Vec<u8>, ApiError> {
        let request = RestRequest::get(LOGS, "7.1-preview.2")
            .route("project", project)
            .route("releaseId", release_id)
            .accept(ZIP_MEDIA_TYPE);
        self.base.send_bytes(request).await
    }

    pub async fn get_task_log(
        &self,
        project: &str,
        release_id: i32,
        environment_id: i32,
        release_deploy_phase_id: i32,
        task_id: i32,
        options: &GetTaskLogOptions,
    ) -> Result<String, ApiError> {
        let request = RestRequest::get(TASK_LOG, "7.1-preview.2")
            .route("project", project)
            .route("releaseId", release_id)
            .route("environmentId", environment_id)
            .route("releaseDeployPhaseId", release_deploy_phase_id)
            .route("taskId", task_id)
            .query(options)?
            .accept(TEXT_MEDIA_TYPE);
        self.base.send_text(request).await
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

    fn releases(transport: &Arc<MockTransport>) -> ReleaseClient {
        Connection::new("https://vsrm.dev.azure.com/contoso", transport.clone())
            .unwrap()
            .client()
    }

    #[test]
    fn test_get_releases_advances_to_next_page() {
        let transport = Arc::new(MockTransport::new());
        transport.push_with_headers(
            200,
            &[(CONTINUATION_TOKEN_HEADER, "17")],
            br#"{"count":1,"value":[{"id":19}]}"#.to_vec(),
        );
        transport.push_json(200, json!({"count": 1, "value": [{"id": 17}]}));
        let client = releases(&transport);

        let mut options = GetReleasesOptions::default();
        let first = tokio_test::block_on(client.get_releases(Some("Fabrikam"), &options)).unwrap();
        assert!(options.advance(&first));
        let second =
            tokio_test::block_on(client.get_releases(Some("Fabrikam"), &options)).unwrap();

        assert!(!options.advance(&second));
        let requests = transport.requests();
        assert_eq!(requests[1].url.query(), Some("continuationToken=17"));
    }

    #[test]
    fn test_get_releases_carries_numeric_continuation_token() {
        let transport = Arc::new(MockTransport::new());
        transport.push_with_headers(
            200,
            &[(CONTINUATION_TOKEN_HEADER, "17")],
            br#"{"count":2,"value":[{"id":19,"name":"Release-19"},{"id":18,"name":"Release-18"}]}"#
                .to_vec(),
        );

        let page = tokio_test::block_on(releases(&transport).get_releases(
            Some("Fabrikam"),
            &GetReleasesOptions {
                definition_id: Some(1),
                top: Some(2),
                ..Default::default()
            },
        ))
        .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page.continuation_token.as_deref(), Some("17"));
        assert_eq!(request.url.path(), "/contoso/Fabrikam/_apis/Release/releases");
        assert_eq!(
            request.header("accept"),
            Some("application/json;api-version=7.1-preview.8")
        );
    }

    #[test]
    fn test_get_release_definition_joins_property_filters() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, json!({"id": 1, "name": "CD", "revision": 4}));

        let filters = vec!["a".to_string(), "b".to_string()];
        let definition = tokio_test::block_on(releases(&transport).get_release_definition(
            "Fabrikam",
            1,
            Some(filters.as_slice()),
        ))
        .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(definition.revision, Some(4));
        assert_eq!(request.url.path(), "/contoso/Fabrikam/_apis/Release/definitions/1");
        assert_eq!(request.url.query(), Some("propertyFilters=a%2Cb"));
    }

    #[test]
    fn test_approve_patches_the_approval() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, json!({"id": 31, "status": "approved"}));

        let body = ReleaseApproval::decision(ApprovalStatus::Approved, "ship it");
        let approval =
            tokio_test::block_on(releases(&transport).update_release_approval(&body, "P", 31))
                .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(approval.status, Some(ApprovalStatus::Approved));
        assert_eq!(request.method, Method::PATCH);
        assert_eq!(request.url.path(), "/contoso/P/_apis/Release/approvals/31");
        assert_eq!(
            request.json_body(),
            Some(json!({"status": "approved", "comments": "ship it"}))
        );
    }

    #[test]
    fn test_logs_are_downloaded_as_zip() {
        let transport = Arc::new(MockTransport::new());
        transport.push_with_headers(200, &[("content-type", "application/zip")], vec![0x50, 0x4b, 3, 4]);

        let bytes = tokio_test::block_on(releases(&transport).get_logs("P", 18)).unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(bytes, vec![0x50, 0x4b, 3, 4]);
        assert_eq!(request.header("accept"), Some("application/zip;api-version=7.1-preview.2"));
        assert!(request.url.path().ends_with("/releases/18/logs"));
    }

    #[test]
    fn test_task_log_is_text_with_line_range() {
        let transport = Arc::new(MockTransport::new());
        transport.push_with_headers(200, &[], b"2026-01-12T10:00:00Z Starting".to_vec());

        let log = tokio_test::block_on(releases(&transport).get_task_log(
            "P",
            18,
            5,
            2,
            7,
            &GetTaskLogOptions {
                start_line: Some(1),
                ..Default::default()
            },
        ))
        .unwrap();

        let request = transport.last_request().unwrap();
        assert!(log.ends_with("Starting"));
        assert_eq!(
            request.url.path(),
            "/contoso/P/_apis/Release/releases/18/environments/5/deployPhases/2/tasks/7/logs"
        );
        assert_eq!(request.url.query(), Some("startLine=1"));
        assert_eq!(request.header("accept"), Some("text/plain;api-version=7.1-preview.2"));
    }
}
