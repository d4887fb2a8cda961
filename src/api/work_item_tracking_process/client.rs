//
//  azure-devops-rest
//  api/work_item_tracking_process/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use super::layout::FormLayout;
use super::models::*;
use crate::api::client::{RestClientBase, ServiceClient};
use crate::api::common::ApiError;
use crate::api::request::RestRequest;

const PROCESSES: &str = "_apis/work/processes/{processTypeId}";
const WORK_ITEM_TYPES: &str = "_apis/work/processes/{processId}/workitemtypes/{witRefName}";
const FIELDS: &str =
    "_apis/work/processes/{processId}/workItemTypes/{witRefNameForFields}/fields/{fieldRefName}";
const STATES: &str = "_apis/work/processes/{processId}/workItemTypes/{witRefName}/states/{stateId}";
const RULES: &str = "_apis/work/processes/{processId}/workItemTypes/{witRefName}/rules/{ruleId}";
const BEHAVIORS: &str = "_apis/work/processes/{processId}/behaviors/{behaviorRefName}";
const LISTS: &str = "_apis/work/processes/lists/{listId}";
const LAYOUT: &str = "_apis/work/processes/{processId}/workItemTypes/{witRefName}/layout";

const V1: &str = "7.1-preview.1";
const V2: &str = "7.1-preview.2";

/// Client for inherited process customization: processes, work item types,
/// fields, states, rules, behaviors, picklists and form layouts.
#[derive(Debug, Clone)]
pub struct WorkItemTrackingProcessClient {
    base: RestClientBase,
}

impl ServiceClient for WorkItemTrackingProcessClient {
    const RESOURCE_AREA_ID: Option<&'static str> = Some("5264459e-e5e0-4bd8-b118-0985e68a4ec5");

    fn from_base(base: RestClientBase) -> Self {
        Self { base }
    }

    fn base(&self) -> &RestClientBase {
        &self.base
    }
}

impl WorkItemTrackingProcessClient {
    // Processes

    /// Creates an inherited process.
    pub async fn create_new_process(
        &self,
        create_request: &CreateProcessModel,
    ) -> Result<ProcessInfo, ApiError> {
        let request = RestRequest::post(PROCESSES, V2).json(create_request)?;
        self.base.send_json(request).await
    }

    pub async fn get_list_of_processes(
        &self,
        expand: Option<GetProcessExpandLevel>,
    ) -> Result<Vec<ProcessInfo>, ApiError> {
        let request = RestRequest::get(PROCESSES, V2).query_param_opt("$expand", expand);
        self.base.send_list(request).await
    }

    pub async fn get_process_by_its_id(
        &self,
        process_type_id: &str,
        expand: Option<GetProcessExpandLevel>,
    ) -> Result<ProcessInfo, ApiError> {
        let request = RestRequest::get(PROCESSES, V2)
            .route("processTypeId", process_type_id)
            .query_param_opt("$expand", expand);
        self.base.send_json(request).await
    }

    pub async fn edit_process(
        &self,
        update_request: &UpdateProcessModel,
        process_type_id: &str,
    ) -> Result<ProcessInfo, ApiError> {
        let request = RestRequest::patch(PROCESSES, V2)
            .route("processTypeId", process_type_id)
            .json(update_request)?;
        self.base.send_json(request).await
    }

    pub async fn delete_process_by_id(&self, process_type_id: &str) -> Result<(), ApiError> {
        let request = RestRequest::delete(PROCESSES, V2).route("processTypeId", process_type_id);
        self.base.send_empty(request).await
    }

    // Work item types

    pub async fn create_process_work_item_type(
        &self,
        work_item_type: &CreateProcessWorkItemTypeRequest,
        process_id: &str,
    ) -> Result<ProcessWorkItemType, ApiError> {
        let request = RestRequest::post(WORK_ITEM_TYPES, V2)
            .route("processId", process_id)
            .json(work_item_type)?;
        self.base.send_json(request).await
    }

    pub async fn get_process_work_item_types(
        &self,
        process_id: &str,
        expand: Option<GetWorkItemTypeExpand>,
    ) -> Result<Vec<ProcessWorkItemType>, ApiError> {
        let request = RestRequest::get(WORK_ITEM_TYPES, V2)
            .route("processId", process_id)
            .query_param_opt("$expand", expand);
        self.base.send_list(request).await
    }

    pub async fn get_process_work_item_type(
        &self,
        process_id: &str,
        wit_ref_name: &str,
        expand: Option<GetWorkItemTypeExpand>,
    ) -> Result<ProcessWorkItemType, ApiError> {
        let request = RestRequest::get(WORK_ITEM_TYPES, V2)
            .route("processId", process_id)
            .route("witRefName", wit_ref_name)
            .query_param_opt("$expand", expand);
        self.base.send_json(request).await
    }

    pub async fn update_process_work_item_type(
        &self,
        work_item_type_update: &UpdateProcessWorkItemTypeRequest,
        process_id: &str,
        wit_ref_name: &str,
    ) -> Result<ProcessWorkItemType, ApiError> {
        let request = RestRequest::patch(WORK_ITEM_TYPES, V2)
            .route("processId", process_id)
            .route("witRefName", wit_ref_name)
            .json(work_item_type_update)?;
        self.base.send_json(request).await
    }

    pub async fn delete_process_work_item_type(
        &self,
        process_id: &str,
        wit_ref_name: &str,
    ) -> Result<(), ApiError> {
        let request = RestRequest::delete(WORK_ITEM_TYPES, V2)
            .route("processId", process_id)
            .route("witRefName", wit_ref_name);
        self.base.send_empty(request).await
    }

    // Fields

    /// Adds an existing organization field to a work item type.
    pub async fn add_field_to_work_item_type(
        &self,
        field: &AddProcessWorkItemTypeFieldRequest,
        process_id: &str,
        wit_ref_name: &str,
    ) -> Result<ProcessWorkItemTypeField, ApiError> {
        let request = RestRequest::post(FIELDS, V2)
            .route("processId", process_id)
            .route("witRefNameForFields", wit_ref_name)
            .json(field)?;
        self.base.send_json(request).await
    }

    pub async fn get_all_work_item_type_fields(
        &self,
        process_id: &str,
        wit_ref_name: &str,
    ) -> Result<Vec<ProcessWorkItemTypeField>, ApiError> {
        let request = RestRequest::get(FIELDS, V2)
            .route("processId", process_id)
            .route("witRefNameForFields", wit_ref_name);
        self.base.send_list(request).await
    }

    pub async fn get_work_item_type_field(
        &self,
        process_id: &str,
        wit_ref_name: &str,
        field_ref_name: &str,
        expand: Option<ProcessWorkItemTypeFieldsExpandLevel>,
    ) -> Result<ProcessWorkItemTypeField, ApiError> {
        let request = RestRequest::get(FIELDS, V2)
            .route("processId", process_id)
            .route("witRefNameForFields", wit_ref_name)
            .route("fieldRefName", field_ref_name)
            .query_param_opt("$expand", expand);
        self.base.send_json(request).await
    }

    pub async fn update_work_item_type_field(
        &self,
        field: &UpdateProcessWorkItemTypeFieldRequest,
        process_id: &str,
        wit_ref_name: &str,
        field_ref_name: &str,
    ) -> Result<ProcessWorkItemTypeField, ApiError> {
        let request = RestRequest::patch(FIELDS, V2)
            .route("processId", process_id)
            .route("witRefNameForFields", wit_ref_name)
            .route("fieldRefName", field_ref_name)
            .json(field)?;
        self.base.send_json(request).await
    }

    pub async fn remove_work_item_type_field(
        &self,
        process_id: &str,
        wit_ref_name: &str,
        field_ref_name: &str,
    ) -> Result<(), ApiError> {
        let request = RestRequest::delete(FIELDS, V2)
            .route("processId", process_id)
            .route("witRefNameForFields", wit_ref_name)
            .route("fieldRefName", field_ref_name);
        self.base.send_empty(request).await
    }

    // States

    pub async fn create_state_definition(
        &self,
        state: &WorkItemStateInputModel,
        process_id: &str,
        wit_ref_name: &str,
    ) -> Result<WorkItemStateResultModel, ApiError> {
        let request = RestRequest::post(STATES, V1)
            .route("processId", process_id)
            .route("witRefName", wit_ref_name)
            .json(state)?;
        self.base.send_json(request).await
    }

    pub async fn get_state_definitions(
        &self,
        process_id: &str,
        wit_ref_name: &str,
    ) -> Result<Vec<WorkItemStateResultModel>, ApiError> {
        let request = RestRequest::get(STATES, V1)
            .route("processId", process_id)
            .route("witRefName", wit_ref_name);
        self.base.send_list(request).await
    }

    pub async fn get_state_definition(
        &self,
        process_id: &str,
        wit_ref_name: &str,
        state_id: &str,
    ) -> Result<WorkItemStateResultModel, ApiError> {
        let request = RestRequest::get(STATES, V1)
            .route("processId", process_id)
            .route("witRefName", wit_ref_name)
            .route("stateId", state_id);
        self.base.send_json(request).await
    }

    pub async fn update_state_definition(
        &self,
        state: &WorkItemStateInputModel,
        process_id: &str,
        wit_ref_name: &str,
        state_id: &str,
    ) -> Result<WorkItemStateResultModel, ApiError> {
        let request = RestRequest::patch(STATES, V1)
            .route("processId", process_id)
            .route("witRefName", wit_ref_name)
            .route("stateId", state_id)
            .json(state)?;
        self.base.send_json(request).await
    }

    /// Hides (or shows again) a state inherited from the parent process.
    /// Inherited states cannot be deleted.
    pub async fn hide_state_definition(
        &self,
        hide_state: &HideStateModel,
        process_id: &str,
        wit_ref_name: &str,
        state_id: &str,
    ) -> Result<WorkItemStateResultModel, ApiError> {
        let request = RestRequest::put(STATES, V1)
            .route("processId", process_id)
            .route("witRefName", wit_ref_name)
            .route("stateId", state_id)
            .json(hide_state)?;
        self.base.send_json(request).await
    }

    pub async fn delete_state_definition(
        &self,
        process_id: &str,
        wit_ref_name: &str,
        state_id: &str,
    ) -> Result<(), ApiError> {
        let request = RestRequest::delete(STATES, V1)
            .route("processId", process_id)
            .route("witRefName", wit_ref_name)
            .route("stateId", state_id);
        self.base.send_empty(request).await
    }

    // Rules

    pub async fn add_process_work_item_type_rule(
        &self,
        process_rule_create: &CreateProcessRuleRequest,
        process_id: &str,
        wit_ref_name: &str,
    ) -> Result<ProcessRule, ApiError> {
        let request = RestRequest::post(RULES, V2)
            .route("processId", process_id)
            .route("witRefName", wit_ref_name)
            .json(process_rule_create)?;
        self.base.send_json(request).await
    }

    pub async fn get_process_work_item_type_rules(
        &self,
        process_id: &str,
        wit_ref_name: &str,
    ) -> Result<Vec<ProcessRule>, ApiError> {
        let request = RestRequest::get(RULES, V2)
            .route("processId", process_id)
            .route("witRefName", wit_ref_name);
        self.base.send_list(request).await
    }

    pub async fn get_process_work_item_type_rule(
        &self,
        process_id: &str,
        wit_ref_name: &str,
        rule_id: &str,
    ) -> Result<ProcessRule, ApiError> {
        let request = RestRequest::get(RULES, V2)
            .route("processId", process_id)
            .route("witRefName", wit_ref_name)
            .route("ruleId", rule_id);
        self.base.send_json(request).await
    }

    pub async fn update_process_work_item_type_rule(
        &self,
        process_rule: &UpdateProcessRuleRequest,
        process_id: &str,
        wit_ref_name: &str,
        rule_id: &str,
    ) -> Result<ProcessRule, ApiError> {
        let request = RestRequest::put(RULES, V2)
            .route("processId", process_id)
            .route("witRefName", wit_ref_name)
            .route("ruleId", rule_id)
            .json(process_rule)?;
        self.base.send_json(request).await
    }

    pub async fn delete_process_work_item_type_rule(
        &self,
        process_id: &str,
        wit_ref_name: &str,
        rule_id: &str,
    ) -> Result<(), ApiError> {
        let request = RestRequest::delete(RULES, V2)
            .route("processId", process_id)
            .route("witRefName", wit_ref_name)
            .route("ruleId", rule_id);
        self.base.send_empty(request).await
    }

    // Behaviors

    pub async fn create_process_behavior(
        &self,
        behavior: &ProcessBehaviorCreateRequest,
        process_id: &str,
    ) -> Result<ProcessBehavior, ApiError> {
        let request = RestRequest::post(BEHAVIORS, V2)
            .route("processId", process_id)
            .json(behavior)?;
        self.base.send_json(request).await
    }

    pub async fn get_process_behaviors(
        &self,
        process_id: &str,
        expand: Option<GetBehaviorsExpand>,
    ) -> Result<Vec<ProcessBehavior>, ApiError> {
        let request = RestRequest::get(BEHAVIORS, V2)
            .route("processId", process_id)
            .query_param_opt("$expand", expand);
        self.base.send_list(request).await
    }

    pub async fn get_process_behavior(
        &self,
        process_id: &str,
        behavior_ref_name: &str,
        expand: Option<GetBehaviorsExpand>,
    ) -> Result<ProcessBehavior, ApiError> {
        let request = RestRequest::get(BEHAVIORS, V2)
            .route("processId", process_id)
            .route("behaviorRefName", behavior_ref_name)
            .query_param_opt("$expand", expand);
        self.base.send_json(request).await
    }

    pub async fn update_process_behavior(
        &self,
        behavior: &ProcessBehaviorUpdateRequest,
        process_id: &str,
        behavior_ref_name: &str,
    ) -> Result<ProcessBehavior, ApiError> {
        let request = RestRequest::put(BEHAVIORS, V2)
            .route("processId", process_id)
            .route("behaviorRefName", behavior_ref_name)
            .json(behavior)?;
        self.base.send_json(request).await
    }

    pub async fn delete_process_behavior(
        &self,
        process_id: &str,
        behavior_ref_name: &str,
    ) -> Result<(), ApiError> {
        let request = RestRequest::delete(BEHAVIORS, V2)
            .route("processId", process_id)
            .route("behaviorRefName", behavior_ref_name);
        self.base.send_empty(request).await
    }

    // Lists

    pub async fn create_list(&self, picklist: &PickList) -> Result<PickList, ApiError> {
        let request = RestRequest::post(LISTS, V1).json(picklist)?;
        self.base.send_json(request).await
    }

    /// Lists the organization's picklists without their items.
    pub async fn get_lists_metadata(&self) -> Result<Vec<PickListMetadata>, ApiError> {
        self.base.send_list(RestRequest::get(LISTS, V1)).await
    }

    pub async fn get_list(&self, list_id: &str) -> Result<PickList, ApiError> {
        let request = RestRequest::get(LISTS, V1).route("listId", list_id);
        self.base.send_json(request).await
    }

    /// Replaces the picklist's items.
    pub async fn update_list(&self, picklist: &PickList, list_id: &str) -> Result<PickList, ApiError> {
        let request = RestRequest::put(LISTS, V1)
            .route("listId", list_id)
            .json(picklist)?;
        self.base.send_json(request).await
    }

    pub async fn delete_list(&self, list_id: &str) -> Result<(), ApiError> {
        let request = RestRequest::delete(LISTS, V1).route("listId", list_id);
        self.base.send_empty(request).await
    }

    // Layout

    pub async fn get_form_layout(
        &self,
        process_id: &str,
        wit_ref_name: &str,
    ) -> Result<FormLayout, ApiError> {
        let request = RestRequest::get(LAYOUT, V1)
            .route("processId", process_id)
            .route("witRefName", wit_ref_name);
        self.base.send_json(request).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use reqwest::Method;
    use serde_json::json;

    use super::*;
    use crate::api::testing::MockTransport;
    use crate::api::Connection;

    const PROCESS_ID: &str = "5e1ba1c1-0a7e-4b3b-9c6a-6a0d1c2b3e4f";

    fn processes(transport: &Arc<MockTransport>) -> WorkItemTrackingProcessClient {
        Connection::new("https://dev.azure.com/contoso", transport.clone())
            .unwrap()
            .client()
    }

    #[test]
    fn test_list_processes_with_expand() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, json!({"count": 1, "value": [{"typeId": PROCESS_ID, "name": "Agile2"}]}));

        let list = tokio_test::block_on(
            processes(&transport).get_list_of_processes(Some(GetProcessExpandLevel::Projects)),
        )
        .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(list[0].name.as_deref(), Some("Agile2"));
        assert_eq!(request.url.path(), "/contoso/_apis/work/processes");
        assert_eq!(request.url.query(), Some("%24expand=projects"));
        assert_eq!(
            request.header("accept"),
            Some("application/json;api-version=7.1-preview.2")
        );
    }

    #[test]
    fn test_field_route_uses_fields_placeholder() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, json!({"referenceName": "Custom.Team", "required": true}));

        let field = tokio_test::block_on(processes(&transport).add_field_to_work_item_type(
            &AddProcessWorkItemTypeFieldRequest {
                reference_name: "Custom.Team".into(),
                required: Some(true),
                ..Default::default()
            },
            PROCESS_ID,
            "Agile2.Bug",
        ))
        .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(field.required, Some(true));
        assert_eq!(request.method, Method::POST);
        assert_eq!(
            request.url.path(),
            format!("/contoso/_apis/work/processes/{PROCESS_ID}/workItemTypes/Agile2.Bug/fields")
        );
        assert_eq!(
            request.json_body().unwrap(),
            json!({"referenceName": "Custom.Team", "required": true})
        );
    }

    #[test]
    fn test_hide_state_is_put() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, json!({"id": "s1", "name": "Resolved", "hidden": true}));

        let state = tokio_test::block_on(processes(&transport).hide_state_definition(
            &HideStateModel { hidden: true },
            PROCESS_ID,
            "Agile2.Bug",
            "s1",
        ))
        .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(state.hidden, Some(true));
        assert_eq!(request.method, Method::PUT);
        assert_eq!(
            request.url.path(),
            format!("/contoso/_apis/work/processes/{PROCESS_ID}/workItemTypes/Agile2.Bug/states/s1")
        );
        assert_eq!(
            request.header("accept"),
            Some("application/json;api-version=7.1-preview.1")
        );
        assert_eq!(request.json_body().unwrap(), json!({"hidden": true}));
    }

    #[test]
    fn test_work_item_type_expand_is_comma_list() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, json!({"referenceName": "Agile2.Bug", "states": [{"name": "New"}]}));

        let wit = tokio_test::block_on(processes(&transport).get_process_work_item_type(
            PROCESS_ID,
            "Agile2.Bug",
            Some(GetWorkItemTypeExpand::States | GetWorkItemTypeExpand::Layout),
        ))
        .unwrap();

        let request = transport.last_request().unwrap();
        let pairs: Vec<(String, String)> = request.url.query_pairs().into_owned().collect();
        assert_eq!(wit.states[0].name.as_deref(), Some("New"));
        assert_eq!(
            pairs,
            vec![("$expand".to_string(), "states, layout".to_string())]
        );
    }

    #[test]
    fn test_lists_route_does_not_collide_with_processes() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, json!({"count": 1, "value": [{"id": "l1", "name": "Teams", "type": "String"}]}));
        transport.push_with_headers(204, &[], Vec::new());
        let client = processes(&transport);

        let lists = tokio_test::block_on(client.get_lists_metadata()).unwrap();
        tokio_test::block_on(client.delete_list("l1")).unwrap();

        let requests = transport.requests();
        assert_eq!(lists[0].list_type.as_deref(), Some("String"));
        assert_eq!(requests[0].url.path(), "/contoso/_apis/work/processes/lists");
        assert_eq!(requests[1].method, Method::DELETE);
        assert_eq!(requests[1].url.path(), "/contoso/_apis/work/processes/lists/l1");
    }

    #[test]
    fn test_form_layout() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, json!({"pages": [{"id": "Details", "sections": []}]}));

        let layout = tokio_test::block_on(
            processes(&transport).get_form_layout(PROCESS_ID, "Agile2.Bug"),
        )
        .unwrap();

        assert_eq!(layout.pages[0].id.as_deref(), Some("Details"));
        assert_eq!(
            transport.last_request().unwrap().url.path(),
            format!("/contoso/_apis/work/processes/{PROCESS_ID}/workItemTypes/Agile2.Bug/layout")
        );
    }
}
