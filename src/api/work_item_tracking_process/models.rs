//
//  azure-devops-rest
//  api/work_item_tracking_process/models.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::layout::FormLayout;
use crate::api::common::{vss_enum, vss_flags, TeamProjectReference};

vss_enum! {
    /// Where a process element comes from.
    pub enum CustomizationType {
        System = 0 => "system",
        Inherited = 1 => "inherited",
        Custom = 2 => "custom",
    }
}

vss_enum! {
    pub enum ProcessWorkItemTypeClass {
        System = 0 => "system",
        Derived = 1 => "derived",
        Custom = 2 => "custom",
    }
}

vss_enum! {
    pub enum GetProcessExpandLevel {
        None = 0 => "none",
        Projects = 1 => "projects",
    }
}

vss_flags! {
    /// What to embed in work item types.
    pub struct GetWorkItemTypeExpand {
        const None = 0 => "none";
        const States = 1 => "states";
        const Behaviors = 2 => "behaviors";
        const Layout = 4 => "layout";
    }
}

vss_flags! {
    pub struct ProcessWorkItemTypeFieldsExpandLevel {
        const None = 0 => "none";
        const AllowedValues = 1 => "allowedValues";
        const InheritedValues = 2 => "inheritedValues";
        const All = 3 => "all";
    }
}

vss_enum! {
    pub enum GetBehaviorsExpand {
        None = 0 => "none",
        Fields = 1 => "fields",
        CombinedFields = 2 => "combinedFields",
    }
}

vss_enum! {
    pub enum FieldType {
        String = 0 => "string",
        Integer = 1 => "integer",
        DateTime = 2 => "dateTime",
        PlainText = 3 => "plainText",
        Html = 4 => "html",
        TreePath = 5 => "treePath",
        History = 6 => "history",
        Double = 7 => "double",
        Guid = 8 => "guid",
        Boolean = 9 => "boolean",
        Identity = 10 => "identity",
        PicklistInteger = 11 => "picklistInteger",
        PicklistString = 12 => "picklistString",
        PicklistDouble = 13 => "picklistDouble",
    }
}

vss_enum! {
    pub enum RuleConditionType {
        When = 0 => "when",
        WhenNot = 1 => "whenNot",
        WhenChanged = 2 => "whenChanged",
        WhenNotChanged = 3 => "whenNotChanged",
        WhenWas = 4 => "whenWas",
        WhenStateChangedTo = 5 => "whenStateChangedTo",
        WhenStateChangedFromAndTo = 6 => "whenStateChangedFromAndTo",
        WhenWorkItemIsCreated = 7 => "whenWorkItemIsCreated",
        WhenValueIsDefined = 8 => "whenValueIsDefined",
        WhenValueIsNotDefined = 9 => "whenValueIsNotDefined",
        WhenCurrentUserIsMemberOfGroup = 10 => "whenCurrentUserIsMemberOfGroup",
        WhenCurrentUserIsNotMemberOfGroup = 11 => "whenCurrentUserIsNotMemberOfGroup",
    }
}

vss_enum! {
    pub enum RuleActionType {
        MakeRequired = 1 => "makeRequired",
        MakeReadOnly = 2 => "makeReadOnly",
        SetDefaultValue = 3 => "setDefaultValue",
        SetDefaultFromClock = 4 => "setDefaultFromClock",
        SetDefaultFromCurrentUser = 5 => "setDefaultFromCurrentUser",
        SetDefaultFromField = 6 => "setDefaultFromField",
        CopyValue = 7 => "copyValue",
        CopyFromClock = 8 => "copyFromClock",
        CopyFromCurrentUser = 9 => "copyFromCurrentUser",
        CopyFromField = 10 => "copyFromField",
        SetValueToEmpty = 11 => "setValueToEmpty",
        CopyFromServerClock = 12 => "copyFromServerClock",
        CopyFromServerCurrentUser = 13 => "copyFromServerCurrentUser",
        HideTargetField = 14 => "hideTargetField",
        DisallowValue = 15 => "disallowValue",
    }
}

// Processes

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateProcessModel {
    pub name: String,

    /// Id of the system process to inherit from (Agile, Scrum, CMMI, Basic).
    pub parent_process_type_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProcessModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProcessInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_process_type_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customization_type: Option<CustomizationType>,

    /// Present with [`GetProcessExpandLevel::Projects`].
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<TeamProjectReference>,
}

// Work item types

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateProcessWorkItemTypeRequest {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Hex color without `#`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Reference name of the parent type when deriving an inherited type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inherits_from: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_disabled: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProcessWorkItemTypeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_disabled: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WorkItemBehaviorReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WorkItemTypeBehavior {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub behavior: Option<WorkItemBehaviorReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_legacy_default: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProcessWorkItemType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inherits: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customization: Option<CustomizationType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<ProcessWorkItemTypeClass>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_disabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<FormLayout>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub states: Vec<WorkItemStateResultModel>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub behaviors: Vec<WorkItemTypeBehavior>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

// Fields

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AddProcessWorkItemTypeFieldRequest {
    pub reference_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_groups: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_values: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProcessWorkItemTypeFieldRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_groups: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_values: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProcessWorkItemTypeField {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_groups: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_locked: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_values: Vec<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customization: Option<CustomizationType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

// States

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WorkItemStateInputModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// `Proposed`, `InProgress`, `Resolved`, `Completed` or `Removed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WorkItemStateResultModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customization_type: Option<CustomizationType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Body of [`hide_state_definition`](super::WorkItemTrackingProcessClient::hide_state_definition).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct HideStateModel {
    pub hidden: bool,
}

// Rules

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RuleCondition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_type: Option<RuleConditionType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RuleAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_type: Option<RuleActionType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_field: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateProcessRuleRequest {
    pub name: String,

    #[serde(default)]
    pub conditions: Vec<RuleCondition>,

    #[serde(default)]
    pub actions: Vec<RuleAction>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_disabled: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProcessRuleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    #[serde(default)]
    pub conditions: Vec<RuleCondition>,

    #[serde(default)]
    pub actions: Vec<RuleAction>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_disabled: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<RuleCondition>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<RuleAction>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_disabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_system: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customization_type: Option<CustomizationType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

// Behaviors

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProcessBehaviorReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub behavior_ref_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProcessBehaviorField {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProcessBehaviorCreateRequest {
    pub name: String,

    /// Parent behavior, e.g. `System.PortfolioBacklogBehavior`.
    pub inherits: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProcessBehaviorUpdateRequest {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProcessBehavior {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inherits: Option<ProcessBehaviorReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customization: Option<CustomizationType>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<ProcessBehaviorField>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

// Lists

/// A picklist without its items.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PickListMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// `String`, `Integer` or `Double`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub list_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_suggested: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PickList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub list_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_suggested: Option<bool>,

    #[serde(default)]
    pub items: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_reads_projects() {
        let process: ProcessInfo = serde_json::from_str(
            r#"{
                "typeId": "adcc42ab-9882-485e-a3ed-7678f01f66bc",
                "name": "Agile",
                "customizationType": "system",
                "isDefault": true,
                "projects": [{"id": "p1", "name": "Fabrikam"}]
            }"#,
        )
        .unwrap();

        assert_eq!(process.customization_type, Some(CustomizationType::System));
        assert_eq!(process.projects[0].name.as_deref(), Some("Fabrikam"));
    }

    #[test]
    fn test_rule_body_uses_enum_names() {
        let rule = CreateProcessRuleRequest {
            name: "Require priority".into(),
            conditions: vec![RuleCondition {
                condition_type: Some(RuleConditionType::WhenWorkItemIsCreated),
                ..Default::default()
            }],
            actions: vec![RuleAction {
                action_type: Some(RuleActionType::MakeRequired),
                target_field: Some("Microsoft.VSTS.Common.Priority".into()),
                value: None,
            }],
            is_disabled: None,
        };

        let json = serde_json::to_value(&rule).unwrap();

        assert_eq!(json["conditions"][0]["conditionType"], "whenWorkItemIsCreated");
        assert_eq!(json["actions"][0]["actionType"], "makeRequired");
        assert!(json.get("isDisabled").is_none());
    }

    #[test]
    fn test_work_item_type_expand_combines() {
        let expand = GetWorkItemTypeExpand::States | GetWorkItemTypeExpand::Layout;

        assert!(expand.contains(GetWorkItemTypeExpand::Layout));
        assert_eq!(expand.to_string(), "states, layout");
    }

    #[test]
    fn test_field_type_is_named_type() {
        let field: ProcessWorkItemTypeField = serde_json::from_str(
            r#"{"referenceName":"Custom.Team","type":"picklistString","allowedValues":["A","B"]}"#,
        )
        .unwrap();

        assert_eq!(field.field_type, Some(FieldType::PicklistString));
        assert_eq!(field.allowed_values.len(), 2);
    }
}
