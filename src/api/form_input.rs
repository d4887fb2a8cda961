//
//  azure-devops-rest
//  api/form_input.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Input descriptors that describe configurable fields of service endpoint
//! types, service hook publishers and consumers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::vss_enum;

vss_enum! {
    pub enum InputDataType {
        None = 0 => "none",
        String = 10 => "string",
        Number = 20 => "number",
        Boolean = 30 => "boolean",
        Guid = 40 => "guid",
        Uri = 50 => "uri",
    }
}

vss_enum! {
    /// How an input is rendered in the UI.
    pub enum InputMode {
        None = 0 => "none",
        TextBox = 10 => "textBox",
        PasswordBox = 20 => "passwordBox",
        Combo = 30 => "combo",
        RadioButtons = 40 => "radioButtons",
        CheckBox = 50 => "checkBox",
        TextArea = 60 => "textArea",
    }
}

vss_enum! {
    pub enum InputFilterOperator {
        Equals = 0 => "equals",
        NotEquals = 1 => "notEquals",
    }
}

/// Describes one input of a form.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependency_input_ids: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_dynamic_value_information: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_mode: Option<InputMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_confidential: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<HashMap<String, Value>>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_in_default_description: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<InputValidation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_hint: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<InputValues>,
}

/// Validation constraints of an input.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InputValidation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<InputDataType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_required: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_mismatch_error_message: Option<String>,
}

/// One possible value of an input.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InputValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<HashMap<String, Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InputValuesError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Possible and default values of an input.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InputValues {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<InputValuesError>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_disabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_limited_to_possible_values: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_read_only: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub possible_values: Vec<InputValue>,
}

/// Request and response body of an input values query.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InputValuesQuery {
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub current_values: HashMap<String, String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub input_values: Vec<InputValues>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InputFilterCondition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<InputFilterOperator>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,
}

/// Filter whose conditions must all hold.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InputFilter {
    #[serde(default)]
    pub conditions: Vec<InputFilterCondition>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_reads_numeric_and_named_enums() {
        let descriptor: InputDescriptor = serde_json::from_str(
            r#"{
                "id": "url",
                "name": "URL",
                "inputMode": 10,
                "type": "string",
                "validation": {"dataType": "uri", "isRequired": true},
                "values": {"possibleValues": [{"value": "a", "displayValue": "A"}]}
            }"#,
        )
        .unwrap();

        assert_eq!(descriptor.input_mode, Some(InputMode::TextBox));
        assert_eq!(
            descriptor.validation.and_then(|v| v.data_type),
            Some(InputDataType::Uri)
        );
        assert_eq!(descriptor.values.unwrap().possible_values.len(), 1);
    }
}
