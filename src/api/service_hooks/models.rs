//
//  azure-devops-rest
//  api/service_hooks/models.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Service hook records.
//!
//! A *publisher* (`tfs`, `rm`, ...) raises events of several *event types*; a
//! *subscription* routes one event type through a *consumer action*
//! (`webHooks/httpRequest`, `slack/postMessageToChannel`, ...). Each delivery
//! attempt is recorded as a *notification*.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::common::{vss_enum, IdentityRef, ReferenceLinks};
use crate::api::form_input::{InputDescriptor, InputFilter};

vss_enum! {
    pub enum SubscriptionStatus {
        Enabled = 0 => "enabled",
        OnProbation = 10 => "onProbation",
        DisabledByUser = 20 => "disabledByUser",
        DisabledBySystem = 30 => "disabledBySystem",
        DisabledByInactiveIdentity = 40 => "disabledByInactiveIdentity",
    }
}

vss_enum! {
    pub enum NotificationStatus {
        Queued = 10 => "queued",
        Processing = 20 => "processing",
        RequestInProgress = 30 => "requestInProgress",
        Completed = 100 => "completed",
    }
}

vss_enum! {
    pub enum NotificationResult {
        Pending = 0 => "pending",
        Succeeded = 10 => "succeeded",
        Failed = 20 => "failed",
        Filtered = 30 => "filtered",
    }
}

vss_enum! {
    pub enum AuthenticationType {
        None = 0 => "none",
        OAuth = 1 => "oAuth",
        External = 2 => "external",
    }
}

vss_enum! {
    pub enum SubscriptionInputScope {
        Publisher = 10 => "publisher",
        Consumer = 20 => "consumer",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EventTypeDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher_id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub input_descriptors: Vec<InputDescriptor>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supported_resource_versions: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Publisher {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_instance_type: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supported_events: Vec<EventTypeDescriptor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_descriptors: Option<Vec<InputDescriptor>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<ReferenceLinks>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConsumerAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_resource_version_override: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub input_descriptors: Vec<InputDescriptor>,

    /// Supported resource versions keyed by event type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_resource_versions: Option<HashMap<String, Vec<String>>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supported_event_types: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<ReferenceLinks>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Consumer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_type: Option<AuthenticationType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub information_url: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<ConsumerAction>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub input_descriptors: Vec<InputDescriptor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<ReferenceLinks>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_action_id: Option<String>,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub publisher_inputs: HashMap<String, String>,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub consumer_inputs: HashMap<String, String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SubscriptionStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub probation_retries: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<IdentityRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<IdentityRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<ReferenceLinks>,
}

/// Body of a subscriptions query; the matching subscriptions come back in
/// `results`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_action_id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub publisher_input_filters: Vec<InputFilter>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub consumer_input_filters: Vec<InputFilter>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber_id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<Subscription>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_action_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<Value>,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub publisher_inputs: HashMap<String, String>,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub consumer_inputs: HashMap<String, String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub queued_date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dequeued_date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<NotificationStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<NotificationResult>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<NotificationDetails>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<DateTime<Utc>>,

    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<ReferenceLinks>,
}
