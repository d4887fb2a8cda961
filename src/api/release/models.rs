//
//  azure-devops-rest
//  api/release/models.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Release management records.
//!
//! A [`ReleaseDefinition`] describes the pipeline; each [`Release`] is one
//! run of it and holds one [`ReleaseEnvironment`] per stage. Stages are gated
//! by [`ReleaseApproval`]s, [`ReleaseGates`] and [`ManualIntervention`]s, and
//! each attempt to deploy a stage is a [`Deployment`].

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::common::{
    vss_enum, vss_flags, IdentityRef, PropertiesCollection, ReferenceLinks, TeamProjectReference,
};

vss_flags! {
    /// Extra data to include with a release.
    pub struct ReleaseExpands {
        const None = 0 => "none";
        const Environments = 2 => "environments";
        const Artifacts = 4 => "artifacts";
        const Approvals = 8 => "approvals";
        const ManualInterventions = 16 => "manualInterventions";
        const Variables = 32 => "variables";
        const Tags = 64 => "tags";
    }
}

vss_flags! {
    /// Extra data to include with a release definition.
    pub struct ReleaseDefinitionExpands {
        const None = 0 => "none";
        const Environments = 2 => "environments";
        const Artifacts = 4 => "artifacts";
        const Triggers = 8 => "triggers";
        const Variables = 16 => "variables";
        const Tags = 32 => "tags";
        const LastRelease = 64 => "lastRelease";
    }
}

vss_flags! {
    pub struct ReleaseStatus {
        const Undefined = 0 => "undefined";
        const Draft = 1 => "draft";
        const Active = 2 => "active";
        const Abandoned = 4 => "abandoned";
    }
}

vss_flags! {
    pub struct EnvironmentStatus {
        const Undefined = 0 => "undefined";
        const NotStarted = 1 => "notStarted";
        const InProgress = 2 => "inProgress";
        const Succeeded = 4 => "succeeded";
        const Canceled = 8 => "canceled";
        const Rejected = 16 => "rejected";
        const Queued = 32 => "queued";
        const Scheduled = 64 => "scheduled";
        const PartiallySucceeded = 128 => "partiallySucceeded";
    }
}

vss_flags! {
    pub struct ApprovalStatus {
        const Undefined = 0 => "undefined";
        const Pending = 1 => "pending";
        const Approved = 2 => "approved";
        const Rejected = 4 => "rejected";
        const Reassigned = 6 => "reassigned";
        const Canceled = 7 => "canceled";
        const Skipped = 8 => "skipped";
    }
}

vss_flags! {
    pub struct ApprovalType {
        const Undefined = 0 => "undefined";
        const PreDeploy = 1 => "preDeploy";
        const PostDeploy = 2 => "postDeploy";
        const All = 3 => "all";
    }
}

vss_flags! {
    pub struct DeploymentStatus {
        const Undefined = 0 => "undefined";
        const NotDeployed = 1 => "notDeployed";
        const InProgress = 2 => "inProgress";
        const Succeeded = 4 => "succeeded";
        const PartiallySucceeded = 8 => "partiallySucceeded";
        const Failed = 16 => "failed";
        const All = 31 => "all";
    }
}

vss_flags! {
    pub struct DeploymentOperationStatus {
        const Undefined = 0 => "undefined";
        const Queued = 1 => "queued";
        const Scheduled = 2 => "scheduled";
        const Pending = 4 => "pending";
        const Approved = 8 => "approved";
        const Rejected = 16 => "rejected";
        const Deferred = 32 => "deferred";
        const QueuedForAgent = 64 => "queuedForAgent";
        const PhaseInProgress = 128 => "phaseInProgress";
        const PhaseSucceeded = 256 => "phaseSucceeded";
        const PhasePartiallySucceeded = 512 => "phasePartiallySucceeded";
        const PhaseFailed = 1024 => "phaseFailed";
        const Canceled = 2048 => "canceled";
        const PhaseCanceled = 4096 => "phaseCanceled";
        const ManualInterventionPending = 8192 => "manualInterventionPending";
        const QueuedForPipeline = 16384 => "queuedForPipeline";
        const Cancelling = 32768 => "cancelling";
        const EvaluatingGates = 65536 => "evaluatingGates";
        const GateFailed = 131072 => "gateFailed";
        const All = 258047 => "all";
    }
}

vss_flags! {
    pub struct DeploymentReason {
        const None = 0 => "none";
        const Manual = 1 => "manual";
        const Automated = 2 => "automated";
        const Scheduled = 4 => "scheduled";
        const RedeployTrigger = 8 => "redeployTrigger";
    }
}

vss_enum! {
    pub enum ReleaseReason {
        None = 0 => "none",
        Manual = 1 => "manual",
        ContinuousIntegration = 2 => "continuousIntegration",
        Schedule = 3 => "schedule",
        PullRequest = 4 => "pullRequest",
    }
}

vss_enum! {
    pub enum ReleaseQueryOrder {
        Descending = 0 => "descending",
        Ascending = 1 => "ascending",
    }
}

vss_enum! {
    pub enum ReleaseDefinitionQueryOrder {
        IdAscending = 0 => "idAscending",
        IdDescending = 1 => "idDescending",
        NameAscending = 2 => "nameAscending",
        NameDescending = 3 => "nameDescending",
    }
}

vss_enum! {
    pub enum ReleaseDefinitionSource {
        Undefined = 0 => "undefined",
        RestApi = 1 => "restApi",
        UserInterface = 2 => "userInterface",
        Ibiza = 4 => "ibiza",
        PortalExtensionApi = 8 => "portalExtensionApi",
    }
}

vss_enum! {
    pub enum ManualInterventionStatus {
        Unknown = 0 => "unknown",
        Pending = 1 => "pending",
        Rejected = 2 => "rejected",
        Approved = 4 => "approved",
        Canceled = 8 => "canceled",
    }
}

vss_enum! {
    pub enum GateStatus {
        None = 0 => "none",
        Pending = 1 => "pending",
        InProgress = 2 => "inProgress",
        Succeeded = 4 => "succeeded",
        Failed = 8 => "failed",
        Canceled = 16 => "canceled",
    }
}

vss_enum! {
    pub enum SingleReleaseExpands {
        None = 0 => "none",
        Tasks = 1 => "tasks",
    }
}

vss_enum! {
    pub enum ReleaseEnvironmentExpands {
        None = 0 => "none",
        Tasks = 1 => "tasks",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationVariableValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_secret: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_override: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub artifact_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_primary: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_retained: Option<bool>,

    /// Artifact source details keyed by name (`version`, `definition`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition_reference: Option<HashMap<String, Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseDefinitionEnvironment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<IdentityRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<HashMap<String, ConfigurationVariableValue>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_deploy_approvals: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_deploy_approvals: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deploy_phases: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention_policy: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_name_format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ReleaseDefinitionSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<IdentityRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<IdentityRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub environments: Vec<ReleaseDefinitionEnvironment>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub artifacts: Vec<Artifact>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub triggers: Vec<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<HashMap<String, ConfigurationVariableValue>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variable_groups: Vec<i32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<PropertiesCollection>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<ReferenceLinks>,
}

/// Short reference to a release, definition or environment.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ShallowReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<ReferenceLinks>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReleaseStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<ReleaseReason>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_definition: Option<ShallowReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_definition_revision: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_reference: Option<TeamProjectReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<IdentityRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<IdentityRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_forever: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logs_container_url: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub environments: Vec<ReleaseEnvironment>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub artifacts: Vec<Artifact>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<HashMap<String, ConfigurationVariableValue>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<PropertiesCollection>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<ReferenceLinks>,
}

/// Artifact version pinned when starting a release.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactMetadata {
    pub alias: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_reference: Option<BuildVersion>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BuildVersion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_branch: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_version: Option<String>,
}

/// Body of a create-release call.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseStartMetadata {
    pub definition_id: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_draft: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<ReleaseReason>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub artifacts: Vec<ArtifactMetadata>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub manual_environments: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<HashMap<String, ConfigurationVariableValue>>,
}

/// Body of a release patch: status, keep-forever, tags and so on.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseUpdateMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_forever: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_environments: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReleaseStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseEnvironment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EnvironmentStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition_environment_id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<IdentityRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_deployment_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_deploy: Option<f64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pre_deploy_approvals: Vec<ReleaseApproval>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub post_deploy_approvals: Vec<ReleaseApproval>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deploy_steps: Vec<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<HashMap<String, ConfigurationVariableValue>>,
}

/// Body of a stage patch, used to deploy, cancel or reschedule a stage.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseEnvironmentUpdateMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EnvironmentStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_deployment_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<HashMap<String, ConfigurationVariableValue>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseApproval {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ApprovalStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_type: Option<ApprovalType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub approver: Option<IdentityRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<IdentityRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempt: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_automated: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<ShallowReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_definition: Option<ShallowReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_environment: Option<ShallowReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ReleaseApproval {
    /// Body that approves or rejects with a comment.
    pub fn decision(status: ApprovalStatus, comments: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            comments: Some(comments.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempt: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_status: Option<DeploymentStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_status: Option<DeploymentOperationStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<DeploymentReason>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<ShallowReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_definition: Option<ShallowReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_environment: Option<ShallowReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_by: Option<IdentityRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_for: Option<IdentityRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub queued_on: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_on: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_on: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_on: Option<DateTime<Utc>>,

    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<ReferenceLinks>,
}

/// Body of a gate patch that ignores selected gates.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GateUpdateMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gates_to_ignore: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseGates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<GateStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_plan_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_on: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_on: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stabilization_completed_on: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub succeeding_since: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignored_gates: Option<Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deployment_jobs: Vec<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ManualIntervention {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ManualInterventionStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub approver: Option<IdentityRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<ShallowReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_environment: Option<ShallowReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ManualInterventionUpdateMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ManualInterventionStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_filters_combine() {
        let filter = EnvironmentStatus::Succeeded | EnvironmentStatus::PartiallySucceeded;

        assert_eq!(filter.bits(), 132);
        assert_eq!(filter.to_string(), "succeeded, partiallySucceeded");
    }

    #[test]
    fn test_composite_approval_status_keeps_its_own_name() {
        assert_eq!(ApprovalStatus::Reassigned.to_string(), "reassigned");

        let status: ApprovalStatus = serde_json::from_str("\"canceled\"").unwrap();
        assert_eq!(status.bits(), 7);
    }

    #[test]
    fn test_release_reads_server_payload() {
        let release: Release = serde_json::from_str(
            r#"{
                "id": 18,
                "name": "Release-18",
                "status": "active",
                "reason": "manual",
                "releaseDefinition": {"id": 1, "name": "Fabrikam.CD"},
                "environments": [{"id": 5, "name": "Dev", "status": "succeeded"}],
                "keepForever": false
            }"#,
        )
        .unwrap();

        assert_eq!(release.status, Some(ReleaseStatus::Active));
        assert_eq!(release.reason, Some(ReleaseReason::Manual));
        assert_eq!(release.environments[0].status, Some(EnvironmentStatus::Succeeded));
        assert_eq!(
            release.release_definition.and_then(|d| d.name).as_deref(),
            Some("Fabrikam.CD")
        );
    }
}
