//! Type catalog
//!
//! Maps kebab-case names to every record and enumeration in the crate so
//! tools can decode, validate and list them without knowing the Rust type.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::account::{
    AccountStatus, AccountType, EmbeddedUser, EnvironmentType, LicenseInfo, TechStack, UrlInfo,
};
use crate::domain::aws::{
    AwsElbListener, AwsLoadBalancerDetails, AwsSecurityGroup, AwsSubnet, AwsVpc, LoadBalancerType,
};
use crate::domain::azure::{
    AzureContainerRegistry, AzureImageGallery, AzureKubernetesCluster, AzureResource,
    AzureResourceReference, AzureTagDetails,
};
use crate::domain::delegate::{
    DelegateInstanceStatus, DelegateSize, DelegateSizeDetails, DelegateTokenStatus, SelectorType,
};
use crate::domain::execution::{CommandExecutionStatus, ExecutionStatus};
use crate::domain::pipeline::{PipelineStageGroupedInfo, PipelineSummary};
use crate::domain::sample_app::{Health, SampleAppEntityStatus, SampleAppStatus};
use crate::domain::workflow::{
    ExecutionStrategy, NameValuePair, OrchestrationWorkflowType, Variable, VariableType,
    WorkflowCategorySteps, WorkflowCategoryStepsMeta, WorkflowStepMeta, WorkflowType,
};
use crate::dto::broadcast::{DelegateTaskBroadcast, PerpetualTaskBroadcastEvent};
use crate::dto::webhook::{
    ExecutionStatusReport, HttpMethod, WebHookRequest, WebHookResponse, WebHookToken,
    WebhookSource,
};
use crate::error::{BeanError, Result};
use crate::symbol::{Symbol, pairs};
use crate::validate::{Validate, decode};

symbol_enum! {
    /// Every record type known to the catalog
    pub enum BeanKind: "bean-kind" {
        UrlInfo => "url-info",
        TechStack => "tech-stack",
        LicenseInfo => "license-info",
        EmbeddedUser => "embedded-user",
        AzureResourceReference => "azure-resource-reference",
        AzureContainerRegistry => "azure-container-registry",
        AzureKubernetesCluster => "azure-kubernetes-cluster",
        AzureResource => "azure-resource",
        AzureTagDetails => "azure-tag-details",
        AzureImageGallery => "azure-image-gallery",
        AwsElbListener => "aws-elb-listener",
        AwsSecurityGroup => "aws-security-group",
        AwsVpc => "aws-vpc",
        AwsSubnet => "aws-subnet",
        AwsLoadBalancerDetails => "aws-load-balancer-details",
        DelegateSizeDetails => "delegate-size-details",
        Variable => "variable",
        NameValuePair => "name-value-pair",
        WorkflowStepMeta => "workflow-step-meta",
        WorkflowCategoryStepsMeta => "workflow-category-steps-meta",
        WorkflowCategorySteps => "workflow-category-steps",
        PipelineStageGroupedInfo => "pipeline-stage-grouped-info",
        PipelineSummary => "pipeline-summary",
        SampleAppEntityStatus => "sample-app-entity-status",
        SampleAppStatus => "sample-app-status",
        WebHookToken => "web-hook-token",
        WebHookRequest => "web-hook-request",
        WebHookResponse => "web-hook-response",
        ExecutionStatusReport => "execution-status-report",
        DelegateTaskBroadcast => "delegate-task-broadcast",
        PerpetualTaskBroadcastEvent => "perpetual-task-broadcast-event",
    }
}

fn canonical<T>(json: &str) -> Result<Value>
where
    T: DeserializeOwned + Serialize + Validate,
{
    let record: T = decode(json)?;
    Ok(serde_json::to_value(&record)?)
}

impl BeanKind {
    /// Look up a record kind by name
    pub fn lookup(name: &str) -> Result<Self> {
        Self::from_symbol(name).map_err(|_| BeanError::UnknownKind(name.to_string()))
    }

    /// Decode `json` as this kind, check required fields and re-encode.
    ///
    /// The result drops unknown keys and omits absent optional fields.
    pub fn canonicalize(&self, json: &str) -> Result<Value> {
        match self {
            BeanKind::UrlInfo => canonical::<UrlInfo>(json),
            BeanKind::TechStack => canonical::<TechStack>(json),
            BeanKind::LicenseInfo => canonical::<LicenseInfo>(json),
            BeanKind::EmbeddedUser => canonical::<EmbeddedUser>(json),
            BeanKind::AzureResourceReference => canonical::<AzureResourceReference>(json),
            BeanKind::AzureContainerRegistry => canonical::<AzureContainerRegistry>(json),
            BeanKind::AzureKubernetesCluster => canonical::<AzureKubernetesCluster>(json),
            BeanKind::AzureResource => canonical::<AzureResource>(json),
            BeanKind::AzureTagDetails => canonical::<AzureTagDetails>(json),
            BeanKind::AzureImageGallery => canonical::<AzureImageGallery>(json),
            BeanKind::AwsElbListener => canonical::<AwsElbListener>(json),
            BeanKind::AwsSecurityGroup => canonical::<AwsSecurityGroup>(json),
            BeanKind::AwsVpc => canonical::<AwsVpc>(json),
            BeanKind::AwsSubnet => canonical::<AwsSubnet>(json),
            BeanKind::AwsLoadBalancerDetails => canonical::<AwsLoadBalancerDetails>(json),
            BeanKind::DelegateSizeDetails => canonical::<DelegateSizeDetails>(json),
            BeanKind::Variable => canonical::<Variable>(json),
            BeanKind::NameValuePair => canonical::<NameValuePair>(json),
            BeanKind::WorkflowStepMeta => canonical::<WorkflowStepMeta>(json),
            BeanKind::WorkflowCategoryStepsMeta => canonical::<WorkflowCategoryStepsMeta>(json),
            BeanKind::WorkflowCategorySteps => canonical::<WorkflowCategorySteps>(json),
            BeanKind::PipelineStageGroupedInfo => canonical::<PipelineStageGroupedInfo>(json),
            BeanKind::PipelineSummary => canonical::<PipelineSummary>(json),
            BeanKind::SampleAppEntityStatus => canonical::<SampleAppEntityStatus>(json),
            BeanKind::SampleAppStatus => canonical::<SampleAppStatus>(json),
            BeanKind::WebHookToken => canonical::<WebHookToken>(json),
            BeanKind::WebHookRequest => canonical::<WebHookRequest>(json),
            BeanKind::WebHookResponse => canonical::<WebHookResponse>(json),
            BeanKind::ExecutionStatusReport => canonical::<ExecutionStatusReport>(json),
            BeanKind::DelegateTaskBroadcast => canonical::<DelegateTaskBroadcast>(json),
            BeanKind::PerpetualTaskBroadcastEvent => {
                canonical::<PerpetualTaskBroadcastEvent>(json)
            }
        }
    }
}

symbol_enum! {
    /// Every enumeration known to the catalog
    pub enum EnumKind: "enum-kind" {
        AccountType => "account-type",
        AccountStatus => "account-status",
        EnvironmentType => "environment-type",
        LoadBalancerType => "load-balancer-type",
        SelectorType => "selector-type",
        DelegateInstanceStatus => "delegate-instance-status",
        DelegateSize => "delegate-size",
        DelegateTokenStatus => "delegate-token-status",
        ExecutionStatus => "execution-status",
        CommandExecutionStatus => "command-execution-status",
        ExecutionStrategy => "execution-strategy",
        VariableType => "variable-type",
        WorkflowType => "workflow-type",
        OrchestrationWorkflowType => "orchestration-workflow-type",
        Health => "health",
        HttpMethod => "http-method",
        WebhookSource => "webhook-source",
    }
}

fn checked<T: Symbol>(value: &str) -> Result<&'static str> {
    T::from_symbol(value).map(|member| member.as_str())
}

impl EnumKind {
    /// Look up an enumeration by name
    pub fn lookup(name: &str) -> Result<Self> {
        Self::from_symbol(name).map_err(|_| BeanError::UnknownKind(name.to_string()))
    }

    /// `(symbol, label)` pairs in declared order
    pub fn symbols(&self) -> Vec<(&'static str, &'static str)> {
        match self {
            EnumKind::AccountType => pairs::<AccountType>(),
            EnumKind::AccountStatus => pairs::<AccountStatus>(),
            EnumKind::EnvironmentType => pairs::<EnvironmentType>(),
            EnumKind::LoadBalancerType => pairs::<LoadBalancerType>(),
            EnumKind::SelectorType => pairs::<SelectorType>(),
            EnumKind::DelegateInstanceStatus => pairs::<DelegateInstanceStatus>(),
            EnumKind::DelegateSize => pairs::<DelegateSize>(),
            EnumKind::DelegateTokenStatus => pairs::<DelegateTokenStatus>(),
            EnumKind::ExecutionStatus => pairs::<ExecutionStatus>(),
            EnumKind::CommandExecutionStatus => pairs::<CommandExecutionStatus>(),
            EnumKind::ExecutionStrategy => pairs::<ExecutionStrategy>(),
            EnumKind::VariableType => pairs::<VariableType>(),
            EnumKind::WorkflowType => pairs::<WorkflowType>(),
            EnumKind::OrchestrationWorkflowType => pairs::<OrchestrationWorkflowType>(),
            EnumKind::Health => pairs::<Health>(),
            EnumKind::HttpMethod => pairs::<HttpMethod>(),
            EnumKind::WebhookSource => pairs::<WebhookSource>(),
        }
    }

    /// Check that `value` is a member and return its canonical symbol
    pub fn parse(&self, value: &str) -> Result<&'static str> {
        match self {
            EnumKind::AccountType => checked::<AccountType>(value),
            EnumKind::AccountStatus => checked::<AccountStatus>(value),
            EnumKind::EnvironmentType => checked::<EnvironmentType>(value),
            EnumKind::LoadBalancerType => checked::<LoadBalancerType>(value),
            EnumKind::SelectorType => checked::<SelectorType>(value),
            EnumKind::DelegateInstanceStatus => checked::<DelegateInstanceStatus>(value),
            EnumKind::DelegateSize => checked::<DelegateSize>(value),
            EnumKind::DelegateTokenStatus => checked::<DelegateTokenStatus>(value),
            EnumKind::ExecutionStatus => checked::<ExecutionStatus>(value),
            EnumKind::CommandExecutionStatus => checked::<CommandExecutionStatus>(value),
            EnumKind::ExecutionStrategy => checked::<ExecutionStrategy>(value),
            EnumKind::VariableType => checked::<VariableType>(value),
            EnumKind::WorkflowType => checked::<WorkflowType>(value),
            EnumKind::OrchestrationWorkflowType => checked::<OrchestrationWorkflowType>(value),
            EnumKind::Health => checked::<Health>(value),
            EnumKind::HttpMethod => checked::<HttpMethod>(value),
            EnumKind::WebhookSource => checked::<WebhookSource>(value),
        }
    }
}
