//! Azure resource references
//!
//! Every Azure resource shares the identity fields of
//! [`AzureResourceReference`]. Concrete resources embed that base by value
//! and add their own fields next to it; on the wire the base fields are
//! flattened into the same JSON object.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validate::{Validate, require_text};

/// Identity shared by all Azure resources
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureResourceReference {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
    /// ARM resource type, e.g. `Microsoft.ContainerRegistry/registries`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    /// Fully qualified ARM id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl AzureResourceReference {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let reference = Self {
            name: name.into(),
            ..Self::default()
        };
        reference.validate()?;
        Ok(reference)
    }
}

impl Validate for AzureResourceReference {
    fn validate(&self) -> Result<()> {
        require_text("AzureResourceReference", "name", &self.name)
    }
}

/// Azure Container Registry
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureContainerRegistry {
    #[serde(flatten)]
    pub reference: AzureResourceReference,
    /// Registry host, e.g. `myregistry.azurecr.io`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_server: Option<String>,
}

impl Validate for AzureContainerRegistry {
    fn validate(&self) -> Result<()> {
        self.reference.validate()
    }
}

/// Azure Kubernetes Service cluster
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AzureKubernetesCluster {
    #[serde(flatten)]
    pub reference: AzureResourceReference,
}

impl Validate for AzureKubernetesCluster {
    fn validate(&self) -> Result<()> {
        self.reference.validate()
    }
}

/// Any Azure resource reference, tagged by `kind`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AzureResource {
    ContainerRegistry(AzureContainerRegistry),
    KubernetesCluster(AzureKubernetesCluster),
}

impl AzureResource {
    /// Shared identity fields of the wrapped resource
    pub fn reference(&self) -> &AzureResourceReference {
        match self {
            AzureResource::ContainerRegistry(registry) => &registry.reference,
            AzureResource::KubernetesCluster(cluster) => &cluster.reference,
        }
    }

    pub fn name(&self) -> &str {
        &self.reference().name
    }
}

impl From<AzureContainerRegistry> for AzureResource {
    fn from(registry: AzureContainerRegistry) -> Self {
        AzureResource::ContainerRegistry(registry)
    }
}

impl From<AzureKubernetesCluster> for AzureResource {
    fn from(cluster: AzureKubernetesCluster) -> Self {
        AzureResource::KubernetesCluster(cluster)
    }
}

impl Validate for AzureResource {
    fn validate(&self) -> Result<()> {
        self.reference().validate()
    }
}

/// A resource tag and every value it takes in a subscription
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureTagDetails {
    pub tag_name: String,
    #[serde(default)]
    pub values: BTreeSet<String>,
}

impl Validate for AzureTagDetails {
    fn validate(&self) -> Result<()> {
        require_text("AzureTagDetails", "tagName", &self.tag_name)
    }
}

/// Shared image gallery
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureImageGallery {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_name: Option<String>,
}

impl Validate for AzureImageGallery {
    fn validate(&self) -> Result<()> {
        require_text("AzureImageGallery", "name", &self.name)
    }
}
