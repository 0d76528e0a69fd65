//! Sample application health

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validate::{Validate, require_text};

symbol_enum! {
    pub enum Health: "health" {
        Good => "GOOD",
        Bad => "BAD",
    }
}

/// Health of one entity (service, environment, workflow...) of the sample app
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleAppEntityStatus {
    pub entity_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<Health>,
}

impl Validate for SampleAppEntityStatus {
    fn validate(&self) -> Result<()> {
        require_text("SampleAppEntityStatus", "entityName", &self.entity_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleAppStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_type: Option<String>,
    #[serde(default)]
    pub status_list: Vec<SampleAppEntityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<Health>,
}

impl SampleAppStatus {
    /// Bad if any entity is bad, good if every entity reports good.
    /// `None` when an entity has not reported or the list is empty.
    pub fn rollup_health(&self) -> Option<Health> {
        if self
            .status_list
            .iter()
            .any(|status| status.health == Some(Health::Bad))
        {
            return Some(Health::Bad);
        }
        if !self.status_list.is_empty()
            && self
                .status_list
                .iter()
                .all(|status| status.health == Some(Health::Good))
        {
            return Some(Health::Good);
        }
        None
    }
}

impl Validate for SampleAppStatus {
    fn validate(&self) -> Result<()> {
        self.status_list.validate()
    }
}
