//! Workflow definition records

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validate::{Validate, require_text};

symbol_enum! {
    /// Order in which a multi-artifact execution runs
    pub enum ExecutionStrategy: "execution-strategy" {
        Serial => "SERIAL",
        Parallel => "PARALLEL",
    }
}

symbol_enum! {
    pub enum VariableType: "variable-type" {
        Text => "TEXT",
        Entity => "ENTITY",
        Artifact => "ARTIFACT",
        Manifest => "MANIFEST",
    }
}

symbol_enum! {
    pub enum WorkflowType: "workflow-type" {
        Pipeline => "PIPELINE",
        Orchestration => "ORCHESTRATION",
        Simple => "SIMPLE",
    }
}

symbol_enum! {
    /// Deployment shape of an orchestration workflow
    pub enum OrchestrationWorkflowType: "orchestration-workflow-type" {
        Build => "BUILD",
        Basic => "BASIC",
        Canary => "CANARY",
        MultiService => "MULTI_SERVICE" ("Multi-Service"),
        BlueGreen => "BLUE_GREEN" ("Blue/Green"),
        Rolling => "ROLLING",
        Custom => "CUSTOM",
    }
}

/// User defined workflow variable
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub mandatory: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default)]
    pub fixed: bool,
    /// Comma separated list of accepted values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub variable_type: Option<VariableType>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl Variable {
    pub fn new(name: impl Into<String>, variable_type: VariableType) -> Result<Self> {
        let variable = Self {
            name: name.into(),
            variable_type: Some(variable_type),
            ..Self::default()
        };
        variable.validate()?;
        Ok(variable)
    }

    /// `allowedValues` split on commas, blanks dropped
    pub fn allowed_list(&self) -> Vec<&str> {
        self.allowed_values
            .as_deref()
            .map(|values| {
                values
                    .split(',')
                    .map(str::trim)
                    .filter(|value| !value.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Validate for Variable {
    fn validate(&self) -> Result<()> {
        require_text("Variable", "name", &self.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameValuePair {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
}

impl NameValuePair {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let pair = Self {
            name: name.into(),
            value: Some(value.into()),
            value_type: None,
        };
        pair.validate()?;
        Ok(pair)
    }
}

impl Validate for NameValuePair {
    fn validate(&self) -> Result<()> {
        require_text("NameValuePair", "name", &self.name)
    }
}

/// Step entry shown in the workflow step picker
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStepMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub available: bool,
}

impl Validate for WorkflowStepMeta {}

/// Step picker category, referencing steps by type id
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowCategoryStepsMeta {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub step_ids: Vec<String>,
}

impl Validate for WorkflowCategoryStepsMeta {
    fn validate(&self) -> Result<()> {
        require_text("WorkflowCategoryStepsMeta", "id", &self.id)
    }
}

/// Every step available in a workflow phase, grouped into categories
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowCategorySteps {
    #[serde(default)]
    pub steps: BTreeMap<String, WorkflowStepMeta>,
    #[serde(default)]
    pub categories: Vec<WorkflowCategoryStepsMeta>,
}

impl WorkflowCategorySteps {
    pub fn category(&self, id: &str) -> Option<&WorkflowCategoryStepsMeta> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Steps of a category that are present in the step table, in category order
    pub fn steps_in<'a>(
        &'a self,
        id: &str,
    ) -> impl Iterator<Item = (&'a str, &'a WorkflowStepMeta)> + 'a {
        self.category(id)
            .into_iter()
            .flat_map(|category| category.step_ids.iter())
            .filter_map(|step_id| {
                self.steps
                    .get(step_id)
                    .map(|meta| (step_id.as_str(), meta))
            })
    }
}

impl Validate for WorkflowCategorySteps {
    fn validate(&self) -> Result<()> {
        self.categories.validate()
    }
}
