//! Pipeline grouping records

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validate::{Validate, require_text};

/// Consecutive pipeline stages that run as one parallel group
///
/// Used when offering the stages a failed pipeline can resume from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineStageGroupedInfo {
    pub name: String,
    #[serde(default)]
    pub pipeline_stage_element_names: Vec<String>,
    #[serde(default)]
    pub parallel_index: i32,
}

impl PipelineStageGroupedInfo {
    pub fn new(
        name: impl Into<String>,
        pipeline_stage_element_names: Vec<String>,
        parallel_index: i32,
    ) -> Result<Self> {
        let info = Self {
            name: name.into(),
            pipeline_stage_element_names,
            parallel_index,
        };
        info.validate()?;
        Ok(info)
    }
}

impl Validate for PipelineStageGroupedInfo {
    fn validate(&self) -> Result<()> {
        require_text("PipelineStageGroupedInfo", "name", &self.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_name: Option<String>,
}

impl Validate for PipelineSummary {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouped_info_keeps_element_order() {
        let info = PipelineStageGroupedInfo::new(
            "ps2",
            vec!["pse211".into(), "pse212".into(), "pse22".into()],
            2,
        )
        .unwrap();
        assert_eq!(info.name, "ps2");
        assert_eq!(info.pipeline_stage_element_names, vec!["pse211", "pse212", "pse22"]);
        assert_eq!(info.parallel_index, 2);

        let json = serde_json::to_string(&info).unwrap();
        assert_eq!(
            json,
            r#"{"name":"ps2","pipelineStageElementNames":["pse211","pse212","pse22"],"parallelIndex":2}"#
        );
    }

    #[test]
    fn test_grouped_info_requires_name() {
        assert!(PipelineStageGroupedInfo::new("", vec![], 1).is_err());
    }

    #[test]
    fn test_summary_differs_on_one_field() {
        let a = PipelineSummary {
            pipeline_id: Some("p1".to_string()),
            pipeline_name: Some("deploy".to_string()),
        };
        let mut b = a.clone();
        assert_eq!(a, b);
        b.pipeline_name = Some("rollback".to_string());
        assert_ne!(a, b);
    }
}
