//! Delegate broadcast DTOs
//!
//! Messages pushed to connected delegates over the broadcast channel.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validate::{Validate, require_text};

/// Announces a task that eligible delegates may acquire
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegateTaskBroadcast {
    /// Delegate version the task requires
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub account_id: String,
    pub task_id: String,
    #[serde(rename = "async", default)]
    pub is_async: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_assigned_delegate_id: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub already_tried_delegates: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub broadcast_to_delegates_ids: Vec<String>,
}

impl DelegateTaskBroadcast {
    pub fn new(account_id: impl Into<String>, task_id: impl Into<String>) -> Result<Self> {
        let broadcast = Self {
            account_id: account_id.into(),
            task_id: task_id.into(),
            ..Self::default()
        };
        broadcast.validate()?;
        Ok(broadcast)
    }

    /// Whether a delegate is a target of this broadcast.
    ///
    /// An empty target list addresses every delegate of the account; delegates
    /// that already tried the task are excluded either way.
    pub fn targets(&self, delegate_id: &str) -> bool {
        if self.already_tried_delegates.contains(delegate_id) {
            return false;
        }
        self.broadcast_to_delegates_ids.is_empty()
            || self
                .broadcast_to_delegates_ids
                .iter()
                .any(|id| id == delegate_id)
    }
}

impl Validate for DelegateTaskBroadcast {
    fn validate(&self) -> Result<()> {
        require_text("DelegateTaskBroadcast", "accountId", &self.account_id)?;
        require_text("DelegateTaskBroadcast", "taskId", &self.task_id)
    }
}

/// Perpetual task lifecycle event addressed to one delegate
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerpetualTaskBroadcastEvent {
    pub event_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broadcast_delegate_id: Option<String>,
}

impl PerpetualTaskBroadcastEvent {
    pub fn new(event_type: impl Into<String>, broadcast_delegate_id: Option<String>) -> Result<Self> {
        let event = Self {
            event_type: event_type.into(),
            broadcast_delegate_id,
        };
        event.validate()?;
        Ok(event)
    }
}

impl Validate for PerpetualTaskBroadcastEvent {
    fn validate(&self) -> Result<()> {
        require_text("PerpetualTaskBroadcastEvent", "eventType", &self.event_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_task_broadcast_wire_names() {
        let broadcast = DelegateTaskBroadcast {
            version: Some("1.0.77".to_string()),
            account_id: "acc-1".to_string(),
            task_id: "task-1".to_string(),
            is_async: true,
            pre_assigned_delegate_id: Some("d-1".to_string()),
            already_tried_delegates: BTreeSet::from(["d-2".to_string()]),
            broadcast_to_delegates_ids: vec!["d-1".to_string(), "d-3".to_string()],
        };

        let json = serde_json::to_value(&broadcast).unwrap();
        assert_eq!(
            json,
            json!({
                "version": "1.0.77",
                "accountId": "acc-1",
                "taskId": "task-1",
                "async": true,
                "preAssignedDelegateId": "d-1",
                "alreadyTriedDelegates": ["d-2"],
                "broadcastToDelegatesIds": ["d-1", "d-3"],
            })
        );

        let back: DelegateTaskBroadcast = serde_json::from_value(json).unwrap();
        assert_eq!(back, broadcast);
    }

    #[test]
    fn test_task_broadcast_targets() {
        let mut broadcast = DelegateTaskBroadcast::new("acc-1", "task-1").unwrap();
        assert!(broadcast.targets("d-1"));

        broadcast.already_tried_delegates.insert("d-1".to_string());
        assert!(!broadcast.targets("d-1"));

        broadcast.broadcast_to_delegates_ids = vec!["d-2".to_string()];
        assert!(broadcast.targets("d-2"));
        assert!(!broadcast.targets("d-3"));
    }

    #[test]
    fn test_task_broadcast_requires_ids() {
        assert!(DelegateTaskBroadcast::new("", "task-1").is_err());
        let err = DelegateTaskBroadcast::new("acc-1", "").unwrap_err();
        assert_eq!(err.to_string(), "missing required field `taskId` on DelegateTaskBroadcast");
    }

    #[test]
    fn test_perpetual_event_round_trip() {
        let event =
            PerpetualTaskBroadcastEvent::new("PERPETUAL_TASK_ASSIGNED", Some("d-9".to_string()))
                .unwrap();
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"eventType":"PERPETUAL_TASK_ASSIGNED","broadcastDelegateId":"d-9"}"#
        );
        assert_eq!(
            serde_json::from_str::<PerpetualTaskBroadcastEvent>(&json).unwrap(),
            event
        );
        assert!(PerpetualTaskBroadcastEvent::new("", None).is_err());
    }
}
