//! Delegate classification types

use serde::{Deserialize, Serialize};

use crate::validate::Validate;

symbol_enum! {
    /// Source of an implicit delegate selector
    pub enum SelectorType: "selector-type" {
        GroupName => "GROUP_NAME" ("Group Name"),
        GroupSelectors => "GROUP_SELECTORS" ("Group Selectors"),
        ProfileName => "PROFILE_NAME" ("Profile Name"),
        ProfileSelectors => "PROFILE_SELECTORS" ("Profile Selectors"),
        HostName => "HOST_NAME" ("Host Name"),
        DelegateName => "DELEGATE_NAME" ("Delegate Name"),
    }
}

symbol_enum! {
    pub enum DelegateInstanceStatus: "delegate-instance-status" {
        Enabled => "ENABLED",
        WaitingForApproval => "WAITING_FOR_APPROVAL" ("Waiting for approval"),
        Disabled => "DISABLED",
        Deleted => "DELETED",
    }
}

symbol_enum! {
    /// Sizing preset offered when a delegate is installed
    pub enum DelegateSize: "delegate-size" {
        Laptop => "LAPTOP",
        Small => "SMALL",
        Medium => "MEDIUM",
        Large => "LARGE",
    }
}

symbol_enum! {
    pub enum DelegateTokenStatus: "delegate-token-status" {
        Active => "ACTIVE",
        Revoked => "REVOKED",
    }
}

/// Resources allotted to one delegate sizing preset
///
/// `ram` is in megabytes, `cpu` in cores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegateSizeDetails {
    pub size: DelegateSize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub task_limit: i32,
    #[serde(default)]
    pub replicas: i32,
    #[serde(default)]
    pub ram: i32,
    #[serde(default)]
    pub cpu: f64,
}

impl DelegateSizeDetails {
    /// Memory across all replicas, in megabytes
    pub fn total_ram(&self) -> i64 {
        i64::from(self.ram) * i64::from(self.replicas)
    }
}

impl Validate for DelegateSizeDetails {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Symbol;

    #[test]
    fn test_selector_type_symbols() {
        let symbols: Vec<&str> = SelectorType::all().iter().map(Symbol::as_str).collect();
        assert_eq!(
            symbols,
            vec![
                "GROUP_NAME",
                "GROUP_SELECTORS",
                "PROFILE_NAME",
                "PROFILE_SELECTORS",
                "HOST_NAME",
                "DELEGATE_NAME",
            ]
        );
        assert_eq!(SelectorType::HostName.display_name(), "Host Name");
    }

    #[test]
    fn test_size_details_round_trip() {
        let details = DelegateSizeDetails {
            size: DelegateSize::Small,
            label: Some("Small".to_string()),
            task_limit: 100,
            replicas: 2,
            ram: 4096,
            cpu: 1.0,
        };
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["size"], "SMALL");
        assert_eq!(json["taskLimit"], 100);

        let back: DelegateSizeDetails = serde_json::from_value(json).unwrap();
        assert_eq!(back, details);
        assert_eq!(back.total_ram(), 8192);
    }

    #[test]
    fn test_size_details_accept_negative_counters() {
        let details: DelegateSizeDetails =
            serde_json::from_str(r#"{"size":"LAPTOP","taskLimit":-1,"replicas":1,"ram":-1}"#).unwrap();
        assert_eq!(details.task_limit, -1);
        assert_eq!(details.total_ram(), -1);
    }

    #[test]
    fn test_size_is_required_on_the_wire() {
        assert!(serde_json::from_str::<DelegateSizeDetails>(r#"{"ram":1024}"#).is_err());
    }

    #[test]
    fn test_instance_status_parse() {
        assert_eq!(
            "WAITING_FOR_APPROVAL".parse::<DelegateInstanceStatus>().unwrap(),
            DelegateInstanceStatus::WaitingForApproval
        );
        assert!("waiting_for_approval".parse::<DelegateInstanceStatus>().is_err());
    }
}
