//! AWS resource references

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validate::{Validate, require_text};

symbol_enum! {
    /// Elastic load balancer generation
    pub enum LoadBalancerType: "load-balancer-type" {
        Classic => "CLASSIC" ("Classic Load Balancer"),
        Application => "APPLICATION" ("Application Load Balancer"),
        Network => "NETWORK" ("Network Load Balancer"),
    }
}

/// Listener attached to an application or network load balancer
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsElbListener {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default)]
    pub port: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_balancer_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listener_arn: Option<String>,
}

impl Validate for AwsElbListener {}

/// EC2 security group
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsSecurityGroup {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Validate for AwsSecurityGroup {
    fn validate(&self) -> Result<()> {
        require_text("AwsSecurityGroup", "id", &self.id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsVpc {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Validate for AwsVpc {
    fn validate(&self) -> Result<()> {
        require_text("AwsVpc", "id", &self.id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsSubnet {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Validate for AwsSubnet {
    fn validate(&self) -> Result<()> {
        require_text("AwsSubnet", "id", &self.id)
    }
}

/// Summary of an elastic load balancer
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsLoadBalancerDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub load_balancer_type: Option<LoadBalancerType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    #[serde(rename = "dNSName", default, skip_serializing_if = "Option::is_none")]
    pub dns_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
}

impl Validate for AwsLoadBalancerDetails {
    fn validate(&self) -> Result<()> {
        require_text("AwsLoadBalancerDetails", "name", &self.name)
    }
}
