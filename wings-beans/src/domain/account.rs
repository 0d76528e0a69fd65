//! Account level reference records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validate::{Validate, require_text};

symbol_enum! {
    /// Commercial tier of an account
    pub enum AccountType: "account-type" {
        Trial => "TRIAL",
        Paid => "PAID",
        Community => "COMMUNITY",
        Essentials => "ESSENTIALS",
        Free => "FREE",
    }
}

symbol_enum! {
    /// Lifecycle state of an account
    pub enum AccountStatus: "account-status" {
        Active => "ACTIVE",
        Inactive => "INACTIVE",
        Deleted => "DELETED",
        Expired => "EXPIRED",
        MarkedForDeletion => "MARKED_FOR_DELETION" ("Marked for deletion"),
    }
}

symbol_enum! {
    /// Environment classification used for access rules
    pub enum EnvironmentType: "environment-type" {
        Prod => "PROD" ("Production"),
        NonProd => "NON_PROD" ("Non-Production"),
        All => "ALL",
    }
}

/// A titled documentation link
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub url: String,
}

impl UrlInfo {
    pub fn new(title: Option<String>, url: impl Into<String>) -> Result<Self> {
        let info = Self {
            title,
            url: url.into(),
        };
        info.validate()?;
        Ok(info)
    }
}

impl Validate for UrlInfo {
    fn validate(&self) -> Result<()> {
        require_text("UrlInfo", "url", &self.url)
    }
}

/// Technology an account signed up with, e.g. `Deployment` / `AWS`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechStack {
    pub category: String,
    pub technology: String,
}

impl TechStack {
    pub fn new(category: impl Into<String>, technology: impl Into<String>) -> Result<Self> {
        let stack = Self {
            category: category.into(),
            technology: technology.into(),
        };
        stack.validate()?;
        Ok(stack)
    }

    /// Key under which documentation links for this stack are registered
    pub fn doc_link_key(&self) -> String {
        format!("{}-{}", self.category, self.technology)
    }
}

impl Validate for TechStack {
    fn validate(&self) -> Result<()> {
        require_text("TechStack", "category", &self.category)?;
        require_text("TechStack", "technology", &self.technology)
    }
}

/// License attached to an account
///
/// `expiryTime` travels as epoch milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_status: Option<AccountStatus>,
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub expiry_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub license_units: i32,
}

impl LicenseInfo {
    /// A license with no expiry time never expires
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiry_time.is_some_and(|expiry| expiry <= now)
    }
}

impl Validate for LicenseInfo {}

/// User reference embedded in audited records
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Validate for EmbeddedUser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Symbol;
    use chrono::TimeZone;

    #[test]
    fn test_url_info_requires_url() {
        let info = UrlInfo::new(Some("deployment-aws".to_string()), "https://docs.example.io/aws")
            .unwrap();
        assert_eq!(info.title.as_deref(), Some("deployment-aws"));
        assert_eq!(info.url, "https://docs.example.io/aws");

        assert!(UrlInfo::new(None, "").unwrap_err().is_missing_field());
    }

    #[test]
    fn test_url_info_omits_missing_title() {
        let info = UrlInfo::new(None, "https://docs.example.io").unwrap();
        assert_eq!(
            serde_json::to_string(&info).unwrap(),
            r#"{"url":"https://docs.example.io"}"#
        );
    }

    #[test]
    fn test_tech_stack_doc_link_key() {
        let stack = TechStack::new("Deployment", "AWS").unwrap();
        assert_eq!(stack.doc_link_key(), "Deployment-AWS");
        assert!(TechStack::new("Deployment", " ").is_err());
    }

    #[test]
    fn test_license_expiry_is_epoch_millis() {
        let expiry = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let license = LicenseInfo {
            account_type: Some(AccountType::Paid),
            account_status: Some(AccountStatus::Active),
            expiry_time: Some(expiry),
            license_units: 100,
        };

        let json = serde_json::to_value(&license).unwrap();
        assert_eq!(json["expiryTime"], 1_700_000_000_123_i64);
        assert_eq!(json["accountType"], "PAID");
        assert_eq!(json["licenseUnits"], 100);

        let back: LicenseInfo = serde_json::from_value(json).unwrap();
        assert_eq!(back, license);
    }

    #[test]
    fn test_license_is_expired() {
        let now = Utc.timestamp_millis_opt(2_000).unwrap();
        let mut license = LicenseInfo::default();
        assert!(!license.is_expired(now));

        license.expiry_time = Some(Utc.timestamp_millis_opt(1_000).unwrap());
        assert!(license.is_expired(now));

        license.expiry_time = Some(Utc.timestamp_millis_opt(3_000).unwrap());
        assert!(!license.is_expired(now));
    }

    #[test]
    fn test_account_status_labels() {
        assert_eq!(AccountStatus::MarkedForDeletion.as_str(), "MARKED_FOR_DELETION");
        assert_eq!(AccountStatus::MarkedForDeletion.display_name(), "Marked for deletion");
        assert_eq!(EnvironmentType::NonProd.display_name(), "Non-Production");
    }

    #[test]
    fn test_embedded_user_empty_object() {
        let user: EmbeddedUser = serde_json::from_str("{}").unwrap();
        assert_eq!(user, EmbeddedUser::default());
        assert_eq!(serde_json::to_string(&user).unwrap(), "{}");
    }
}
