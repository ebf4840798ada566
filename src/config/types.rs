//! Configuration types for the payroll policy.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML policy file.

use serde::Deserialize;

/// Metadata about the policy file.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyMetadata {
    /// A human-readable name for the policy.
    pub name: String,
    /// The version or effective date of the policy.
    pub version: String,
}

fn default_entitlement_days() -> i64 {
    12
}

/// Leave policy settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LeavePolicy {
    /// The annual entitlement applied when an employee record carries none.
    #[serde(default = "default_entitlement_days")]
    pub default_entitlement_days: i64,
}

fn default_suppress_current_month() -> bool {
    true
}

/// Payslip policy settings.
#[derive(Debug, Clone, Deserialize)]
pub struct PayslipPolicy {
    /// Whether the employee-facing payslip list hides the in-progress month.
    #[serde(default = "default_suppress_current_month")]
    pub suppress_current_month: bool,
}

/// The complete payroll policy file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// Metadata about the policy.
    pub metadata: PolicyMetadata,
    /// Leave policy settings.
    pub leave: LeavePolicy,
    /// Payslip policy settings.
    pub payslip: PayslipPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_policy_yaml() {
        let yaml = r#"
metadata:
  name: "Default payroll policy"
  version: "2025-01-01"
leave:
  default_entitlement_days: 15
payslip:
  suppress_current_month: false
"#;
        let config: PolicyConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.metadata.name, "Default payroll policy");
        assert_eq!(config.leave.default_entitlement_days, 15);
        assert!(!config.payslip.suppress_current_month);
    }

    #[test]
    fn test_missing_settings_fall_back_to_defaults() {
        let yaml = r#"
metadata:
  name: "Sparse policy"
  version: "2025-01-01"
leave: {}
payslip: {}
"#;
        let config: PolicyConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.leave.default_entitlement_days, 12);
        assert!(config.payslip.suppress_current_month);
    }
}
