//! Configuration loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading the payroll
//! policy from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::PolicyConfig;

/// Loads and provides access to the payroll policy.
///
/// # Directory Structure
///
/// The configuration directory holds a single file:
/// ```text
/// config/default/
/// └── policy.yaml   # Policy metadata, leave and payslip settings
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::PolicyLoader;
///
/// let policy = PolicyLoader::load("./config/default").unwrap();
/// assert!(policy.default_entitlement_days() > 0);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    config: PolicyConfig,
}

impl PolicyLoader {
    /// Loads the policy from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `PolicyLoader` instance on success, or an error if the
    /// policy file is missing, contains invalid YAML, or carries a negative
    /// entitlement.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let policy_path = path.as_ref().join("policy.yaml");
        let path_str = policy_path.display().to_string();

        let content = fs::read_to_string(&policy_path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: PolicyConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        if config.leave.default_entitlement_days < 0 {
            return Err(EngineError::ConfigParseError {
                path: path_str,
                message: format!(
                    "default_entitlement_days must be non-negative, got {}",
                    config.leave.default_entitlement_days
                ),
            });
        }

        Ok(Self { config })
    }

    /// Wraps an already-built policy configuration.
    pub fn from_config(config: PolicyConfig) -> Self {
        Self { config }
    }

    /// Returns the underlying policy configuration.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Returns the policy metadata.
    pub fn metadata(&self) -> &super::PolicyMetadata {
        &self.config.metadata
    }

    /// Returns the annual entitlement used when an employee record carries
    /// none of its own.
    pub fn default_entitlement_days(&self) -> i64 {
        self.config.leave.default_entitlement_days
    }

    /// Returns whether the employee-facing payslip list hides the
    /// in-progress month.
    pub fn suppress_current_month(&self) -> bool {
        self.config.payslip.suppress_current_month
    }
}
