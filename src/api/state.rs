//! Application state for the Leave and Compensation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::PolicyLoader;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded payroll policy.
#[derive(Clone)]
pub struct AppState {
    /// The loaded payroll policy.
    policy: Arc<PolicyLoader>,
}

impl AppState {
    /// Creates a new application state with the given policy loader.
    pub fn new(policy: PolicyLoader) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }

    /// Returns a reference to the policy loader.
    pub fn policy(&self) -> &PolicyLoader {
        &self.policy
    }
}
