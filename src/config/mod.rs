//! Configuration loading and management for the engine.
//!
//! This module provides functionality to load the payroll policy from a YAML
//! file: metadata, the default annual leave entitlement and the payslip
//! visibility toggle.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::PolicyLoader;
//!
//! let policy = PolicyLoader::load("./config/default").unwrap();
//! println!("Loaded policy: {}", policy.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{LeavePolicy, PayslipPolicy, PolicyConfig, PolicyMetadata};
