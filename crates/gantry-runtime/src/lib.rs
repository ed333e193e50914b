//! Gantry Runtime - Bootstrap engine for the Gantry container
//!
//! This crate drives conditional bean registration: it parses blueprints,
//! dispatches each condition to the configuration phase it asks for, and
//! populates the bean registry.

pub mod bootstrap;
pub mod builtin;
pub mod error;
pub mod evaluator;
pub mod manifest;
pub mod registry;

// Re-export main types
pub use bootstrap::{Bootstrap, BootstrapOutcome, BootstrapReport, Skipped};
pub use builtin::{MissingBeanCondition, ProfileCondition, PropertyCondition, WhenCondition};
pub use error::{Result, RuntimeError};
pub use evaluator::ConditionEvaluator;
pub use manifest::{load_manifest, load_manifest_dir, parse_manifest, Manifest, ManifestError};
pub use registry::BeanRegistry;
