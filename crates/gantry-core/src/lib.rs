//! Gantry Core - Core types and condition contracts for the Gantry container
//!
//! This crate provides the fundamental types used across the Gantry ecosystem:
//! - Value types for environment data
//! - The condition contract (`Condition`, `ConfigurationCondition`, `ConfigurationPhase`)
//! - Declarative when-clauses
//! - Blueprint and bean definition model
//! - Error types

pub mod condition;
pub mod definition;
pub mod environment;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use condition::{
    Condition, ConfigurationCondition, ConfigurationPhase, EvaluationContext, RegistryView,
    WhenClause,
};
pub use definition::{BeanDefinition, Blueprint, Guard};
pub use environment::Environment;
pub use error::CoreError;
pub use types::Value;
