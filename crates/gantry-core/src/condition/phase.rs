//! Configuration phase enumeration

use serde::{Deserialize, Serialize};
use std::fmt;

/// The bootstrap phases in which a condition can be evaluated.
///
/// The set is closed: a phase-aware condition maps its intended evaluation
/// timing to exactly one of these two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigurationPhase {
    /// Evaluate while a blueprint is being parsed as a configuration unit.
    ///
    /// If the condition does not match at this point, the blueprint is not
    /// added, and nothing it would contribute is registered.
    ParseConfiguration,

    /// Evaluate while an individual bean definition is being registered.
    ///
    /// A failing condition excludes only that bean; the owning blueprint
    /// stays parsed. By the time this phase runs, every blueprint has
    /// already been through
    /// [`ParseConfiguration`](ConfigurationPhase::ParseConfiguration).
    RegisterBean,
}

impl fmt::Display for ConfigurationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationPhase::ParseConfiguration => write!(f, "parse_configuration"),
            ConfigurationPhase::RegisterBean => write!(f, "register_bean"),
        }
    }
}
