//! Bootstrap environment
//!
//! The environment is the externally supplied state conditions are evaluated
//! against: active profiles plus a flattened property map.

use crate::types::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Profiles and properties visible during container bootstrap
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    /// Active profile names
    #[serde(default)]
    profiles: Vec<String>,

    /// Property map with flattened keys (e.g. "server.port")
    #[serde(default)]
    properties: HashMap<String, Value>,
}

impl Environment {
    /// Create a new empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate a profile
    pub fn with_profile(mut self, name: String) -> Self {
        self.profiles.push(name);
        self
    }

    /// Set a property
    pub fn with_property(mut self, key: String, value: Value) -> Self {
        self.properties.insert(key, value);
        self
    }

    /// Look up a property by key
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Check whether a property is present
    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Check whether a profile is active
    pub fn profile_active(&self, name: &str) -> bool {
        self.profiles.iter().any(|p| p == name)
    }

    /// Active profiles in activation order
    pub fn profiles(&self) -> &[String] {
        &self.profiles
    }
}
