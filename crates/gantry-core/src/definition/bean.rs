//! Bean definitions

use super::Guard;
use std::fmt;

/// A single registrable unit contributed by a blueprint
#[derive(Clone)]
pub struct BeanDefinition {
    /// Unique bean name
    pub name: String,

    /// Provider identifier (factory path or type name)
    pub provider: String,

    /// Optional description
    pub description: Option<String>,

    /// Conditions guarding registration
    pub guards: Vec<Guard>,
}

impl BeanDefinition {
    /// Create a new bean definition
    pub fn new(name: String, provider: String) -> Self {
        Self {
            name,
            provider,
            description: None,
            guards: Vec::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    /// Attach a guarding condition
    pub fn guarded_by(mut self, guard: Guard) -> Self {
        self.guards.push(guard);
        self
    }
}

impl fmt::Debug for BeanDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanDefinition")
            .field("name", &self.name)
            .field("provider", &self.provider)
            .field("description", &self.description)
            .field("guards", &self.guards.len())
            .finish()
    }
}
