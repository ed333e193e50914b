//! Blueprint definitions
//!
//! A blueprint is a configuration unit: if its own guards allow it to be
//! parsed, it contributes bean definitions to the registry.

use super::bean::BeanDefinition;
use super::Guard;
use crate::error::{CoreError, Result};
use std::collections::HashSet;
use std::fmt;

/// A configuration unit contributing bean definitions
#[derive(Clone)]
pub struct Blueprint {
    /// Unique blueprint ID
    pub id: String,

    /// Optional description
    pub description: Option<String>,

    /// Conditions guarding the blueprint as a whole
    pub guards: Vec<Guard>,

    /// Bean definitions contributed by this blueprint
    pub beans: Vec<BeanDefinition>,
}

impl Blueprint {
    /// Create a new blueprint
    pub fn new(id: String) -> Self {
        Self {
            id,
            description: None,
            guards: Vec::new(),
            beans: Vec::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    /// Attach a blueprint-level guard
    pub fn guarded_by(mut self, guard: Guard) -> Self {
        self.guards.push(guard);
        self
    }

    /// Add a bean definition
    pub fn with_bean(mut self, bean: BeanDefinition) -> Self {
        self.beans.push(bean);
        self
    }

    /// Validate the blueprint shape.
    ///
    /// The ID and every bean name must be non-empty; bean names must be
    /// unique within the blueprint.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(CoreError::InvalidDefinition(
                "blueprint id is empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for bean in &self.beans {
            if bean.name.is_empty() {
                return Err(CoreError::InvalidDefinition(format!(
                    "blueprint '{}' declares a bean with an empty name",
                    self.id
                )));
            }
            if !seen.insert(bean.name.as_str()) {
                return Err(CoreError::DuplicateBean(bean.name.clone()));
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Blueprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blueprint")
            .field("id", &self.id)
            .field("description", &self.description)
            .field("guards", &self.guards.len())
            .field("beans", &self.beans)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blueprint_builder() {
        let blueprint = Blueprint::new("web".to_string())
            .with_description("HTTP stack".to_string())
            .with_bean(BeanDefinition::new(
                "http_server".to_string(),
                "web::HttpServer".to_string(),
            ))
            .with_bean(BeanDefinition::new(
                "router".to_string(),
                "web::Router".to_string(),
            ));

        assert_eq!(blueprint.id, "web");
        assert_eq!(blueprint.beans.len(), 2);
        assert!(blueprint.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_id() {
        let blueprint = Blueprint::new(String::new());
        assert!(matches!(
            blueprint.validate(),
            Err(CoreError::InvalidDefinition(_))
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_bean_names() {
        let blueprint = Blueprint::new("web".to_string())
            .with_bean(BeanDefinition::new(
                "http_server".to_string(),
                "web::HttpServer".to_string(),
            ))
            .with_bean(BeanDefinition::new(
                "http_server".to_string(),
                "web::AltServer".to_string(),
            ));

        match blueprint.validate() {
            Err(CoreError::DuplicateBean(name)) => assert_eq!(name, "http_server"),
            other => panic!("expected DuplicateBean, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_empty_bean_name() {
        let blueprint = Blueprint::new("web".to_string()).with_bean(BeanDefinition::new(
            String::new(),
            "web::HttpServer".to_string(),
        ));
        assert!(blueprint.validate().is_err());
    }
}
