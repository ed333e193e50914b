//! Bean registry
//!
//! Insertion-ordered store of registered bean definitions.

use crate::error::{Result, RuntimeError};
use gantry_core::condition::RegistryView;
use gantry_core::definition::BeanDefinition;
use std::collections::HashMap;

/// Registry of bean definitions, preserving registration order
#[derive(Debug, Default)]
pub struct BeanRegistry {
    /// Registered definitions in insertion order
    beans: Vec<BeanDefinition>,

    /// Name to index into `beans`
    index: HashMap<String, usize>,
}

impl BeanRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a bean definition.
    ///
    /// Names are unique across the whole registry.
    pub fn register(&mut self, bean: BeanDefinition) -> Result<()> {
        if self.index.contains_key(&bean.name) {
            return Err(RuntimeError::DuplicateBean(bean.name.clone()));
        }
        self.index.insert(bean.name.clone(), self.beans.len());
        self.beans.push(bean);
        Ok(())
    }

    /// Look up a bean by name
    pub fn get(&self, name: &str) -> Option<&BeanDefinition> {
        self.index.get(name).map(|&i| &self.beans[i])
    }

    /// Check whether a bean is registered
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Registered names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.beans.iter().map(|b| b.name.as_str()).collect()
    }

    /// Iterate definitions in registration order
    pub fn iter(&self) -> impl Iterator<Item = &BeanDefinition> {
        self.beans.iter()
    }

    /// Number of registered beans
    pub fn len(&self) -> usize {
        self.beans.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.beans.is_empty()
    }
}

impl RegistryView for BeanRegistry {
    fn contains_bean(&self, name: &str) -> bool {
        self.contains(name)
    }

    fn bean_count(&self) -> usize {
        self.len()
    }
}
