//! Evaluation context passed to conditions

use crate::environment::Environment;
use std::collections::HashSet;

/// Read-only view of the bean registry exposed to conditions.
///
/// Implemented by the runtime registry; a plain `HashSet<String>` of bean
/// names works for tests and ad-hoc evaluation.
pub trait RegistryView {
    /// Check whether a bean with the given name has been registered
    fn contains_bean(&self, name: &str) -> bool;

    /// Number of registered beans
    fn bean_count(&self) -> usize;
}

impl RegistryView for HashSet<String> {
    fn contains_bean(&self, name: &str) -> bool {
        self.contains(name)
    }

    fn bean_count(&self) -> usize {
        self.len()
    }
}

/// Context supplied to a condition's match check.
///
/// Bundles the bootstrap environment with a read-only view of what has been
/// registered so far. Conditions treat it as opaque input; the context never
/// outlives a single bootstrap pass.
pub struct EvaluationContext<'a> {
    environment: &'a Environment,
    registry: &'a dyn RegistryView,
}

impl<'a> EvaluationContext<'a> {
    /// Create a new context
    pub fn new(environment: &'a Environment, registry: &'a dyn RegistryView) -> Self {
        Self {
            environment,
            registry,
        }
    }

    /// The bootstrap environment
    pub fn environment(&self) -> &Environment {
        self.environment
    }

    /// Check whether a bean has been registered
    pub fn bean_registered(&self, name: &str) -> bool {
        self.registry.contains_bean(name)
    }

    /// Number of beans registered so far
    pub fn registered_count(&self) -> usize {
        self.registry.bean_count()
    }
}
