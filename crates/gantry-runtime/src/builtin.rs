//! Built-in conditions
//!
//! Ready-made conditions covering the common guards: environment
//! properties, active profiles, registry presence, and declarative
//! when-clauses loaded from manifests.

use gantry_core::condition::{
    Condition, ConfigurationCondition, ConfigurationPhase, EvaluationContext, Predicate,
    WhenClause,
};
use gantry_core::types::Value;

/// Matches when an environment property satisfies a predicate
#[derive(Debug, Clone)]
pub struct PropertyCondition {
    predicate: Predicate,
}

impl PropertyCondition {
    /// Require `property == value`
    pub fn equals(property: String, value: Value) -> Self {
        Self {
            predicate: Predicate::eq(property, value),
        }
    }

    /// Require the property to be present
    pub fn exists(property: String) -> Self {
        Self {
            predicate: Predicate::exists(property),
        }
    }

    /// Use an arbitrary predicate
    pub fn new(predicate: Predicate) -> Self {
        Self { predicate }
    }
}

impl Condition for PropertyCondition {
    fn matches(&self, ctx: &EvaluationContext<'_>) -> bool {
        self.predicate.evaluate(ctx.environment())
    }
}

/// Matches when any of the given profiles is active
#[derive(Debug, Clone)]
pub struct ProfileCondition {
    profiles: Vec<String>,
}

impl ProfileCondition {
    /// Create from profile names
    pub fn any_of(profiles: Vec<String>) -> Self {
        Self { profiles }
    }
}

impl Condition for ProfileCondition {
    fn matches(&self, ctx: &EvaluationContext<'_>) -> bool {
        self.profiles
            .iter()
            .any(|p| ctx.environment().profile_active(p))
    }
}

/// Matches when the named bean has not been registered yet.
///
/// Reports [`ConfigurationPhase::RegisterBean`]: the answer is only stable
/// once every blueprint has been parsed.
#[derive(Debug, Clone)]
pub struct MissingBeanCondition {
    name: String,
}

impl MissingBeanCondition {
    /// Create for a bean name
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

impl Condition for MissingBeanCondition {
    fn matches(&self, ctx: &EvaluationContext<'_>) -> bool {
        !ctx.bean_registered(&self.name)
    }

    fn as_configuration_condition(&self) -> Option<&dyn ConfigurationCondition> {
        Some(self)
    }
}

impl ConfigurationCondition for MissingBeanCondition {
    fn configuration_phase(&self) -> ConfigurationPhase {
        ConfigurationPhase::RegisterBean
    }
}

/// Declarative when-clause with an optional explicit phase.
///
/// Manifests attach these to blueprints and beans. Without an explicit
/// phase the condition behaves like any phase-unaware one.
#[derive(Debug, Clone)]
pub struct WhenCondition {
    clause: WhenClause,
    phase: Option<ConfigurationPhase>,
}

impl WhenCondition {
    /// Create with default (parse) timing
    pub fn new(clause: WhenClause) -> Self {
        Self {
            clause,
            phase: None,
        }
    }

    /// Create with an explicit phase
    pub fn with_phase(clause: WhenClause, phase: ConfigurationPhase) -> Self {
        Self {
            clause,
            phase: Some(phase),
        }
    }
}

impl Condition for WhenCondition {
    fn matches(&self, ctx: &EvaluationContext<'_>) -> bool {
        self.clause.evaluate(ctx.environment())
    }

    fn as_configuration_condition(&self) -> Option<&dyn ConfigurationCondition> {
        if self.phase.is_some() {
            Some(self)
        } else {
            None
        }
    }
}

impl ConfigurationCondition for WhenCondition {
    fn configuration_phase(&self) -> ConfigurationPhase {
        self.phase.unwrap_or(ConfigurationPhase::ParseConfiguration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gantry_core::condition::{ClauseItem, PredicateOp};
    use gantry_core::Environment;
    use std::collections::HashSet;

    fn env() -> Environment {
        Environment::new()
            .with_profile("dev".to_string())
            .with_property("cache.enabled".to_string(), Value::Bool(true))
    }

    #[test]
    fn test_property_condition() {
        let env = env();
        let registered: HashSet<String> = HashSet::new();
        let ctx = EvaluationContext::new(&env, &registered);

        assert!(
            PropertyCondition::equals("cache.enabled".to_string(), Value::Bool(true)).matches(&ctx)
        );
        assert!(!PropertyCondition::exists("cache.size".to_string()).matches(&ctx));

        let ne = PropertyCondition::new(Predicate {
            property: "cache.enabled".to_string(),
            op: PredicateOp::Ne,
            value: Value::Bool(false),
        });
        assert!(ne.matches(&ctx));
    }

    #[test]
    fn test_profile_condition() {
        let env = env();
        let registered: HashSet<String> = HashSet::new();
        let ctx = EvaluationContext::new(&env, &registered);

        assert!(ProfileCondition::any_of(vec!["dev".to_string()]).matches(&ctx));
        assert!(
            ProfileCondition::any_of(vec!["prod".to_string(), "dev".to_string()]).matches(&ctx)
        );
        assert!(!ProfileCondition::any_of(vec!["prod".to_string()]).matches(&ctx));
    }

    #[test]
    fn test_missing_bean_condition_phase_and_matching() {
        let env = env();
        let condition = MissingBeanCondition::new("primary_cache".to_string());

        assert_eq!(
            condition.as_configuration_condition().unwrap().configuration_phase(),
            ConfigurationPhase::RegisterBean
        );

        let empty: HashSet<String> = HashSet::new();
        let ctx = EvaluationContext::new(&env, &empty);
        assert!(condition.matches(&ctx));

        let mut registered = HashSet::new();
        registered.insert("primary_cache".to_string());
        let ctx = EvaluationContext::new(&env, &registered);
        assert!(!condition.matches(&ctx));
    }

    #[test]
    fn test_when_condition_phase_capability() {
        let clause = WhenClause::all_of(vec![ClauseItem::Predicate(Predicate::eq(
            "cache.enabled".to_string(),
            Value::Bool(true),
        ))]);

        let plain = WhenCondition::new(clause.clone());
        assert!(plain.as_configuration_condition().is_none());

        let phased = WhenCondition::with_phase(clause, ConfigurationPhase::RegisterBean);
        assert_eq!(
            phased
                .as_configuration_condition()
                .unwrap()
                .configuration_phase(),
            ConfigurationPhase::RegisterBean
        );
    }

    #[test]
    fn test_when_condition_evaluates_clause() {
        let env = env();
        let registered: HashSet<String> = HashSet::new();
        let ctx = EvaluationContext::new(&env, &registered);

        let holds = WhenCondition::new(WhenClause::all_of(vec![ClauseItem::Predicate(
            Predicate::eq("cache.enabled".to_string(), Value::Bool(true)),
        )]));
        assert!(holds.matches(&ctx));

        let fails = WhenCondition::new(WhenClause::all_of(vec![ClauseItem::Predicate(
            Predicate::exists("cache.size".to_string()),
        )]));
        assert!(!fails.matches(&ctx));
    }
}
