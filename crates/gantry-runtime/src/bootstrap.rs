//! Two-pass bootstrap
//!
//! Pass one parses blueprints, resolving parse-phase conditions; pass two
//! registers beans, resolving register-phase conditions. All parse-phase
//! evaluation completes before any register-phase condition runs.

use crate::error::Result;
use crate::evaluator::ConditionEvaluator;
use crate::registry::BeanRegistry;
use gantry_core::condition::{ConfigurationPhase, EvaluationContext};
use gantry_core::definition::{BeanDefinition, Blueprint};
use gantry_core::Environment;
use tracing::debug;

/// A blueprint or bean excluded by a failing condition
#[derive(Debug, Clone, PartialEq)]
pub struct Skipped {
    /// Owning blueprint ID
    pub blueprint: String,

    /// Bean name, if a single bean was excluded rather than the blueprint
    pub bean: Option<String>,

    /// Phase in which the failing condition was evaluated
    pub phase: ConfigurationPhase,
}

/// Everything the bootstrap excluded, in evaluation order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BootstrapReport {
    /// Skip records in the order they were decided
    pub skipped: Vec<Skipped>,
}

impl BootstrapReport {
    /// Whether a blueprint was excluded (either pass)
    pub fn blueprint_skipped(&self, id: &str) -> bool {
        self.skipped
            .iter()
            .any(|s| s.blueprint == id && s.bean.is_none())
    }

    /// Whether a specific bean was excluded
    pub fn bean_skipped(&self, name: &str) -> bool {
        self.skipped.iter().any(|s| s.bean.as_deref() == Some(name))
    }

    fn push_blueprint(&mut self, id: &str, phase: ConfigurationPhase) {
        self.skipped.push(Skipped {
            blueprint: id.to_string(),
            bean: None,
            phase,
        });
    }

    fn push_bean(&mut self, blueprint: &str, bean: &str, phase: ConfigurationPhase) {
        self.skipped.push(Skipped {
            blueprint: blueprint.to_string(),
            bean: Some(bean.to_string()),
            phase,
        });
    }
}

/// Outcome of a bootstrap run
#[derive(Debug)]
pub struct BootstrapOutcome {
    /// Populated registry
    pub registry: BeanRegistry,

    /// What was excluded, and in which phase
    pub report: BootstrapReport,
}

/// Blueprint that survived the parse pass, with its surviving beans
struct ParsedBlueprint<'a> {
    blueprint: &'a Blueprint,
    beans: Vec<&'a BeanDefinition>,
}

/// Two-pass bootstrap driver
#[derive(Debug, Default)]
pub struct Bootstrap {
    environment: Environment,
}

impl Bootstrap {
    /// Create a bootstrap against an environment
    pub fn new(environment: Environment) -> Self {
        Self { environment }
    }

    /// The environment conditions are evaluated against
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Run both passes over the given blueprints
    pub fn run(&self, blueprints: &[Blueprint]) -> Result<BootstrapOutcome> {
        for blueprint in blueprints {
            blueprint.validate()?;
        }

        let mut registry = BeanRegistry::new();
        let mut report = BootstrapReport::default();

        // Pass one: parse blueprints, resolving parse-phase conditions.
        let mut parsed: Vec<ParsedBlueprint<'_>> = Vec::new();
        for blueprint in blueprints {
            let ctx = EvaluationContext::new(&self.environment, &registry);
            if ConditionEvaluator::should_skip(
                &blueprint.guards,
                &ctx,
                ConfigurationPhase::ParseConfiguration,
            ) {
                debug!("blueprint '{}' excluded while parsing", blueprint.id);
                report.push_blueprint(&blueprint.id, ConfigurationPhase::ParseConfiguration);
                continue;
            }

            let mut beans = Vec::new();
            for bean in &blueprint.beans {
                let ctx = EvaluationContext::new(&self.environment, &registry);
                if ConditionEvaluator::should_skip(
                    &bean.guards,
                    &ctx,
                    ConfigurationPhase::ParseConfiguration,
                ) {
                    debug!(
                        "bean '{}' of blueprint '{}' excluded while parsing",
                        bean.name, blueprint.id
                    );
                    report.push_bean(&blueprint.id, &bean.name, ConfigurationPhase::ParseConfiguration);
                    continue;
                }
                beans.push(bean);
            }

            parsed.push(ParsedBlueprint { blueprint, beans });
        }

        // Pass two: register beans, resolving register-phase conditions.
        // Runs only after every blueprint has been through pass one.
        for entry in &parsed {
            let blueprint = entry.blueprint;
            let ctx = EvaluationContext::new(&self.environment, &registry);
            if ConditionEvaluator::should_skip(
                &blueprint.guards,
                &ctx,
                ConfigurationPhase::RegisterBean,
            ) {
                debug!(
                    "blueprint '{}' blocked from registering beans",
                    blueprint.id
                );
                report.push_blueprint(&blueprint.id, ConfigurationPhase::RegisterBean);
                continue;
            }

            for bean in &entry.beans {
                let ctx = EvaluationContext::new(&self.environment, &registry);
                if ConditionEvaluator::should_skip(
                    &bean.guards,
                    &ctx,
                    ConfigurationPhase::RegisterBean,
                ) {
                    debug!(
                        "bean '{}' of blueprint '{}' excluded at registration",
                        bean.name, blueprint.id
                    );
                    report.push_bean(&blueprint.id, &bean.name, ConfigurationPhase::RegisterBean);
                    continue;
                }
                registry.register((*bean).clone())?;
            }
        }

        Ok(BootstrapOutcome { registry, report })
    }
}
