//! The condition contract

use super::context::EvaluationContext;
use super::phase::ConfigurationPhase;

/// A condition that must match for a blueprint or bean definition to be
/// registered.
///
/// Implementations are expected to be pure with respect to the supplied
/// context and free of side effects.
pub trait Condition: Send + Sync {
    /// Determine whether the condition matches in the given context.
    fn matches(&self, ctx: &EvaluationContext<'_>) -> bool;

    /// Capability hook for phase-aware conditions.
    ///
    /// The default returns `None`; the evaluator then treats the condition
    /// as eligible for the earliest phase. Phase-aware implementations
    /// override this to return `Some(self)`.
    fn as_configuration_condition(&self) -> Option<&dyn ConfigurationCondition> {
        None
    }
}

/// A [`Condition`] with fine-grained control over when it is evaluated.
///
/// A condition that inspects the bean registry, for example one that checks
/// whether a bean has already been registered, would report
/// [`ConfigurationPhase::RegisterBean`] so that it only runs once every
/// blueprint has been parsed.
pub trait ConfigurationCondition: Condition {
    /// The phase in which the condition should be evaluated.
    ///
    /// Must be deterministic: fixed when the condition is constructed, never
    /// derived from the evaluation context.
    fn configuration_phase(&self) -> ConfigurationPhase;
}
