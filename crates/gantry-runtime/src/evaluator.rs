//! Condition evaluation with phase dispatch
//!
//! The evaluator decides *when* each condition runs, never *whether* it is
//! considered: a condition outside the current phase is left for its own
//! phase.

use gantry_core::condition::{ConfigurationPhase, EvaluationContext};
use gantry_core::definition::Guard;

/// Dispatches condition evaluation to the configuration phase each
/// condition asks for.
pub struct ConditionEvaluator;

impl ConditionEvaluator {
    /// Resolve the phase a condition must be evaluated in.
    ///
    /// Conditions that do not expose the phase capability are eligible for
    /// the earliest phase.
    pub fn required_phase(guard: &Guard) -> ConfigurationPhase {
        guard
            .as_configuration_condition()
            .map(|c| c.configuration_phase())
            .unwrap_or(ConfigurationPhase::ParseConfiguration)
    }

    /// Decide whether the owner of `guards` should be skipped in `phase`.
    ///
    /// Only conditions whose required phase equals `phase` are consulted.
    /// Returns `true` on the first failing condition.
    pub fn should_skip(
        guards: &[Guard],
        ctx: &EvaluationContext<'_>,
        phase: ConfigurationPhase,
    ) -> bool {
        for guard in guards {
            if Self::required_phase(guard) != phase {
                continue;
            }
            if !guard.matches(ctx) {
                tracing::debug!("condition failed in phase {}, skipping owner", phase);
                return true;
            }
        }
        false
    }
}
