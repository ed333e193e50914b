//! Condition contract and declarative clauses
//!
//! Conditions decide whether a blueprint or a bean definition takes part in
//! container bootstrap. The contract is two-tier:
//! - [`Condition`] answers "does this match in the current context?"
//! - [`ConfigurationCondition`] additionally reports the
//!   [`ConfigurationPhase`] in which matching should be checked.
//!
//! Declarative [`WhenClause`] data lets manifests attach conditions without
//! code.

mod clause;
mod context;
mod contract;
mod phase;

pub use clause::{ClauseItem, Predicate, PredicateOp, WhenClause};
pub use context::{EvaluationContext, RegistryView};
pub use contract::{Condition, ConfigurationCondition};
pub use phase::ConfigurationPhase;
