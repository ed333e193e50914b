//! Blueprint and bean definition model

use crate::condition::Condition;
use std::sync::Arc;

mod bean;
mod blueprint;

pub use bean::BeanDefinition;
pub use blueprint::Blueprint;

/// Shared handle to a condition guarding a blueprint or bean definition
pub type Guard = Arc<dyn Condition>;
