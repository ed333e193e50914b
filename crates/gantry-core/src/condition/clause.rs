//! Declarative when-clauses
//!
//! A when-clause describes a condition over environment properties in data
//! form, so manifests can attach conditions without code. Groups compose
//! with `all` (AND), `any` (OR) and `not` (none may hold) semantics.
//!
//! ```yaml
//! all:
//!   - property: server.enabled
//!     value: true
//!   - property: server.port
//!     op: exists
//! ```

use crate::environment::Environment;
use crate::types::Value;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Comparison operator for a property predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PredicateOp {
    /// Equal
    #[default]
    Eq,
    /// Not equal
    Ne,
    /// Greater than
    Gt,
    /// Greater than or equal
    Ge,
    /// Less than
    Lt,
    /// Less than or equal
    Le,
    /// Property is present, regardless of value
    Exists,
    /// String or array containment
    Contains,
}

/// A single property predicate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Predicate {
    /// Property key to test
    pub property: String,

    /// Comparison operator (defaults to equality)
    #[serde(default)]
    pub op: PredicateOp,

    /// Value to compare against
    #[serde(default)]
    pub value: Value,
}

impl Predicate {
    /// Create an equality predicate
    pub fn eq(property: String, value: Value) -> Self {
        Self {
            property,
            op: PredicateOp::Eq,
            value,
        }
    }

    /// Create an existence predicate
    pub fn exists(property: String) -> Self {
        Self {
            property,
            op: PredicateOp::Exists,
            value: Value::Null,
        }
    }

    /// Evaluate the predicate against an environment.
    ///
    /// A missing property satisfies `Ne` and fails every other comparison.
    pub fn evaluate(&self, env: &Environment) -> bool {
        let actual = env.property(&self.property);
        match self.op {
            PredicateOp::Exists => actual.is_some(),
            PredicateOp::Eq => actual == Some(&self.value),
            PredicateOp::Ne => actual != Some(&self.value),
            PredicateOp::Gt => self.compare(actual) == Some(Ordering::Greater),
            PredicateOp::Ge => matches!(
                self.compare(actual),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            PredicateOp::Lt => self.compare(actual) == Some(Ordering::Less),
            PredicateOp::Le => matches!(
                self.compare(actual),
                Some(Ordering::Less | Ordering::Equal)
            ),
            PredicateOp::Contains => actual.map_or(false, |v| v.contains(&self.value)),
        }
    }

    fn compare(&self, actual: Option<&Value>) -> Option<Ordering> {
        actual.and_then(|v| v.compare(&self.value))
    }
}

/// A when-clause combining predicates with all/any/not groups.
///
/// Groups are optional and independent; every group that is present must
/// hold. An empty clause holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WhenClause {
    /// All items must hold (AND)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all: Option<Vec<ClauseItem>>,

    /// At least one item must hold (OR)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub any: Option<Vec<ClauseItem>>,

    /// No item may hold (negation)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not: Option<Vec<ClauseItem>>,
}

/// An item in a when-clause: a predicate or a nested clause
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClauseItem {
    /// Single predicate
    Predicate(Predicate),
    /// Nested group
    Group(WhenClause),
}

impl WhenClause {
    /// Clause with a single `all` group
    pub fn all_of(items: Vec<ClauseItem>) -> Self {
        Self {
            all: Some(items),
            ..Self::default()
        }
    }

    /// Clause with a single `any` group
    pub fn any_of(items: Vec<ClauseItem>) -> Self {
        Self {
            any: Some(items),
            ..Self::default()
        }
    }

    /// Clause with a single `not` group
    pub fn none_of(items: Vec<ClauseItem>) -> Self {
        Self {
            not: Some(items),
            ..Self::default()
        }
    }

    /// Evaluate the clause against an environment
    pub fn evaluate(&self, env: &Environment) -> bool {
        if let Some(items) = &self.all {
            if !items.iter().all(|item| item.evaluate(env)) {
                return false;
            }
        }
        if let Some(items) = &self.any {
            if !items.iter().any(|item| item.evaluate(env)) {
                return false;
            }
        }
        if let Some(items) = &self.not {
            if items.iter().any(|item| item.evaluate(env)) {
                return false;
            }
        }
        true
    }
}

impl ClauseItem {
    fn evaluate(&self, env: &Environment) -> bool {
        match self {
            ClauseItem::Predicate(p) => p.evaluate(env),
            ClauseItem::Group(g) => g.evaluate(env),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> Environment {
        Environment::new()
            .with_property("server.enabled".to_string(), Value::Bool(true))
            .with_property("server.port".to_string(), Value::Number(8080.0))
            .with_property("region".to_string(), Value::String("eu-west".to_string()))
    }

    #[test]
    fn test_predicate_defaults_to_equality() {
        let p = Predicate::eq("server.enabled".to_string(), Value::Bool(true));
        assert!(p.evaluate(&env()));

        let p = Predicate::eq("server.enabled".to_string(), Value::Bool(false));
        assert!(!p.evaluate(&env()));
    }

    #[test]
    fn test_predicate_missing_property() {
        let e = env();
        assert!(!Predicate::exists("missing".to_string()).evaluate(&e));
        assert!(Predicate::exists("region".to_string()).evaluate(&e));

        // Ne holds for a missing property, ordered comparisons do not
        let ne = Predicate {
            property: "missing".to_string(),
            op: PredicateOp::Ne,
            value: Value::Bool(true),
        };
        assert!(ne.evaluate(&e));

        let gt = Predicate {
            property: "missing".to_string(),
            op: PredicateOp::Gt,
            value: Value::Number(1.0),
        };
        assert!(!gt.evaluate(&e));
    }

    #[test]
    fn test_predicate_ordering_and_containment() {
        let e = env();

        let gt = Predicate {
            property: "server.port".to_string(),
            op: PredicateOp::Gt,
            value: Value::Number(1024.0),
        };
        assert!(gt.evaluate(&e));

        let le = Predicate {
            property: "server.port".to_string(),
            op: PredicateOp::Le,
            value: Value::Number(8080.0),
        };
        assert!(le.evaluate(&e));

        let contains = Predicate {
            property: "region".to_string(),
            op: PredicateOp::Contains,
            value: Value::String("west".to_string()),
        };
        assert!(contains.evaluate(&e));
    }

    #[test]
    fn test_empty_clause_holds() {
        assert!(WhenClause::default().evaluate(&env()));
    }

    #[test]
    fn test_all_any_not_groups() {
        let e = env();

        let clause = WhenClause::all_of(vec![
            ClauseItem::Predicate(Predicate::eq(
                "server.enabled".to_string(),
                Value::Bool(true),
            )),
            ClauseItem::Predicate(Predicate::exists("server.port".to_string())),
        ]);
        assert!(clause.evaluate(&e));

        let clause = WhenClause::any_of(vec![
            ClauseItem::Predicate(Predicate::eq(
                "region".to_string(),
                Value::String("us-east".to_string()),
            )),
            ClauseItem::Predicate(Predicate::eq(
                "region".to_string(),
                Value::String("eu-west".to_string()),
            )),
        ]);
        assert!(clause.evaluate(&e));

        let clause = WhenClause::none_of(vec![ClauseItem::Predicate(Predicate::exists(
            "server.port".to_string(),
        ))]);
        assert!(!clause.evaluate(&e));
    }

    #[test]
    fn test_nested_groups() {
        let e = env();

        // all: [enabled == true, any: [region == us-east, region == eu-west]]
        let clause = WhenClause::all_of(vec![
            ClauseItem::Predicate(Predicate::eq(
                "server.enabled".to_string(),
                Value::Bool(true),
            )),
            ClauseItem::Group(WhenClause::any_of(vec![
                ClauseItem::Predicate(Predicate::eq(
                    "region".to_string(),
                    Value::String("us-east".to_string()),
                )),
                ClauseItem::Predicate(Predicate::eq(
                    "region".to_string(),
                    Value::String("eu-west".to_string()),
                )),
            ])),
        ]);
        assert!(clause.evaluate(&e));
    }

    #[test]
    fn test_clause_serde_yaml() {
        let yaml = r#"
all:
  - property: server.enabled
    value: true
  - property: server.port
    op: exists
"#;
        let clause: WhenClause = serde_yaml::from_str(yaml).unwrap();
        assert!(clause.evaluate(&env()));

        let items = clause.all.as_ref().unwrap();
        assert_eq!(items.len(), 2);
        match &items[0] {
            ClauseItem::Predicate(p) => {
                assert_eq!(p.op, PredicateOp::Eq);
                assert_eq!(p.value, Value::Bool(true));
            }
            ClauseItem::Group(_) => panic!("expected predicate"),
        }
    }

    #[test]
    fn test_nested_clause_serde_yaml() {
        let yaml = r#"
any:
  - property: region
    value: us-east
  - all:
      - property: server.enabled
        value: true
      - property: region
        value: eu-west
"#;
        let clause: WhenClause = serde_yaml::from_str(yaml).unwrap();
        assert!(clause.evaluate(&env()));

        let items = clause.any.as_ref().unwrap();
        assert!(matches!(items[1], ClauseItem::Group(_)));
    }
}
