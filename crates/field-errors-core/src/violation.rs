//! Constraint violations and the evaluator seam.

use serde::{Deserialize, Serialize};

use crate::shape::Composite;

/// Category of the value a constraint was checked against.
///
/// Size-family tags (`min`, `max`) read as a length for text and as a
/// magnitude for everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueCategory {
    Text,
    Number,
    Bool,
    Collection,
    Composite,
    Absent,
    Other,
}

impl ValueCategory {
    pub fn is_text(self) -> bool {
        matches!(self, ValueCategory::Text)
    }
}

/// A single failed constraint on one field of one composite value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Internal name of the violating field (not the wire name).
    pub field: String,
    /// Constraint tag, e.g. `"required"`, `"min"`, `"eqfield"`.
    pub tag: String,
    /// Constraint parameter, e.g. `"18"` or the compared field's internal name.
    pub param: Option<String>,
    /// Category of the checked value.
    pub category: ValueCategory,
    /// The evaluator's own message, used when the catalog has no template.
    pub message: String,
}

impl Violation {
    /// A violation without a parameter. The default message names the
    /// field and tag the way a generic evaluator would.
    pub fn new(field: impl Into<String>, tag: impl Into<String>, category: ValueCategory) -> Self {
        let field = field.into();
        let tag = tag.into();
        let message = format!("Field validation for '{}' failed on the '{}' tag", field, tag);
        Self {
            field,
            tag,
            param: None,
            category,
            message,
        }
    }

    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = Some(param.into());
        self
    }

    /// Replaces the evaluator's default message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Parameter text, empty when the constraint has none.
    pub fn param_text(&self) -> &str {
        self.param.as_deref().unwrap_or("")
    }
}

/// The external constraint evaluator.
///
/// Called once per composite value reached by the traversal. It checks the
/// constraints declared on that value's own fields only; nested composites
/// are visited separately.
pub trait Evaluator {
    fn evaluate(&self, value: &dyn Composite) -> Vec<Violation>;
}

impl<F> Evaluator for F
where
    F: Fn(&dyn Composite) -> Vec<Violation>,
{
    fn evaluate(&self, value: &dyn Composite) -> Vec<Violation> {
        self(value)
    }
}
