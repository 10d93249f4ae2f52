//! # field-errors-core
//!
//! Turns the constraint violations reported by an external evaluator into a
//! flat [`ErrorReport`]: a map from field path (`contacts[0].email`) to a
//! ready-to-display sentence (`the field 'email' must be a valid email address`).
//!
//! Two pieces do the work:
//!
//! - [`catalog`]: a static table of message templates keyed by constraint
//!   tag, plus the formatter that picks which arguments each tag takes.
//! - [`traversal`]: [`DeepValidator`], which walks a value through its
//!   field-descriptor table ([`Composite`]), asks the [`Evaluator`] for
//!   violations at every level, and recurses into nested composites,
//!   optional references and collections.
//!
//! Composite types describe themselves by implementing [`Composite`] and
//! [`AsShape`]:
//!
//! ```
//! use field_errors_core::{AsShape, Composite, DeepValidator, Field, Shape, Violation};
//! use field_errors_core::ValueCategory;
//!
//! struct Signup {
//!     email: String,
//! }
//!
//! impl Composite for Signup {
//!     fn type_name(&self) -> &'static str {
//!         "Signup"
//!     }
//!
//!     fn fields(&self) -> Vec<Field<'_>> {
//!         vec![Field::new("Email", self.email.shape()).wire("email")]
//!     }
//! }
//!
//! impl AsShape for Signup {
//!     fn shape(&self) -> Shape<'_> {
//!         Shape::Composite(self)
//!     }
//! }
//!
//! fn always_required(_: &dyn Composite) -> Vec<Violation> {
//!     vec![Violation::new("Email", "required", ValueCategory::Text)]
//! }
//!
//! let validator = DeepValidator::new(always_required);
//! let report = validator.validate_any(&Signup { email: String::new() });
//! assert_eq!(report.get("email"), Some("the field 'email' is required"));
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod report;
pub mod shape;
pub mod traversal;
pub mod violation;

pub use catalog::{format_message, Arity, Catalog, Template};
pub use config::ValidatorOptions;
pub use error::{CatalogError, ErrorCode, UsageError};
pub use report::{join_field, join_index, ErrorReport};
pub use shape::{AsShape, Composite, Field, Scalar, Shape, WireName};
pub use traversal::DeepValidator;
pub use violation::{Evaluator, ValueCategory, Violation};
