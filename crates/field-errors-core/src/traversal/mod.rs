//! Deep validation traversal.
//!
//! [`DeepValidator`] is the entry point. It runs the evaluator on every
//! composite value it reaches, renders each violation through the
//! [`Catalog`], and keys the result by full field path.
//!
//! # Design
//!
//! - **Failures are data**: a violation is a report entry, a misused entry
//!   point is a single entry under the root key, an absent root is an empty
//!   report. Nothing here returns `Err` or panics.
//! - **Fresh state per call**: each call builds its own report, so a shared
//!   `&DeepValidator` may be used from several threads when the evaluator
//!   allows it.
//! - **No depth limit or cycle detection**: values are expected to be
//!   ownership trees.

mod walker;

use crate::catalog::Catalog;
use crate::config::{ValidatorOptions, DEFAULT_ROOT_KEY};
use crate::error::{CatalogError, UsageError};
use crate::report::ErrorReport;
use crate::shape::{AsShape, Composite, Scalar, Shape};
use crate::violation::Evaluator;

use walker::Walker;

/// Validates values of arbitrary shape and aggregates the violations into a
/// flat [`ErrorReport`].
#[derive(Debug, Clone)]
pub struct DeepValidator<E> {
    evaluator: E,
    catalog: Catalog,
    root_key: String,
}

impl<E: Evaluator> DeepValidator<E> {
    /// Validator with the built-in catalog and default options.
    pub fn new(evaluator: E) -> Self {
        Self {
            evaluator,
            catalog: Catalog::new(),
            root_key: DEFAULT_ROOT_KEY.to_string(),
        }
    }

    /// Validator configured from `options`.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if any template override is rejected.
    pub fn with_options(evaluator: E, options: &ValidatorOptions) -> Result<Self, CatalogError> {
        Ok(Self {
            evaluator,
            catalog: Catalog::with_overrides(&options.templates)?,
            root_key: options.root_key.clone(),
        })
    }

    /// Validator using an already built catalog.
    pub fn with_catalog(evaluator: E, catalog: Catalog) -> Self {
        Self {
            evaluator,
            catalog,
            root_key: DEFAULT_ROOT_KEY.to_string(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    pub fn root_key(&self) -> &str {
        &self.root_key
    }

    /// Validates a single composite, or nothing.
    ///
    /// `None` (an absent optional root) yields an empty report.
    pub fn validate_top(&self, value: Option<&dyn Composite>) -> ErrorReport {
        match value {
            Some(value) => self.walker().walk(value),
            None => ErrorReport::new(),
        }
    }

    /// Validates every composite element of an ordered collection.
    ///
    /// Keys start with the element index: `[0].name`. Scalar elements,
    /// absent references and nested collections contribute nothing. An
    /// absent value yields an empty report; any other non-collection yields
    /// a usage-error entry under the root key.
    pub fn validate_collection<T: AsShape + ?Sized>(&self, value: &T) -> ErrorReport {
        match value.shape() {
            Shape::Collection(elements) => self.collect(&elements),
            Shape::Reference(None) | Shape::Scalar(Scalar::Null) => ErrorReport::new(),
            Shape::Composite(_) | Shape::Reference(Some(_)) | Shape::Scalar(_) => {
                self.usage(UsageError::NotCollection)
            }
        }
    }

    /// Dispatches on the runtime shape of `value`.
    ///
    /// - composite or present reference → [`validate_top`](Self::validate_top)
    /// - collection → [`validate_collection`](Self::validate_collection)
    /// - absent reference or null → empty report
    /// - anything else → a single usage-error entry under the root key
    pub fn validate_any<T: AsShape + ?Sized>(&self, value: &T) -> ErrorReport {
        match value.shape() {
            Shape::Composite(c) | Shape::Reference(Some(c)) => self.validate_top(Some(c)),
            Shape::Collection(elements) => self.collect(&elements),
            Shape::Reference(None) | Shape::Scalar(Scalar::Null) => ErrorReport::new(),
            Shape::Scalar(_) => self.usage(UsageError::UnsupportedShape),
        }
    }

    /// Alias for [`validate_any`](Self::validate_any).
    pub fn validate<T: AsShape + ?Sized>(&self, value: &T) -> ErrorReport {
        self.validate_any(value)
    }

    fn walker(&self) -> Walker<'_, E> {
        Walker {
            evaluator: &self.evaluator,
            catalog: &self.catalog,
        }
    }

    fn collect(&self, elements: &[Shape<'_>]) -> ErrorReport {
        let mut report = ErrorReport::new();
        self.walker().walk_elements("", elements, &mut report);
        report
    }

    fn usage(&self, err: UsageError) -> ErrorReport {
        tracing::debug!(code = ?err.error_code(), "unsupported top-level shape");
        ErrorReport::single(self.root_key.as_str(), err.to_string())
    }
}
