//! Recursive walk over a composite value and its descendants.

use crate::catalog::Catalog;
use crate::report::ErrorReport;
use crate::shape::{Composite, Shape};
use crate::violation::Evaluator;

/// One traversal: borrows the evaluator and catalog for its lifetime.
pub(super) struct Walker<'v, E: ?Sized> {
    pub(super) evaluator: &'v E,
    pub(super) catalog: &'v Catalog,
}

impl<E: Evaluator + ?Sized> Walker<'_, E> {
    /// Report for `value` and everything below it, keyed relative to `value`.
    ///
    /// 1. Violations the evaluator reports on `value` itself, keyed by the
    ///    violating field's public name.
    /// 2. For every field, flagged or not: nested composites and present
    ///    references merge under `name.`, collection elements under
    ///    `name[i].`.
    pub(super) fn walk(&self, value: &dyn Composite) -> ErrorReport {
        let fields = value.fields();
        let mut report = ErrorReport::new();

        tracing::trace!(
            type_name = value.type_name(),
            fields = fields.len(),
            "walking composite"
        );

        for violation in self.evaluator.evaluate(value) {
            match fields.iter().find(|f| f.name() == violation.field) {
                Some(field) => {
                    let name = field.public_name();
                    report.insert(name, self.catalog.format(&violation, name));
                }
                None => {
                    tracing::debug!(
                        type_name = value.type_name(),
                        field = %violation.field,
                        tag = %violation.tag,
                        "dropping violation for field missing from layout"
                    );
                }
            }
        }

        for field in &fields {
            let name = field.public_name();
            match field.shape() {
                Shape::Composite(nested) | Shape::Reference(Some(nested)) => {
                    report.merge_nested(name, self.walk(*nested));
                }
                Shape::Collection(elements) => {
                    self.walk_elements(name, elements, &mut report);
                }
                Shape::Reference(None) | Shape::Scalar(_) => {}
            }
        }

        report
    }

    /// Walks each composite element, merging under `parent[i].`. Scalars,
    /// absent references and nested collections are skipped.
    pub(super) fn walk_elements(
        &self,
        parent: &str,
        elements: &[Shape<'_>],
        report: &mut ErrorReport,
    ) {
        for (index, element) in elements.iter().enumerate() {
            match element {
                Shape::Composite(nested) | Shape::Reference(Some(nested)) => {
                    report.merge_indexed(parent, index, self.walk(*nested));
                }
                Shape::Collection(_) | Shape::Reference(None) | Shape::Scalar(_) => {}
            }
        }
    }
}
