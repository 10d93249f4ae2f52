//! Host data model seam: field-descriptor tables and runtime shapes.
//!
//! A composite type exposes an ordered list of [`Field`]s, each carrying its
//! internal name, its external-name annotation ([`WireName`]) and the
//! [`Shape`] of its current value. The traversal engine only ever sees values
//! through this view, so every branch over runtime shape is an exhaustive
//! `match` on [`Shape`].

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::violation::ValueCategory;

// ---------------------------------------------------------------------------
// Composite
// ---------------------------------------------------------------------------

/// A structured value with a known field layout.
///
/// `fields` must return the same names, in the same order, for every value of
/// a given type; only the shapes vary with the data.
pub trait Composite {
    /// Type name, used for log context.
    fn type_name(&self) -> &'static str;

    /// The field-descriptor table, paired with each field's current value.
    fn fields(&self) -> Vec<Field<'_>>;

    /// Finds a field by its internal name.
    fn field(&self, name: &str) -> Option<Field<'_>> {
        self.fields().into_iter().find(|f| f.name() == name)
    }
}

// ---------------------------------------------------------------------------
// Wire names
// ---------------------------------------------------------------------------

/// External-name annotation attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WireName {
    /// No annotation: the internal name is public.
    #[default]
    Default,
    /// The field is known externally under this name.
    Renamed(&'static str),
    /// The annotation hides the field from the wire. Paths fall back to the
    /// internal name.
    Suppressed,
}

impl WireName {
    /// Parses a tag-style annotation such as `"confirm_password,omitempty"`.
    ///
    /// - `""` → [`WireName::Default`]
    /// - `"-"` → [`WireName::Suppressed`]
    /// - `",omitempty"` (empty name before the options) → [`WireName::Default`]
    /// - otherwise the part before the first comma is the external name.
    pub fn from_tag(tag: &'static str) -> Self {
        if tag == "-" {
            return WireName::Suppressed;
        }
        match tag.split(',').next() {
            Some(name) if !name.is_empty() => WireName::Renamed(name),
            _ => WireName::Default,
        }
    }

    /// Resolves the public name of a field whose internal name is `internal`.
    pub fn resolve(self, internal: &'static str) -> &'static str {
        match self {
            WireName::Renamed(name) if !name.is_empty() => name,
            _ => internal,
        }
    }
}

// ---------------------------------------------------------------------------
// Field
// ---------------------------------------------------------------------------

/// One row of a composite's field-descriptor table.
#[derive(Debug, Clone)]
pub struct Field<'a> {
    name: &'static str,
    wire: WireName,
    shape: Shape<'a>,
}

impl<'a> Field<'a> {
    /// A field with no external-name annotation.
    pub fn new(name: &'static str, shape: Shape<'a>) -> Self {
        Self {
            name,
            wire: WireName::Default,
            shape,
        }
    }

    /// Sets the external name.
    pub fn wire(mut self, name: &'static str) -> Self {
        self.wire = WireName::Renamed(name);
        self
    }

    /// Sets the external name from a tag-style annotation (see [`WireName::from_tag`]).
    pub fn tagged(mut self, tag: &'static str) -> Self {
        self.wire = WireName::from_tag(tag);
        self
    }

    /// Internal (structural) name, the one the evaluator reports.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn wire_name(&self) -> WireName {
        self.wire
    }

    /// Public name used for report keys and messages.
    pub fn public_name(&self) -> &'static str {
        self.wire.resolve(self.name)
    }

    pub fn shape(&self) -> &Shape<'a> {
        &self.shape
    }
}

// ---------------------------------------------------------------------------
// Shape
// ---------------------------------------------------------------------------

/// Runtime shape of a value.
#[derive(Clone)]
pub enum Shape<'a> {
    /// A structured value with its own field layout.
    Composite(&'a dyn Composite),
    /// An optional or nullable reference to a structured value.
    Reference(Option<&'a dyn Composite>),
    /// An ordered collection; each element carries its own shape.
    Collection(Vec<Shape<'a>>),
    /// Anything else. Never recursed into.
    Scalar(Scalar<'a>),
}

impl<'a> Shape<'a> {
    /// The composite behind this shape, if it is a composite or a present reference.
    pub fn as_composite(&self) -> Option<&'a dyn Composite> {
        match self {
            Shape::Composite(c) | Shape::Reference(Some(c)) => Some(*c),
            Shape::Reference(None) | Shape::Collection(_) | Shape::Scalar(_) => None,
        }
    }

    /// True for absent references and null scalars.
    pub fn is_absent(&self) -> bool {
        matches!(self, Shape::Reference(None) | Shape::Scalar(Scalar::Null))
    }

    /// Observed value category, as an evaluator would report it.
    pub fn category(&self) -> ValueCategory {
        match self {
            Shape::Composite(_) | Shape::Reference(Some(_)) => ValueCategory::Composite,
            Shape::Reference(None) => ValueCategory::Absent,
            Shape::Collection(_) => ValueCategory::Collection,
            Shape::Scalar(s) => s.category(),
        }
    }
}

impl fmt::Debug for Shape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Composite(c) => write!(f, "Composite({})", c.type_name()),
            Shape::Reference(Some(c)) => write!(f, "Reference(Some({}))", c.type_name()),
            Shape::Reference(None) => write!(f, "Reference(None)"),
            Shape::Collection(items) => f.debug_tuple("Collection").field(items).finish(),
            Shape::Scalar(s) => f.debug_tuple("Scalar").field(s).finish(),
        }
    }
}

/// Leaf values. Maps and other opaque containers are [`Scalar::Opaque`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(&'a str),
    Opaque,
}

impl Scalar<'_> {
    pub fn category(&self) -> ValueCategory {
        match self {
            Scalar::Null => ValueCategory::Absent,
            Scalar::Bool(_) => ValueCategory::Bool,
            Scalar::Int(_) | Scalar::Uint(_) | Scalar::Float(_) => ValueCategory::Number,
            Scalar::Text(_) => ValueCategory::Text,
            Scalar::Opaque => ValueCategory::Other,
        }
    }
}

// ---------------------------------------------------------------------------
// AsShape
// ---------------------------------------------------------------------------

/// Conversion from a Rust value to its runtime [`Shape`].
///
/// Composite types implement this as `Shape::Composite(self)`.
pub trait AsShape {
    fn shape(&self) -> Shape<'_>;
}

impl AsShape for str {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Text(self))
    }
}

impl AsShape for String {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Text(self))
    }
}

impl AsShape for bool {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Bool(*self))
    }
}

macro_rules! scalar_shape {
    ($variant:ident as $target:ty: $($t:ty),*) => {
        $(
            impl AsShape for $t {
                fn shape(&self) -> Shape<'_> {
                    Shape::Scalar(Scalar::$variant(*self as $target))
                }
            }
        )*
    };
}

scalar_shape!(Int as i64: i8, i16, i32, i64, isize);
scalar_shape!(Uint as u64: u8, u16, u32, u64, usize);
scalar_shape!(Float as f64: f32, f64);

impl AsShape for () {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Null)
    }
}

impl<T: AsShape + ?Sized> AsShape for &T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: AsShape + ?Sized> AsShape for Box<T> {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: AsShape> AsShape for Option<T> {
    fn shape(&self) -> Shape<'_> {
        match self {
            None => Shape::Reference(None),
            Some(inner) => match inner.shape() {
                Shape::Composite(c) => Shape::Reference(Some(c)),
                other => other,
            },
        }
    }
}

impl<T: AsShape> AsShape for [T] {
    fn shape(&self) -> Shape<'_> {
        Shape::Collection(self.iter().map(AsShape::shape).collect())
    }
}

impl<T: AsShape, const N: usize> AsShape for [T; N] {
    fn shape(&self) -> Shape<'_> {
        self.as_slice().shape()
    }
}

impl<T: AsShape> AsShape for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        self.as_slice().shape()
    }
}

impl<K, V> AsShape for HashMap<K, V> {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Opaque)
    }
}

impl<K, V> AsShape for BTreeMap<K, V> {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Opaque)
    }
}
