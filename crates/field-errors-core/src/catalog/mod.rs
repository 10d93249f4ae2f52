//! Message catalog and formatter.
//!
//! Maps a constraint tag to a template and renders one sentence per
//! [`Violation`]. The template's [`Arity`] decides which arguments are
//! substituted:
//!
//! - [`Arity::Subject`]: the subject's public name only.
//! - [`Arity::WithParam`]: public name plus the raw parameter text.
//! - [`Arity::FieldRef`]: public name plus the compared field's *internal*
//!   name, exactly as the evaluator reported it. The compared field is not
//!   resolved to its public name.
//! - [`Arity::Size`] (`min`/`max`/`len`): a length sentence for text, a
//!   magnitude sentence otherwise (`len` is always a length).
//!
//! Unknown tags fall back to the evaluator's own message.

mod templates;

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::CatalogError;
use crate::violation::Violation;

/// Matches `{...}` placeholders in override templates.
const PLACEHOLDER_PATTERN: &str = r"\{([^{}]*)\}";

/// Which arguments a template is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Subject,
    WithParam,
    FieldRef,
    Size,
}

/// A message template and its arity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: Cow<'static, str>,
    arity: Arity,
}

impl Template {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Renders with the given arguments. `param` is ignored for
    /// [`Arity::Subject`].
    pub fn render(&self, field: &str, param: &str) -> String {
        match self.arity {
            Arity::Subject => render(&self.text, field, ""),
            Arity::WithParam | Arity::FieldRef | Arity::Size => render(&self.text, field, param),
        }
    }
}

fn builtin() -> &'static HashMap<&'static str, Template> {
    static BUILTIN: OnceLock<HashMap<&'static str, Template>> = OnceLock::new();
    BUILTIN.get_or_init(|| {
        templates::BUILTIN
            .iter()
            .map(|(tag, arity, text)| {
                (
                    *tag,
                    Template {
                        text: Cow::Borrowed(*text),
                        arity: *arity,
                    },
                )
            })
            .collect()
    })
}

/// Tags with a built-in template, in table order.
pub fn builtin_tags() -> impl Iterator<Item = &'static str> {
    templates::BUILTIN.iter().map(|(tag, _, _)| *tag)
}

/// Built-in templates plus caller overrides.
///
/// Overrides win over built-ins for the same tag. The built-in table is
/// shared and never modified.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    overrides: HashMap<String, Template>,
}

impl Catalog {
    /// The built-in catalog, no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from `tag → template` overrides.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::EmptyTemplate`] for a blank template.
    /// - [`CatalogError::UnknownPlaceholder`] for any `{name}` other than
    ///   `{field}` and `{param}`.
    pub fn with_overrides<I, K, V>(overrides: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let placeholder = placeholder_regex()?;
        let mut catalog = Self::new();
        for (tag, text) in overrides {
            let template = parse_override(placeholder, tag.as_ref(), text.as_ref())?;
            catalog.overrides.insert(tag.as_ref().to_string(), template);
        }
        Ok(catalog)
    }

    /// Adds or replaces a single override.
    pub fn set_template(&mut self, tag: &str, text: &str) -> Result<(), CatalogError> {
        let template = parse_override(placeholder_regex()?, tag, text)?;
        self.overrides.insert(tag.to_string(), template);
        Ok(())
    }

    pub fn template(&self, tag: &str) -> Option<&Template> {
        self.overrides.get(tag).or_else(|| builtin().get(tag))
    }

    pub fn is_known(&self, tag: &str) -> bool {
        self.template(tag).is_some()
    }

    /// Renders the message for `violation`, whose subject is publicly known
    /// as `public_name`. Never fails and never returns an empty string.
    pub fn format(&self, violation: &Violation, public_name: &str) -> String {
        let Some(template) = self.template(&violation.tag) else {
            return fallback(violation, public_name);
        };

        let param = violation.param_text();
        match template.arity {
            Arity::Size => match templates::magnitude_for(&violation.tag) {
                Some(magnitude) if !violation.category.is_text() => {
                    render(magnitude, public_name, param)
                }
                _ => template.render(public_name, param),
            },
            Arity::Subject | Arity::WithParam | Arity::FieldRef => {
                template.render(public_name, param)
            }
        }
    }
}

/// Renders `violation` with the built-in catalog.
pub fn format_message(violation: &Violation, public_name: &str) -> String {
    Catalog::new().format(violation, public_name)
}

fn fallback(violation: &Violation, public_name: &str) -> String {
    tracing::trace!(tag = %violation.tag, "no template for tag, using evaluator message");
    if violation.message.is_empty() {
        format!(
            "the field '{}' failed the '{}' constraint",
            public_name, violation.tag
        )
    } else {
        violation.message.clone()
    }
}

fn placeholder_regex() -> Result<&'static Regex, CatalogError> {
    static PLACEHOLDER: OnceLock<Result<Regex, String>> = OnceLock::new();
    PLACEHOLDER
        .get_or_init(|| Regex::new(PLACEHOLDER_PATTERN).map_err(|e| e.to_string()))
        .as_ref()
        .map_err(|e| CatalogError::InvalidPattern(e.clone()))
}

fn parse_override(placeholder: &Regex, tag: &str, text: &str) -> Result<Template, CatalogError> {
    if text.trim().is_empty() {
        return Err(CatalogError::EmptyTemplate {
            tag: tag.to_string(),
        });
    }

    let mut uses_param = false;
    for caps in placeholder.captures_iter(text) {
        match &caps[1] {
            "field" => {}
            "param" => uses_param = true,
            other => {
                return Err(CatalogError::UnknownPlaceholder {
                    tag: tag.to_string(),
                    placeholder: other.to_string(),
                })
            }
        }
    }

    // Size tags keep their category branch; an override only replaces the
    // length sentence.
    let arity = match builtin().get(tag).map(Template::arity) {
        Some(Arity::Size) => Arity::Size,
        Some(Arity::FieldRef) if uses_param => Arity::FieldRef,
        _ if uses_param => Arity::WithParam,
        _ => Arity::Subject,
    };

    Ok(Template {
        text: Cow::Owned(text.to_string()),
        arity,
    })
}

/// Single-pass substitution of `{field}` and `{param}`. Other braces are
/// copied through.
fn render(template: &str, field: &str, param: &str) -> String {
    let mut out = String::with_capacity(template.len() + field.len() + param.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        if let Some(after) = tail.strip_prefix("{field}") {
            out.push_str(field);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("{param}") {
            out.push_str(param);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}
