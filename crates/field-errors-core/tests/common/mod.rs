//! Shared fixtures: composite types with descriptor tables, and a small
//! rule-table evaluator standing in for a real constraint engine.

#![allow(dead_code)]

use std::collections::HashMap;

use field_errors_core::{
    AsShape, Composite, Evaluator, Field, Scalar, Shape, ValueCategory, Violation,
};

// ---------------------------------------------------------------------------
// Fixture types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct Person {
    pub name: String,
    pub email: String,
    pub age: i64,
    pub password: String,
    pub confirm_pass: String,
    pub website: String,
    pub username: String,
}

impl Composite for Person {
    fn type_name(&self) -> &'static str {
        "Person"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("Name", self.name.shape()).wire("name"),
            Field::new("Email", self.email.shape()).wire("email"),
            Field::new("Age", self.age.shape()).wire("age"),
            Field::new("Password", self.password.shape()).wire("password"),
            Field::new("ConfirmPass", self.confirm_pass.shape()).wire("confirm_password"),
            Field::new("Website", self.website.shape()).wire("website"),
            Field::new("Username", self.username.shape()).wire("username"),
        ]
    }
}

impl AsShape for Person {
    fn shape(&self) -> Shape<'_> {
        Shape::Composite(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Address {
    pub address: String,
    pub city: String,
    pub zip_code: String,
}

impl Composite for Address {
    fn type_name(&self) -> &'static str {
        "Address"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("Address", self.address.shape()).tagged("address"),
            Field::new("City", self.city.shape()).tagged("city,omitempty"),
            Field::new("ZipCode", self.zip_code.shape()).tagged("zip_code"),
        ]
    }
}

impl AsShape for Address {
    fn shape(&self) -> Shape<'_> {
        Shape::Composite(self)
    }
}

/// Exercises every field shape: nested composite, collection of composites,
/// optional reference, collection of optional references, scalars, a map,
/// and an untagged field.
#[derive(Debug, Clone, Default)]
pub struct Account {
    pub user: Person,
    pub contacts: Vec<Person>,
    pub address: Address,
    pub manager: Option<Box<Person>>,
    pub backups: Vec<Option<Person>>,
    pub tags: Vec<String>,
    pub metadata: HashMap<String, String>,
    pub notes: String,
}

impl Composite for Account {
    fn type_name(&self) -> &'static str {
        "Account"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("User", self.user.shape()).wire("user"),
            Field::new("Contacts", self.contacts.shape()).wire("contacts"),
            Field::new("Address", self.address.shape()).wire("address"),
            Field::new("Manager", self.manager.shape()).tagged("manager,omitempty"),
            Field::new("Backups", self.backups.shape()).wire("backups"),
            Field::new("Tags", self.tags.shape()).wire("tags"),
            Field::new("Metadata", self.metadata.shape()).tagged("-"),
            Field::new("Notes", self.notes.shape()),
        ]
    }
}

impl AsShape for Account {
    fn shape(&self) -> Shape<'_> {
        Shape::Composite(self)
    }
}

/// Wraps accounts one and two levels down: composite in composite, and
/// collection inside collection elements.
#[derive(Debug, Clone, Default)]
pub struct Team {
    pub lead: Account,
    pub members: Vec<Account>,
}

impl Composite for Team {
    fn type_name(&self) -> &'static str {
        "Team"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("Lead", self.lead.shape()).wire("lead"),
            Field::new("Members", self.members.shape()).wire("members"),
        ]
    }
}

impl AsShape for Team {
    fn shape(&self) -> Shape<'_> {
        Shape::Composite(self)
    }
}

pub fn valid_person() -> Person {
    Person {
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        age: 25,
        password: "password123".to_string(),
        confirm_pass: "password123".to_string(),
        website: "https://example.com".to_string(),
        username: "johndoe".to_string(),
    }
}

pub fn invalid_person() -> Person {
    Person {
        name: String::new(),
        email: "invalid-email".to_string(),
        age: 15,
        password: "123".to_string(),
        confirm_pass: "different".to_string(),
        website: "not-a-url".to_string(),
        username: "john doe".to_string(),
    }
}

pub fn valid_address() -> Address {
    Address {
        address: "123 Main St".to_string(),
        city: "New York".to_string(),
        zip_code: "10001".to_string(),
    }
}

pub fn valid_account() -> Account {
    Account {
        user: valid_person(),
        contacts: vec![valid_person()],
        address: valid_address(),
        ..Account::default()
    }
}

// ---------------------------------------------------------------------------
// Rule-table evaluator
// ---------------------------------------------------------------------------

/// Checks understood by [`RuleBook`]. The first failing rule of a field is
/// the one reported.
#[derive(Debug, Clone)]
pub enum Rule {
    Required,
    Min(i64),
    Max(i64),
    Len(usize),
    Email,
    Url,
    Alphanum,
    Numeric,
    EqField(&'static str),
}

impl Rule {
    fn tag(&self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::Min(_) => "min",
            Rule::Max(_) => "max",
            Rule::Len(_) => "len",
            Rule::Email => "email",
            Rule::Url => "url",
            Rule::Alphanum => "alphanum",
            Rule::Numeric => "numeric",
            Rule::EqField(_) => "eqfield",
        }
    }

    fn param(&self) -> Option<String> {
        match self {
            Rule::Min(n) | Rule::Max(n) => Some(n.to_string()),
            Rule::Len(n) => Some(n.to_string()),
            Rule::EqField(other) => Some(other.to_string()),
            _ => None,
        }
    }

    fn passes(&self, shape: &Shape<'_>, owner: &dyn Composite) -> bool {
        match self {
            Rule::Required => match shape {
                Shape::Scalar(Scalar::Text(s)) => !s.is_empty(),
                Shape::Scalar(Scalar::Int(n)) => *n != 0,
                Shape::Scalar(Scalar::Uint(n)) => *n != 0,
                Shape::Scalar(Scalar::Float(n)) => *n != 0.0,
                Shape::Scalar(Scalar::Null) | Shape::Reference(None) => false,
                Shape::Collection(items) => !items.is_empty(),
                _ => true,
            },
            Rule::Min(min) => measure(shape).map_or(true, |m| m >= *min),
            Rule::Max(max) => measure(shape).map_or(true, |m| m <= *max),
            Rule::Len(len) => measure(shape).map_or(true, |m| m == *len as i64),
            Rule::Email => text(shape).map_or(true, is_email),
            Rule::Url => text(shape).map_or(true, |s| {
                ["http://", "https://"]
                    .iter()
                    .any(|scheme| s.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()))
            }),
            Rule::Alphanum => text(shape)
                .map_or(true, |s| !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric())),
            Rule::Numeric => {
                text(shape).map_or(true, |s| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()))
            }
            Rule::EqField(other) => {
                let other = owner.field(other).map(|f| f.shape().clone());
                match (text(shape), other.as_ref().and_then(text)) {
                    (Some(a), Some(b)) => a == b,
                    _ => false,
                }
            }
        }
    }
}

fn text<'a>(shape: &Shape<'a>) -> Option<&'a str> {
    match shape {
        Shape::Scalar(Scalar::Text(s)) => Some(s),
        _ => None,
    }
}

/// Length for text and collections, value for integers.
fn measure(shape: &Shape<'_>) -> Option<i64> {
    match shape {
        Shape::Scalar(Scalar::Text(s)) => Some(s.chars().count() as i64),
        Shape::Scalar(Scalar::Int(n)) => Some(*n),
        Shape::Scalar(Scalar::Uint(n)) => i64::try_from(*n).ok(),
        Shape::Collection(items) => Some(items.len() as i64),
        _ => None,
    }
}

fn is_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
        && !s.chars().any(char::is_whitespace)
}

/// Per-type, per-field rule lists.
#[derive(Debug, Clone, Default)]
pub struct RuleBook {
    rules: HashMap<&'static str, Vec<(&'static str, Vec<Rule>)>>,
}

impl RuleBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, type_name: &'static str, field: &'static str, rules: Vec<Rule>) -> Self {
        self.rules.entry(type_name).or_default().push((field, rules));
        self
    }

    /// Rules matching the fixture types above.
    pub fn standard() -> Self {
        Self::new()
            .rule("Person", "Name", vec![Rule::Required])
            .rule("Person", "Email", vec![Rule::Required, Rule::Email])
            .rule("Person", "Age", vec![Rule::Required, Rule::Min(18)])
            .rule("Person", "Password", vec![Rule::Required, Rule::Min(8)])
            .rule("Person", "ConfirmPass", vec![Rule::EqField("Password")])
            .rule("Person", "Website", vec![Rule::Url])
            .rule("Person", "Username", vec![Rule::Required, Rule::Alphanum])
            .rule("Address", "Address", vec![Rule::Required])
            .rule("Address", "City", vec![Rule::Required])
            .rule("Address", "ZipCode", vec![Rule::Required, Rule::Numeric])
            .rule("Account", "User", vec![Rule::Required])
            .rule("Account", "Contacts", vec![Rule::Required, Rule::Min(1)])
            .rule("Account", "Address", vec![Rule::Required])
    }
}

impl Evaluator for RuleBook {
    fn evaluate(&self, value: &dyn Composite) -> Vec<Violation> {
        let Some(field_rules) = self.rules.get(value.type_name()) else {
            return Vec::new();
        };

        let mut violations = Vec::new();
        for (name, rules) in field_rules {
            // A rule on a field the layout does not have reports against an
            // absent value, like a stale rule set would.
            let shape = value
                .field(name)
                .map(|f| f.shape().clone())
                .unwrap_or(Shape::Reference(None));
            let category: ValueCategory = shape.category();

            if let Some(rule) = rules.iter().find(|r| !r.passes(&shape, value)) {
                let mut violation = Violation::new(*name, rule.tag(), category);
                violation.param = rule.param();
                violations.push(violation);
            }
        }
        violations
    }
}
