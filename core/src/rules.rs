#![deny(missing_docs)]

//! # Rule Table
//!
//! The ordered find-and-replace rules applied to generated type definitions.
//!
//! Rules run strictly in insertion order over the whole text, so each rule
//! sees the output of the ones before it. The default table relies on this:
//! - ` PaginationResultRepo` is renamed before the generic ` Repo` strip eats it.
//! - `?:` is rewritten to `:` before the date rules look for `<name>: string;`.

use regex::Regex;
use std::fmt;

/// Field names whose generated `string` type is coerced to `Date`, in table order.
pub const DATE_FIELDS: [&str; 7] = [
    "createdAt",
    "updatedAt",
    "soldTime",
    "purchaseTime",
    "warrantyExpires",
    "expiresAt",
    "date",
];

/// Characters that may precede a field name without being part of it.
const NAME_START: &str = r"(^|[^\w$])";

/// A single `(pattern, replacement)` pair.
///
/// The replacement is a template in `regex` syntax: `$1` or `${name}` refer
/// to capture groups of the pattern.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    replacement: String,
}

impl Rule {
    pub(crate) fn compile(pattern: &str, replacement: impl Into<String>) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("Invalid regex constant"),
            replacement: replacement.into(),
        }
    }

    /// The source of the compiled pattern.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// The replacement template.
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Replaces every match of the pattern in `text`.
    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, self.replacement.as_str())
            .into_owned()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' -> '{}'", self.pattern(), self.replacement)
    }
}

/// An immutable, ordered collection of rules.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    pub(crate) fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Iterates the rules in application order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// Builds one `<name>: string;` -> `<name>: Date;` rule per name, in input order.
///
/// Names are matched literally and only where they are not the tail of a
/// longer identifier, so `date` leaves `update: string;` and `$date: string;`
/// alone.
pub fn build_date_rules<S: AsRef<str>>(names: &[S]) -> Vec<Rule> {
    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            Rule::compile(
                &format!("{}{}: string;", NAME_START, regex::escape(name)),
                format!("${{1}}{}: Date;", name.replace('$', "$$")),
            )
        })
        .collect()
}

/// Builds the default rule table.
///
/// Order: pagination rename, ` Repo`, ` Services` and ` V1` strips,
/// optional-to-required marker, then the [`DATE_FIELDS`] coercions.
pub fn build_rule_table() -> RuleTable {
    let mut rules = vec![
        Rule::compile(" PaginationResultRepo", "PaginationResult"),
        Rule::compile(" Repo", " "),
        Rule::compile(" Services", " "),
        Rule::compile(" V1", " "),
        Rule::compile(r"\?:", ":"),
    ];
    rules.extend(build_date_rules(&DATE_FIELDS));
    RuleTable::new(rules)
}
