//! Matching commit subjects and PR titles against a commit type.

use crate::config::CommitTypeSpec;

/// How a title relates to one commit type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// `fix: ...` matched against `fix`.
    NoSubcategory,
    /// `fix(GUI): ...` matched against `fix`, carrying `GUI`.
    WithSubcategory(String),
    /// The title belongs to another type, or to none.
    NoMatch,
}

impl Classification {
    pub fn is_match(&self) -> bool {
        !matches!(self, Self::NoMatch)
    }

    /// The parenthesized scope, if the title had one.
    pub fn subcategory(&self) -> Option<&str> {
        match self {
            Self::WithSubcategory(name) => Some(name),
            _ => None,
        }
    }
}

/// Classify `title` against `spec`.
///
/// The text before the first `:` is compared first, so a title such as
/// `fix: handle (x)` is `NoSubcategory` even though it contains parentheses.
/// Only when that fails is the text before the first `(` compared.
pub fn classify(title: &str, spec: &CommitTypeSpec) -> Classification {
    let name = spec.conventional_name.as_str();

    if prefix_before(title, ':') == name {
        return Classification::NoSubcategory;
    }

    if prefix_before(title, '(') == name {
        return Classification::WithSubcategory(subcategory_of(title));
    }

    Classification::NoMatch
}

/// Substring up to the first `delimiter`, or the whole string if absent.
fn prefix_before(title: &str, delimiter: char) -> &str {
    title.split_once(delimiter).map_or(title, |(prefix, _)| prefix)
}

/// Text between the first `(` and the first `)` after it.
///
/// An unclosed parenthesis yields an empty subcategory.
fn subcategory_of(title: &str) -> String {
    title
        .split_once('(')
        .and_then(|(_, rest)| rest.split_once(')'))
        .map(|(inner, _)| inner.to_string())
        .unwrap_or_default()
}
