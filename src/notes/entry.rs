//! Formatting a single classified commit or PR as a markdown fragment.

use super::classify::Classification;
use super::links::{LinkTargets, rewrite_references};
use super::types::RenderMode;

/// Indentation applied to every line of a rendered body.
const BODY_INDENT: &str = "    ";

/// Render one release-note entry.
///
/// The title loses its conventional type prefix (everything through the first
/// `:` and one following space), is capitalized, gets a `(<Scope> Related) `
/// marker when the classification carries a subcategory, and is prefixed with
/// `title_prefix`. In [`RenderMode::Full`] a non-empty `body` follows,
/// capitalized, link-rewritten and indented.
pub fn format_entry(
    title: &str,
    classification: &Classification,
    body: Option<&str>,
    mode: RenderMode,
    title_prefix: &str,
    links: &LinkTargets,
) -> String {
    let mut entry = format_title(title, classification, title_prefix);

    if mode == RenderMode::Full
        && let Some(body) = body.filter(|b| !b.is_empty())
    {
        entry.push_str(&format_body(body, links));
    }

    entry
}

fn format_title(title: &str, classification: &Classification, title_prefix: &str) -> String {
    let description = capitalize_first(strip_type_prefix(title));

    let subcategory = match classification.subcategory() {
        Some(name) if !name.is_empty() => format!("({} Related) ", capitalize_first(name)),
        _ => String::new(),
    };

    format!("{}{}{}\n", title_prefix, subcategory, description)
}

fn format_body(body: &str, links: &LinkTargets) -> String {
    let body = capitalize_first(body);
    let body = rewrite_references(&body, links);
    let mut block = indent_lines(&body);
    block.push('\n');
    block
}

/// Drop everything through the first `:` and one space after it.
///
/// A title without a colon is returned whole.
fn strip_type_prefix(title: &str) -> &str {
    match title.split_once(':') {
        Some((_, rest)) => rest.strip_prefix(' ').unwrap_or(rest),
        None => title,
    }
}

/// Uppercase the first character; empty input stays empty.
pub(crate) fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Prefix every line, the first one included, with [`BODY_INDENT`].
///
/// A trailing newline does not open a new indented line.
fn indent_lines(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + BODY_INDENT.len());
    let mut at_line_start = true;

    for c in text.chars() {
        if at_line_start {
            result.push_str(BODY_INDENT);
        }
        result.push(c);
        at_line_start = c == '\n';
    }

    result
}
