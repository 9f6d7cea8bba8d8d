//! Rewriting plain-text issue references and commit SHAs into markdown links.
//!
//! Both rewrites scan the input once from left to right and emit literal and
//! replacement spans into a new buffer, so match positions never drift as
//! replacements change the length.
//!
//! Text that is already a markdown link is not recognized: a `#123` inside an
//! existing `[#123](...)` is linked again. Referenced issues and commits are
//! not checked for existence.

use std::sync::LazyLock;

use regex_lite::{Captures, Regex};

/// `#` followed by one or more digits.
pub(crate) static HASH_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(\d+)").expect("hash id pattern is valid"));

/// A 6-40 character lowercase hex run after a space or opening parenthesis.
///
/// The right bound is checked by hand so that it stays available as the left
/// bound of the next SHA.
static COMMIT_SHA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ (]([0-9a-f]{6,40})").expect("commit sha pattern is valid"));

/// Base URLs that references are linked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTargets {
    /// Prefix for issue and PR numbers, e.g. `https://github.com/o/r/issues/`.
    pub issues_url: String,
    /// Prefix for commit SHAs, e.g. `https://github.com/o/r/commit/`.
    pub commits_url: String,
}

impl LinkTargets {
    pub fn new(issues_url: impl Into<String>, commits_url: impl Into<String>) -> Self {
        Self {
            issues_url: issues_url.into(),
            commits_url: commits_url.into(),
        }
    }

    /// Link targets for a repository hosted at `github_url` (e.g. `https://github.com/`).
    pub fn for_repository(github_url: &str, owner: &str, repo: &str) -> Self {
        let root = if github_url.ends_with('/') {
            github_url.to_string()
        } else {
            format!("{}/", github_url)
        };

        Self {
            issues_url: format!("{}{}/{}/issues/", root, owner, repo),
            commits_url: format!("{}{}/{}/commit/", root, owner, repo),
        }
    }
}

/// Apply every rewrite to a PR body: issue references, then commit SHAs, then
/// carriage returns.
pub fn rewrite_references(body: &str, targets: &LinkTargets) -> String {
    let linked = link_hash_ids(body, &targets.issues_url);
    let linked = link_commit_shas(&linked, &targets.commits_url);
    normalize_line_endings(&linked)
}

/// Replace every `#<digits>` with `[#<digits>](<issues_url><digits>)`.
pub fn link_hash_ids(text: &str, issues_url: &str) -> String {
    HASH_ID
        .replace_all(text, |caps: &Captures<'_>| {
            let id = &caps[1];
            format!("[#{}]({}{})", id, issues_url, id)
        })
        .into_owned()
}

/// Replace every bounded commit SHA with ` [<first 6>](<commits_url><sha>) `.
///
/// The bounding characters are replaced by single spaces, so `(219c2149)`
/// becomes ` [219c21](...) `. A space between two SHAs bounds both of them.
pub fn link_commit_shas(text: &str, commits_url: &str) -> String {
    let mut linked = String::with_capacity(text.len());
    let mut last = 0;

    for caps in COMMIT_SHA.captures_iter(text) {
        let (Some(whole), Some(sha)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let right = text[sha.end()..].chars().next();
        if !matches!(right, Some(' ' | ')')) {
            continue;
        }

        linked.push_str(&text[last..whole.start()]);
        linked.push_str(&format!(
            " [{}]({}{})",
            &sha.as_str()[..6],
            commits_url,
            sha.as_str()
        ));
        last = sha.end();

        // A closing paren cannot open the next SHA, so it is respaced here.
        if right == Some(')') {
            linked.push(' ');
            last += 1;
        }
    }

    linked.push_str(&text[last..]);
    linked
}

/// Replace every `\r` with two spaces.
///
/// PR bodies arrive with `\r\n` line endings; written out verbatim they turn
/// into doubled blank lines. Two trailing spaces keep the markdown hard break.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace('\r', "  ")
}

/// First `#<digits>` reference in `text`, as written.
pub fn first_hash_id(text: &str) -> Option<&str> {
    HASH_ID
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
