//! Git operations using git2-rs.

pub mod commits;
pub mod range;

pub use commits::{CommitSource, CommitSubjects, GitCommitSource, SubjectFilter};
pub use range::{CommitRange, resolve_range};
