//! relnotes - A CLI tool that generates release notes from conventional commits.
//!
//! # Overview
//!
//! relnotes walks the git history between two references, groups commit
//! subjects by conventional commit type, and renders one markdown section per
//! type. Entries come either from the commit subjects themselves or from the
//! GitHub pull requests they reference. The finished markdown is converted to
//! HTML through the GitHub markdown API and both documents are written to disk.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod github;
pub mod notes;
pub mod output;

// Re-export commonly used types
pub use config::{CommitTypeSpec, Config};
pub use error::{ConfigError, GitError, GitHubError, InputError, NotesError, OutputError, RunError};
pub use notes::{ReleaseDocument, ReleaseDocumentBuilder, ReleaseNoteSource, RenderMode};
