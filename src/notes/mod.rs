//! Turning conventional commits and pull requests into release notes.

pub mod classify;
pub mod document;
pub mod entry;
pub mod links;
pub mod section;
pub mod types;

pub use classify::{Classification, classify};
pub use document::{ReleaseDocument, ReleaseDocumentBuilder};
pub use entry::format_entry;
pub use links::{LinkTargets, rewrite_references};
pub use section::SectionAssembler;
pub use types::{NoteSettings, ReleaseNoteSource, RenderMode, SubjectOrigin};
