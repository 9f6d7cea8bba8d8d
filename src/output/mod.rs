//! Persisting generated release notes.

pub mod writer;

pub use writer::{DocumentSink, FileSink};
