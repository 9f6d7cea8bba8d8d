//! Writing the generated documents to disk.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::error::OutputError;
use crate::notes::ReleaseDocument;

/// Receives a finished release document.
pub trait DocumentSink {
    fn write(&self, document: &ReleaseDocument) -> Result<(), OutputError>;
}

/// Writes the markdown and HTML documents into one directory.
///
/// Both documents are staged in temporary files next to their targets and
/// only persisted once both are fully written. If the HTML document cannot be
/// moved into place, the markdown target is put back the way it was.
#[derive(Debug, Clone)]
pub struct FileSink {
    markdown_path: PathBuf,
    html_path: PathBuf,
}

impl FileSink {
    pub fn new(dir: &Path, markdown_file_name: &str, html_file_name: &str) -> Self {
        Self {
            markdown_path: dir.join(markdown_file_name),
            html_path: dir.join(html_file_name),
        }
    }

    pub fn markdown_path(&self) -> &Path {
        &self.markdown_path
    }

    pub fn html_path(&self) -> &Path {
        &self.html_path
    }
}

impl DocumentSink for FileSink {
    fn write(&self, document: &ReleaseDocument) -> Result<(), OutputError> {
        let markdown_error = |source: std::io::Error| OutputError::MarkdownFile {
            path: self.markdown_path.clone(),
            source,
        };
        let html_error = |source: std::io::Error| OutputError::HtmlFile {
            path: self.html_path.clone(),
            source,
        };

        let markdown =
            stage(&self.markdown_path, document.markdown.as_bytes()).map_err(markdown_error)?;
        let html = stage(&self.html_path, document.html.as_bytes()).map_err(html_error)?;
        let previous = read_existing(&self.markdown_path).map_err(markdown_error)?;

        markdown
            .persist(&self.markdown_path)
            .map_err(|e| markdown_error(e.error))?;
        if let Err(e) = html.persist(&self.html_path) {
            restore(&self.markdown_path, previous);
            return Err(html_error(e.error));
        }

        info!(
            markdown = %self.markdown_path.display(),
            html = %self.html_path.display(),
            "release notes written"
        );
        Ok(())
    }
}

/// Write `contents` to a temporary file in the directory of `target`.
fn stage(target: &Path, contents: &[u8]) -> std::io::Result<NamedTempFile> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents)?;
    file.as_file().sync_all()?;

    debug!(target = %target.display(), staged = %file.path().display(), "staged output");
    Ok(file)
}

/// Current contents of `path`, or `None` if it does not exist yet.
fn read_existing(path: &Path) -> std::io::Result<Option<Vec<u8>>> {
    match std::fs::read(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Put `target` back to `previous`, removing it if it did not exist.
fn restore(target: &Path, previous: Option<Vec<u8>>) {
    let result = match previous {
        Some(contents) => stage(target, &contents)
            .and_then(|file| file.persist(target).map(|_| ()).map_err(|e| e.error)),
        None => std::fs::remove_file(target),
    };

    match result {
        Ok(()) => debug!(target = %target.display(), "rolled back output"),
        Err(e) => warn!(target = %target.display(), error = %e, "failed to roll back output"),
    }
}
