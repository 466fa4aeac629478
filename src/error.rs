//! Failures of cursor-backing resources.
//!
//! Reaching the end of a sequence is not represented here; see [`crate::Step`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CursorError {
    /// The backing file could not be opened.
    #[error("resource unavailable: {}: {source}", .path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The handle was closed, explicitly or after an earlier failure.
    #[error("resource is closed")]
    Closed,

    /// The underlying reader failed mid-traversal.
    #[error("read failed at line {line}: {source}")]
    Read {
        /// 1-based number of the line being read.
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("line {line} is not valid UTF-8")]
    InvalidUtf8 { line: usize },
}

impl CursorError {
    /// True when the resource can no longer supply elements at all
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            CursorError::ResourceUnavailable { .. } | CursorError::Closed
        )
    }
}
