//! Type definitions for parsed pull-request content

use serde::{Deserialize, Serialize};

/// One modified file extracted from a pull-request content blob
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChange {
    /// File path as written after the `Path:` marker
    pub path: String,

    /// Change body in whichever of the two content schemas the blob used
    pub body: ChangeBody,
}

/// The change body of a single file
///
/// The content format has two historical schemas: per-line added/removed
/// lists, and a whole-file snapshot of the pre-change contents. A blob uses
/// exactly one of them, so the body is a tagged variant rather than two
/// optional field sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeBody {
    /// Per-line change lists (`Lines Added:` / `Lines Removed:` framing)
    LineDelta {
        /// Lines inserted, in insertion order
        added: Vec<String>,
        /// Lines deleted, in order
        removed: Vec<String>,
    },

    /// Full pre-change file body (`Original Contents of file:` framing)
    OriginalContents(String),
}

impl FileChange {
    /// Create a change carrying added/removed line lists
    pub fn line_delta(
        path: impl Into<String>,
        added: Vec<String>,
        removed: Vec<String>,
    ) -> Self {
        Self {
            path: path.into(),
            body: ChangeBody::LineDelta { added, removed },
        }
    }

    /// Create a change carrying the original file contents
    pub fn original(path: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            body: ChangeBody::OriginalContents(contents.into()),
        }
    }

    /// Added lines, if this change uses the line-delta schema
    pub fn added(&self) -> Option<&[String]> {
        match &self.body {
            ChangeBody::LineDelta { added, .. } => Some(added),
            ChangeBody::OriginalContents(_) => None,
        }
    }

    /// Removed lines, if this change uses the line-delta schema
    pub fn removed(&self) -> Option<&[String]> {
        match &self.body {
            ChangeBody::LineDelta { removed, .. } => Some(removed),
            ChangeBody::OriginalContents(_) => None,
        }
    }

    /// Pre-change file body, if this change uses the original-contents schema
    pub fn original_contents(&self) -> Option<&str> {
        match &self.body {
            ChangeBody::LineDelta { .. } => None,
            ChangeBody::OriginalContents(contents) => Some(contents),
        }
    }
}

impl ChangeBody {
    /// True when the body captured nothing
    pub fn is_empty(&self) -> bool {
        match self {
            ChangeBody::LineDelta { added, removed } => added.is_empty() && removed.is_empty(),
            ChangeBody::OriginalContents(contents) => contents.is_empty(),
        }
    }
}
