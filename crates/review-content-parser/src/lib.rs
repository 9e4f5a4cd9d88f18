//! Pull-Request Content Parser
//!
//! A library for parsing the review dashboard's pull-request content blobs
//! into an ordered list of per-file change records. The content format marks
//! each file with a `Path:` line followed either by `Lines Added:` /
//! `Lines Removed:` runs or by an `Original Contents of file:` snapshot.
//!
//! Parsing is total: malformed input degrades to a best-effort (possibly
//! empty) result, never an error.
//!
//! # Example
//!
//! ```
//! use review_content_parser::parse_content;
//!
//! let blob = "Path: src/main.rs\nLines Added:\nprintln!(\"hi\");\n";
//! let changes = parse_content(blob);
//!
//! for change in &changes {
//!     println!("{}: {:?}", change.path, change.body);
//! }
//! ```

mod parser;
mod types;

pub use parser::parse_content;
pub use types::{ChangeBody, FileChange};
