//! Parsing logic for pull-request content blobs

use crate::types::{ChangeBody, FileChange};
use log::debug;
use std::collections::HashMap;

/// Marker opening a new per-file segment
const PATH_MARKER: &str = "Path:";

/// Marker opening a run of added lines (line-delta schema)
const ADDED_MARKER: &str = "Lines Added:";

/// Marker opening a run of removed lines (line-delta schema)
const REMOVED_MARKER: &str = "Lines Removed:";

/// Marker opening the whole-file snapshot (original-contents schema)
const ORIGINAL_MARKER: &str = "Original Contents of file:";

/// Which of the two content schemas a blob uses
///
/// Detection is per call: a blob containing the original-contents marker
/// anywhere is parsed entirely in that schema, otherwise entirely as
/// line deltas. The two marker styles never mix within one blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Schema {
    LineDelta,
    OriginalContents,
}

/// Parse a pull-request content blob into an ordered list of file changes
///
/// The blob is segmented at each line bearing a `Path:` marker; text before
/// the first marker is discarded. Within a segment, `Lines Added:` opens a
/// run that ends at the next `Lines Removed:` marker (or end of segment),
/// and `Lines Removed:` opens a run that ends at end of segment. Blobs in
/// the original-contents format instead capture everything after an
/// `Original Contents of file:` line verbatim.
///
/// Total over all inputs: malformed marker ordering, empty input, and
/// marker-free input all produce a (possibly empty) result, never an error.
/// When the same path appears more than once, the last occurrence wins.
///
/// # Example
///
/// ```
/// use review_content_parser::parse_content;
///
/// let changes = parse_content("Path: a.py\nLines Added:\nx = 1\n");
/// assert_eq!(changes.len(), 1);
/// assert_eq!(changes[0].path, "a.py");
/// assert_eq!(changes[0].added(), Some(&["x = 1".to_string()][..]));
/// ```
pub fn parse_content(raw: &str) -> Vec<FileChange> {
    let schema = if raw.contains(ORIGINAL_MARKER) {
        Schema::OriginalContents
    } else {
        Schema::LineDelta
    };

    let segments = split_segments(raw);
    let segment_count = segments.len();

    let mut changes: Vec<FileChange> = Vec::new();
    let mut index_by_path: HashMap<String, usize> = HashMap::new();

    for segment in segments {
        let body = match schema {
            Schema::LineDelta => parse_line_delta(&segment.lines),
            Schema::OriginalContents => parse_original_contents(&segment.lines),
        };
        let change = FileChange {
            path: segment.path,
            body,
        };

        match index_by_path.get(&change.path).copied() {
            // Last occurrence wins, keeping the position of the first
            Some(existing) => changes[existing] = change,
            None => {
                index_by_path.insert(change.path.clone(), changes.len());
                changes.push(change);
            }
        }
    }

    debug!(
        "Parsed {} file changes from {} segments ({:?} schema)",
        changes.len(),
        segment_count,
        schema
    );

    changes
}

/// One per-file segment: the path from its `Path:` line plus the body lines
struct Segment<'a> {
    path: String,
    lines: Vec<&'a str>,
}

/// Split the blob at `Path:` marker lines, discarding text before the first
fn split_segments(raw: &str) -> Vec<Segment<'_>> {
    let mut segments: Vec<Segment<'_>> = Vec::new();

    for line in raw.lines() {
        if let Some(rest) = line.strip_prefix(PATH_MARKER) {
            segments.push(Segment {
                path: rest.trim().to_string(),
                lines: Vec::new(),
            });
        } else if let Some(segment) = segments.last_mut() {
            segment.lines.push(line);
        }
    }

    segments
}

/// The field a line-delta scanner is currently capturing into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Added,
    Removed,
}

/// Scan a segment body in the line-delta schema
///
/// Two-state scanner: outside a field until a marker line opens one, inside
/// a field until the next marker line re-targets it. Marker lines are never
/// captured; lines before the first marker are dropped.
fn parse_line_delta(lines: &[&str]) -> ChangeBody {
    let mut added: Vec<&str> = Vec::new();
    let mut removed: Vec<&str> = Vec::new();
    let mut field: Option<Field> = None;

    for line in lines {
        if line.starts_with(ADDED_MARKER) {
            field = Some(Field::Added);
        } else if line.starts_with(REMOVED_MARKER) {
            field = Some(Field::Removed);
        } else {
            match field {
                Some(Field::Added) => added.push(line),
                Some(Field::Removed) => removed.push(line),
                None => {}
            }
        }
    }

    ChangeBody::LineDelta {
        added: trim_blank_edges(&added),
        removed: trim_blank_edges(&removed),
    }
}

/// Scan a segment body in the original-contents schema
///
/// Everything after the marker line up to the end of the segment is the
/// contents, verbatim; only the blank edges of the run are trimmed.
fn parse_original_contents(lines: &[&str]) -> ChangeBody {
    let mut contents: Vec<&str> = Vec::new();
    let mut capturing = false;

    for line in lines {
        if capturing {
            contents.push(line);
        } else if line.starts_with(ORIGINAL_MARKER) {
            capturing = true;
        }
    }

    ChangeBody::OriginalContents(trim_blank_edges(&contents).join("\n"))
}

/// Drop leading and trailing blank lines of a captured run
fn trim_blank_edges(lines: &[&str]) -> Vec<String> {
    let start = lines.iter().position(|l| !l.trim().is_empty());
    let end = lines.iter().rposition(|l| !l.trim().is_empty());

    match (start, end) {
        (Some(start), Some(end)) => lines[start..=end].iter().map(|l| l.to_string()).collect(),
        _ => Vec::new(),
    }
}
