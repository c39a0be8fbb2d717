use crate::myers::Edit;

/// Represents a Hunk resulting from grouping an edit script.
/// `edits` opens and closes with up to `context` `Edit::Equal` elements and
/// lists the deletions of each changed run before its insertions.
///
/// Starts are 1-based. A side with a count of 0 reports the line after which
/// the change happens, so an insertion at the top of a file starts at 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    pub old_start: usize,
    pub old_count: usize,
    pub new_start: usize,
    pub new_count: usize,
    pub edits: Vec<Edit>,
}
