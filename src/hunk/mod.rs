mod types;
pub use types::*;

use crate::myers::Edit;
use std::collections::VecDeque;
use tracing::trace;

/// Number of unchanged lines shown around each change by default.
pub const DEFAULT_CONTEXT: usize = 3;

/// A hunk still being filled, with 0-based first lines.
struct OpenHunk {
    old_first: usize,
    new_first: usize,
    edits: Vec<Edit>,
}

impl OpenHunk {
    fn seal(self) -> Hunk {
        let old_count = self
            .edits
            .iter()
            .filter(|e| !matches!(e, Edit::Insert(_)))
            .count();
        let new_count = self
            .edits
            .iter()
            .filter(|e| !matches!(e, Edit::Delete(_)))
            .count();
        Hunk {
            old_start: if old_count > 0 {
                self.old_first + 1
            } else {
                self.old_first
            },
            old_count,
            new_start: if new_count > 0 {
                self.new_first + 1
            } else {
                self.new_first
            },
            new_count,
            edits: self.edits,
        }
    }
}

struct HunkBuilder {
    context: usize,
    old_line: usize,
    new_line: usize,
    current: Option<OpenHunk>,
    // equal edits before the next change while no hunk is open
    leading: VecDeque<Edit>,
    // equal edits after the last change of the open hunk
    trailing: Vec<Edit>,
    deletes: Vec<Edit>,
    inserts: Vec<Edit>,
    hunks: Vec<Hunk>,
}

impl HunkBuilder {
    fn new(context: usize) -> Self {
        HunkBuilder {
            context,
            old_line: 0,
            new_line: 0,
            current: None,
            leading: VecDeque::new(),
            trailing: vec![],
            deletes: vec![],
            inserts: vec![],
            hunks: vec![],
        }
    }

    fn process(&mut self, edit: Edit) {
        match edit {
            Edit::Equal(..) => {
                self.flush_run();
                if self.current.is_some() {
                    self.trailing.push(edit);
                    if self.trailing.len() > self.context.saturating_mul(2) {
                        self.close();
                    }
                } else {
                    self.leading.push_back(edit);
                    if self.leading.len() > self.context {
                        self.leading.pop_front();
                    }
                }
                self.old_line += 1;
                self.new_line += 1;
            }
            change => {
                if let Some(ref mut c) = self.current {
                    c.edits.append(&mut self.trailing);
                } else {
                    self.current = Some(OpenHunk {
                        old_first: self.old_line - self.leading.len(),
                        new_first: self.new_line - self.leading.len(),
                        edits: self.leading.drain(..).collect(),
                    });
                }

                match change {
                    Edit::Insert(_) => {
                        self.inserts.push(change);
                        self.new_line += 1;
                    }
                    _ => {
                        self.deletes.push(change);
                        self.old_line += 1;
                    }
                }
            }
        }
    }

    /// Moves the pending changed run into the open hunk, deletions first.
    fn flush_run(&mut self) {
        if let Some(ref mut c) = self.current {
            c.edits.append(&mut self.deletes);
            c.edits.append(&mut self.inserts);
        }
    }

    /// Ends the open hunk with up to `context` trailing lines; the last
    /// `context` of the rest become the leading context of the next hunk.
    fn close(&mut self) {
        let Some(mut hunk) = self.current.take() else {
            return;
        };
        let keep = self.trailing.len().min(self.context);
        hunk.edits.extend(self.trailing.drain(..keep));
        let skip = self.trailing.len().saturating_sub(self.context);
        self.leading = self.trailing.drain(..).skip(skip).collect();
        self.hunks.push(hunk.seal());
    }

    fn finish(mut self) -> Vec<Hunk> {
        self.flush_run();
        self.close();
        self.hunks
    }
}

/// Groups an edit script into hunks carrying `context` unchanged lines on
/// each side. Changes separated by at most `2 * context` unchanged lines
/// share a hunk.
pub fn build(script: &[Edit], context: usize) -> Vec<Hunk> {
    let mut builder = HunkBuilder::new(context);
    for &edit in script {
        builder.process(edit);
    }
    let hunks = builder.finish();
    trace!(hunks = hunks.len(), context, "hunks built");
    hunks
}
