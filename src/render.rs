use crate::hunk::Hunk;
use crate::lines::Line;
use crate::myers::Edit;
use crate::options::{DiffOptions, HeaderStyle, MissingNewline};

/// Same wording as BSD and GNU diff, leading backslash included.
pub const NO_NEWLINE_MARKER: &str = "\\ No newline at end of file";

/// Writes hunks as unified diff text.
///
/// Lines are looked up by the indices stored in each hunk's edits, so the
/// renderer must be given the same line tables the edit script was computed
/// from.
pub struct Renderer<'a> {
    old: &'a [Line<'a>],
    new: &'a [Line<'a>],
    options: &'a DiffOptions,
}

impl<'a> Renderer<'a> {
    pub fn new(old: &'a [Line<'a>], new: &'a [Line<'a>], options: &'a DiffOptions) -> Self {
        Renderer { old, new, options }
    }

    /// Renders `hunks` under the configured file header.
    ///
    /// No hunks means no difference, and renders as nothing at all, header
    /// included.
    pub fn render(&self, hunks: &[Hunk], old_label: &str, new_label: &str) -> Vec<u8> {
        if hunks.is_empty() {
            return Vec::new();
        }

        let mut out = Vec::new();
        self.write_header(&mut out, old_label, new_label);
        for hunk in hunks {
            self.write_hunk(&mut out, hunk);
        }
        out
    }

    fn write_header(&self, out: &mut Vec<u8>, old_label: &str, new_label: &str) {
        if self.options.header == HeaderStyle::Command {
            out.extend_from_slice(format!("diff {} {}\n", old_label, new_label).as_bytes());
        }
        if self.options.header != HeaderStyle::None {
            out.extend_from_slice(format!("--- {}\n+++ {}\n", old_label, new_label).as_bytes());
        }
    }

    fn write_hunk(&self, out: &mut Vec<u8>, hunk: &Hunk) {
        let header = format!(
            "@@ -{},{} +{},{} @@\n",
            hunk.old_start, hunk.old_count, hunk.new_start, hunk.new_count
        );
        out.extend_from_slice(header.as_bytes());
        for edit in &hunk.edits {
            match *edit {
                Edit::Equal(i, _) => self.write_line(out, b' ', self.old[i]),
                Edit::Delete(i) => self.write_line(out, b'-', self.old[i]),
                Edit::Insert(j) => self.write_line(out, b'+', self.new[j]),
            }
        }
    }

    fn write_line(&self, out: &mut Vec<u8>, prefix: u8, line: Line<'_>) {
        out.push(prefix);
        out.extend_from_slice(line.content());
        out.push(b'\n');
        if !line.has_newline() && self.options.missing_newline == MissingNewline::Marker {
            out.extend_from_slice(NO_NEWLINE_MARKER.as_bytes());
            out.push(b'\n');
        }
    }
}
