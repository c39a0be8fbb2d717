//! Line-based diffs of byte buffers, rendered as unified diff text.
//!
//! ```
//! let out = linediff::diff("old", b"hello\nworld\n", "new", b"hello\nthere\n");
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "diff old new\n--- old\n+++ new\n@@ -1,2 +1,2 @@\n hello\n-world\n+there\n"
//! );
//! ```

pub mod error;
pub mod hunk;
pub mod lines;
pub mod myers;
pub mod options;
pub mod render;

pub use error::{Error, Result};
pub use hunk::Hunk;
pub use options::{DiffOptions, HeaderStyle, MissingNewline};

use render::Renderer;
use tracing::debug_span;

/// Unified diff of `old` against `new` with default options.
///
/// Returns an empty buffer if and only if the inputs are byte-for-byte equal.
pub fn diff(old_label: &str, old: &[u8], new_label: &str, new: &[u8]) -> Vec<u8> {
    diff_with(old_label, old, new_label, new, &DiffOptions::default())
}

/// Like [`diff`], with explicit options.
pub fn diff_with(
    old_label: &str,
    old: &[u8],
    new_label: &str,
    new: &[u8],
    options: &DiffOptions,
) -> Vec<u8> {
    if old == new {
        return Vec::new();
    }
    let _span = debug_span!("diff", old = old_label, new = new_label).entered();

    let old_lines = lines::split(old);
    let new_lines = lines::split(new);
    let script = myers::diff_bounded(&old_lines, &new_lines, options.max_edit_distance);
    let hunks = hunk::build(&script, options.context);
    Renderer::new(&old_lines, &new_lines, options).render(&hunks, old_label, new_label)
}
