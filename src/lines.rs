use std::fmt;

/// A single line borrowed from an input buffer.
///
/// `content` never includes the `\n` terminator. Two lines are equal only if
/// both their bytes and their terminator flag match, so the unterminated last
/// line of a file never compares equal to a terminated one.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line<'a> {
    content: &'a [u8],
    newline: bool,
}

impl<'a> Line<'a> {
    pub fn new(content: &'a [u8], newline: bool) -> Self {
        Line { content, newline }
    }

    /// The line's bytes, without the terminator.
    pub fn content(&self) -> &'a [u8] {
        self.content
    }

    /// Whether the line was followed by `\n` in its buffer.
    pub fn has_newline(&self) -> bool {
        self.newline
    }
}

impl fmt::Debug for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = String::from_utf8_lossy(self.content);
        if self.newline {
            write!(f, "{:?}", format!("{}\n", text))
        } else {
            write!(f, "{:?}", text)
        }
    }
}

/// Splits `buffer` on `\n`.
///
/// An empty buffer has no lines. Any bytes are accepted.
///
/// # Examples
///
/// ```
/// use linediff::lines::split;
///
/// let lines = split(b"one\ntwo");
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[0].content(), b"one");
/// assert!(lines[0].has_newline());
/// assert!(!lines[1].has_newline());
/// ```
pub fn split(buffer: &[u8]) -> Vec<Line<'_>> {
    buffer
        .split_inclusive(|&b| b == b'\n')
        .map(|chunk| match chunk.strip_suffix(b"\n") {
            Some(content) => Line::new(content, true),
            None => Line::new(chunk, false),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_concatenation_reproduces_input(buffer: Vec<u8>) {
            let mut joined = Vec::new();
            for line in split(&buffer) {
                joined.extend_from_slice(line.content());
                if line.has_newline() {
                    joined.push(b'\n');
                }
            }
            prop_assert_eq!(joined, buffer);
        }

        #[test]
        fn test_only_last_line_unterminated(buffer: Vec<u8>) {
            let lines = split(&buffer);
            if let Some((_, init)) = lines.split_last() {
                prop_assert!(init.iter().all(Line::has_newline));
            }
        }
    }

    #[test]
    fn test_empty() {
        assert!(split(b"").is_empty());
    }

    #[test]
    fn test_single_newline() {
        assert_eq!(split(b"\n"), vec![Line::new(b"", true)]);
    }

    #[test]
    fn test_trailing_newline() {
        assert_eq!(
            split(b"a\nb\n"),
            vec![Line::new(b"a", true), Line::new(b"b", true)]
        );
    }

    #[test]
    fn test_missing_trailing_newline() {
        assert_eq!(
            split(b"a\nb"),
            vec![Line::new(b"a", true), Line::new(b"b", false)]
        );
    }

    #[test]
    fn test_terminator_is_part_of_equality() {
        assert_ne!(Line::new(b"b", true), Line::new(b"b", false));
    }

    #[test]
    fn test_carriage_return_is_content() {
        assert_eq!(split(b"a\r\n"), vec![Line::new(b"a\r", true)]);
    }

    #[test]
    fn test_non_utf8() {
        let lines = split(&[0xff, 0xfe, b'\n', 0x00]);
        assert_eq!(lines[0].content(), &[0xff, 0xfe]);
        assert_eq!(lines[1].content(), &[0x00]);
    }
}
