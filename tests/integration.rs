use linediff::{diff, diff_with, DiffOptions, HeaderStyle};
use proptest::prelude::*;

fn bare() -> DiffOptions {
    DiffOptions::default().with_header(HeaderStyle::None)
}

fn text() -> impl Strategy<Value = Vec<u8>> {
    (
        prop::collection::vec(prop::sample::select(vec!["a", "b", "c", ""]), 0..12),
        any::<bool>(),
    )
        .prop_map(|(lines, trailing)| {
            let mut s = lines.join("\n");
            if trailing && !lines.is_empty() {
                s.push('\n');
            }
            s.into_bytes()
        })
}

/// Rebuilds both inputs from a diff rendered with enough context to show
/// every line.
fn rebuild(rendered: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let mut old = vec![];
    let mut new = vec![];
    let mut last = b' ';
    for line in rendered.split(|&b| b == b'\n') {
        match line.first() {
            Some(b'@') | None => {}
            Some(b'\\') => {
                if last != b'+' {
                    old.pop();
                }
                if last != b'-' {
                    new.pop();
                }
            }
            Some(&prefix) => {
                if prefix != b'+' {
                    old.extend_from_slice(&line[1..]);
                    old.push(b'\n');
                }
                if prefix != b'-' {
                    new.extend_from_slice(&line[1..]);
                    new.push(b'\n');
                }
                last = prefix;
            }
        }
    }
    (old, new)
}

fn parse_range(s: &str) -> (usize, usize) {
    let (start, count) = s[1..].split_once(',').unwrap();
    (start.parse().unwrap(), count.parse().unwrap())
}

proptest! {
    #[test]
    fn test_idempotency(a in text()) {
        prop_assert!(diff("a", &a, "b", &a).is_empty());
    }

    #[test]
    fn test_empty_iff_equal(a in text(), b in text()) {
        prop_assert_eq!(diff("a", &a, "b", &b).is_empty(), a == b);
    }

    #[test]
    fn test_rendered_round_trip(a in text(), b in text()) {
        prop_assume!(a != b);
        let rendered = diff_with("a", &a, "b", &b, &bare().with_context(1000));
        prop_assert_eq!(rebuild(&rendered), (a, b));
    }

    #[test]
    fn test_headers_match_bodies(a in text(), b in text(), context in 0usize..4) {
        let rendered = diff_with("a", &a, "b", &b, &bare().with_context(context));
        let rendered = String::from_utf8(rendered).unwrap();

        let mut expected: Option<(usize, usize)> = None;
        let mut seen = (0, 0);
        for line in rendered.lines() {
            if let Some(ranges) = line.strip_prefix("@@ ") {
                if let Some(counts) = expected {
                    prop_assert_eq!(counts, seen);
                }
                let mut parts = ranges.split(' ');
                let (_, old_count) = parse_range(parts.next().unwrap());
                let (_, new_count) = parse_range(parts.next().unwrap());
                expected = Some((old_count, new_count));
                seen = (0, 0);
            } else if line.starts_with(' ') {
                seen = (seen.0 + 1, seen.1 + 1);
            } else if line.starts_with('-') {
                seen.0 += 1;
            } else if line.starts_with('+') {
                seen.1 += 1;
            }
        }
        if let Some(counts) = expected {
            prop_assert_eq!(counts, seen);
        }
    }
}

#[test]
fn test_identical() {
    assert_eq!(diff("old", b"a\nb\nc\n", "new", b"a\nb\nc\n"), b"");
}

#[test]
fn test_both_empty() {
    assert_eq!(diff("old", b"", "new", b""), b"");
}

#[test]
fn test_one_line_changed() {
    let out = diff_with("old", b"hello\nworld\n", "new", b"hello\nthere\n", &bare());
    assert_eq!(out, b"@@ -1,2 +1,2 @@\n hello\n-world\n+there\n");
}

#[test]
fn test_insert_into_empty() {
    let out = diff_with("old", b"", "new", b"x\n", &bare());
    assert_eq!(out, b"@@ -0,0 +1,1 @@\n+x\n");
}

#[test]
fn test_append() {
    let out = diff_with("old", b"1\n2\n3\n4\n5\n", "new", b"1\n2\n3\n4\n5\n6\n", &bare());
    assert_eq!(out, b"@@ -3,3 +3,4 @@\n 3\n 4\n 5\n+6\n");
}

#[test]
fn test_labels_in_header() {
    let out = diff("want", b"a\n", "got", b"b\n");
    assert_eq!(out, b"diff want got\n--- want\n+++ got\n@@ -1,1 +1,1 @@\n-a\n+b\n");
}

#[test]
fn test_ceiling_keeps_output_valid() {
    let old: String = (0..200).map(|i| format!("{}\n", i)).collect();
    let new: String = (0..200).rev().map(|i| format!("{}\n", i)).collect();
    let options = bare().with_context(1000).with_max_edit_distance(10);
    let rendered = diff_with("a", old.as_bytes(), "b", new.as_bytes(), &options);
    assert_eq!(rebuild(&rendered), (old.into_bytes(), new.into_bytes()));
}

#[test]
fn test_concurrent_calls_agree() {
    let old: String = (0..500).map(|i| format!("line {}\n", i % 7)).collect();
    let new: String = (0..500).map(|i| format!("line {}\n", i % 11)).collect();
    let expected = diff("a", old.as_bytes(), "b", new.as_bytes());
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| diff("a", old.as_bytes(), "b", new.as_bytes())))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
