use super::{Edit, Script};
use std::collections::HashMap;
use std::hash::Hash;

#[derive(Default)]
struct Occurrences {
    old: usize,
    new: usize,
    old_index: usize,
    new_index: usize,
}

/// Diffs by anchoring on elements that occur exactly once in each sequence.
///
/// The longest run of such pairs that is increasing on both sides is kept,
/// every anchor is grown over the equal elements around it, and whatever lies
/// between two grown anchors is deleted and inserted wholesale. Runs in
/// O(n log n) and always reproduces both inputs, but is not minimal.
pub(crate) fn diff<T: Eq + Hash>(old: &[T], new: &[T]) -> Script {
    let mut script = Vec::with_capacity(old.len() + new.len());
    let (mut x, mut y) = (0, 0);
    let sentinel = std::iter::once((old.len(), new.len()));
    for (ax, ay) in unique_anchors(old, new).into_iter().chain(sentinel) {
        if ax < x || ay < y {
            continue;
        }
        let (mut sx, mut sy) = (ax, ay);
        while sx > x && sy > y && old[sx - 1] == new[sy - 1] {
            sx -= 1;
            sy -= 1;
        }
        script.extend((x..sx).map(Edit::Delete));
        script.extend((y..sy).map(Edit::Insert));

        let (mut ex, mut ey) = (ax, ay);
        while ex < old.len() && ey < new.len() && old[ex] == new[ey] {
            ex += 1;
            ey += 1;
        }
        script.extend((sx..ex).zip(sy..ey).map(|(i, j)| Edit::Equal(i, j)));
        x = ex;
        y = ey;
    }
    script
}

fn unique_anchors<T: Eq + Hash>(old: &[T], new: &[T]) -> Vec<(usize, usize)> {
    let mut seen: HashMap<&T, Occurrences> = HashMap::new();
    for (i, el) in old.iter().enumerate() {
        let entry = seen.entry(el).or_default();
        entry.old += 1;
        entry.old_index = i;
    }
    for (j, el) in new.iter().enumerate() {
        let entry = seen.entry(el).or_default();
        entry.new += 1;
        entry.new_index = j;
    }

    let mut pairs: Vec<(usize, usize)> = seen
        .into_values()
        .filter(|o| o.old == 1 && o.new == 1)
        .map(|o| (o.old_index, o.new_index))
        .collect();
    pairs.sort_unstable();
    longest_increasing(&pairs)
}

/// Longest subsequence of `pairs` (sorted by old index) whose new indices
/// increase, found by patience sorting.
fn longest_increasing(pairs: &[(usize, usize)]) -> Vec<(usize, usize)> {
    // tails[len - 1] is the pair ending the best run of length `len` so far
    let mut tails: Vec<usize> = Vec::new();
    let mut back: Vec<Option<usize>> = Vec::with_capacity(pairs.len());
    for (i, &(_, y)) in pairs.iter().enumerate() {
        let pos = tails.partition_point(|&t| pairs[t].1 < y);
        back.push(pos.checked_sub(1).map(|p| tails[p]));
        if pos == tails.len() {
            tails.push(i);
        } else {
            tails[pos] = i;
        }
    }

    let mut run = Vec::with_capacity(tails.len());
    let mut cursor = tails.last().copied();
    while let Some(i) = cursor {
        run.push(pairs[i]);
        cursor = back[i];
    }
    run.reverse();
    run
}
