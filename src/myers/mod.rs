pub mod types;
pub use types::*;

mod anchored;

use std::hash::Hash;
use tracing::{debug, trace};

/// Default number of search rounds before falling back to the anchored diff.
pub const DEFAULT_MAX_EDIT_DISTANCE: usize = 2048;

const UNREACHED: isize = -1;

/// Furthest-reaching endpoints of every round of the forward search.
///
/// Round `d` holds `d + 1` entries, one per diagonal `k` in `-d..=d` (step 2),
/// each the `x` of the endpoint on that diagonal (`y` is `x - k`) or
/// `UNREACHED` when no `d`-path ends there inside the edit graph.
/// Rounds are stored back to back, round `d` starting at `d * (d + 1) / 2`.
#[derive(Default)]
struct Trace {
    xs: Vec<isize>,
}

impl Trace {
    fn get(&self, d: isize, k: isize) -> isize {
        if d < 0 || k < -d || k > d {
            return UNREACHED;
        }
        let start = d * (d + 1) / 2;
        self.xs[(start + (k + d) / 2) as usize]
    }

    /// Where the round `d` path on diagonal `k` starts, before its snake, and
    /// the diagonal it steps from.
    ///
    /// A step right from `k - 1` deletes, a step down from `k + 1` inserts.
    /// The step landing further along the diagonal wins and ties go down,
    /// which puts deletions ahead of insertions.
    fn step(&self, d: isize, k: isize, n: isize, m: isize) -> (isize, isize) {
        if d == 0 {
            return (0, 0);
        }
        let down = match self.get(d - 1, k + 1) {
            x if x != UNREACHED && x - k <= m => x,
            _ => UNREACHED,
        };
        let right = match self.get(d - 1, k - 1) {
            x if x != UNREACHED && x < n => x + 1,
            _ => UNREACHED,
        };
        if right > down {
            (right, k - 1)
        } else {
            (down, k + 1)
        }
    }

    fn backtrack(&self, d_end: isize, n: isize, m: isize) -> Script {
        let mut script = Vec::with_capacity((n + m) as usize);
        let (mut x, mut y) = (n, m);
        for d in (1..=d_end).rev() {
            let k = x - y;
            let (start_x, prev_k) = self.step(d, k, n, m);
            let start_y = start_x - k;
            while x > start_x {
                x -= 1;
                y -= 1;
                script.push(Edit::Equal(x as usize, y as usize));
            }
            if prev_k == k + 1 {
                script.push(Edit::Insert((start_y - 1) as usize));
            } else {
                script.push(Edit::Delete((start_x - 1) as usize));
            }
            x = self.get(d - 1, prev_k);
            y = x - prev_k;
        }
        while x > 0 {
            x -= 1;
            y -= 1;
            script.push(Edit::Equal(x as usize, y as usize));
        }
        script.reverse();
        script
    }
}

/// Computes the diff between two sequences using the Myers algorithm,
/// giving up on an exact result past [`DEFAULT_MAX_EDIT_DISTANCE`].
///
/// # Examples
///
/// ```
/// use linediff::myers::{diff, Edit};
///
/// let old = vec![1, 2, 3];
/// let new = vec![1, 3, 4];
/// let result = diff(&old, &new);
/// assert_eq!(result, vec![
///     Edit::Equal(0, 0),
///     Edit::Delete(1),
///     Edit::Equal(2, 1),
///     Edit::Insert(2),
/// ]);
/// ```
pub fn diff<T: Eq + Hash>(old: &[T], new: &[T]) -> Script {
    diff_bounded(old, new, Some(DEFAULT_MAX_EDIT_DISTANCE))
}

/// Computes the diff between two sequences.
///
/// The common prefix and suffix are matched directly and the Myers search
/// runs on what is left. If no edit script of length `max_edit_distance` or
/// less exists, the middle is diffed by matching lines unique to both sides
/// instead; that script is valid but may be longer than necessary.
/// `None` never gives up, and the search then keeps memory quadratic in
/// the edit distance.
///
/// # Arguments
///
/// * `old` - The original sequence
/// * `new` - The new sequence
/// * `max_edit_distance` - Search rounds allowed before falling back
pub fn diff_bounded<T: Eq + Hash>(
    old: &[T],
    new: &[T],
    max_edit_distance: Option<usize>,
) -> Script {
    let prefix = old.iter().zip(new).take_while(|(a, b)| a == b).count();
    let suffix = old[prefix..]
        .iter()
        .rev()
        .zip(new[prefix..].iter().rev())
        .take_while(|(a, b)| a == b)
        .count();
    let old_mid = &old[prefix..old.len() - suffix];
    let new_mid = &new[prefix..new.len() - suffix];

    let middle = if old_mid.is_empty() || new_mid.is_empty() {
        (0..old_mid.len())
            .map(Edit::Delete)
            .chain((0..new_mid.len()).map(Edit::Insert))
            .collect()
    } else {
        let limit = max_edit_distance.unwrap_or(usize::MAX);
        match shortest_edit(old_mid, new_mid, limit) {
            Some(script) => script,
            None => {
                debug!(
                    old_lines = old_mid.len(),
                    new_lines = new_mid.len(),
                    limit,
                    "edit distance ceiling exceeded, falling back to anchored diff"
                );
                anchored::diff(old_mid, new_mid)
            }
        }
    };

    let mut script = Vec::with_capacity(prefix + middle.len() + suffix);
    script.extend((0..prefix).map(|i| Edit::Equal(i, i)));
    script.extend(middle.into_iter().map(|e| shift(e, prefix)));
    let (old_tail, new_tail) = (old.len() - suffix, new.len() - suffix);
    script.extend((0..suffix).map(|i| Edit::Equal(old_tail + i, new_tail + i)));
    script
}

fn shift(edit: Edit, by: usize) -> Edit {
    match edit {
        Edit::Equal(i, j) => Edit::Equal(i + by, j + by),
        Edit::Delete(i) => Edit::Delete(i + by),
        Edit::Insert(j) => Edit::Insert(j + by),
    }
}

fn shortest_edit<T: Eq>(old: &[T], new: &[T], limit: usize) -> Option<Script> {
    let n = old.len() as isize;
    let m = new.len() as isize;
    let limit = limit.min(old.len() + new.len()) as isize;
    let mut trace = Trace::default();
    for d in 0..=limit {
        for k in (-d..=d).step_by(2) {
            let (mut x, _) = trace.step(d, k, n, m);
            if x == UNREACHED {
                trace.xs.push(UNREACHED);
                continue;
            }
            let mut y = x - k;
            while x < n && y < m && old[x as usize] == new[y as usize] {
                x += 1;
                y += 1;
            }
            trace.xs.push(x);
            if x == n && y == m {
                trace!(edit_distance = d, "shortest edit script found");
                return Some(trace.backtrack(d, n, m));
            }
        }
    }
    None
}
