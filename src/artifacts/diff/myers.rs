use crate::artifacts::diff::change::Edit;
use derive_new::new;
use std::collections::HashMap;

/// A sparse map from diagonal index k (can be negative) to the furthest
/// x-coordinate reached on that diagonal. Absent keys read as 0.
pub type DiagonalMap = HashMap<isize, isize>;

pub trait DiffAlgorithm<'d, T> {
    type Trace;
    type EditScript;

    fn compute_shortest_edit(&self) -> Self::Trace;
    fn backtrack(&self) -> Self::EditScript;
    fn diff(&self) -> Self::EditScript;
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<'d, T: Eq + Clone> MyersDiff<'d, T> {
    /// Minimal number of single-line insertions/deletions between `a` and `b`.
    /// Free diagonal (matching) moves do not count.
    pub fn distance(&self) -> usize {
        self.compute_shortest_edit().len().saturating_sub(1)
    }

    fn reach(v: &DiagonalMap, k: isize) -> isize {
        v.get(&k).copied().unwrap_or(0)
    }

    /// The tie-break is load-bearing: preferring the insertion (move down)
    /// whenever the k-1 neighbour has not reached further selects which of
    /// the equally-minimal edit scripts is produced.
    fn moves_down(v: &DiagonalMap, k: isize, d: isize) -> bool {
        k == -d || (k != d && Self::reach(v, k - 1) < Self::reach(v, k + 1))
    }
}

impl<'d, T: Eq + Clone> DiffAlgorithm<'d, T> for MyersDiff<'d, T> {
    type Trace = Vec<DiagonalMap>;
    type EditScript = Vec<Edit<T>>;

    fn compute_shortest_edit(&self) -> Self::Trace {
        let (n, m) = (self.a.len() as isize, self.b.len() as isize);

        let mut v = DiagonalMap::new();
        let mut trace = Vec::new();

        for d in 0..=(n + m) {
            // Snapshot the map as the previous distance left it; the
            // backtrack reads these pre-move states.
            trace.push(v.clone());

            let mut k = -d;
            while k <= d {
                let mut x = if Self::moves_down(&v, k, d) {
                    // down: an insertion on the new sequence
                    Self::reach(&v, k + 1)
                } else {
                    // right: a deletion on the old sequence
                    Self::reach(&v, k - 1) + 1
                };
                let mut y = x - k;

                // snake
                while x < n && y < m && self.a[x as usize] == self.b[y as usize] {
                    x += 1;
                    y += 1;
                }

                v.insert(k, x);

                if x >= n && y >= m {
                    return trace;
                }

                k += 2;
            }
        }

        trace
    }

    /// Walks the recorded snapshots from (n, m) back to the origin, emitting
    /// operations back-to-front. Callers wanting forward order go through
    /// [`DiffAlgorithm::diff`].
    fn backtrack(&self) -> Self::EditScript {
        let (mut x, mut y) = (self.a.len() as isize, self.b.len() as isize);
        let mut script = Vec::new();

        let trace = self.compute_shortest_edit();

        for (d, v) in trace.iter().enumerate().rev() {
            let d = d as isize;
            let k = x - y;

            let prev_k = if Self::moves_down(v, k, d) {
                k + 1
            } else {
                k - 1
            };
            let prev_x = Self::reach(v, prev_k);
            let prev_y = prev_x - prev_k;

            while x > prev_x && y > prev_y {
                script.push(Edit::Equal {
                    value: self.a[(x - 1) as usize].clone(),
                });
                x -= 1;
                y -= 1;
            }

            if d > 0 {
                if x == prev_x {
                    script.push(Edit::Insert {
                        value: self.b[(y - 1) as usize].clone(),
                    });
                    y -= 1;
                } else {
                    script.push(Edit::Delete {
                        value: self.a[(x - 1) as usize].clone(),
                    });
                    x -= 1;
                }
            }
        }

        script
    }

    fn diff(&self) -> Self::EditScript {
        let mut script = self.backtrack();
        script.reverse();
        script
    }
}
