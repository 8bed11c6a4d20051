//! Canonical enumeration of unordered vertex pairs.
//!
//! Model generators rely on pairs arriving as `(0, 1), (0, 2), .., (0, n-1),
//! (1, 2), ..` so that emitted files are byte-for-byte reproducible.

/// Binomial coefficient `n choose k`. Returns zero when `k > n`.
pub fn nchoosek(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc: u64 = 1;
    for i in 0..k {
        // exact at every step: acc * (n - i) is divisible by (i + 1)
        acc = acc * (n - i) / (i + 1);
    }
    acc
}

/// Advances `(u, v)` to the next pair in lexicographic order for `n` vertices.
///
/// After the last pair `(n-2, n-1)` the state moves to `(n-1, n)`, which no
/// caller should read.
pub fn next_pair(u: &mut usize, v: &mut usize, n: usize) {
    if *v + 1 < n {
        *v += 1;
        return;
    }
    *u += 1;
    *v = *u + 1;
}

/// Iterator over every pair `(u, v)` with `u < v < n`, lexicographically.
#[derive(Debug, Clone)]
pub struct VertexPairs {
    u: usize,
    v: usize,
    n: usize,
}

/// Returns the canonical pair iterator for a graph with `n` vertices.
pub fn vertex_pairs(n: usize) -> VertexPairs {
    VertexPairs { u: 0, v: 1, n }
}

impl Iterator for VertexPairs {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        if self.v >= self.n {
            return None;
        }
        let pair = (self.u, self.v);
        next_pair(&mut self.u, &mut self.v, self.n);
        Some(pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.v >= self.n {
            return (0, Some(0));
        }
        // pairs left in the current row plus every later row
        let rest_of_row = self.n - self.v;
        let later = self.n - self.u - 1;
        let remaining = rest_of_row + later * later.saturating_sub(1) / 2;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for VertexPairs {}
