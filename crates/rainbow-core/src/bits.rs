//! Word-level bit utilities over `u64` vertex masks.
//!
//! Bit `i` of a mask stands for vertex `i`, which is why every graph in this
//! workspace is capped at [`WORD_BITS`] vertices.

/// Number of vertices representable in a single mask.
pub const WORD_BITS: usize = 64;

/// Number of set bits in `x`.
#[inline]
pub const fn popcount(x: u64) -> u32 {
    x.count_ones()
}

/// Index of the lowest set bit. Returns 64 for a zero word.
#[inline]
pub const fn trailing_zeros(x: u64) -> u32 {
    x.trailing_zeros()
}

/// Tests bit `idx` of `x`. Indices at or above 64 are never set.
#[inline]
pub const fn bit_test(x: u64, idx: usize) -> bool {
    idx < WORD_BITS && (x >> idx) & 1 == 1
}

/// Single-bit mask for `idx`.
#[inline]
pub const fn bit(idx: usize) -> u64 {
    debug_assert!(idx < WORD_BITS);
    1u64 << idx
}

/// Mask with the lowest `n` bits set.
#[inline]
pub const fn low_bits(n: usize) -> u64 {
    if n >= WORD_BITS {
        u64::MAX
    } else {
        (1u64 << n) - 1
    }
}

/// Iterator over the set bits of a mask, lowest index first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetBits(u64);

impl SetBits {
    /// Wraps a mask.
    pub const fn new(mask: u64) -> Self {
        Self(mask)
    }
}

impl Iterator for SetBits {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.0 == 0 {
            return None;
        }
        let idx = trailing_zeros(self.0) as usize;
        // clear lowest set bit
        self.0 &= self.0 - 1;
        Some(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = popcount(self.0) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SetBits {}
