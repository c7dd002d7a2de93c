//! RNG module - injectable random sources for piece selection
//!
//! The controller never touches an ambient generator. It draws through a
//! [`RandomSource`] handed to it at construction, so a game can be replayed
//! exactly from a seed or from a scripted piece sequence.

use crate::types::PieceKind;

/// Source of uniform random draws used by the piece generator.
pub trait RandomSource {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits of the draw; the low bits of an LCG cycle with a
    /// short period.
    fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0, "next_range called with max == 0");
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce a degenerate first draw
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Current internal state (usable as a seed to resume the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Scripted source that replays a fixed list of piece kinds, cycling forever.
///
/// ```
/// use pure_tetris_core::rng::{PieceSequence, RandomSource};
/// use pure_tetris_core::types::PieceKind;
///
/// let mut seq = PieceSequence::new(&[PieceKind::T, PieceKind::I]);
/// assert_eq!(PieceKind::ALL[seq.next_range(7) as usize], PieceKind::T);
/// assert_eq!(PieceKind::ALL[seq.next_range(7) as usize], PieceKind::I);
/// assert_eq!(PieceKind::ALL[seq.next_range(7) as usize], PieceKind::T);
/// ```
#[derive(Debug, Clone)]
pub struct PieceSequence {
    kinds: Vec<PieceKind>,
    index: usize,
}

impl PieceSequence {
    /// Panics when `kinds` is empty.
    pub fn new(kinds: &[PieceKind]) -> Self {
        assert!(!kinds.is_empty(), "PieceSequence needs at least one kind");
        Self {
            kinds: kinds.to_vec(),
            index: 0,
        }
    }

    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.index % self.kinds.len()];
        self.index += 1;
        kind
    }
}

impl RandomSource for PieceSequence {
    fn next_u32(&mut self) -> u32 {
        kind_index(self.next_kind())
    }

    fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

fn kind_index(kind: PieceKind) -> u32 {
    PieceKind::ALL
        .iter()
        .position(|&k| k == kind)
        .unwrap_or(0) as u32
}
