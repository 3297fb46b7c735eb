//! RandomSource port - 乱数の抽象化
//!
//! # テスト容易性
//! - trait により乱数源を差し替え可能
//! - テストでは FixedSequence を使用

use rand::Rng;

/// RandomSource provides the index used for random task selection.
pub trait RandomSource {
    /// Pick an index in `0..len`, uniformly for production sources.
    ///
    /// `len` is never zero: the selector checks for an empty pool before
    /// asking, and signals Exhausted instead.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// ThreadRandom は本番用の乱数源（thread-local RNG）
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// FixedSequence はテスト用の決定的な乱数源
///
/// Yields the configured indices in order and repeats the last one when
/// the sequence runs out. Indices are reduced modulo `len` so a test can
/// state intent without knowing the pool size in advance.
#[derive(Debug, Clone)]
pub struct FixedSequence {
    indices: Vec<usize>,
    next: usize,
}

impl FixedSequence {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices, next: 0 }
    }
}

impl RandomSource for FixedSequence {
    fn pick_index(&mut self, len: usize) -> usize {
        let raw = self.indices.get(self.next).copied().unwrap_or(0);
        if self.next + 1 < self.indices.len() {
            self.next += 1;
        }
        raw % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_random_stays_in_bounds() {
        let mut rng = ThreadRandom;
        for _ in 0..100 {
            assert!(rng.pick_index(3) < 3);
        }
        assert_eq!(rng.pick_index(1), 0);
    }

    #[test]
    fn fixed_sequence_yields_indices_in_order() {
        let mut rng = FixedSequence::new(vec![2, 0, 1]);
        assert_eq!(rng.pick_index(3), 2);
        assert_eq!(rng.pick_index(3), 0);
        assert_eq!(rng.pick_index(3), 1);
    }

    #[test]
    fn fixed_sequence_repeats_the_last_index() {
        let mut rng = FixedSequence::new(vec![1]);
        assert_eq!(rng.pick_index(3), 1);
        assert_eq!(rng.pick_index(3), 1);
    }

    #[test]
    fn fixed_sequence_wraps_modulo_len() {
        let mut rng = FixedSequence::new(vec![5]);
        assert_eq!(rng.pick_index(3), 2);
    }
}
