use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use crate::config::constants::{CONFIDENCE_MAX, CONFIDENCE_MIN};
use crate::traits::confidence_source::ConfidenceSource;

/// ChaCha-backed confidence values; the same seed replays the same sequence.
pub struct SeededConfidence {
    rng: ChaCha8Rng,
}

impl SeededConfidence {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        Self::new(seed.unwrap_or_else(rand::random))
    }
}

impl ConfidenceSource for SeededConfidence {
    fn next_confidence(&mut self) -> u8 {
        self.rng.random_range(CONFIDENCE_MIN..=CONFIDENCE_MAX)
    }
}

/// Always answers the same value, clamped into the confidence range.
pub struct FixedConfidence(pub u8);

impl ConfidenceSource for FixedConfidence {
    fn next_confidence(&mut self) -> u8 {
        self.0.clamp(CONFIDENCE_MIN, CONFIDENCE_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_values_stay_in_range() {
        let mut source = SeededConfidence::new(42);
        for _ in 0..1_000 {
            let value = source.next_confidence();
            assert!((CONFIDENCE_MIN..=CONFIDENCE_MAX).contains(&value));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SeededConfidence::new(7);
        let mut b = SeededConfidence::new(7);
        let first: Vec<u8> = (0..20).map(|_| a.next_confidence()).collect();
        let second: Vec<u8> = (0..20).map(|_| b.next_confidence()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn fixed_confidence_is_clamped() {
        assert_eq!(FixedConfidence(80).next_confidence(), 80);
        assert_eq!(FixedConfidence(10).next_confidence(), CONFIDENCE_MIN);
        assert_eq!(FixedConfidence(200).next_confidence(), CONFIDENCE_MAX);
    }
}
