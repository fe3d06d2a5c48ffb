use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const DEFAULT_TRIALS: usize = 10_000;
pub const DEFAULT_BATCH_SIZE: usize = 250;
pub const DEFAULT_MAX_EXAMPLES: usize = 10;

/// Trial-count tiers trading speed for precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Precision {
    Fast,
    Standard,
    Precise,
}

/// Knobs shared by every simulation entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct SimulationConfig {
    /// Trials per estimate. Error shrinks with `1/sqrt(trials)`.
    pub trials: usize,
    /// Trials between cancellation checks.
    pub batch_size: usize,
    /// Fixed seed for reproducible runs; `None` seeds from the system RNG.
    pub seed: Option<u64>,
    /// Example hole-card pairs kept per opponent category.
    pub max_examples: usize,
}

impl SimulationConfig {
    pub fn for_precision(precision: Precision) -> Self {
        let trials = match precision {
            Precision::Fast => 1_000,
            Precision::Standard => DEFAULT_TRIALS,
            Precision::Precise => 50_000,
        };
        Self { trials, ..Self::default() }
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Set a deterministic RNG seed for reproducible estimates.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_examples(mut self, max_examples: usize) -> Self {
        self.max_examples = max_examples;
        self
    }

    /// A fresh RNG for one call. Calls never share RNG state.
    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(v) => ChaCha8Rng::seed_from_u64(v),
            None => {
                let mut seed = [0u8; 32];
                rand::rng().fill_bytes(&mut seed);
                ChaCha8Rng::from_seed(seed)
            }
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            batch_size: DEFAULT_BATCH_SIZE,
            seed: None,
            max_examples: DEFAULT_MAX_EXAMPLES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn defaults() {
        let c = SimulationConfig::default();
        assert_eq!(c.trials, 10_000);
        assert_eq!(c.batch_size, 250);
        assert_eq!(c.seed, None);
        assert_eq!(c.max_examples, 10);
        assert_eq!(SimulationConfig::for_precision(Precision::Standard), c);
        assert_eq!(SimulationConfig::for_precision(Precision::Fast).trials, 1_000);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let c = SimulationConfig::default().with_seed(11);
        let a: u64 = c.rng().random();
        let b: u64 = c.rng().random();
        assert_eq!(a, b);
    }

    #[test]
    fn batch_size_is_at_least_one() {
        assert_eq!(SimulationConfig::default().with_batch_size(0).batch_size, 1);
    }
}
