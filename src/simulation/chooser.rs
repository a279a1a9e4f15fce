use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of every random decision the simulator makes.
pub trait Chooser {
    /// Uniform index in `0..len`, `len` must be positive.
    fn pick_index(&mut self, len: usize) -> usize;
    /// Two distinct uniform indices in `0..len`, `len` must be at least 2.
    fn pick_pair(&mut self, len: usize) -> (usize, usize);
    /// Uniform value in `low..=high`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;
    /// Uniform integer in `low..=high`.
    fn uniform_int(&mut self, low: u32, high: u32) -> u32;
    /// Uniform draw in `[0, 1)`.
    fn chance(&mut self) -> f64;
}

pub struct RandomChooser {
    rng: StdRng,
}

impl RandomChooser {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64),
        }
    }
}

impl Default for RandomChooser {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Chooser for RandomChooser {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    fn pick_pair(&mut self, len: usize) -> (usize, usize) {
        let picked = rand::seq::index::sample(&mut self.rng, len, 2);
        (picked.index(0), picked.index(1))
    }

    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if low >= high {
            return low;
        }
        self.rng.random_range(low..=high)
    }

    fn uniform_int(&mut self, low: u32, high: u32) -> u32 {
        if low >= high {
            return low;
        }
        self.rng.random_range(low..=high)
    }

    fn chance(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}
