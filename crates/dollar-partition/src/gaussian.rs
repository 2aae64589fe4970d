use rand::Rng;

/// Standard normal sampler whose output is clamped to `[-bound, bound]`.
///
/// Samples come in pairs from the Marsaglia polar method. The second sample
/// of each pair is kept and returned by the next call, so the sampler holds a
/// small amount of state and must be used through `&mut`.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedGaussian {
    bound: f64,
    cached: Option<f64>,
}

impl BoundedGaussian {
    /// Default cap in standard deviations.
    pub const DEFAULT_BOUND: f64 = 4.5;

    /// Creates a sampler with the given cap. The cap must be positive.
    pub fn new(bound: f64) -> Self {
        Self {
            bound,
            cached: None,
        }
    }

    /// Returns the configured cap.
    pub fn bound(&self) -> f64 {
        self.bound
    }

    /// Returns whether a sample is waiting from the last generated pair.
    pub fn has_cached(&self) -> bool {
        self.cached.is_some()
    }

    /// Drops any cached sample.
    pub fn reset(&mut self) {
        self.cached = None;
    }

    /// Draws a sample in `[-bound, bound]`.
    pub fn sample<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        if let Some(value) = self.cached.take() {
            return value;
        }
        loop {
            let v1 = 2.0 * rng.gen::<f64>() - 1.0;
            let v2 = 2.0 * rng.gen::<f64>() - 1.0;
            let s = v1 * v1 + v2 * v2;
            if s <= 0.0 || s >= 1.0 {
                continue;
            }
            let multiplier = (-2.0 * s.ln() / s).sqrt();
            self.cached = Some(self.clamp(v2 * multiplier));
            return self.clamp(v1 * multiplier);
        }
    }

    /// Draws a sample rescaled linearly from `[-bound, bound]` onto `[0, 1]`.
    pub fn sample_unit<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        let value = self.sample(rng);
        (value / (2.0 * self.bound) + 0.5).clamp(0.0, 1.0)
    }

    fn clamp(&self, value: f64) -> f64 {
        value.clamp(-self.bound, self.bound)
    }
}

impl Default for BoundedGaussian {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BOUND)
    }
}

#[cfg(test)]
mod tests {
    use dollar_core::rng::RngHandle;
    use rand::RngCore;

    use super::BoundedGaussian;

    #[test]
    fn samples_stay_within_bound() {
        let mut rng = RngHandle::from_seed(11);
        let mut gaussian = BoundedGaussian::new(1.5);
        for _ in 0..10_000 {
            let value = gaussian.sample(&mut rng);
            assert!((-1.5..=1.5).contains(&value), "{value} escaped the bound");
        }
    }

    #[test]
    fn second_sample_of_pair_is_cached() {
        let mut rng = RngHandle::from_seed(3);
        let mut gaussian = BoundedGaussian::default();
        assert!(!gaussian.has_cached());
        gaussian.sample(&mut rng);
        assert!(gaussian.has_cached());
        gaussian.sample(&mut rng);
        assert!(!gaussian.has_cached());

        gaussian.sample(&mut rng);
        gaussian.reset();
        assert!(!gaussian.has_cached());
    }

    #[test]
    fn cached_sample_does_not_consume_rng() {
        let mut rng = RngHandle::from_seed(5);
        let mut gaussian = BoundedGaussian::default();
        gaussian.sample(&mut rng);

        let mut probe = rng.clone();
        gaussian.sample(&mut rng);
        assert_eq!(rng.next_u64(), probe.next_u64());
    }

    #[test]
    fn mean_and_spread_look_standard() {
        let mut rng = RngHandle::from_seed(2024);
        let mut gaussian = BoundedGaussian::default();
        let samples: Vec<f64> = (0..20_000).map(|_| gaussian.sample(&mut rng)).collect();
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        let variance =
            samples.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / samples.len() as f64;
        assert!(mean.abs() < 0.05, "mean {mean}");
        assert!((variance - 1.0).abs() < 0.1, "variance {variance}");
    }

    #[test]
    fn unit_samples_stay_in_unit_interval() {
        let mut rng = RngHandle::from_seed(8);
        let mut gaussian = BoundedGaussian::new(0.5);
        for _ in 0..5_000 {
            let value = gaussian.sample_unit(&mut rng);
            assert!((0.0..=1.0).contains(&value));
        }
    }
}
