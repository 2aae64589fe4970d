use dollar_core::errors::GameError;
use log::debug;
use rand::Rng;

use crate::config::PartitionConfig;
use crate::gaussian::BoundedGaussian;

/// Returns whether `count` integers in `[floor, ceiling]` can add up to `sum`.
///
/// The check runs in 128-bit arithmetic so extreme bounds cannot overflow.
pub fn is_feasible(sum: i64, count: usize, floor: i64, ceiling: i64) -> bool {
    if count < 1 || floor > ceiling {
        return false;
    }
    let count = count as i128;
    let sum = i128::from(sum);
    sum >= count * i128::from(floor) && sum <= count * i128::from(ceiling)
}

/// Generator of centrally weighted integer partitions.
///
/// The generator owns its Gaussian sampler state. Randomness comes from the
/// `rng` passed to each call, so two generators fed identically seeded RNGs
/// produce identical output.
#[derive(Debug, Clone)]
pub struct RandomPartition {
    gaussian: BoundedGaussian,
}

impl RandomPartition {
    /// Creates a generator after validating the configuration.
    pub fn new(config: PartitionConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            gaussian: BoundedGaussian::new(config.gaussian_bound),
        })
    }

    /// Returns the Gaussian sampler backing the weighted draws.
    pub fn gaussian(&self) -> &BoundedGaussian {
        &self.gaussian
    }

    /// Finds `count` integers in `[floor, ceiling]` that add up to `sum`.
    ///
    /// Returns `None` when no such sequence exists: `count` is zero, the
    /// range is empty, or `sum` lies outside `[count * floor, count * ceiling]`.
    /// The order of the returned values carries no meaning.
    pub fn find_random_set<R: Rng + ?Sized>(
        &mut self,
        sum: i64,
        count: usize,
        floor: i64,
        ceiling: i64,
        rng: &mut R,
    ) -> Option<Vec<i64>> {
        if !is_feasible(sum, count, floor, ceiling) {
            debug!("no set of {count} ints in {floor}..={ceiling} sums to {sum}");
            return None;
        }
        let bounds = Bounds {
            floor: i128::from(floor),
            ceiling: i128::from(ceiling),
        };
        let mut values = Vec::with_capacity(count);
        self.split(i128::from(sum), count as i128, bounds, rng, &mut values, 0);
        Some(values)
    }

    /// Appends `count` values summing to `sum`. The caller guarantees feasibility.
    fn split<R: Rng + ?Sized>(
        &mut self,
        sum: i128,
        count: i128,
        bounds: Bounds,
        rng: &mut R,
        out: &mut Vec<i64>,
        depth: usize,
    ) {
        let indent = depth * 2;
        if count == 1 {
            debug!("{:indent$}leaf {sum}", "");
            out.push(bounds.narrow(sum));
            return;
        }

        let second_count = count / 2;
        let first_count = count - second_count;
        let second_floor = bounds.floor * second_count;
        let second_ceiling = bounds.ceiling * second_count;
        let first_floor = (bounds.floor * first_count).max(sum - second_ceiling);
        let first_ceiling = (bounds.ceiling * first_count).min(sum - second_floor);

        let first_sum = self.weighted_pick(first_floor, first_ceiling, rng);
        let second_sum = sum - first_sum;
        debug!(
            "{:indent$}sum={sum} n={count} -> {first_sum} in {first_floor}..={first_ceiling} ({first_count}), {second_sum} ({second_count})",
            ""
        );

        self.split(first_sum, first_count, bounds, rng, out, depth + 1);
        self.split(second_sum, second_count, bounds, rng, out, depth + 1);
    }

    /// Picks an integer in `[low, high]` biased towards the middle of the range.
    fn weighted_pick<R: Rng + ?Sized>(&mut self, low: i128, high: i128, rng: &mut R) -> i128 {
        let len = high - low + 1;
        let unit = self.gaussian.sample_unit(rng);
        let offset = (unit * len as f64).floor() as i128;
        low + offset.clamp(0, len - 1)
    }
}

impl Default for RandomPartition {
    fn default() -> Self {
        Self {
            gaussian: BoundedGaussian::default(),
        }
    }
}

/// Per-value bounds carried through the recursion.
#[derive(Debug, Clone, Copy)]
struct Bounds {
    floor: i128,
    ceiling: i128,
}

impl Bounds {
    /// Converts a leaf value back to `i64`. Leaves always lie within the
    /// caller's `i64` bounds, so the clamp never changes the value.
    fn narrow(&self, value: i128) -> i64 {
        value.clamp(self.floor, self.ceiling) as i64
    }
}
