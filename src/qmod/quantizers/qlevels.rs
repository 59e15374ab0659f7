use std::fmt::Debug;

use num_traits::Float;

use crate::qlab_common::check_level_domain;
use crate::qlab_error::{ QuantError, QuantResult };

/// Uniform level set, extremes included
///
/// `levels[i] = xmin + i * step`, `step = (xmax - xmin) / (L - 1)`, with the
/// last level pinned to `xmax` so the top edge is exact.
/// Immutable once built: both quantizers read the same `step`, so their
/// bucket boundaries agree.
///
#[derive(Debug, Clone, PartialEq)]
pub struct LevelSet<T: Float>
{
    xmin: T,
    xmax: T,
    step: T,
    levels: Vec<T>
}

impl<T: Float + Debug> LevelSet<T>
{
    /// BUILD LEVEL SET
    ///
    /// # Args
    /// -----
    ///
    /// `n_levels`: number of levels L (>= 2)
    /// `xmin`: lowest level
    /// `xmax`: highest level (> xmin)
    ///
    /// # Return
    /// --------
    ///
    /// `QuantResult<LevelSet<T>>`
    ///
    pub fn new(n_levels: usize, xmin: T, xmax: T) -> QuantResult<Self> {
        check_level_domain(n_levels, xmin, xmax)?;
        let last = T::from(n_levels - 1).unwrap_or_else(T::max_value);
        let step = (xmax - xmin) / last;
        let mut levels = (0..n_levels)
            .map(|i| xmin + step * T::from(i).unwrap_or_else(T::zero))
            .collect::<Vec<T>>();
        levels[n_levels - 1] = xmax;
        if !step.is_finite() || levels.windows(2).any(|pair| !(pair[0] < pair[1])) {
            return Err(QuantError::invalid(format!(
                "{n_levels} levels over [{xmin:?}, {xmax:?}] are not distinct in floating point"
            )))
        }
        Ok(Self { xmin, xmax, step, levels })
    }
}

impl<T: Float> LevelSet<T>
{
    pub fn xmin(&self) -> T {
        self.xmin
    }

    pub fn xmax(&self) -> T {
        self.xmax
    }

    /// Spacing between consecutive levels
    pub fn step(&self) -> T {
        self.step
    }

    pub fn levels(&self) -> &[T] {
        &self.levels
    }

    /// Number of levels L
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn contains(&self, value: T) -> bool {
        self.levels.iter().any(|&level| level == value)
    }
}

/// Build the uniform level set and return it with its spacing.
///
/// Fails with `InvalidConfiguration` when `n_levels < 2`, `xmax <= xmin`,
/// `xmax - xmin` overflows or the levels collapse in floating point.
///
pub fn build_levels<T: Float + Debug>(n_levels: usize, xmin: T, xmax: T) -> QuantResult<(LevelSet<T>, T)> {
    let set = LevelSet::new(n_levels, xmin, xmax)?;
    let step = set.step();
    Ok((set, step))
}
