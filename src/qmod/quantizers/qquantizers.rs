use num_traits::Float;

use super::qlevels::LevelSet;

/// Quantization policy
///
/// `Round`: nearest level by absolute distance (mid-tread on the levels),
/// exact ties go to the lower level.
/// `Trunc`: floor of the scaled offset from `xmin`, saturated to the level range.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuantizerMode
{
    Round,
    Trunc
}

impl QuantizerMode
{
    pub const ALL: [QuantizerMode; 2] = [QuantizerMode::Round, QuantizerMode::Trunc];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Round => "round",
            Self::Trunc => "trunc"
        }
    }

    /// Index of the level selected for `x`
    ///
    pub fn index_of<T: Float>(&self, x: T, set: &LevelSet<T>) -> usize {
        match self {
            Self::Round => nearest_index(x, set.levels()),
            Self::Trunc => floor_index(x, set.levels(), set.xmin(), set.step())
        }
    }

    /// Quantize a single value
    ///
    pub fn quantize<T: Float>(&self, x: T, set: &LevelSet<T>) -> T {
        set.levels()[self.index_of(x, set)]
    }

    /// Quantize every value of `x`
    ///
    /// # Args
    /// -----
    ///
    /// `x`: input values
    /// `set`: level set
    ///
    /// # Return
    /// --------
    ///
    /// `Vec<T>`, same length as `x`, every element taken from `set.levels()`
    ///
    pub fn quantize_slice<T: Float>(&self, x: &[T], set: &LevelSet<T>) -> Vec<T> {
        match self {
            Self::Round => quantize_round(x, set.levels()),
            Self::Trunc => quantize_trunc(x, set.levels(), set.xmin(), set.step())
        }
    }
}

/// Index of the level closest to `x`.
///
/// Linear scan with strict `<`: the first minimum wins, so exact ties
/// resolve to the lower index. A NaN input keeps index 0, and so does
/// `+inf` or `-inf`: every distance is infinite and none is strictly smaller.
/// Unlike `floor_index`, `+inf` does not saturate to the top level.
///
#[inline]
pub fn nearest_index<T: Float>(x: T, levels: &[T]) -> usize {
    let mut best = 0;
    let mut best_distance = T::infinity();
    for (i, &level) in levels.iter().enumerate() {
        let distance = (level - x).abs();
        if distance < best_distance {
            best = i;
            best_distance = distance;
        }
    }
    best
}

/// Bucket index `floor((x - xmin) / step)` saturated to `[0, L - 1]`.
///
/// The index comes from one division, no accumulation. The stored levels
/// carry rounding from `xmin + i * step`, so the estimate is then moved by at
/// most one bucket to the largest `i` with `levels[i] <= x`: an input equal to
/// `levels[i]` always lands on `i`.
/// `+inf` saturates high, `-inf` and NaN saturate low.
///
#[inline]
pub fn floor_index<T: Float>(x: T, levels: &[T], xmin: T, step: T) -> usize {
    let top = levels.len().saturating_sub(1);
    let k = ((x - xmin) / step).floor();
    let index = if k >= T::from(top).unwrap_or_else(T::max_value) {
        top
    } else if k > T::zero() {
        k.to_usize().map_or(top, |index| index.min(top))
    } else {
        0
    };
    if index < top && levels[index + 1] <= x {
        index + 1
    } else if index > 0 && levels[index] > x {
        index - 1
    } else {
        index
    }
}

/// Nearest-level quantization of every element of `x`.
///
/// An empty `levels` slice has nothing to select from and yields an empty vector.
///
pub fn quantize_round<T: Float>(x: &[T], levels: &[T]) -> Vec<T> {
    if levels.is_empty() { return Vec::new() }
    x.iter().map(|&value| levels[nearest_index(value, levels)]).collect::<Vec<T>>()
}

/// Floor-truncation quantization of every element of `x`.
///
/// An empty `levels` slice has nothing to select from and yields an empty vector.
///
pub fn quantize_trunc<T: Float>(x: &[T], levels: &[T], xmin: T, step: T) -> Vec<T> {
    if levels.is_empty() { return Vec::new() }
    x.iter().map(|&value| levels[floor_index(value, levels, xmin, step)]).collect::<Vec<T>>()
}
