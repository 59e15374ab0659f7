use crate::qmod::quantizers::qlevels::LevelSet;
use crate::qmod::quantizers::qquantizers::QuantizerMode;
use crate::qmod::signals::qsignal_tools::linspace;

pub const DEFAULT_CURVE_POINTS: usize = 600;

/// Input/output characteristic of both quantizers over `[xmin, xmax]`
#[derive(Debug, Clone, PartialEq)]
pub struct TransferCurve
{
    pub input: Vec<f64>,
    pub rounded: Vec<f64>,
    pub truncated: Vec<f64>
}

impl TransferCurve
{
    /// Evaluate both quantizers on `n_points` evenly spaced inputs
    ///
    /// # Args
    /// -----
    ///
    /// `set`: level set
    /// `n_points`: grid size, endpoints `xmin` and `xmax` included
    ///
    pub fn new(set: &LevelSet<f64>, n_points: usize) -> Self {
        let input = linspace(set.xmin(), set.xmax(), n_points);
        let rounded = QuantizerMode::Round.quantize_slice(&input, set);
        let truncated = QuantizerMode::Trunc.quantize_slice(&input, set);
        Self { input, rounded, truncated }
    }

    pub fn output(&self, mode: QuantizerMode) -> &[f64] {
        match mode {
            QuantizerMode::Round => &self.rounded,
            QuantizerMode::Trunc => &self.truncated
        }
    }

    pub fn len(&self) -> usize {
        self.input.len()
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// Input values where the output of `mode` changes level
    ///
    pub fn transitions(&self, mode: QuantizerMode) -> Vec<f64> {
        let output = self.output(mode);
        output
            .windows(2)
            .zip(self.input.iter().skip(1))
            .filter(|(pair, _)| pair[0] != pair[1])
            .map(|(_, &x)| x)
            .collect::<Vec<f64>>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staircase_shapes() {
        let set = LevelSet::new(4, 0.0, 4.0).unwrap();
        let curve = TransferCurve::new(&set, DEFAULT_CURVE_POINTS);
        assert_eq!(curve.len(), 600);
        assert_eq!(curve.rounded[0], 0.0);
        assert_eq!(curve.truncated[0], 0.0);
        assert_eq!(curve.rounded[599], 4.0);
        assert_eq!(curve.truncated[599], 4.0);

        // three steps each, truncation switches later than rounding
        let round_steps = curve.transitions(QuantizerMode::Round);
        let trunc_steps = curve.transitions(QuantizerMode::Trunc);
        assert_eq!(round_steps.len(), 3);
        assert_eq!(trunc_steps.len(), 3);
        for (r, t) in round_steps.iter().zip(trunc_steps.iter()) {
            assert!(r < t);
        }
        assert!(curve.output(QuantizerMode::Trunc).windows(2).all(|w| w[0] <= w[1]));
        assert!(curve.output(QuantizerMode::Round).windows(2).all(|w| w[0] <= w[1]));
    }
}
