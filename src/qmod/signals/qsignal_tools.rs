use super::qsignals::QSignal;
use crate::qlab_common::check_sampling_domain;
use crate::qlab_error::QuantResult;

/// One period of the test signal sampled every `ts` seconds
///
/// `times[n] = n * ts` for `n = 0..N-1`, `N = round(period / ts)`,
/// `values[n] = x(times[n])`.
///
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSequence
{
    pub ts: f64,
    pub period: f64,
    pub times: Vec<f64>,
    pub values: Vec<f64>
}

impl SampleSequence
{
    /// Sample exactly one period of `signal`
    ///
    /// # Args
    /// -----
    ///
    /// `signal`: signal to sample
    /// `ts`: sampling period in seconds (> 0)
    ///
    /// # Return
    /// --------
    ///
    /// `QuantResult<SampleSequence>`
    ///
    pub fn one_period(signal: &QSignal<f64>, ts: f64) -> QuantResult<Self> {
        let period = signal.period();
        let n_samples = check_sampling_domain(ts, period)?;
        let times = (0..n_samples).map(|n| n as f64 * ts).collect::<Vec<f64>>();
        let values = signal.signal_to_vec(&times);
        Ok(Self { ts, period, times, values })
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// `n_points` evenly spaced values over `[start, stop]`, both ends included.
///
/// The last point is set to `stop` exactly.
///
pub fn linspace(start: f64, stop: f64, n_points: usize) -> Vec<f64> {
    match n_points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let delta = (stop - start) / (n_points - 1) as f64;
            let mut grid = (0..n_points).map(|i| start + i as f64 * delta).collect::<Vec<f64>>();
            grid[n_points - 1] = stop;
            grid
        }
    }
}
