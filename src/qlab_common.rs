use std::default::Default;
use std::fmt::Debug;
use std::fs;
use std::path::{ Path, PathBuf };

use num_traits::Float;
use serde::{ Deserialize, Serialize };

use crate::qlab_error::{ ConfigError, QuantError, QuantResult };

/// Upper bound on the number of quantization levels
pub const MAX_LEVELS: usize = 1 << 24;

/// Upper bound on the samples taken over one period
pub const MAX_SAMPLES: usize = 1 << 24;

/// Lab Parameters struct
///
/// # Args
/// ------
///
/// `ts`: sampling periods in seconds, one analysis case each
/// `levels`: number of quantization levels (extremes included)
/// `xmin`: lowest level
/// `xmax`: highest level
/// `period`: period T of the test signal in seconds
/// `outdir`: output directory for reports
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabParameters {
    pub ts: Vec<f64>,
    pub levels: usize,
    pub xmin: f64,
    pub xmax: f64,
    pub period: f64,
    pub outdir: PathBuf,
}

impl Default for LabParameters {
    fn default() -> Self {
        Self {

            ts: vec![0.5, 0.1],
            levels: 4,
            xmin: 0.0,
            xmax: 4.0,
            period: 2.0,
            outdir: PathBuf::from("outputs")

        }
    }
}

impl LabParameters {

    /// Parse parameters from a TOML document. Missing keys keep their default.
    ///
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml)?)
    }

    /// Load parameters from a TOML file
    ///
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source
        })?;
        Self::from_toml_str(&contents)
    }

    /// Check every numeric field against its valid domain.
    ///
    /// # Return
    /// --------
    ///
    /// `QuantResult<()>`
    ///
    pub fn validate(&self) -> QuantResult<()> {
        check_level_domain(self.levels, self.xmin, self.xmax)?;
        if self.ts.is_empty() {
            return Err(QuantError::invalid("at least one sampling period Ts is required"))
        }
        for &ts in self.ts.iter() {
            check_sampling_domain(ts, self.period)?;
        }
        Ok(())
    }
}

pub(crate) fn check_level_domain<T: Float + Debug>(levels: usize, xmin: T, xmax: T) -> QuantResult<()> {
    if levels < 2 {
        return Err(QuantError::invalid(format!("L must be >= 2 (got {levels})")))
    }
    if levels > MAX_LEVELS {
        return Err(QuantError::invalid(format!("L must be <= {MAX_LEVELS} (got {levels})")))
    }
    if !xmin.is_finite() || !xmax.is_finite() {
        return Err(QuantError::invalid(format!("amplitude bounds must be finite (xmin={xmin:?}, xmax={xmax:?})")))
    }
    if xmax <= xmin {
        return Err(QuantError::invalid(format!("xmax must be greater than xmin (xmin={xmin:?}, xmax={xmax:?})")))
    }
    if !(xmax - xmin).is_finite() {
        return Err(QuantError::invalid(format!("xmax - xmin overflows (xmin={xmin:?}, xmax={xmax:?})")))
    }
    Ok(())
}

/// Returns the sample count covering exactly one period.
///
/// `N = round(T / Ts)` with ties to even, `1 <= N <= MAX_SAMPLES`.
///
pub(crate) fn check_sampling_domain(ts: f64, period: f64) -> QuantResult<usize> {
    if !(ts.is_finite() && ts > 0.0) {
        return Err(QuantError::invalid(format!("Ts must be a positive finite number (got {ts})")))
    }
    if !(period.is_finite() && period > 0.0) {
        return Err(QuantError::invalid(format!("T must be a positive finite number (got {period})")))
    }
    let n = (period / ts).round_ties_even();
    if n < 1.0 {
        return Err(QuantError::invalid(format!("Ts={ts} yields no sample within one period T={period}")))
    }
    if n > MAX_SAMPLES as f64 {
        return Err(QuantError::invalid(format!(
            "Ts={ts} yields more than {MAX_SAMPLES} samples within one period T={period}"
        )))
    }
    Ok(n as usize)
}
