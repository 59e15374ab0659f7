use rayon::prelude::*;
use tracing::{ debug, info };

use crate::qlab_common::LabParameters;
use crate::qlab_error::QuantResult;
use crate::qmod::analysis::qanalysis::{ analyze_case, AnalysisStats, CaseTable };
use crate::qmod::analysis::qcurves::TransferCurve;
use crate::qmod::quantizers::qlevels::LevelSet;

/// Outcome of one sampling period
#[derive(Debug, Clone, PartialEq)]
pub struct CaseReport
{
    pub ts: f64,
    pub table: CaseTable,
    pub stats: AnalysisStats
}

/// # QuantLab: sampling and quantization lab
///
/// Validates a parameter set once, builds the level set once and analyzes
/// every requested sampling period against it.
///
#[derive(Debug, Clone)]
pub struct QuantLab {
    params: LabParameters,
    levels: LevelSet<f64>,
}

impl QuantLab {

    /// Create QuantLab
    ///
    /// # Args
    /// ------
    ///
    /// `params`: lab parameters, fully validated before anything is sampled
    ///
    /// # Return
    /// --------
    ///
    /// `QuantResult<QuantLab>`
    ///
    pub fn new(params: LabParameters) -> QuantResult<Self> {
        params.validate()?;
        let levels = LevelSet::new(params.levels, params.xmin, params.xmax)?;
        debug!(levels = params.levels, step = levels.step(), "level set built");
        Ok(Self { params, levels })
    }

    pub fn params(&self) -> &LabParameters {
        &self.params
    }

    pub fn levels(&self) -> &LevelSet<f64> {
        &self.levels
    }

    /// Analyze one sampling period against the lab level set
    ///
    pub fn analyze(&self, ts: f64) -> QuantResult<CaseReport> {
        let (table, stats) = analyze_case(
            ts,
            self.params.period,
            self.levels.levels(),
            self.levels.xmin(),
            self.levels.step()
        )?;
        debug!(ts, samples = table.len(), snr_round_db = stats.snr_round_db, snr_trunc_db = stats.snr_trunc_db, "case analyzed");
        Ok(CaseReport { ts, table, stats })
    }

    /// Analyze every sampling period in parallel
    ///
    /// Cases share only the read-only level set. Reports come back in the
    /// order the periods were requested.
    ///
    /// # Return
    /// --------
    ///
    /// `QuantResult<Vec<CaseReport>>`
    ///
    pub fn run(&self) -> QuantResult<Vec<CaseReport>> {
        let reports = self.params.ts
            .par_iter()
            .map(|&ts| self.analyze(ts))
            .collect::<QuantResult<Vec<CaseReport>>>()?;
        info!(cases = reports.len(), levels = self.levels.len(), "analysis complete");
        Ok(reports)
    }

    /// Same as `run`, one case after the other
    ///
    pub fn run_sequential(&self) -> QuantResult<Vec<CaseReport>> {
        self.params.ts.iter().map(|&ts| self.analyze(ts)).collect()
    }

    /// Transfer curve of both quantizers over `[xmin, xmax]`
    ///
    pub fn transfer_curve(&self, n_points: usize) -> TransferCurve {
        TransferCurve::new(&self.levels, n_points)
    }
}
