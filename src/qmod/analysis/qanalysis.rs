use crate::qlab_error::{ QuantError, QuantResult };
use crate::qlab_types::CaseOutput;
use crate::qmod::quantizers::qquantizers::{ quantize_round, quantize_trunc };
use crate::qmod::signals::qsignal_tools::SampleSequence;
use crate::qmod::signals::qsignals::QSignal;

/// Column names of the per-sample table, in row order
pub const TABLE_COLUMNS: [&str; 7] = ["n", "t", "x", "xhat_round", "e_round", "xhat_trunc", "e_trunc"];

/// One row of the per-sample table
///
/// `e_* = xhat_* - x`
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRow
{
    pub n: usize,
    pub t: f64,
    pub x: f64,
    pub xhat_round: f64,
    pub e_round: f64,
    pub xhat_trunc: f64,
    pub e_trunc: f64
}

impl SampleRow
{
    /// Row values in `TABLE_COLUMNS` order
    pub fn to_array(&self) -> [f64; 7] {
        [self.n as f64, self.t, self.x, self.xhat_round, self.e_round, self.xhat_trunc, self.e_trunc]
    }
}

/// Per-sample table of one analysis case
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseTable
{
    pub rows: Vec<SampleRow>
}

impl CaseTable
{
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn times(&self) -> Vec<f64> {
        self.column(|row| row.t)
    }

    pub fn raw(&self) -> Vec<f64> {
        self.column(|row| row.x)
    }

    pub fn rounded(&self) -> Vec<f64> {
        self.column(|row| row.xhat_round)
    }

    pub fn round_errors(&self) -> Vec<f64> {
        self.column(|row| row.e_round)
    }

    pub fn truncated(&self) -> Vec<f64> {
        self.column(|row| row.xhat_trunc)
    }

    pub fn trunc_errors(&self) -> Vec<f64> {
        self.column(|row| row.e_trunc)
    }

    fn column<F: Fn(&SampleRow) -> f64>(&self, f: F) -> Vec<f64> {
        self.rows.iter().map(f).collect::<Vec<f64>>()
    }
}

/// Aggregate power and SNR of one analysis case
///
/// `px`: mean of `x^2`
/// `pe_round`, `pe_trunc`: mean of `e^2` per quantizer
/// `snr_round_db`, `snr_trunc_db`: `+inf` on exact reconstruction
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisStats
{
    pub ts: f64,
    pub px: f64,
    pub pe_round: f64,
    pub pe_trunc: f64,
    pub snr_round_db: f64,
    pub snr_trunc_db: f64
}

/// SNR in dB
///
/// # Args
/// -----
///
/// `px`: signal power
/// `pe`: error power
///
/// # Return
/// --------
///
/// `f64`: `+inf` when `pe <= 0`, otherwise `10 log10(px / pe)`
///
pub fn snr_db(px: f64, pe: f64) -> f64 {
    if pe <= 0.0 { return f64::INFINITY }
    crate::powtodb!(px / pe)
}

/// Mean of the squared values of every column, 0 for an empty column
///
/// One scratch buffer of squares is reused across the columns.
///
pub fn mean_powers<const N: usize>(columns: [&[f64]; N]) -> [f64; N] {
    let mut squares = Vec::with_capacity(columns.iter().map(|c| c.len()).max().unwrap_or(0));
    columns.map(|column| {
        squares.clear();
        squares.extend(column.iter().map(|&v| v * v));
        if squares.is_empty() { 0.0 } else { statistical::mean(&squares) }
    })
}

/// Sample one period, quantize with both policies, measure errors
///
/// # Args
/// -----
///
/// `ts`: sampling period in seconds (> 0)
/// `period`: signal period T in seconds (> 0)
/// `levels`: quantization levels, increasing
/// `xmin`: lowest level
/// `step`: level spacing
///
/// # Return
/// --------
///
/// `QuantResult<CaseOutput>`: `(CaseTable, AnalysisStats)`.
/// `InvalidConfiguration` on a bad `ts`/`period`, an empty `levels` slice,
/// a non-finite `xmin` or a `step` that is not positive and finite.
///
pub fn analyze_case(ts: f64, period: f64, levels: &[f64], xmin: f64, step: f64) -> QuantResult<CaseOutput> {
    if levels.is_empty() {
        return Err(QuantError::invalid("at least one quantization level is required"))
    }
    if !xmin.is_finite() {
        return Err(QuantError::invalid(format!("xmin must be finite (got {xmin})")))
    }
    if !(step.is_finite() && step > 0.0) {
        return Err(QuantError::invalid(format!("step must be a positive finite number (got {step})")))
    }

    let sequence = SampleSequence::one_period(&QSignal::new(period), ts)?;
    let x = &sequence.values;

    let xr = quantize_round(x, levels);
    let xt = quantize_trunc(x, levels, xmin, step);
    let er = xr.iter().zip(x.iter()).map(|(q, v)| q - v).collect::<Vec<f64>>();
    let et = xt.iter().zip(x.iter()).map(|(q, v)| q - v).collect::<Vec<f64>>();

    let [px, pe_round, pe_trunc] = mean_powers([x.as_slice(), er.as_slice(), et.as_slice()]);

    let stats = AnalysisStats {
        ts,
        px,
        pe_round,
        pe_trunc,
        snr_round_db: snr_db(px, pe_round),
        snr_trunc_db: snr_db(px, pe_trunc)
    };

    let rows = (0..sequence.len())
        .map(|n| SampleRow {
            n,
            t: sequence.times[n],
            x: x[n],
            xhat_round: xr[n],
            e_round: er[n],
            xhat_trunc: xt[n],
            e_trunc: et[n]
        })
        .collect::<Vec<SampleRow>>();

    Ok((CaseTable { rows }, stats))
}
