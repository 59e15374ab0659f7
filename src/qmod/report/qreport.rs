//! Report export for lab results.
//!
//! - `levels.txt`: level values and spacing
//! - `table_Ts_<Ts>.csv`: per-sample table of one case
//! - `transfer_curve.csv`: input/output staircase of both quantizers
//! - `summary.csv`: power and SNR of every case
//!
//! Plain text tables for the console come from `render_case`.

use std::fmt::Write as _;
use std::fs::{ self, File };
use std::io::{ self, BufWriter, Write };
use std::path::{ Path, PathBuf };

use tracing::info;

use crate::qlab_error::ReportError;
use crate::qmod::analysis::qanalysis::TABLE_COLUMNS;
use crate::qmod::analysis::qcurves::TransferCurve;
use crate::qmod::quantizers::qlevels::LevelSet;
use crate::qmod::quantizers::qquantizers::QuantizerMode;
use crate::quantlab::CaseReport;

pub const LEVELS_FILE: &str = "levels.txt";
pub const CURVE_FILE: &str = "transfer_curve.csv";
pub const SUMMARY_FILE: &str = "summary.csv";

const SUMMARY_COLUMNS: [&str; 6] = ["Ts", "Px", "Pe_round", "Pe_trunc", "SNR_round_dB", "SNR_trunc_dB"];
const COLUMN_WIDTH: usize = 12;

/// File name of the per-sample table for sampling period `ts`.
///
/// `ts` keeps a decimal point (`0.5`, `1.0`).
///
pub fn case_file_name(ts: f64) -> String {
    format!("table_Ts_{:?}.csv", ts)
}

/// Writes report files into one output directory
#[derive(Debug, Clone)]
pub struct ReportWriter
{
    outdir: PathBuf
}

impl ReportWriter
{
    /// Create the writer and its output directory (parents included)
    ///
    /// # Args
    /// -----
    ///
    /// `outdir`: output directory
    ///
    /// # Return
    /// --------
    ///
    /// `Result<ReportWriter, ReportError>`
    ///
    pub fn new(outdir: impl AsRef<Path>) -> Result<Self, ReportError> {
        let outdir = outdir.as_ref().to_path_buf();
        fs::create_dir_all(&outdir).map_err(|source| ReportError::CreateDir {
            path: outdir.clone(),
            source
        })?;
        Ok(Self { outdir })
    }

    pub fn outdir(&self) -> &Path {
        &self.outdir
    }

    /// Level values and spacing
    ///
    pub fn write_levels(&self, set: &LevelSet<f64>) -> Result<PathBuf, ReportError> {
        self.write_with(LEVELS_FILE, |w| {
            writeln!(w, "Levels (L={}): {:?}", set.len(), set.levels())?;
            writeln!(w, "Δ = {}", set.step())
        })
    }

    /// Per-sample table of one case, columns in `TABLE_COLUMNS` order
    ///
    pub fn write_case_table(&self, report: &CaseReport) -> Result<PathBuf, ReportError> {
        self.write_with(&case_file_name(report.ts), |w| {
            writeln!(w, "{}", TABLE_COLUMNS.join(","))?;
            for row in report.table.rows.iter() {
                writeln!(
                    w,
                    "{},{},{},{},{},{},{}",
                    row.n, row.t, row.x, row.xhat_round, row.e_round, row.xhat_trunc, row.e_trunc
                )?;
            }
            Ok(())
        })
    }

    /// Transfer curve samples: `x,q_round,q_trunc`, one output column per mode
    ///
    pub fn write_transfer_curve(&self, curve: &TransferCurve) -> Result<PathBuf, ReportError> {
        self.write_with(CURVE_FILE, |w| {
            write!(w, "x")?;
            for mode in QuantizerMode::ALL.iter() {
                write!(w, ",q_{}", mode.label())?;
            }
            writeln!(w)?;
            for (i, x) in curve.input.iter().enumerate() {
                write!(w, "{}", x)?;
                for &mode in QuantizerMode::ALL.iter() {
                    write!(w, ",{}", curve.output(mode)[i])?;
                }
                writeln!(w)?;
            }
            Ok(())
        })
    }

    /// One line of power and SNR per case. Infinite SNR is written as `inf`.
    ///
    pub fn write_summary(&self, reports: &[CaseReport]) -> Result<PathBuf, ReportError> {
        self.write_with(SUMMARY_FILE, |w| {
            writeln!(w, "{}", SUMMARY_COLUMNS.join(","))?;
            for report in reports.iter() {
                let s = &report.stats;
                writeln!(w, "{},{},{},{},{},{}", s.ts, s.px, s.pe_round, s.pe_trunc, s.snr_round_db, s.snr_trunc_db)?;
            }
            Ok(())
        })
    }

    fn write_with<F>(&self, name: &str, body: F) -> Result<PathBuf, ReportError>
    where
        F: FnOnce(&mut BufWriter<File>) -> io::Result<()>
    {
        let path = self.outdir.join(name);
        File::create(&path)
            .and_then(|file| {
                let mut writer = BufWriter::new(file);
                body(&mut writer)?;
                writer.flush()
            })
            .map_err(|source| ReportError::Write { path: path.clone(), source })?;
        info!(path = %path.display(), "report written");
        Ok(path)
    }
}

/// Console rendering of one case: table rounded to 4 decimals and an SNR line
///
pub fn render_case(report: &CaseReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Ts = {} s ===", report.ts);

    let header = TABLE_COLUMNS
        .iter()
        .map(|name| format!("{:>width$}", name, width = COLUMN_WIDTH))
        .collect::<Vec<String>>()
        .join("");
    let _ = writeln!(out, "{}", header);

    for row in report.table.rows.iter() {
        let _ = write!(out, "{:>width$}", row.n, width = COLUMN_WIDTH);
        for value in row.to_array().iter().skip(1) {
            let _ = write!(out, "{:>width$.4}", value, width = COLUMN_WIDTH);
        }
        out.push('\n');
    }

    let s = &report.stats;
    let _ = writeln!(
        out,
        "SNR_round = {:.3} dB | SNR_trunc = {:.3} dB (Px={:.6}, PeR={:.6}, PeT={:.6})",
        s.snr_round_db, s.snr_trunc_db, s.px, s.pe_round, s.pe_trunc
    );
    out
}
