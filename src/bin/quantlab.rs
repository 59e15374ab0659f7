//! Quantization lab: x(t) = (t mod T)^2 sampled once per period, quantized
//! by nearest-level rounding and by floor truncation.
//!
//! # Usage
//!
//! ```bash
//! # Defaults: Ts = 0.5 0.1, L = 4, levels over [0, 4], T = 2
//! quantlab
//!
//! # Custom cases and level set
//! quantlab --ts 0.5 0.25 0.1 -L 8 --xmin 0 --xmax 4 --outdir results
//!
//! # Parameters from a TOML file, then prompt for overrides
//! quantlab --config lab.toml --interactive
//! ```

use std::io::{ self, BufRead, Write };
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{ Context, Result };
use clap::Parser;
use tracing::{ info, warn };

use quantlab::observe::init_logging;
use quantlab::qcurves::DEFAULT_CURVE_POINTS;
use quantlab::{ render_case, LabParameters, QuantLab, ReportWriter };

/// Sampling and quantization lab: rounding vs truncation
#[derive(Parser, Debug)]
#[command(name = "quantlab")]
#[command(about = "Sample x(t) = (t mod T)^2 and compare rounding vs truncation quantizers")]
#[command(version)]
struct Args {
    /// Sampling periods in seconds (e.g. --ts 0.5 0.1)
    #[arg(long = "ts", alias = "Ts", num_args = 1..)]
    ts: Option<Vec<f64>>,

    /// Number of levels, extremes included
    #[arg(short = 'L', long)]
    levels: Option<usize>,

    /// Lowest level
    #[arg(long, allow_hyphen_values = true)]
    xmin: Option<f64>,

    /// Highest level
    #[arg(long, allow_hyphen_values = true)]
    xmax: Option<f64>,

    /// Signal period T in seconds
    #[arg(long)]
    period: Option<f64>,

    /// Output directory
    #[arg(short, long)]
    outdir: Option<PathBuf>,

    /// TOML parameter file, flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Prompt for every parameter on the console
    #[arg(short, long)]
    interactive: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn apply(&self, mut params: LabParameters) -> LabParameters {
        if let Some(ts) = &self.ts { params.ts = ts.clone() }
        if let Some(levels) = self.levels { params.levels = levels }
        if let Some(xmin) = self.xmin { params.xmin = xmin }
        if let Some(xmax) = self.xmax { params.xmax = xmax }
        if let Some(period) = self.period { params.period = period }
        if let Some(outdir) = &self.outdir { params.outdir = outdir.clone() }
        params
    }
}

/// Ask one question, keep `current` on empty or unparsable input
fn prompt<T, R>(input: &mut R, label: &str, current: T) -> T
where
    T: FromStr + std::fmt::Display,
    R: BufRead,
{
    print!("{label} [{current}]: ");
    let _ = io::stdout().flush();
    let mut line = String::new();
    if input.read_line(&mut line).is_err() {
        return current
    }
    let answer = line.trim();
    if answer.is_empty() {
        return current
    }
    match answer.parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            warn!(field = label, input = answer, "invalid input, keeping current value");
            current
        }
    }
}

fn interactive_overrides<R: BufRead>(input: &mut R, mut params: LabParameters) -> LabParameters {
    println!("\n=== Interactive mode ===");

    let current_ts = params.ts.iter().map(|ts| ts.to_string()).collect::<Vec<String>>().join(" ");
    let ts_line: String = prompt(input, "Ts (space separated)", current_ts);
    match ts_line.split_whitespace().map(f64::from_str).collect::<Result<Vec<f64>, _>>() {
        Ok(ts) if !ts.is_empty() => params.ts = ts,
        _ => warn!(input = %ts_line, "invalid Ts list, keeping current value"),
    }

    params.levels = prompt(input, "L (levels)", params.levels);
    params.xmin = prompt(input, "Xmin", params.xmin);
    params.xmax = prompt(input, "Xmax", params.xmax);
    params.period = prompt(input, "T (period)", params.period);
    let outdir: String = prompt(input, "Output directory", params.outdir.display().to_string());
    params.outdir = PathBuf::from(outdir);
    params
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let base = match &args.config {
        Some(path) => LabParameters::from_toml_file(path)
            .with_context(|| format!("loading parameters from {}", path.display()))?,
        None => LabParameters::default(),
    };
    let mut params = args.apply(base);
    if args.interactive {
        let stdin = io::stdin();
        params = interactive_overrides(&mut stdin.lock(), params);
    }

    let lab = QuantLab::new(params)?;
    let writer = ReportWriter::new(&lab.params().outdir)?;

    let mut written = vec![
        writer.write_levels(lab.levels())?,
        writer.write_transfer_curve(&lab.transfer_curve(DEFAULT_CURVE_POINTS))?,
    ];

    let reports = lab.run()?;
    for report in reports.iter() {
        written.push(writer.write_case_table(report)?);
        println!("\n{}", render_case(report));
    }
    written.push(writer.write_summary(&reports)?);

    info!(outdir = %writer.outdir().display(), files = written.len(), "reports generated");
    println!("Generated files in: {}", writer.outdir().display());
    for path in written.iter() {
        println!("- {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::parse_from(["quantlab", "--ts", "0.5", "0.25", "-L", "8", "--xmin", "-1", "--outdir", "out"]);
        let params = args.apply(LabParameters::default());
        assert_eq!(params.ts, vec![0.5, 0.25]);
        assert_eq!(params.levels, 8);
        assert_eq!(params.xmin, -1.0);
        assert_eq!(params.xmax, 4.0);
        assert_eq!(params.outdir, PathBuf::from("out"));
    }

    #[test]
    fn test_legacy_ts_spelling() {
        let args = Args::parse_from(["quantlab", "--Ts", "0.2"]);
        assert_eq!(args.apply(LabParameters::default()).ts, vec![0.2]);
    }

    #[test]
    fn test_interactive_answers() {
        let mut input = Cursor::new("0.25 0.125\n\n-2\nnot-a-number\n4\nresults\n");
        let params = interactive_overrides(&mut input, LabParameters::default());
        assert_eq!(params.ts, vec![0.25, 0.125]);
        assert_eq!(params.levels, 4);
        assert_eq!(params.xmin, -2.0);
        assert_eq!(params.xmax, 4.0);
        assert_eq!(params.period, 4.0);
        assert_eq!(params.outdir, PathBuf::from("results"));
    }

    #[test]
    fn test_interactive_eof_keeps_everything() {
        let mut input = Cursor::new("");
        let params = interactive_overrides(&mut input, LabParameters::default());
        assert_eq!(params, LabParameters::default());
    }
}
