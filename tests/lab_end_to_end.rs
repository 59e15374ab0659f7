use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{ Rng, SeedableRng };

use quantlab::qreport::{ case_file_name, CURVE_FILE, LEVELS_FILE, SUMMARY_FILE };
use quantlab::{
    analyze_case, build_levels, quantize_round, quantize_trunc, snr_db, LabParameters, QuantError, QuantLab,
    ReportWriter
};

#[test]
fn test_reference_example() {
    let (set, step) = build_levels(4, 0.0, 4.0).unwrap();
    assert_relative_eq!(step, 4.0 / 3.0);
    assert_eq!(set.levels()[0], 0.0);
    assert_relative_eq!(set.levels()[1], 4.0 / 3.0);
    assert_relative_eq!(set.levels()[2], 8.0 / 3.0);
    assert_eq!(set.levels()[3], 4.0);

    let (table, _) = analyze_case(0.5, 2.0, set.levels(), 0.0, step).unwrap();
    assert_eq!(table.times(), vec![0.0, 0.5, 1.0, 1.5]);
    assert_eq!(table.raw(), vec![0.0, 0.25, 1.0, 2.25]);

    // 0.25 is closer to 0 than to 4/3
    assert_eq!(quantize_round(&[0.25], set.levels()), vec![0.0]);
    // floor(2.25 / (4/3)) = 1
    assert_eq!(quantize_trunc(&[2.25], set.levels(), 0.0, step), vec![set.levels()[1]]);
    assert_eq!(table.rows[3].xhat_trunc, set.levels()[1]);
}

#[test]
fn test_boundaries() {
    let (set, step) = build_levels(4, 0.0, 4.0).unwrap();
    assert_eq!(quantize_trunc(&[4.0], set.levels(), 0.0, step), vec![4.0]);
    assert_eq!(quantize_trunc(&[-1e-12], set.levels(), 0.0, step), vec![0.0]);
}

#[test]
fn test_snr_reference_values() {
    assert_eq!(snr_db(4.0, 0.0), f64::INFINITY);
    assert_relative_eq!(snr_db(4.0, 0.04), 20.0, epsilon = 1e-9);
}

#[test]
fn test_finer_sampling_changes_only_the_table() {
    let lab = QuantLab::new(LabParameters::default()).unwrap();
    let reports = lab.run().unwrap();
    let coarse = &reports[0];
    let fine = &reports[1];

    assert_eq!(coarse.table.len(), 4);
    assert_eq!(fine.table.len(), 20);
    // x(t) = t^2 over [0, 2): mean of x^2 tends to 16/5
    assert!(fine.stats.px > coarse.stats.px);
    assert!(fine.stats.px < 16.0 / 5.0);
    for report in reports.iter() {
        assert!(report.stats.pe_round >= 0.0 && report.stats.pe_trunc >= 0.0);
        assert!(report.stats.pe_round <= report.stats.pe_trunc);
    }
}

#[test]
fn test_random_labs_parallel_equals_sequential() {
    let mut rng = StdRng::seed_from_u64(0x5eed_cafe);
    for _ in 0..25 {
        let xmin = rng.gen_range(-5.0..5.0);
        let params = LabParameters {
            ts: (0..rng.gen_range(1..6)).map(|_| rng.gen_range(0.01..1.0)).collect(),
            levels: rng.gen_range(2..32),
            xmin,
            xmax: xmin + rng.gen_range(0.5..20.0),
            period: rng.gen_range(1.0..4.0),
            ..Default::default()
        };
        let lab = QuantLab::new(params.clone()).unwrap();
        let parallel = lab.run().unwrap();
        assert_eq!(parallel, lab.run_sequential().unwrap());

        for (report, &ts) in parallel.iter().zip(params.ts.iter()) {
            assert_eq!(report.ts, ts);
            for row in report.table.rows.iter() {
                assert!(lab.levels().contains(row.xhat_round));
                assert!(lab.levels().contains(row.xhat_trunc));
                assert_eq!(row.e_round, row.xhat_round - row.x);
                assert_eq!(row.e_trunc, row.xhat_trunc - row.x);
            }
        }
    }
}

#[test]
fn test_invalid_configuration_surfaces_before_running() {
    let cases = [
        LabParameters { levels: 1, ..Default::default() },
        LabParameters { xmin: 4.0, xmax: 4.0, ..Default::default() },
        LabParameters { ts: vec![0.5, -1.0], ..Default::default() },
        LabParameters { period: -2.0, ..Default::default() },
        LabParameters { ts: vec![5.0], ..Default::default() },
        LabParameters { ts: vec![0.5, 1e-300], ..Default::default() },
        LabParameters { xmin: -1e308, xmax: 1e308, ..Default::default() },
        LabParameters { levels: usize::MAX, ..Default::default() },
    ];
    for params in cases.into_iter() {
        let err = QuantLab::new(params).unwrap_err();
        assert!(matches!(err, QuantError::InvalidConfiguration(_)));
        assert!(err.to_string().starts_with("Invalid configuration: "));
    }
}

#[test]
fn test_analyze_case_rejects_unusable_levels() {
    let err = analyze_case(0.5, 2.0, &[], 0.0, 1.0).unwrap_err();
    assert!(matches!(err, QuantError::InvalidConfiguration(_)));
    assert!(analyze_case(0.5, 2.0, &[0.0, 1.0], 0.0, 0.0).is_err());
    assert!(analyze_case(1e-300, 2.0, &[0.0, 1.0], 0.0, 1.0).is_err());
}

#[test]
fn test_full_report_set() {
    let dir = tempfile::tempdir().unwrap();
    let params = LabParameters { outdir: dir.path().join("outputs"), ..Default::default() };
    let lab = QuantLab::new(params).unwrap();
    let writer = ReportWriter::new(&lab.params().outdir).unwrap();

    let reports = lab.run().unwrap();
    writer.write_levels(lab.levels()).unwrap();
    writer.write_transfer_curve(&lab.transfer_curve(600)).unwrap();
    for report in reports.iter() {
        writer.write_case_table(report).unwrap();
    }
    writer.write_summary(&reports).unwrap();

    let outdir = writer.outdir();
    for name in [LEVELS_FILE, CURVE_FILE, SUMMARY_FILE].iter() {
        assert!(outdir.join(name).is_file(), "missing {}", name);
    }
    assert!(outdir.join(case_file_name(0.5)).is_file());
    assert!(outdir.join(case_file_name(0.1)).is_file());

    let table = std::fs::read_to_string(outdir.join("table_Ts_0.1.csv")).unwrap();
    assert_eq!(table.lines().count(), 21);
}
