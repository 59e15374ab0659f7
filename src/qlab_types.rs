use crate::qmod::analysis::qanalysis::{ AnalysisStats, CaseTable };

/// Output of `analyze_case`: per-sample table and aggregate statistics
pub type CaseOutput = (CaseTable, AnalysisStats);
