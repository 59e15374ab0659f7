mod quantlab;
mod qlab_common;
mod qlab_error;
mod qlab_types;
pub mod observe;
mod qmod {
    #[macro_use]
    pub mod macros;
    pub mod signals {
        pub mod qsignals;
        pub mod qsignal_tools;
    }
    pub mod quantizers {
        pub mod qlevels;
        pub mod qquantizers;
    }
    pub mod analysis {
        pub mod qanalysis;
        pub mod qcurves;
    }
    pub mod report {
        pub mod qreport;
    }
}

// --- PUB USE ---

pub use quantlab::{ QuantLab, CaseReport };
pub use qlab_common::LabParameters;
pub use qlab_error::{ QuantError, QuantResult, ReportError, ConfigError };
pub use qlab_types::*;
pub use qmod::signals::{ qsignals, qsignal_tools };
pub use qmod::quantizers::{ qlevels, qquantizers };
pub use qmod::analysis::{ qanalysis, qcurves };
pub use qmod::report::qreport;
pub use qmod::signals::qsignals::QSignal;
pub use qmod::quantizers::qlevels::{ build_levels, LevelSet };
pub use qmod::quantizers::qquantizers::{ quantize_round, quantize_trunc, QuantizerMode };
pub use qmod::analysis::qanalysis::{ analyze_case, snr_db, AnalysisStats, CaseTable, SampleRow };
pub use qmod::analysis::qcurves::TransferCurve;
pub use qmod::report::qreport::{ render_case, ReportWriter };
