/// Power ratio to dB
///
/// # Args
/// -----
///
/// `ratio`: power ratio (signal power / noise power)
///
/// # Return
/// --------
///
/// `f64`
///
#[macro_export]
macro_rules! powtodb {
    ($ratio:expr) => {{ 10.0 * ($ratio).log10() }};
}
