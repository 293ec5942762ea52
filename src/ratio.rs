//! Division helper shared by progress and reporting metrics.

/// Returns `part / whole`, or `0.0` when `whole` is zero.
///
/// Counts beyond `u32::MAX` saturate before conversion.
#[expect(
    clippy::float_arithmetic,
    reason = "completion ratios are fractional by definition"
)]
pub(crate) fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    let numerator = f64::from(u32::try_from(part).unwrap_or(u32::MAX));
    let denominator = f64::from(u32::try_from(whole).unwrap_or(u32::MAX));
    numerator / denominator
}
