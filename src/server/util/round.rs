/// Rounds to one decimal place, halves rounding up.
///
/// Every reported hour total goes through this so that floating point sums such as
/// `0.1 + 0.2` come out as `0.3`.
pub fn round1(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}
