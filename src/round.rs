/// Rounds a timing for display, keeping roughly three significant digits.
///
/// Values below 1 keep three decimals, below 10 two, below 100 one, and
/// anything larger is rounded to a whole number. Stored reports always keep
/// the unrounded value.
pub fn round(n: f64) -> f64 {
    let scale = if n < 1.0 {
        1_000.0
    } else if n < 10.0 {
        100.0
    } else if n < 100.0 {
        10.0
    } else {
        1.0
    };
    (n * scale).round() / scale
}
