// Display formatting for repository counts.

/// Format a count compactly (e.g., "950", "2.5k", "1.2M").
///
/// Rounds half-up to one decimal and keeps a trailing ".0".
pub fn format_number(n: u64) -> String {
    if n >= 1_000_000 {
        scaled(n, 1_000_000, "M")
    } else if n >= 1_000 {
        scaled(n, 1_000, "k")
    } else {
        n.to_string()
    }
}

/// `n / unit` to one decimal place, in integer arithmetic so halves round up.
fn scaled(n: u64, unit: u64, suffix: &str) -> String {
    let step = unit / 10;
    let tenths = n / step + u64::from(n % step >= step / 2);
    format!("{}.{}{}", tenths / 10, tenths % 10, suffix)
}
