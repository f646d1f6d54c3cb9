//! Number formatting shared by both dashboards

/// Group digits in threes: `1234567` -> `1,234,567`
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `12.345` -> `12.3%`
pub fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Playtime as hours with one decimal
pub fn hours(minutes: u64) -> String {
    format!("{:.1}h", minutes as f64 / 60.0)
}

/// Decimals for kills per hour
pub const KILL_RATE_DECIMALS: usize = 1;
/// Wins per hour are small numbers, so they get an extra digit
pub const WIN_RATE_DECIMALS: usize = 2;

/// Rate with a unit, or a dash when there is nothing to divide by
pub fn rate(value: Option<f64>, decimals: usize, unit: &str) -> String {
    match value {
        Some(v) => format!("{:.*} {}", decimals, v, unit),
        None => "-".to_string(),
    }
}
