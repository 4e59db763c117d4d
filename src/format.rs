//! Number formatting shared by the console report and the map popups.

/// Format an integer with comma thousands separators, e.g. `-1,234,567`.
pub fn thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Format a percentage with one decimal place, e.g. `66.7%`.
pub fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}
