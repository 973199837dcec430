//! Display formatting for KPI cards and tables

/// Percentage with one decimal, e.g. `42.9%`
pub fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// One decimal with thousands separators, e.g. `12,345.6`
pub fn area(value: f64) -> String {
    let fixed = format!("{:.1}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "0"));
    let sign = if value < 0.0 && fixed != "0.0" { "-" } else { "" };
    format!("{}{}.{}", sign, group_thousands(whole), fraction)
}

/// Integer with thousands separators
pub fn count(value: u64) -> String {
    group_thousands(&value.to_string())
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
