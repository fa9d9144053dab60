// File: crates/dash-core/src/format.rs
// Summary: Number formatting for ticks, labels, tooltips and KPI cards.

/// Group the integer part with commas: `1234567.891, 2` → `1,234,567.89`.
pub fn thousands(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    let raw = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let negative = value < 0.0 && raw.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// `$1,234` style currency.
pub fn currency(value: f64, decimals: usize) -> String {
    let body = thousands(value, decimals);
    match body.strip_prefix('-') {
        Some(rest) => format!("-${rest}"),
        None if body == "—" => body,
        None => format!("${body}"),
    }
}

pub fn percent(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    format!("{value:.decimals$}%")
}

/// Signed percent delta, e.g. `+12.5%`.
pub fn signed_percent(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    format!("{value:+.decimals$}%")
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Compact number for coordinates in SVG output (two decimals, trailing zeros trimmed).
pub fn coord(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" || s.is_empty() { "0".to_string() } else { s.to_string() }
}
