/// Dollar price with two decimals, e.g. `$187.44`.
pub fn format_price(value: f64) -> String {
    format!("${:.2}", value)
}

/// Compact large amounts: `2.95T`, `310.2B`, `45.0M`, `12k`.
pub fn format_large_number(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000_000_000.0 {
        format!("{:.2}T", value / 1_000_000_000_000.0)
    } else if abs >= 1_000_000_000.0 {
        format!("{:.1}B", value / 1_000_000_000.0)
    } else if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.0}k", value / 1_000.0)
    } else {
        format!("{:.2}", value)
    }
}

pub fn format_volume(volume: f64) -> String {
    if volume >= 1_000_000.0 {
        format!("{:.1}M", volume / 1_000_000.0)
    } else if volume >= 1_000.0 {
        format!("{:.0}k", volume / 1_000.0)
    } else {
        format!("{:.0}", volume)
    }
}

pub fn format_percentage_with_sign(value: f64) -> String {
    if value > 0.0 {
        format!("+{:.2}%", value)
    } else {
        format!("{:.2}%", value)
    }
}

/// `N/A` for missing values, otherwise the formatter's output.
pub fn format_optional<F>(value: Option<f64>, format: F) -> String
where
    F: Fn(f64) -> String,
{
    value.map(format).unwrap_or_else(|| "N/A".to_string())
}
