//! Pure display formatting for rate cards and chat bubbles. No parsing of
//! assistant text happens here.

use time::format_description::well_known::Rfc3339;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

const DISPLAY_DATE: &[FormatItem<'static>] =
    format_description!("[month repr:short] [day], [year]");
const ISO_DATE: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");
const CLOCK_TIME: &[FormatItem<'static>] = format_description!("[hour]:[minute]");

/// Whole-dollar USD with thousands separators: 1150 → "$1,150".
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Renders backend date strings as "Jul 05, 2025". Empty strings, the
/// backend's placeholder values, and anything unparseable come back as
/// "N/A" rather than an error.
pub fn format_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() || matches!(trimmed, "N/A" | "null" | "undefined") {
        return "N/A".to_string();
    }

    if let Ok(date) = Date::parse(trimmed, ISO_DATE) {
        return date
            .format(DISPLAY_DATE)
            .unwrap_or_else(|_| "N/A".to_string());
    }
    if let Ok(moment) = OffsetDateTime::parse(trimmed, &Rfc3339) {
        return moment
            .date()
            .format(DISPLAY_DATE)
            .unwrap_or_else(|_| "N/A".to_string());
    }

    "N/A".to_string()
}

pub fn format_clock_time(timestamp: OffsetDateTime) -> String {
    timestamp.format(CLOCK_TIME).unwrap_or_default()
}

/// Expands container codes for display; unknown codes pass through.
pub fn container_type_label(code: &str) -> &str {
    match code {
        "20GP" => "20ft General Purpose",
        "40GP" => "40ft General Purpose",
        "40HC" => "40ft High Cube",
        "20RF" => "20ft Reefer",
        "40RF" => "40ft Reefer",
        _ => code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(500.0), "$500");
        assert_eq!(format_currency(1150.0), "$1,150");
        assert_eq!(format_currency(1_250_000.0), "$1,250,000");
        assert_eq!(format_currency(0.0), "$0");
    }

    #[test]
    fn test_format_date_renders_short_month() {
        assert_eq!(format_date("2025-07-15"), "Jul 15, 2025");
        assert_eq!(format_date("2025-07-05"), "Jul 05, 2025");
    }

    #[test]
    fn test_format_date_accepts_rfc3339() {
        assert_eq!(format_date("2025-07-01T10:00:00Z"), "Jul 01, 2025");
    }

    #[test]
    fn test_format_date_placeholders_become_na() {
        for raw in ["", "  ", "N/A", "null", "undefined", "not-a-date"] {
            assert_eq!(format_date(raw), "N/A", "raw input: {raw:?}");
        }
    }

    #[test]
    fn test_container_label_expansion() {
        assert_eq!(container_type_label("20GP"), "20ft General Purpose");
        assert_eq!(container_type_label("40HC"), "40ft High Cube");
        assert_eq!(container_type_label("45HC"), "45HC");
    }
}
