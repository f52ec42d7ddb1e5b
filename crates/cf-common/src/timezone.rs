use once_cell::sync::Lazy;
use regex::Regex;

// Accepts "UTC+8", "utc -5", "UTC+9:30", and the same embedded in longer
// strings ("UTC+8 (Singapore Standard Time)"). Named zones are not resolved.
static UTC_OFFSET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)utc\s*([+-])\s*(\d{1,2})(?::([0-5]\d))?").unwrap());

/// Extract a fractional hour offset from a free-text timezone field.
pub fn parse_utc_offset(timezone: &str) -> Option<f64> {
    let captures = UTC_OFFSET.captures(timezone)?;

    let sign = if &captures[1] == "-" { -1.0 } else { 1.0 };
    let hours: f64 = captures[2].parse().ok()?;
    let minutes: f64 = captures
        .get(3)
        .map(|m| m.as_str().parse().unwrap_or(0.0))
        .unwrap_or(0.0);

    Some(sign * (hours + minutes / 60.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_hour_offsets() {
        assert_eq!(parse_utc_offset("UTC+8"), Some(8.0));
        assert_eq!(parse_utc_offset("utc-5"), Some(-5.0));
        assert_eq!(parse_utc_offset("UTC + 2"), Some(2.0));
    }

    #[test]
    fn parses_half_hour_offsets() {
        assert_eq!(parse_utc_offset("UTC+9:30"), Some(9.5));
        assert_eq!(parse_utc_offset("UTC-3:30"), Some(-3.5));
    }

    #[test]
    fn parses_offsets_embedded_in_labels() {
        assert_eq!(parse_utc_offset("UTC+8 (Singapore Standard Time)"), Some(8.0));
    }

    #[test]
    fn rejects_named_zones() {
        assert_eq!(parse_utc_offset("PST"), None);
        assert_eq!(parse_utc_offset("Asia/Tokyo"), None);
        assert_eq!(parse_utc_offset(""), None);
    }
}
