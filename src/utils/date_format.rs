use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

// Timestamps in the dataset omit seconds ("2018-10-25T16:30Z"), which RFC 3339
// parsing rejects.
const FALLBACK_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%MZ",
    "%Y-%m-%dT%H:%M:%S%.fZ",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
];

pub fn parse_comment_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Utc));
    }
    FALLBACK_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

/// Formats a stored comment date as e.g. "Oct 25, 2018". Strings that do not
/// parse are returned unchanged.
pub fn format_comment_date(raw: &str) -> String {
    match parse_comment_date(raw) {
        Some(date) => date.format("%b %d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Current time in the ISO-8601 shape used for stored comments.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
