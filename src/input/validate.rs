use regex::Regex;
use std::sync::OnceLock;

static DATE_RE: OnceLock<Regex> = OnceLock::new();
static TIME_RE: OnceLock<Regex> = OnceLock::new();

fn date_pattern() -> &'static Regex {
    DATE_RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid pattern"))
}

fn time_pattern() -> &'static Regex {
    TIME_RE.get_or_init(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").expect("valid pattern"))
}

/// Shape check for a prompted date answer (YYYY-MM-DD). Calendar validity
/// (month ranges, leap days) is left to the date parser downstream.
pub fn is_valid_date(input: &str) -> bool {
    date_pattern().is_match(input.trim())
}

/// Shape check for a prompted 24-hour time answer (HH:MM).
pub fn is_valid_time(input: &str) -> bool {
    time_pattern().is_match(input.trim())
}
