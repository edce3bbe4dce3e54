use std::sync::OnceLock;

use regex::Regex;

/// Week and year pulled from the heading above the menu table, ex.
/// "Menüplan KW 42 / 14.10.2024 - 18.10.2024".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekHeader {
    pub week: String,
    pub year: i32,
}

impl WeekHeader {
    /// Both fields are best effort: a missing match leaves `""` or `0`.
    pub fn from_text(text: &str) -> Self {
        static WEEK_RE: OnceLock<Regex> = OnceLock::new();
        static YEAR_RE: OnceLock<Regex> = OnceLock::new();
        let week_re = WEEK_RE.get_or_init(|| Regex::new(r"KW ([0-9]+)").expect("regex should be valid"));
        let year_re = YEAR_RE.get_or_init(|| Regex::new(r"([0-9]{4})").expect("regex should be valid"));

        let week = week_re
            .captures(text)
            .map(|c| c[1].to_string())
            .unwrap_or_default();
        let year = year_re
            .captures(text)
            .and_then(|c| c[1].parse().ok())
            .unwrap_or_default();

        Self { week, year }
    }
}
