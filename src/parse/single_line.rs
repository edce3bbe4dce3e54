use std::{borrow::Cow, sync::OnceLock};

use regex::Regex;

/// Collapses every whitespace run (newlines included) into one space and trims
/// the ends, ex. `"Schnitzel\nmit Pommes  "` -> `"Schnitzel mit Pommes"`.
/// Runs of spaces and tabs inside the title are collapsed as well, not only
/// line breaks.
pub fn single_line(s: &str) -> Cow<'_, str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s+").expect("regex should be valid"));
    re.replace_all(s.trim(), " ")
}
