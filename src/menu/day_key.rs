/// Maps a German weekday name to its ordinal key, `"1"` for Montag through
/// `"7"` for Sonntag. Anything else maps to the empty key, which callers
/// treat as "no day".
pub fn day_key(name: &str) -> &'static str {
    match name.trim().to_lowercase().as_str() {
        "montag" => "1",
        "dienstag" => "2",
        "mittwoch" => "3",
        "donnerstag" => "4",
        "freitag" => "5",
        "samstag" => "6",
        "sonntag" => "7",
        _ => "",
    }
}
