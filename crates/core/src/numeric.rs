/// Coerce spreadsheet text to a number.
///
/// Surrounding whitespace is ignored. Empty, unparsable and non-finite input
/// yields `None`, which callers treat as a missing value.
pub fn to_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}
