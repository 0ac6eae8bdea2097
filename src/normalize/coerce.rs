use log::warn;

/// Coerces one weather box cell into a float.
///
/// Infobox markup writes negative numbers with U+2212 or an em-dash or the
/// `&minus;` HTML entity, and marks unmeasurably small precipitation with
/// the literal `trace`; all of those have to land on plain `f64` parsing.
/// Returns `None` (logged) when the text still fails to parse, which later
/// drops the whole parameter.
pub fn coerce_number(raw: &str) -> Option<f64> {
    let cleaned = raw
        .trim()
        .replace('\u{2212}', "-")
        .replace('\u{2014}', "-")
        .replace("&minus;", "-")
        .replace("trace", "0");
    match cleaned.parse::<f64>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Unable to convert value {:?} to float", raw);
            None
        }
    }
}
