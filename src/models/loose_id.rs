use serde_json::Value;

/// Compares a stored id against an id taken from a URL or query string.
///
/// Numbers compare by numeric value (`5`, `5.0` and `"05"` all match a
/// stored `5`); strings compare verbatim. Any other JSON value, or a missing
/// id, matches nothing.
pub fn id_matches(stored: Option<&Value>, key: &str) -> bool {
    match stored {
        Some(Value::String(s)) => s == key,
        Some(Value::Number(n)) => match (n.as_f64(), key.trim().parse::<f64>()) {
            (Some(stored), Ok(wanted)) => stored == wanted,
            _ => false,
        },
        _ => false,
    }
}

/// Short form of an id for log lines.
pub fn id_label(id: Option<&Value>) -> String {
    match id {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "<no id>".to_string(),
    }
}
