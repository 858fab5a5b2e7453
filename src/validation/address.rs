use serde_json::Value;

/// Check whether a value is a usable numeric account identifier.
///
/// The value must be a string (native numbers lose precision on 64-bit ids),
/// it must convert completely to a number, and that number must not be zero.
pub fn is_valid_address(value: &Value) -> bool {
    match value {
        Value::String(s) => matches!(to_number(s), Some(n) if n != 0.0),
        _ => false,
    }
}

/// Convert a string the way a JavaScript `Number()` call does.
///
/// Returns `None` where JavaScript would produce `NaN`.
pub(crate) fn to_number(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return Some(0.0);
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            return radix_to_number(digits, radix);
        }
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    // Rust also accepts "inf" and "nan", JavaScript does not.
    if s.chars().any(|c| c.is_alphabetic() && c != 'e' && c != 'E') {
        return None;
    }
    s.parse::<f64>().ok()
}

/// Digits after a `0x`/`0o`/`0b` prefix. No sign is allowed and wide
/// literals lose precision instead of failing.
fn radix_to_number(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

/// Convert a JSON value the way a JavaScript `Number()` call does.
pub(crate) fn value_to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Null => Some(0.0),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => to_number(s),
        Value::Array(items) => match items.as_slice() {
            [] => Some(0.0),
            [single] => element_to_number(single),
            _ => None,
        },
        Value::Object(_) => None,
    }
}

/// A lone array element converts through its string form, so `[null]` is 0
/// and `[true]` is NaN.
fn element_to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Null => Some(0.0),
        Value::Bool(_) | Value::Object(_) => None,
        other => value_to_number(other),
    }
}

/// JavaScript truthiness of a JSON value.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
