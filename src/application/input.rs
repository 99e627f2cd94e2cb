// src/application/input.rs
//
// Type coercion for console answers. No validation beyond the type.

/// `si` / `no` answer; anything else is `None`
pub fn parse_yes_no(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "si" | "sí" | "s" => Some(true),
        "no" | "n" => Some(false),
        _ => None,
    }
}

pub fn parse_count(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

/// Accepts `120.50` and `120,50`
pub fn parse_price(raw: &str) -> Option<f64> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
}

pub fn parse_service_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Blank answers mean "keep the current value"
pub fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
