// src/core/sanitize.rs

/// Collapse whitespace runs to one space and trim both ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// First decimal number in `s`, ignoring thousands separators:
/// `₹1,299` → 1299, `4.5/5` → 4.5, `Rating: 3` → 3.
/// Digit runs too long for an `f64` give `None`.
pub fn first_number(s: &str) -> Option<f64> {
    let mut digits = String::new();
    let mut seen_dot = false;

    for ch in s.chars() {
        match ch {
            '0'..='9' => digits.push(ch),
            ',' if !digits.is_empty() => {}
            '.' if !digits.is_empty() && !seen_dot => { digits.push('.'); seen_dot = true; }
            _ if !digits.is_empty() => break,
            _ => {}
        }
    }
    let digits = digits.trim_end_matches('.');
    if digits.is_empty() { return None; }
    digits.parse::<f64>().ok().filter(|n| n.is_finite())
}
