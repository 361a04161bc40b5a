//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// International phone number regex (E.164 format)
static INTERNATIONAL_PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[1-9]\d{7,14}$").expect("E.164 pattern is valid"));

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Check if a phone number is valid international E.164 (`+` and 8-15 digits)
pub fn is_valid_international_phone(phone: &str) -> bool {
    let normalized = normalize_phone_number(phone);
    INTERNATIONAL_PHONE_REGEX.is_match(&normalized)
}

/// Mask a phone number for logging, keeping only the last four digits
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() <= 4 {
        return "*".repeat(normalized.len());
    }

    let last_digits = &normalized[normalized.len() - 4..];
    if let Some(rest) = normalized.strip_prefix('+') {
        format!("+{}{}", "*".repeat(rest.len() - 4), last_digits)
    } else {
        format!("{}{}", "*".repeat(normalized.len() - 4), last_digits)
    }
}
