//! Brazilian phone number utilities

/// Digits in a mobile number including the area code (DDD)
pub const PHONE_DIGITS: usize = 11;

/// Keep only the ASCII digits of the input
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Format raw input as `(NN) NNNNN-NNNN` as the user types
///
/// Partial input is grouped as far as it goes (`"119"` becomes `"(11) 9"`),
/// extra digits beyond the eleventh are dropped.
pub fn format_phone(raw: &str) -> String {
    let digits: String = digits_only(raw).chars().take(PHONE_DIGITS).collect();
    match digits.len() {
        0 => String::new(),
        1..=2 => format!("({}", digits),
        3..=7 => format!("({}) {}", &digits[..2], &digits[2..]),
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
    }
}

/// Mask a phone number for logs (e.g., (11) *****-4321)
pub fn mask_phone(phone: &str) -> String {
    let digits = digits_only(phone);
    if digits.len() >= 6 {
        format!("({}) *****-{}", &digits[..2], &digits[digits.len() - 4..])
    } else {
        "****".to_string()
    }
}
