//! CPF (tax id) and CEP (postal code) utilities

use once_cell::sync::Lazy;
use regex::Regex;

use super::phone::digits_only;

/// Digits in a CPF
pub const CPF_DIGITS: usize = 11;

/// Digits in a CEP
pub const CEP_DIGITS: usize = 8;

/// `NNN.NNN.NNN-NN`
pub static CPF_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{3}\.[0-9]{3}\.[0-9]{3}-[0-9]{2}$").unwrap()
});

/// `NNNNN-NNN`
pub static CEP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{5}-[0-9]{3}$").unwrap()
});

/// Format raw input as `NNN.NNN.NNN-NN`, grouping partial input as far as it goes
pub fn format_cpf(raw: &str) -> String {
    let digits: String = digits_only(raw).chars().take(CPF_DIGITS).collect();
    let mut formatted = String::with_capacity(14);
    for (i, c) in digits.chars().enumerate() {
        match i {
            3 | 6 => formatted.push('.'),
            9 => formatted.push('-'),
            _ => {}
        }
        formatted.push(c);
    }
    formatted
}

/// Format raw input as `NNNNN-NNN`, grouping partial input as far as it goes
pub fn format_cep(raw: &str) -> String {
    let digits: String = digits_only(raw).chars().take(CEP_DIGITS).collect();
    if digits.len() > 5 {
        format!("{}-{}", &digits[..5], &digits[5..])
    } else {
        digits
    }
}

/// The eight digits of a CEP, if the input holds exactly eight
pub fn cep_digits(raw: &str) -> Option<String> {
    let digits = digits_only(raw);
    (digits.len() == CEP_DIGITS).then_some(digits)
}
