//! Pluggable validators run on every candidate value.
//!
//! A validator sees the candidate and the value before the edit. It may
//! rewrite the candidate in place (sanitizing it) and accept, or return
//! `false`, which reverts the whole edit.

use unicode_normalization::UnicodeNormalization;

/// A rule applied to every candidate value.
pub trait TextValidator {
    fn validate(&self, candidate: &mut String, previous: &str) -> bool;
}

impl<F> TextValidator for F
where
    F: Fn(&mut String, &str) -> bool,
{
    fn validate(&self, candidate: &mut String, previous: &str) -> bool {
        self(candidate, previous)
    }
}

/// Accept only numbers.
#[derive(Clone, Copy, Debug, Default)]
pub struct NumbersOnly {
    /// Allow a single decimal point.
    pub allow_decimal: bool,
    /// Allow a single leading minus sign.
    pub allow_negative: bool,
}

impl NumbersOnly {
    #[must_use]
    pub fn integers() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn decimals() -> Self {
        Self {
            allow_decimal: true,
            allow_negative: true,
        }
    }
}

impl TextValidator for NumbersOnly {
    fn validate(&self, candidate: &mut String, _previous: &str) -> bool {
        let digits = match candidate.strip_prefix('-') {
            Some(rest) if self.allow_negative => rest,
            _ => candidate.as_str(),
        };
        let mut seen_point = false;
        digits.chars().all(|c| {
            if c == '.' && self.allow_decimal && !seen_point {
                seen_point = true;
                true
            } else {
                c.is_ascii_digit()
            }
        })
    }
}

/// Accept letters and digits, optionally spaces.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlphaNumeric {
    pub allow_spaces: bool,
}

impl TextValidator for AlphaNumeric {
    fn validate(&self, candidate: &mut String, _previous: &str) -> bool {
        candidate
            .chars()
            .all(|c| c.is_alphanumeric() || (self.allow_spaces && c == ' '))
    }
}

/// Lowercase the candidate. Never rejects.
#[derive(Clone, Copy, Debug, Default)]
pub struct Lowercase;

impl TextValidator for Lowercase {
    fn validate(&self, candidate: &mut String, _previous: &str) -> bool {
        if candidate.chars().any(char::is_uppercase) {
            *candidate = candidate.to_lowercase();
        }
        true
    }
}

/// Rewrite the candidate to Unicode NFC. Never rejects.
#[derive(Clone, Copy, Debug, Default)]
pub struct NfcNormalize;

impl TextValidator for NfcNormalize {
    fn validate(&self, candidate: &mut String, _previous: &str) -> bool {
        if !unicode_normalization::is_nfc(candidate) {
            *candidate = candidate.nfc().collect();
        }
        true
    }
}
