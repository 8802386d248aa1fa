//! Expiry date normalization.
//!
//! Users type dates with or without separators (`25122030`, `25-12-2030`,
//! `25/12/2030`). [`normalize`] turns every input carrying exactly eight
//! digits into the canonical `DD/MM/YYYY` form and leaves anything else
//! untouched.
//!
//! The result is a well-formed digit pattern, not a valid calendar date:
//! `00005555` becomes `00/00/5555`. Calendar checks happen in
//! [`crate::expiry`].

/// Number of digits in a `DDMMYYYY` date.
const DATE_DIGITS: usize = 8;

/// Canonicalize raw date text into `DD/MM/YYYY`.
///
/// Every character that is not an ASCII digit is stripped. When exactly
/// eight digits remain they are read positionally as `DDMMYYYY`; otherwise
/// `raw` is returned verbatim.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != DATE_DIGITS {
        return raw.to_string();
    }
    format!("{}/{}/{}", &digits[0..2], &digits[2..4], &digits[4..8])
}
