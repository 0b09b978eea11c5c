//! CPF (Brazilian individual tax identifier) validation.
//!
//! A CPF is eleven digits; the final two are checksums over the preceding
//! digits with descending weights. [`is_valid_tax_id`] is total over all
//! string inputs and never errors: malformed input is simply invalid.
//! [`Cpf`] additionally strips display-mask characters before validating,
//! so `"529.982.247-25"` and `"52998224725"` construct the same value.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::mask::digits_only;

const CPF_LENGTH: usize = 11;

/// Return `true` when `candidate` is a structurally valid CPF.
///
/// The input must be exactly eleven ASCII digits, must not be a single
/// repeated digit (those satisfy the checksum but are invalid by
/// convention), and both check digits must match their weighted sums.
/// A computed check value of ten can never match a single digit, so such
/// inputs are rejected, matching the registry's defined behaviour.
///
/// # Examples
/// ```
/// use storefront::domain::is_valid_tax_id;
///
/// assert!(is_valid_tax_id("52998224725"));
/// assert!(!is_valid_tax_id("11111111111"));
/// assert!(!is_valid_tax_id("529.982.247-25")); // masks are not stripped here
/// ```
#[must_use]
pub fn is_valid_tax_id(candidate: &str) -> bool {
    let Some(digits) = decimal_digits(candidate) else {
        return false;
    };
    validate_digits(&digits).is_ok()
}

/// Validated CPF, stored as its eleven bare digits.
///
/// ## Invariants
/// - Always eleven digits satisfying both checksums.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf(String);

/// Validation errors returned by [`Cpf::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CpfError {
    /// After mask stripping the input did not contain eleven digits.
    #[error("CPF must contain {CPF_LENGTH} digits, found {found}")]
    WrongLength {
        /// Number of digits found in the input.
        found: usize,
    },
    /// The input was one digit repeated eleven times.
    #[error("CPF must not be a single repeated digit")]
    RepeatedDigits,
    /// One of the two check digits did not match its weighted sum.
    #[error("CPF check digits do not match")]
    ChecksumMismatch,
}

impl Cpf {
    /// Strip mask characters (dots, hyphen, anything non-digit) and
    /// validate the remaining digits.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, CpfError> {
        let bare = digits_only(input.as_ref());
        let digits = decimal_digits(&bare).ok_or(CpfError::WrongLength { found: bare.len() })?;
        validate_digits(&digits)?;
        Ok(Self(bare))
    }

    /// The bare eleven-digit representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Cpf {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<Cpf> for String {
    fn from(value: Cpf) -> Self {
        value.0
    }
}

impl TryFrom<String> for Cpf {
    type Error = CpfError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

/// Decode exactly eleven ASCII digits, or `None`.
fn decimal_digits(candidate: &str) -> Option<[u8; CPF_LENGTH]> {
    let mut digits = [0u8; CPF_LENGTH];
    let mut count = 0usize;
    for (slot, ch) in digits.iter_mut().zip(candidate.chars()) {
        let digit = ch.to_digit(10)?;
        // to_digit(10) yields 0..=9, which always fits a u8.
        *slot = u8::try_from(digit).ok()?;
        count += 1;
    }
    (count == CPF_LENGTH && candidate.chars().count() == CPF_LENGTH).then_some(digits)
}

fn validate_digits(digits: &[u8; CPF_LENGTH]) -> Result<(), CpfError> {
    if digits.iter().all(|digit| Some(digit) == digits.first()) {
        return Err(CpfError::RepeatedDigits);
    }

    if check_digit(digits, 10) != digit_at(digits, 9)
        || check_digit(digits, 11) != digit_at(digits, 10)
    {
        return Err(CpfError::ChecksumMismatch);
    }
    Ok(())
}

/// Weighted checksum over the leading digits, weights descending from
/// `top_weight` to 2. Returns a value in 0..=10; ten never matches a
/// digit, which is the rejection the registry specifies.
fn check_digit(digits: &[u8; CPF_LENGTH], top_weight: u32) -> u32 {
    let sum: u32 = digits
        .iter()
        .zip((2..=top_weight).rev())
        .map(|(digit, weight)| u32::from(*digit) * weight)
        .sum();
    #[expect(
        clippy::integer_division_remainder_used,
        reason = "the CPF checksum is modular arithmetic by definition"
    )]
    let check = (sum * 10) % 11;
    check
}

fn digit_at(digits: &[u8; CPF_LENGTH], position: usize) -> u32 {
    digits.get(position).copied().map_or(u32::MAX, u32::from)
}
