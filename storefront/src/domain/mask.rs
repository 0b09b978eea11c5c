//! Shared input-mask stripping for identifier-like fields.
//!
//! User-facing forms submit CPFs and postal codes with display masks
//! ("529.982.247-25", "88037-310"); validation operates on digits only.

/// Return only the ASCII digits of `value`, in order.
pub(crate) fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::digits_only;
    use rstest::rstest;

    #[rstest]
    #[case::masked_cpf("529.982.247-25", "52998224725")]
    #[case::masked_zip("88037-310", "88037310")]
    #[case::already_bare("88037310", "88037310")]
    #[case::empty("", "")]
    #[case::no_digits("abc-.", "")]
    fn keeps_digits_in_order(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(digits_only(input), expected);
    }
}
