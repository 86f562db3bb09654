//! Conversion between Persian / Arabic-Indic numerals and ASCII digits.

/// Distance from PERSIAN DIGIT ZERO (U+06F0) to ASCII '0'.
const PERSIAN_OFFSET: u32 = 1728;
/// Distance from ARABIC-INDIC DIGIT ZERO (U+0660) to ASCII '0'.
const ARABIC_INDIC_OFFSET: u32 = 1632;

/// Replace every Persian (۰–۹) and Arabic-Indic (٠–٩) digit with its ASCII
/// equivalent. Any other character passes through unchanged.
///
/// Example: `"۱۴۰۲/۰۱/۱۰"` → `"1402/01/10"`
pub fn to_ascii_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '\u{06F0}'..='\u{06F9}' => shift(c, PERSIAN_OFFSET),
            '\u{0660}'..='\u{0669}' => shift(c, ARABIC_INDIC_OFFSET),
            other => other,
        })
        .collect()
}

/// Inverse of [`to_ascii_digits`] for display: ASCII digits become Persian digits.
pub fn to_persian_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '0'..='9' => char::from_u32(c as u32 + PERSIAN_OFFSET).unwrap_or(c),
            other => other,
        })
        .collect()
}

fn shift(c: char, offset: u32) -> char {
    // both ranges map into '0'..='9', so from_u32 cannot fail
    char::from_u32(c as u32 - offset).unwrap_or(c)
}
