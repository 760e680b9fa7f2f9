//! Country code to flag emoji.

/// Offset from an uppercase ASCII letter to its regional indicator symbol.
const REGIONAL_INDICATOR_OFFSET: u32 = 127_397;

/// Convert a two-letter ISO country code (any case) into a flag glyph.
///
/// Returns `None` unless the input is exactly two ASCII letters.
pub fn country_flag(country_code: &str) -> Option<String> {
    let code = country_code.as_bytes();
    if code.len() != 2 || !code.iter().all(u8::is_ascii_alphabetic) {
        return None;
    }

    code.iter()
        .map(|b| char::from_u32(u32::from(b.to_ascii_uppercase()) + REGIONAL_INDICATOR_OFFSET))
        .collect()
}
