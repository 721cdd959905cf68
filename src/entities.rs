//! The built-in entity resolver.
//!
//! Recognizes exactly the five XML-predefined named references and decimal
//! or hexadecimal numeric references. Anything else is reported as unknown.
//! This is a direct port of `entity()` in the original source: same five
//! names, same "stop at the first non-digit" numeric decoding quirk.

use crate::code_unit::{matches_ascii, CodeUnit};

/// Resolves the body of a named entity reference (the text between `&` and
/// `;`, exclusive) to a single code point.
///
/// Returns `None` if the name is not one of the five built-ins.
pub fn resolve_named<U: CodeUnit>(name: &[U]) -> Option<u32> {
    if matches_ascii(name, b"amp") {
        Some('&' as u32)
    } else if matches_ascii(name, b"apos") {
        Some('\'' as u32)
    } else if matches_ascii(name, b"gt") {
        Some('>' as u32)
    } else if matches_ascii(name, b"lt") {
        Some('<' as u32)
    } else if matches_ascii(name, b"quot") {
        Some('"' as u32)
    } else {
        None
    }
}

/// Resolves the body of a numeric character reference (the text between
/// `&#` and `;`, exclusive) to a code point.
///
/// Decoding stops at the first character that isn't a digit of the
/// applicable base; a malformed suffix is silently ignored rather than
/// rejected, matching the source's behavior.
///
/// Returns `0` for an empty body, matching the C source's unconditional
/// `ch = 0` seed with no further iterations.
pub fn resolve_numeric<U: CodeUnit>(body: &[U]) -> u32 {
    let mut chars = body.iter().copied();
    let first = match chars.clone().next() {
        Some(c) => c,
        None => return 0,
    };

    if first == U::LOWER_X {
        let mut value: u32 = 0;
        for unit in body.iter().skip(1).copied() {
            match unit.hex_value() {
                Some(digit) => value = value.wrapping_mul(16).wrapping_add(digit),
                None => break,
            }
        }
        value
    } else {
        let mut value: u32 = 0;
        for unit in body.iter().copied() {
            match unit.decimal_value() {
                Some(digit) => value = value.wrapping_mul(10).wrapping_add(digit),
                None => break,
            }
        }
        value
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn named_entities() {
        assert_eq!(resolve_named::<u8>(b"amp"), Some('&' as u32));
        assert_eq!(resolve_named::<u8>(b"apos"), Some('\'' as u32));
        assert_eq!(resolve_named::<u8>(b"gt"), Some('>' as u32));
        assert_eq!(resolve_named::<u8>(b"lt"), Some('<' as u32));
        assert_eq!(resolve_named::<u8>(b"quot"), Some('"' as u32));
        assert_eq!(resolve_named::<u8>(b"nbsp"), None);
        assert_eq!(resolve_named::<u8>(b""), None);
    }

    #[test]
    fn numeric_decimal() {
        assert_eq!(resolve_numeric::<u8>(b"65"), 65);
        assert_eq!(resolve_numeric::<u8>(b"0"), 0);
        assert_eq!(resolve_numeric::<u8>(b""), 0);
    }

    #[test]
    fn numeric_hex() {
        assert_eq!(resolve_numeric::<u8>(b"x41"), 0x41);
        // Only a lowercase leading `x` triggers hex parsing; `X` isn't a
        // decimal digit either, so decoding stops immediately at 0.
        assert_eq!(resolve_numeric::<u8>(b"X41"), 0);
    }

    #[test]
    fn numeric_malformed_suffix_is_ignored() {
        // "12a3" decodes as 12, stopping at the first non-digit.
        assert_eq!(resolve_numeric::<u8>(b"12a3"), 12);
        assert_eq!(resolve_numeric::<u8>(b"x1g2"), 0x1);
    }
}
