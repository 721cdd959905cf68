//! The element type the scanner advances over, plus the handful of
//! character-class predicates the grammar in [`crate::tokenizer`] is built on.
//!
//! The C original picks between an 8-bit `unsigned char` and a wide
//! `Py_UNICODE` via `#ifdef SGMLOP_UNICODE_SUPPORT` and duplicates every
//! predicate macro for both. Here the grammar is written once, generic over
//! [`CodeUnit`], with narrow (`u8`) and wide (`char`) implementations
//! supplying the class tables.

/// A single element of the input stream.
///
/// Implemented for `u8` (narrow mode: one byte per code unit, ASCII-only
/// class tables) and `char` (wide mode: one Unicode scalar value per code
/// unit, delegating to `char`'s own Unicode-aware predicates).
pub trait CodeUnit: Copy + Eq + std::fmt::Debug + 'static {
    const LT: Self;
    const GT: Self;
    const SLASH: Self;
    const BANG: Self;
    const QUESTION: Self;
    const DASH: Self;
    const EQUALS: Self;
    const AMP: Self;
    const HASH: Self;
    const SEMI: Self;
    const PERCENT: Self;
    const LBRACKET: Self;
    const RBRACKET: Self;
    const DQUOTE: Self;
    const SQUOTE: Self;
    const LOWER_X: Self;
    const LOWER_D: Self;

    fn is_space(self) -> bool;
    fn is_letter(self) -> bool;
    fn is_digit(self) -> bool;
    fn is_hex_digit(self) -> bool;
    fn is_alnum(self) -> bool {
        self.is_letter() || self.is_digit()
    }
    /// SGML name character: alnum plus `. - _ :`.
    fn is_sgml_namechar(self) -> bool;
    /// SGML tag-name character: namechar plus `?` (matches the source's
    /// permissive tag-name scan, which folds case in the same pass).
    fn is_sgml_tagnamechar(self) -> bool;
    fn to_ascii_lower(self) -> Self;

    /// The code point this code unit represents, for comparing against an
    /// ASCII literal (`b'a'`, etc). Returns `None` for non-ASCII wide units.
    fn as_ascii(self) -> Option<u8>;

    /// Decimal digit value, if this code unit is `0..=9`.
    fn decimal_value(self) -> Option<u32>;
    /// Hexadecimal digit value, if this code unit is `0..=9 | a..=f | A..=F`.
    fn hex_value(self) -> Option<u32>;

    /// Builds a code unit from a resolved character reference code point.
    /// Returns `None` if the code point does not fit in this code-unit width.
    fn from_code_point(code_point: u32) -> Option<Self>;

    /// Finds the first occurrence of an ASCII literal (e.g. `b"-->"`) in
    /// `haystack`, starting the search at `from`. The narrow (`u8`)
    /// implementation delegates to `memchr::memmem`, the same dependency
    /// `wp-html-api`'s own dependency graph pulls in for scanning; the wide
    /// (`char`) implementation scans by hand since memchr only operates on
    /// bytes.
    fn find_ascii_sequence(haystack: &[Self], needle: &'static [u8], from: usize) -> Option<usize>;
}

impl CodeUnit for u8 {
    const LT: Self = b'<';
    const GT: Self = b'>';
    const SLASH: Self = b'/';
    const BANG: Self = b'!';
    const QUESTION: Self = b'?';
    const DASH: Self = b'-';
    const EQUALS: Self = b'=';
    const AMP: Self = b'&';
    const HASH: Self = b'#';
    const SEMI: Self = b';';
    const PERCENT: Self = b'%';
    const LBRACKET: Self = b'[';
    const RBRACKET: Self = b']';
    const DQUOTE: Self = b'"';
    const SQUOTE: Self = b'\'';
    const LOWER_X: Self = b'x';
    const LOWER_D: Self = b'D';

    fn is_space(self) -> bool {
        matches!(self, b' ' | b'\t' | b'\r' | b'\n' | 0x0c)
    }

    fn is_letter(self) -> bool {
        self.is_ascii_alphabetic() || self >= 0x80
    }

    fn is_digit(self) -> bool {
        self.is_ascii_digit()
    }

    fn is_hex_digit(self) -> bool {
        self.is_ascii_hexdigit()
    }

    fn is_sgml_namechar(self) -> bool {
        self.is_alnum() || matches!(self, b'.' | b'-' | b'_' | b':')
    }

    fn is_sgml_tagnamechar(self) -> bool {
        self.is_alnum() || matches!(self, b'.' | b'-' | b':' | b'?')
    }

    fn to_ascii_lower(self) -> Self {
        self.to_ascii_lowercase()
    }

    fn as_ascii(self) -> Option<u8> {
        self.is_ascii().then_some(self)
    }

    fn decimal_value(self) -> Option<u32> {
        self.is_ascii_digit().then(|| (self - b'0') as u32)
    }

    fn hex_value(self) -> Option<u32> {
        (self as char).to_digit(16)
    }

    fn from_code_point(code_point: u32) -> Option<Self> {
        u8::try_from(code_point).ok()
    }

    fn find_ascii_sequence(haystack: &[u8], needle: &'static [u8], from: usize) -> Option<usize> {
        memchr::memmem::find(&haystack[from..], needle).map(|i| i + from)
    }
}

impl CodeUnit for char {
    const LT: Self = '<';
    const GT: Self = '>';
    const SLASH: Self = '/';
    const BANG: Self = '!';
    const QUESTION: Self = '?';
    const DASH: Self = '-';
    const EQUALS: Self = '=';
    const AMP: Self = '&';
    const HASH: Self = '#';
    const SEMI: Self = ';';
    const PERCENT: Self = '%';
    const LBRACKET: Self = '[';
    const RBRACKET: Self = ']';
    const DQUOTE: Self = '"';
    const SQUOTE: Self = '\'';
    const LOWER_X: Self = 'x';
    const LOWER_D: Self = 'D';

    fn is_space(self) -> bool {
        self.is_whitespace()
    }

    fn is_letter(self) -> bool {
        self.is_alphabetic()
    }

    fn is_digit(self) -> bool {
        self.is_ascii_digit()
    }

    fn is_hex_digit(self) -> bool {
        self.is_ascii_hexdigit()
    }

    fn is_sgml_namechar(self) -> bool {
        self.is_alphanumeric() || matches!(self, '.' | '-' | '_' | ':')
    }

    fn is_sgml_tagnamechar(self) -> bool {
        self.is_alphanumeric() || matches!(self, '.' | '-' | ':' | '?')
    }

    fn to_ascii_lower(self) -> Self {
        self.to_ascii_lowercase()
    }

    fn as_ascii(self) -> Option<u8> {
        self.is_ascii().then_some(self as u8)
    }

    fn decimal_value(self) -> Option<u32> {
        self.to_digit(10)
    }

    fn hex_value(self) -> Option<u32> {
        self.to_digit(16)
    }

    fn from_code_point(code_point: u32) -> Option<Self> {
        char::from_u32(code_point)
    }

    fn find_ascii_sequence(haystack: &[char], needle: &'static [u8], from: usize) -> Option<usize> {
        if needle.is_empty() || haystack.len() < needle.len() {
            return None;
        }
        'outer: for i in from..=haystack.len() - needle.len() {
            for (j, &b) in needle.iter().enumerate() {
                if haystack[i + j].as_ascii() != Some(b) {
                    continue 'outer;
                }
            }
            return Some(i);
        }
        None
    }
}

/// Compares a code-unit slice against an ASCII literal, case-sensitively.
pub(crate) fn matches_ascii<U: CodeUnit>(units: &[U], literal: &[u8]) -> bool {
    units.len() == literal.len()
        && units
            .iter()
            .zip(literal)
            .all(|(&u, &b)| u.as_ascii() == Some(b))
}
