//! The optional well-formedness checker.
//!
//! The C source's `Checker` is a vtable of six function pointers, default
//! `NULL` (no checking). This becomes an explicit trait with the same
//! default-accept behavior baked into each method, so the tokenizer can
//! hold an `Option<Box<dyn WellFormednessChecker<U>>>` and call through
//! unconditionally when one is registered.

use crate::code_unit::CodeUnit;

/// Mirrors `wf_starttag`/`wf_endtag`/`wf_ok` from the source: a name is
/// well-formed if it starts with a letter, `_`, or `:` and continues with
/// name characters.
pub fn is_wellformed_name<U: CodeUnit>(name: &[U]) -> bool {
    let mut iter = name.iter().copied();
    match iter.next() {
        Some(first) if first.is_letter() || first.as_ascii() == Some(b'_') || first.as_ascii() == Some(b':') => {}
        _ => return false,
    }
    iter.all(|u| u.is_sgml_namechar() || u.as_ascii() == Some(b':'))
}

/// Pluggable name-syntax / structural checks invoked at token-emit time.
///
/// Every hook defaults to "accept"; only `check_start_tag`/`check_end_tag`
/// have a non-trivial default, matching the source's `wf_checker` table
/// where every slot but those two points at the same always-true `wf_ok`.
#[allow(unused_variables)]
pub trait WellFormednessChecker<U> {
    fn check_start_tag(&mut self, name: &[U]) -> bool {
        true
    }

    fn check_end_tag(&mut self, name: &[U]) -> bool {
        true
    }

    fn check_attribute(&mut self, name: &[U]) -> bool {
        true
    }

    fn check_entity_ref(&mut self, name: &[U]) -> bool {
        true
    }

    fn check_char_ref(&mut self, body: &[U]) -> bool {
        true
    }

    fn check_comment(&mut self, text: &[U]) -> bool {
        true
    }
}

/// The default checker: validates start/end tag name
/// syntax, accepts everything else.
#[derive(Default)]
pub struct NameSyntaxChecker;

impl<U: CodeUnit> WellFormednessChecker<U> for NameSyntaxChecker {
    fn check_start_tag(&mut self, name: &[U]) -> bool {
        is_wellformed_name(name)
    }

    fn check_end_tag(&mut self, name: &[U]) -> bool {
        is_wellformed_name(name)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn wellformed_names() {
        assert!(is_wellformed_name(b"div"));
        assert!(is_wellformed_name(b"_priv"));
        assert!(is_wellformed_name(b":ns"));
        assert!(is_wellformed_name(b"a-b.c"));
        assert!(!is_wellformed_name(b""));
        assert!(!is_wellformed_name(b"1tag"));
        assert!(!is_wellformed_name(b"-tag"));
    }
}
