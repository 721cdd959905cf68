//! The attribute sub-scanner — `attrparse()` from the
//! C source. Runs over an already-fully-buffered tag header (the caller
//! found the header's closing `>` before invoking this), so unlike the main
//! scanner it never suspends.

use crate::checker::WellFormednessChecker;
use crate::code_unit::CodeUnit;
use crate::error::{SyntaxError, TokenizerError};
use crate::sink::EventSink;
use crate::tokenizer::{emit_attribute_char_ref, emit_entity_ref};

/// Scans `buf[begin..end]`, the attribute region of a start tag (after the
/// tag name, before the tag's closing `>` or `/`), emitting
/// `enter_attribute`/`leave_attribute` pairs and any `data` spans for
/// quoted, unquoted, or (in SGML mode) minimized attribute values.
///
/// Quoted and unquoted values are scanned for inline `&...;` references the
/// same way the main scanner recognizes them at the top level: a leading
/// `#` makes the body a character reference, otherwise it's a named entity
/// reference, both resolved through
/// [`emit_entity_ref`]/[`emit_attribute_char_ref`].
pub(crate) fn scan_attributes<U: CodeUnit>(
    buf: &[U],
    begin: usize,
    end: usize,
    xml: bool,
    strict: bool,
    sink: &mut dyn EventSink<U>,
    mut checker: Option<&mut dyn WellFormednessChecker<U>>,
) -> Result<(), TokenizerError> {
    let mut p = begin;

    while p < end {
        while p < end && buf[p].is_space() {
            p += 1;
        }
        if p >= end {
            break;
        }

        let name_start = p;
        while p < end && buf[p] != U::EQUALS && !buf[p].is_space() {
            p += 1;
        }
        let name = &buf[name_start..p];
        if name.is_empty() {
            break;
        }

        if let Some(c) = checker.as_deref_mut() {
            if !c.check_attribute(name) {
                return Err(SyntaxError::CheckerRejected.into());
            }
        }
        sink.enter_attribute(name).map_err(TokenizerError::Sink)?;

        while p < end && buf[p].is_space() {
            p += 1;
        }

        if p < end && buf[p] == U::EQUALS {
            p += 1;
            while p < end && buf[p].is_space() {
                p += 1;
            }

            if p < end {
                let quote = if buf[p] == U::DQUOTE || buf[p] == U::SQUOTE {
                    let opener = buf[p];
                    p += 1;
                    Some(opener)
                } else {
                    None
                };

                let mut literal_start = p;
                let mut in_reference = false;

                while p < end
                    && buf[p] != U::GT
                    && match quote {
                        Some(q) => buf[p] != q,
                        None => !buf[p].is_space(),
                    }
                {
                    if !in_reference && buf[p] == U::AMP {
                        if literal_start < p {
                            sink.data(&buf[literal_start..p]).map_err(TokenizerError::Sink)?;
                        }
                        in_reference = true;
                        p += 1;
                        literal_start = p;
                    } else if in_reference && buf[p] == U::SEMI {
                        emit_reference(&buf[literal_start..p], strict, sink, checker.as_deref_mut())?;
                        in_reference = false;
                        p += 1;
                        literal_start = p;
                    } else {
                        p += 1;
                    }
                }

                if in_reference {
                    emit_reference(&buf[literal_start..p], strict, sink, checker.as_deref_mut())?;
                } else if literal_start < p {
                    sink.data(&buf[literal_start..p]).map_err(TokenizerError::Sink)?;
                }

                if quote.is_some() && p < end {
                    p += 1;
                }
            }
        } else if !xml {
            // A minimized HTML attribute (`<input disabled>`): the bare
            // name also stands in for the value.
            sink.data(name).map_err(TokenizerError::Sink)?;
        }

        sink.leave_attribute(name).map_err(TokenizerError::Sink)?;
    }

    Ok(())
}

/// Dispatches an inline attribute-value reference body (the span between
/// `&` and `;`) to the numeric or named resolver depending on a leading `#`.
/// A numeric body is always built-in-resolved, matching `attrparse`'s use of
/// a single `handle_entityref` helper for every attribute-embedded
/// reference — unlike the top level, the sink's character-reference
/// capability is never consulted here.
fn emit_reference<U: CodeUnit>(
    body: &[U],
    strict: bool,
    sink: &mut dyn EventSink<U>,
    checker: Option<&mut dyn WellFormednessChecker<U>>,
) -> Result<(), TokenizerError> {
    if body.first().copied() == Some(U::HASH) {
        emit_attribute_char_ref(&body[1..], strict, sink, checker)
    } else {
        emit_entity_ref(body, strict, sink, checker)
    }
}
