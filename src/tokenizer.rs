//! The streaming tokenizer — this is `fastfeed()` from
//! the C source, rewritten around index cursors into an owned buffer
//! instead of raw pointers and `goto eol`. Every `goto eol;` in the source
//! becomes a `break 'pass q;` here: both mean "this token isn't fully
//! buffered yet, rewind to its start and wait for more input."
//!
//! `<!--`/`<![CDATA[` bodies are found with [`CodeUnit::find_ascii_sequence`]
//! rather than the source's hand-rolled three-character skip loop; same
//! result, one call to a dependency this crate already pulls in for literal
//! search.

use crate::attributes::scan_attributes;
use crate::buffer::IncrementalBuffer;
use crate::checker::WellFormednessChecker;
use crate::code_unit::CodeUnit;
use crate::entities::{resolve_named, resolve_numeric};
use crate::error::{SyntaxError, TokenizerError};
use crate::sink::{EventSink, NullSink};

/// Which grammar a [`Tokenizer`] enforces. Fixed at construction: there
/// is no `set_grammar`, matching the source's two separate parser classes
/// rather than a mutable mode flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Grammar {
    #[default]
    Sgml,
    Xml,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ShorttagState {
    #[default]
    Idle,
    /// A `<tag/` header was seen; the next bare `/` in running data closes it.
    Armed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DoctypeState {
    #[default]
    Idle,
    /// A `<!DOCTYPE` header is open; a `[` before its `>` commits it.
    Tentative,
    /// The internal subset is open; `%name;` and `]` are recognized.
    Committed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    TagStart,
    TagEnd,
    TagEmpty,
    Directive,
    Doctype,
    Pi,
}

/// An incremental, push-driven tokenizer for SGML-family markup.
///
/// Construct with [`Tokenizer::sgml`] or [`Tokenizer::xml`], register a
/// [`EventSink`] with [`Tokenizer::register`], and drive it with
/// [`Tokenizer::feed`]/[`Tokenizer::close`] (or [`Tokenizer::parse`] for the
/// whole-input case).
pub struct Tokenizer<U: CodeUnit = u8> {
    grammar: Grammar,
    strict: bool,
    feeding: bool,
    closed: bool,
    shorttag_state: ShorttagState,
    doctype_state: DoctypeState,
    pass_counter: u64,
    buffer: IncrementalBuffer<U>,
    sink: Box<dyn EventSink<U>>,
    checker: Option<Box<dyn WellFormednessChecker<U>>>,
}

impl<U: CodeUnit> Tokenizer<U> {
    /// A tokenizer for lenient SGML/HTML: shorttags, minimized attributes,
    /// case-folded tag names, no DOCTYPE internal-subset recognition.
    pub fn sgml() -> Self {
        Self::new(Grammar::Sgml)
    }

    /// A tokenizer for strict XML: no shorttags or minimized attributes,
    /// tag-name case preserved, `<!DOCTYPE` and CDATA sections recognized.
    pub fn xml() -> Self {
        Self::new(Grammar::Xml)
    }

    fn new(grammar: Grammar) -> Self {
        Tokenizer {
            grammar,
            strict: false,
            feeding: false,
            closed: false,
            shorttag_state: ShorttagState::default(),
            doctype_state: DoctypeState::default(),
            pass_counter: 0,
            buffer: IncrementalBuffer::default(),
            sink: Box::new(NullSink),
            checker: None,
        }
    }

    /// Which grammar this tokenizer enforces.
    pub fn grammar(&self) -> Grammar {
        self.grammar
    }

    /// In strict mode, an unresolvable entity or character reference is a
    /// [`TokenizerError::Syntax`] rather than being silently dropped. Off by
    /// default, matching the source's default-lenient resolver.
    pub fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Replaces the registered sink. The tokenizer starts out wired to a
    /// [`NullSink`] that drops every event.
    pub fn register(&mut self, sink: impl EventSink<U> + 'static) {
        self.sink = Box::new(sink);
    }

    /// Registers a well-formedness checker. None is registered by default
    /// (every token is accepted).
    pub fn set_checker(&mut self, checker: impl WellFormednessChecker<U> + 'static) {
        self.checker = Some(Box::new(checker));
    }

    pub fn clear_checker(&mut self) {
        self.checker = None;
    }

    /// Number of `feed` calls made so far (including the implicit one inside
    /// `close`). Exposed for callers who want to distinguish a tokenizer
    /// that's never seen data from one that's seen only empty chunks.
    pub fn pass_count(&self) -> u64 {
        self.pass_counter
    }

    /// Appends `chunk` and scans as far as the available input allows.
    /// Returns the number of code units still buffered (unconsumed) after
    /// the pass. A token split across chunk boundaries is simply held back
    /// until a later `feed` completes it.
    pub fn feed(&mut self, chunk: &[U]) -> Result<usize, TokenizerError> {
        if self.closed {
            return Err(TokenizerError::Closed);
        }
        if self.feeding {
            return Err(TokenizerError::Reentrant);
        }

        self.buffer.append(chunk);
        self.feeding = true;
        self.pass_counter += 1;

        let outcome = scan_pass(
            self.buffer.span_mut(),
            self.grammar == Grammar::Xml,
            self.strict,
            &mut self.shorttag_state,
            &mut self.doctype_state,
            self.sink.as_mut(),
            self.checker.as_deref_mut(),
        );

        self.feeding = false;
        let consumed = outcome?;
        self.buffer.consume(consumed);
        Ok(self.buffer.len())
    }

    /// Signals end of input. Any unterminated token held in the buffer (an
    /// open comment, an unclosed tag) is discarded without an error — the
    /// source treats a truncated trailing construct as simply absent, not
    /// malformed.
    pub fn close(&mut self) -> Result<(), TokenizerError> {
        if self.closed {
            return Err(TokenizerError::Closed);
        }
        self.feed(&[])?;
        self.buffer.release();
        self.closed = true;
        Ok(())
    }

    /// `feed` followed by `close`, for callers with the whole input in hand.
    pub fn parse(&mut self, chunk: &[U]) -> Result<(), TokenizerError> {
        self.feed(chunk)?;
        self.close()
    }
}

impl<U: CodeUnit> Default for Tokenizer<U> {
    fn default() -> Self {
        Self::sgml()
    }
}

/// Scans as much of `buf` as resolves into complete tokens, dispatching each
/// to `sink`/`checker` as it's recognized. Returns the number of code units
/// that were fully consumed; the caller drops exactly that prefix from its
/// buffer.
fn scan_pass<U: CodeUnit>(
    buf: &mut [U],
    xml: bool,
    strict: bool,
    shorttag_state: &mut ShorttagState,
    doctype_state: &mut DoctypeState,
    sink: &mut dyn EventSink<U>,
    mut checker: Option<&mut dyn WellFormednessChecker<U>>,
) -> Result<usize, TokenizerError> {
    let end = buf.len();
    let mut s: usize = 0;
    let mut p: usize = 0;

    macro_rules! flush {
        ($q:expr) => {
            if $q > s {
                sink.data(&buf[s..$q]).map_err(TokenizerError::Sink)?;
            }
        };
    }

    let committed = 'pass: loop {
        if p >= end {
            break 'pass p;
        }
        let q = p;

        if buf[q] == U::LT {
            let mut token = Token::TagStart;
            p += 1;
            if p >= end {
                break 'pass q;
            }

            if buf[p] == U::BANG {
                p += 1;
                if p >= end {
                    break 'pass q;
                }
                token = Token::Directive;

                if buf[p] == U::DASH {
                    let body_start = p + 2;
                    if body_start > end {
                        break 'pass q;
                    }
                    let term = match U::find_ascii_sequence(buf, b"-->", p) {
                        Some(idx) => idx,
                        None => break 'pass q,
                    };
                    // A terminator can match before `body_start` on a
                    // malformed `<!-->`-style input; clamp instead of
                    // slicing with start past end.
                    let body_end = term.max(body_start);
                    let comment_body = &buf[body_start..body_end];
                    if let Some(c) = checker.as_deref_mut() {
                        if !c.check_comment(comment_body) {
                            return Err(SyntaxError::CheckerRejected.into());
                        }
                    }
                    flush!(q);
                    sink.comment(comment_body).map_err(TokenizerError::Sink)?;
                    p = term + 3;
                    s = p;
                    continue 'pass;
                } else if xml && buf[p] == U::LBRACKET {
                    let body_start = p + 7;
                    if body_start > end {
                        break 'pass q;
                    }
                    let term = match U::find_ascii_sequence(buf, b"]]>", p) {
                        Some(idx) => idx,
                        None => break 'pass q,
                    };
                    // Same malformed-input guard as the comment branch above
                    // (e.g. `<![]]>`, where `]]>` matches before `body_start`).
                    let body_end = term.max(body_start);
                    flush!(q);
                    sink.cdata(&buf[body_start..body_end])
                        .map_err(TokenizerError::Sink)?;
                    p = term + 3;
                    s = p;
                    continue 'pass;
                } else if xml && buf[p] == U::LOWER_D {
                    token = Token::Doctype;
                    *doctype_state = DoctypeState::Tentative;
                }
                // Otherwise a bogus `<!...>` directive; falls through below
                // with `token == Directive`.
            } else if buf[p] == U::QUESTION {
                token = Token::Pi;
                p += 1;
                if p >= end {
                    break 'pass q;
                }
            } else if buf[p] == U::SLASH {
                token = Token::TagEnd;
                p += 1;
                if p >= end {
                    break 'pass q;
                }
            } else if buf[p].is_space() {
                // `<` followed by whitespace is not a tag; fold it into data.
                continue 'pass;
            }

            let name_start = p;
            if !xml {
                while buf[p].is_sgml_tagnamechar() {
                    buf[p] = buf[p].to_ascii_lower();
                    p += 1;
                    if p >= end {
                        break 'pass q;
                    }
                }
            } else {
                while buf[p] != U::GT && !buf[p].is_space() && buf[p] != U::SLASH && buf[p] != U::QUESTION {
                    p += 1;
                    if p >= end {
                        break 'pass q;
                    }
                }
            }
            let name_end = p;
            let tag_end_name;

            if buf[p] == U::SLASH && !xml {
                token = Token::TagStart;
                tag_end_name = p;
                p += 1;
                if p >= end {
                    break 'pass q;
                }
                if buf[p] == U::GT {
                    token = Token::TagEmpty;
                    p += 1;
                    if p >= end {
                        break 'pass q;
                    }
                } else {
                    *shorttag_state = ShorttagState::Armed;
                }
            } else {
                let mut quote: Option<U> = None;
                let mut last: Option<U> = None;
                while (buf[p] != U::GT && buf[p] != U::LT) || quote.is_some() {
                    if quote.is_none() && (buf[p] == U::DQUOTE || buf[p] == U::SQUOTE) {
                        quote = Some(buf[p]);
                    } else if let Some(open) = quote {
                        if buf[p] == open {
                            quote = None;
                        }
                    }

                    if buf[p] == U::LBRACKET && quote.is_none() && *doctype_state != DoctypeState::Idle {
                        *doctype_state = DoctypeState::Committed;
                        let dtd_name_end = p;
                        p += 1;
                        flush!(q);
                        sink.special(&buf[name_start..dtd_name_end])
                            .map_err(TokenizerError::Sink)?;
                        s = p;
                        continue 'pass;
                    }

                    last = Some(buf[p]);
                    p += 1;
                    if p >= end {
                        break 'pass q;
                    }
                }

                let stop = p;
                if buf[p] != U::LT {
                    p += 1;
                }

                let mut e = stop;
                if last == Some(U::SLASH) {
                    e -= 1;
                    token = Token::TagEmpty;
                } else if token == Token::Pi && last == Some(U::QUESTION) {
                    e -= 1;
                }
                tag_end_name = e;

                if *doctype_state == DoctypeState::Tentative {
                    *doctype_state = DoctypeState::Idle;
                }
            }

            flush!(q);
            match token {
                Token::TagEnd => {
                    let name = &buf[name_start..name_end];
                    if let Some(c) = checker.as_deref_mut() {
                        if !c.check_end_tag(name) {
                            return Err(SyntaxError::CheckerRejected.into());
                        }
                    }
                    sink.end_tag(name).map_err(TokenizerError::Sink)?;
                }
                Token::Directive | Token::Doctype => {
                    sink.special(&buf[name_start..tag_end_name])
                        .map_err(TokenizerError::Sink)?;
                }
                Token::Pi => {
                    let target = &buf[name_start..name_end];
                    let mut body_start = name_end;
                    while body_start < tag_end_name && buf[body_start].is_space() {
                        body_start += 1;
                    }
                    sink.processing_instruction(target, &buf[body_start..tag_end_name])
                        .map_err(TokenizerError::Sink)?;
                }
                Token::TagStart | Token::TagEmpty => {
                    let name = &buf[name_start..name_end];
                    if let Some(c) = checker.as_deref_mut() {
                        if !c.check_start_tag(name) {
                            return Err(SyntaxError::CheckerRejected.into());
                        }
                    }
                    sink.enter_start_tag(name).map_err(TokenizerError::Sink)?;
                    scan_attributes(buf, name_end, tag_end_name, xml, strict, sink, checker.as_deref_mut())?;
                    sink.leave_start_tag(name).map_err(TokenizerError::Sink)?;
                    if token == Token::TagEmpty {
                        if let Some(c) = checker.as_deref_mut() {
                            if !c.check_end_tag(name) {
                                return Err(SyntaxError::CheckerRejected.into());
                            }
                        }
                        sink.end_tag(name).map_err(TokenizerError::Sink)?;
                    }
                }
            }
            s = p;
        } else if buf[q] == U::SLASH && *shorttag_state == ShorttagState::Armed {
            *shorttag_state = ShorttagState::Idle;
            p = q + 1;
            flush!(q);
            let name: &[U] = &[];
            if let Some(c) = checker.as_deref_mut() {
                if !c.check_end_tag(name) {
                    return Err(SyntaxError::CheckerRejected.into());
                }
            }
            sink.end_tag(name).map_err(TokenizerError::Sink)?;
            s = p;
        } else if buf[q] == U::RBRACKET && *doctype_state == DoctypeState::Committed {
            *doctype_state = DoctypeState::Idle;
            p = q + 1;
            flush!(q);
            sink.special(&buf[q..p]).map_err(TokenizerError::Sink)?;
            s = p;
        } else if buf[q] == U::PERCENT && *doctype_state == DoctypeState::Committed {
            p = q + 1;
            if p >= end {
                break 'pass q;
            }
            let name_start = p;
            while buf[p] != U::SEMI && !buf[p].is_space() {
                p += 1;
                if p >= end {
                    break 'pass q;
                }
            }
            let name_end = p;
            if buf[p] == U::SEMI {
                p += 1;
            }
            flush!(q);
            sink.special(&buf[name_start..name_end])
                .map_err(TokenizerError::Sink)?;
            s = p;
        } else if buf[q] == U::AMP {
            p = q + 1;
            if p >= end {
                break 'pass q;
            }
            let is_char_ref = buf[p] == U::HASH;
            if is_char_ref {
                p += 1;
                if p >= end {
                    break 'pass q;
                }
            } else if buf[p].is_space() {
                // `&` followed by whitespace is literal data.
                continue 'pass;
            }
            let body_start = p;
            while buf[p] != U::SEMI && buf[p] != U::LT && buf[p] != U::GT && !buf[p].is_space() {
                p += 1;
                if p >= end {
                    break 'pass q;
                }
            }
            let body_end = p;
            if buf[p] == U::SEMI {
                p += 1;
            }
            flush!(q);
            if is_char_ref {
                emit_char_ref(&buf[body_start..body_end], strict, sink, checker.as_deref_mut())?;
            } else {
                emit_entity_ref(&buf[body_start..body_end], strict, sink, checker.as_deref_mut())?;
            }
            s = p;
        } else {
            p += 1;
            if p >= end {
                break 'pass p;
            }
            continue 'pass;
        }
    };

    if committed > s {
        sink.data(&buf[s..committed]).map_err(TokenizerError::Sink)?;
    }
    Ok(committed)
}

/// Entity dispatch policy: forward to the sink if it claims the
/// capability, else resolve via the built-in table, else (strict mode only)
/// fail. Shared between the main scanner and the attribute value scanner,
/// since both recognize `&name;` the same way.
pub(crate) fn emit_entity_ref<U: CodeUnit>(
    name: &[U],
    strict: bool,
    sink: &mut dyn EventSink<U>,
    mut checker: Option<&mut dyn WellFormednessChecker<U>>,
) -> Result<(), TokenizerError> {
    if let Some(c) = checker.as_deref_mut() {
        if !c.check_entity_ref(name) {
            return Err(SyntaxError::CheckerRejected.into());
        }
    }
    if sink.handles_entity_reference() {
        return sink.entity_reference(name).map_err(TokenizerError::Sink);
    }
    match resolve_named(name) {
        Some(code_point) => {
            let unit = U::from_code_point(code_point)
                .expect("every built-in named entity fits any code-unit width");
            sink.data(&[unit]).map_err(TokenizerError::Sink)
        }
        None if strict => Err(SyntaxError::UnresolvableEntity.into()),
        None => Ok(()),
    }
}

/// Character-reference counterpart of [`emit_entity_ref`].
pub(crate) fn emit_char_ref<U: CodeUnit>(
    body: &[U],
    strict: bool,
    sink: &mut dyn EventSink<U>,
    mut checker: Option<&mut dyn WellFormednessChecker<U>>,
) -> Result<(), TokenizerError> {
    if let Some(c) = checker.as_deref_mut() {
        if !c.check_char_ref(body) {
            return Err(SyntaxError::CheckerRejected.into());
        }
    }
    if sink.handles_character_reference() {
        return sink.character_reference(body).map_err(TokenizerError::Sink);
    }
    let code_point = resolve_numeric(body);
    match U::from_code_point(code_point) {
        Some(unit) => sink.data(&[unit]).map_err(TokenizerError::Sink),
        None if strict => Err(SyntaxError::CharacterReferenceTooWide.into()),
        None => Ok(()),
    }
}

/// Attribute-value counterpart of [`emit_char_ref`]: a numeric reference
/// inside an attribute value is always resolved through the built-in table,
/// never offered to the sink's `character_reference` capability. The source
/// routes every `&...;` inside an attribute value through a single
/// `handle_entityref` helper that resolves numeric bodies internally and
/// only ever forwards unresolved *named* references to the sink; there is
/// no path from inside an attribute value to a raw character-reference
/// callback.
pub(crate) fn emit_attribute_char_ref<U: CodeUnit>(
    body: &[U],
    strict: bool,
    sink: &mut dyn EventSink<U>,
    mut checker: Option<&mut dyn WellFormednessChecker<U>>,
) -> Result<(), TokenizerError> {
    if let Some(c) = checker.as_deref_mut() {
        if !c.check_char_ref(body) {
            return Err(SyntaxError::CheckerRejected.into());
        }
    }
    let code_point = resolve_numeric(body);
    match U::from_code_point(code_point) {
        Some(unit) => sink.data(&[unit]).map_err(TokenizerError::Sink),
        None if strict => Err(SyntaxError::CharacterReferenceTooWide.into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::sink::SinkResult;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl EventSink<u8> for Recorder {
        fn enter_start_tag(&mut self, name: &[u8]) -> SinkResult {
            self.events
                .push(format!("enter_start_tag({})", String::from_utf8_lossy(name)));
            Ok(())
        }
        fn leave_start_tag(&mut self, name: &[u8]) -> SinkResult {
            self.events
                .push(format!("leave_start_tag({})", String::from_utf8_lossy(name)));
            Ok(())
        }
        fn end_tag(&mut self, name: &[u8]) -> SinkResult {
            self.events
                .push(format!("end_tag({})", String::from_utf8_lossy(name)));
            Ok(())
        }
        fn data(&mut self, text: &[u8]) -> SinkResult {
            self.events
                .push(format!("data({})", String::from_utf8_lossy(text)));
            Ok(())
        }
        fn comment(&mut self, text: &[u8]) -> SinkResult {
            self.events
                .push(format!("comment({})", String::from_utf8_lossy(text)));
            Ok(())
        }
        fn cdata(&mut self, text: &[u8]) -> SinkResult {
            self.events
                .push(format!("cdata({})", String::from_utf8_lossy(text)));
            Ok(())
        }
        fn special(&mut self, body: &[u8]) -> SinkResult {
            self.events
                .push(format!("special({})", String::from_utf8_lossy(body)));
            Ok(())
        }
        fn enter_attribute(&mut self, name: &[u8]) -> SinkResult {
            self.events
                .push(format!("enter_attribute({})", String::from_utf8_lossy(name)));
            Ok(())
        }
        fn leave_attribute(&mut self, name: &[u8]) -> SinkResult {
            self.events
                .push(format!("leave_attribute({})", String::from_utf8_lossy(name)));
            Ok(())
        }
    }

    #[test]
    fn simple_element_whole_input() {
        struct Probe(std::rc::Rc<std::cell::RefCell<Recorder>>);
        impl EventSink<u8> for Probe {
            fn enter_start_tag(&mut self, name: &[u8]) -> SinkResult {
                self.0.borrow_mut().enter_start_tag(name)
            }
            fn leave_start_tag(&mut self, name: &[u8]) -> SinkResult {
                self.0.borrow_mut().leave_start_tag(name)
            }
            fn end_tag(&mut self, name: &[u8]) -> SinkResult {
                self.0.borrow_mut().end_tag(name)
            }
            fn data(&mut self, text: &[u8]) -> SinkResult {
                self.0.borrow_mut().data(text)
            }
        }
        let shared = std::rc::Rc::new(std::cell::RefCell::new(Recorder::default()));
        let mut t = Tokenizer::<u8>::sgml();
        t.register(Probe(shared.clone()));
        t.parse(b"<p>hello</p>").unwrap();
        assert_eq!(
            shared.borrow().events,
            vec![
                "enter_start_tag(p)",
                "leave_start_tag(p)",
                "data(hello)",
                "end_tag(p)",
            ]
        );
    }

    #[test]
    fn chunk_boundary_mid_tag_suspends() {
        let shared = std::rc::Rc::new(std::cell::RefCell::new(Recorder::default()));
        struct Probe(std::rc::Rc<std::cell::RefCell<Recorder>>);
        impl EventSink<u8> for Probe {
            fn enter_start_tag(&mut self, name: &[u8]) -> SinkResult {
                self.0.borrow_mut().enter_start_tag(name)
            }
            fn leave_start_tag(&mut self, name: &[u8]) -> SinkResult {
                self.0.borrow_mut().leave_start_tag(name)
            }
            fn data(&mut self, text: &[u8]) -> SinkResult {
                self.0.borrow_mut().data(text)
            }
        }
        let mut t = Tokenizer::<u8>::sgml();
        t.register(Probe(shared.clone()));
        t.feed(b"<b>he").unwrap();
        assert_eq!(shared.borrow().events, vec!["enter_start_tag(b)", "leave_start_tag(b)", "data(he)"]);
        t.feed(b"llo</b>").unwrap();
        assert_eq!(
            shared.borrow().events,
            vec!["enter_start_tag(b)", "leave_start_tag(b)", "data(he)", "data(llo)"]
        );
    }

    #[test]
    fn unterminated_comment_at_close_drops_silently() {
        let mut t = Tokenizer::<u8>::sgml();
        t.register(Recorder::default());
        t.feed(b"<!-- never closed").unwrap();
        t.close().unwrap();
    }

    #[test]
    fn sgml_shorttag_roundtrip() {
        let shared = std::rc::Rc::new(std::cell::RefCell::new(Recorder::default()));
        struct Probe(std::rc::Rc<std::cell::RefCell<Recorder>>);
        impl EventSink<u8> for Probe {
            fn enter_start_tag(&mut self, name: &[u8]) -> SinkResult {
                self.0.borrow_mut().enter_start_tag(name)
            }
            fn leave_start_tag(&mut self, name: &[u8]) -> SinkResult {
                self.0.borrow_mut().leave_start_tag(name)
            }
            fn end_tag(&mut self, name: &[u8]) -> SinkResult {
                self.0.borrow_mut().end_tag(name)
            }
            fn data(&mut self, text: &[u8]) -> SinkResult {
                self.0.borrow_mut().data(text)
            }
        }
        let mut t = Tokenizer::<u8>::sgml();
        t.register(Probe(shared.clone()));
        t.parse(b"<p/para/").unwrap();
        assert_eq!(
            shared.borrow().events,
            vec!["enter_start_tag(p)", "leave_start_tag(p)", "data(para)", "end_tag()"]
        );
    }

    #[test]
    fn feed_after_close_errors() {
        let mut t = Tokenizer::<u8>::sgml();
        t.register(Recorder::default());
        t.close().unwrap();
        assert!(matches!(t.feed(b"more"), Err(TokenizerError::Closed)));
    }

    #[test]
    fn malformed_comment_terminator_before_body_start_does_not_panic() {
        let mut t = Tokenizer::<u8>::sgml();
        t.register(Recorder::default());
        // `-->` matches right after `<!`, before the nominal comment body
        // would start; must clamp to an empty body instead of panicking.
        t.parse(b"<!-->").unwrap();
    }

    #[test]
    fn malformed_cdata_terminator_before_body_start_does_not_panic() {
        let shared = std::rc::Rc::new(std::cell::RefCell::new(Recorder::default()));
        struct Probe(std::rc::Rc<std::cell::RefCell<Recorder>>);
        impl EventSink<u8> for Probe {
            fn cdata(&mut self, text: &[u8]) -> SinkResult {
                self.0.borrow_mut().cdata(text)
            }
            fn data(&mut self, text: &[u8]) -> SinkResult {
                self.0.borrow_mut().data(text)
            }
        }
        let mut t = Tokenizer::<u8>::xml();
        t.register(Probe(shared.clone()));
        // `]]>` matches right after the `[`, long before the nominal
        // `<![CDATA[` 7-byte body offset; must clamp instead of panicking.
        t.parse(b"<![]]>XYZ").unwrap();
        assert_eq!(shared.borrow().events, vec!["cdata()", "data(XYZ)"]);
    }

    #[test]
    fn checker_can_reject_a_comment() {
        struct RejectAllComments;
        impl WellFormednessChecker<u8> for RejectAllComments {
            fn check_comment(&mut self, _text: &[u8]) -> bool {
                false
            }
        }
        let mut t = Tokenizer::<u8>::sgml();
        t.register(Recorder::default());
        t.set_checker(RejectAllComments);
        assert!(matches!(
            t.parse(b"<!-- hi -->"),
            Err(TokenizerError::Syntax(SyntaxError::CheckerRejected))
        ));
    }
}
