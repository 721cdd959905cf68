//! Crate-level error taxonomy.
//!
//! A plain enum implementing `std::error::Error` and `Display` by hand via a
//! `From<Error> for &str` message table, rather than a derive macro.

/// A sink callback's own error, boxed so the tokenizer doesn't need to be
/// generic over it.
pub type SinkError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug)]
pub enum TokenizerError {
    /// `feed` was called while a scan pass for the same parser was already
    /// on the stack.
    Reentrant,

    /// `feed`, `close`, or `parse` was called after a prior `close`.
    Closed,

    /// The well-formedness checker rejected a name, or strict mode hit an
    /// unresolvable reference.
    Syntax(SyntaxError),

    /// A sink callback returned an error; it is carried through unchanged.
    Sink(SinkError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    /// A registered [`crate::checker::WellFormednessChecker`] hook rejected
    /// a name, attribute, reference, or comment.
    CheckerRejected,
    /// Strict mode: a named entity reference had no built-in resolution and
    /// the sink did not claim `handles_entity_reference`.
    UnresolvableEntity,
    /// Strict mode: a numeric character reference resolved to a code point
    /// that does not fit this tokenizer's code-unit width.
    CharacterReferenceTooWide,
}

impl std::error::Error for TokenizerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TokenizerError::Sink(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenizerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenizerError::Reentrant => f.write_str("recursive feed"),
            TokenizerError::Closed => f.write_str("feed called after close"),
            TokenizerError::Syntax(inner) => write!(f, "syntax error: {inner}"),
            TokenizerError::Sink(inner) => write!(f, "sink error: {inner}"),
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).into())
    }
}

impl From<SyntaxError> for &'static str {
    fn from(val: SyntaxError) -> Self {
        match val {
            SyntaxError::CheckerRejected => "well-formedness checker rejected token",
            SyntaxError::UnresolvableEntity => "unresolvable entity",
            SyntaxError::CharacterReferenceTooWide => "character entity too large",
        }
    }
}

impl From<SyntaxError> for TokenizerError {
    fn from(val: SyntaxError) -> Self {
        TokenizerError::Syntax(val)
    }
}
