//! The incremental buffer.
//!
//! Accumulates pushed chunks, hands the scanner a contiguous span, and drops
//! the consumed prefix once the scanner reports how much of it was committed
//! to completed tokens. `Vec::extend_from_slice`/`Vec::drain` already grow
//! and shift geometrically/linearly the same way the source's
//! `malloc`/`realloc`/`memmove` trio does, so there is no need to hand-roll
//! the growth policy.

use crate::code_unit::CodeUnit;

#[derive(Default)]
pub(crate) struct IncrementalBuffer<U> {
    units: Vec<U>,
}

impl<U: CodeUnit> IncrementalBuffer<U> {
    pub(crate) fn append(&mut self, chunk: &[U]) {
        self.units.extend_from_slice(chunk);
    }

    pub(crate) fn span(&self) -> &[U] {
        &self.units
    }

    /// Mutable span, used only for the tag-name case-folding pass in SGML
    /// mode — the scanner otherwise treats the buffer as read-only.
    pub(crate) fn span_mut(&mut self) -> &mut [U] {
        &mut self.units
    }

    /// Drops the first `n` code units, keeping the unconsumed tail.
    ///
    /// `n` must be the scanner's last fully-committed position; the caller
    /// (the tokenizer) is responsible for never passing more than
    /// `self.span().len()`.
    pub(crate) fn consume(&mut self, n: usize) {
        debug_assert!(n <= self.units.len());
        self.units.drain(0..n);
    }

    pub(crate) fn release(&mut self) {
        self.units = Vec::new();
    }

    pub(crate) fn len(&self) -> usize {
        self.units.len()
    }
}
