//! The event sink capability set.
//!
//! The C source probes a registered callback object by attribute name at
//! `register()` time and keeps a bag of nullable function pointers; firing
//! an event is then a null-check plus a call. The natural Rust rendering of
//! "a callback slot that's absent by default" is a trait with a no-op
//! default method body — a sink "registers a capability" simply by
//! overriding it. `enter_attribute` et al. so default to doing nothing.
//!
//! Two capabilities (entity-reference, character-reference) have fallback
//! behavior in the tokenizer when absent (the entity dispatch policy):
//! the tokenizer must be able to tell "this sink declined the event" apart
//! from "this sink didn't register for it", which a silently-ignored
//! default return value can't express. Those two therefore pair their
//! callback with an explicit `handles_*` probe.

use crate::error::SinkError;

pub type SinkResult = Result<(), SinkError>;

/// A caller-supplied receiver of lexical events.
///
/// Every method has a no-op default body, so an implementor only overrides
/// the events it cares about.
#[allow(unused_variables)]
pub trait EventSink<U> {
    fn enter_start_tag(&mut self, name: &[U]) -> SinkResult {
        Ok(())
    }

    fn enter_attribute(&mut self, name: &[U]) -> SinkResult {
        Ok(())
    }

    fn leave_attribute(&mut self, name: &[U]) -> SinkResult {
        Ok(())
    }

    fn leave_start_tag(&mut self, name: &[U]) -> SinkResult {
        Ok(())
    }

    fn end_tag(&mut self, name: &[U]) -> SinkResult {
        Ok(())
    }

    fn processing_instruction(&mut self, target: &[U], body: &[U]) -> SinkResult {
        Ok(())
    }

    /// Fires for DIRECTIVE, DOCTYPE, DTD_START, DTD_ENTITY, and DTD_END
    /// tokens alike, carrying the raw declaration body.
    fn special(&mut self, body: &[U]) -> SinkResult {
        Ok(())
    }

    /// Whether this sink wants raw `&#...;` bodies instead of having the
    /// tokenizer resolve them via the built-in numeric decoder.
    fn handles_character_reference(&self) -> bool {
        false
    }

    fn character_reference(&mut self, body: &[U]) -> SinkResult {
        Ok(())
    }

    /// Whether this sink wants raw `&name;` bodies instead of having the
    /// tokenizer resolve them via the built-in named-entity table.
    fn handles_entity_reference(&self) -> bool {
        false
    }

    fn entity_reference(&mut self, name: &[U]) -> SinkResult {
        Ok(())
    }

    fn data(&mut self, text: &[U]) -> SinkResult {
        Ok(())
    }

    fn cdata(&mut self, text: &[U]) -> SinkResult {
        Ok(())
    }

    fn comment(&mut self, text: &[U]) -> SinkResult {
        Ok(())
    }
}

/// A sink that drops every event. Useful as the tokenizer's default before
/// `register` is called.
pub struct NullSink;

impl<U> EventSink<U> for NullSink {}
