//! Incremental, push-driven tokenizer for SGML-family markup.
//!
//! Feed it byte or `char` chunks as they arrive — over a socket, out of a
//! decompressor, off a disk in fixed-size blocks — and it emits lexical
//! events (tag open/close, attributes, data, comments, CDATA, entity and
//! character references, DOCTYPE/PI/DTD declarations) to a caller-supplied
//! [`EventSink`] as soon as each token is fully buffered. A token split
//! across a chunk boundary is simply held back until a later `feed` call
//! completes it; nothing is parsed twice.
//!
//! Two grammars are supported: [`Tokenizer::sgml`] for lenient SGML/HTML
//! (case-folded tag names, shorttags, minimized attributes) and
//! [`Tokenizer::xml`] for strict XML (case preserved, `<!DOCTYPE` and CDATA
//! sections recognized, no shorttags). Both run the same generic scanner,
//! parameterized over the code-unit width via [`CodeUnit`] (`u8` for byte
//! streams, `char` for pre-decoded Unicode streams).
//!
//! ```
//! use sgml_tokenizer::{EventSink, SinkResult, Tokenizer};
//!
//! #[derive(Default)]
//! struct Print;
//!
//! impl EventSink<u8> for Print {
//!     fn enter_start_tag(&mut self, name: &[u8]) -> SinkResult {
//!         println!("<{}>", String::from_utf8_lossy(name));
//!         Ok(())
//!     }
//! }
//!
//! let mut tokenizer = Tokenizer::sgml();
//! tokenizer.register(Print::default());
//! tokenizer.parse(b"<p>hello</p>").unwrap();
//! ```

mod attributes;
mod buffer;
mod checker;
mod code_unit;
mod entities;
mod error;
mod sink;
mod tokenizer;

pub use checker::{is_wellformed_name, NameSyntaxChecker, WellFormednessChecker};
pub use code_unit::CodeUnit;
pub use error::{SinkError, SyntaxError, TokenizerError};
pub use sink::{EventSink, NullSink, SinkResult};
pub use tokenizer::{Grammar, Tokenizer};
