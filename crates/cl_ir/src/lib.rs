//! Codelimit IR - shared types for the scope measurement pipeline.
//!
//! This crate contains the data structures every other stage agrees on:
//! - `Location` for 1-based source positions
//! - `Token`, `TokenKind` and `TokenRange` for lexer output
//! - `Language` for file classification
//! - `Measurement` for the per-function result reported to the user
//!
//! Tokens are immutable once lexed. A `TokenRange` borrows the token
//! stream it was cut from and remembers the index of its first token, so
//! ranges produced from the same stream can be ordered by position.

mod language;
mod location;
mod measurement;
mod token;
mod token_range;

pub use language::{FileKind, Language};
pub use location::Location;
pub use measurement::Measurement;
pub use token::{Token, TokenKind};
pub use token_range::TokenRange;
