//! Lexical classification for SimplicityHL.
//!
//! The classifier assigns a display [`Category`] to every lexeme of a source
//! text. It is driven by ordered rule tables (see [`rules`]) and a single
//! generic scan loop (see [`Lexer`]). Classification is total: every input,
//! malformed or not, is covered by tokens without gaps or overlaps, and
//! anything no rule recognises becomes one-character plain text.
//!
//! Line-based editors classify one line at a time with [`classify_line`],
//! threading the [`ScannerState`] left by each line into the next.

#[allow(clippy::module_inception)]
mod lexer;
pub mod rules;
mod state;
mod token;

pub use lexer::{classify, classify_line, format_tokens, lines, Lexer};
pub use state::{Mode, ScannerState, Transition};
pub use token::{Category, Position, Token};
