//! SimplicityHL highlighting library
//!
//! Lexical classification, language tables, completion and hover data, colour
//! themes and editor host bindings for the SimplicityHL smart-contract
//! language.

pub mod completion;
pub mod error;
pub mod host;
pub mod language;
pub mod lexer;
pub mod theme;

// Re-export commonly used types
pub use completion::{completions, hover, CompletionItem, Hover};
pub use error::{HighlightError, HighlightResult};
pub use host::{CodeMirror, Host, HostKind, LineTokenizer, Monaco};
pub use lexer::{classify, classify_line, Category, Lexer, Mode, ScannerState, Token};
pub use theme::Theme;
