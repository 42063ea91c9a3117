//! Editor host adapters.
//!
//! CodeMirror and Monaco consume the same classifier through one
//! [`LineTokenizer`] capability. Each adapter only decides how categories
//! are named in its host and adds whatever per-host extras that host asks
//! for (indentation for CodeMirror, theme export for Monaco).

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::HighlightError;
use crate::language::LANGUAGE;
use crate::lexer::{classify_line, Category, ScannerState};

mod codemirror;
mod monaco;

pub use codemirror::CodeMirror;
pub use monaco::Monaco;

/// A token as a host sees it: a byte range within the line and the host's
/// style name, `None` for unstyled text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HostToken {
    pub start: usize,
    pub end: usize,
    pub style: Option<&'static str>,
}

/// Tokenize-this-line capability shared by every host binding.
pub trait LineTokenizer {
    fn language_id(&self) -> &'static str {
        LANGUAGE.id
    }

    /// The host's style name for `category`.
    fn style(&self, category: Category) -> Option<&'static str>;

    /// Classifies one line starting from `state`, leaving the state for the
    /// next line behind.
    fn tokenize_line(&self, line: &str, state: &mut ScannerState) -> Vec<HostToken> {
        classify_line(line, state)
            .into_iter()
            .map(|token| HostToken {
                start: token.start,
                end: token.end,
                style: self.style(token.category),
            })
            .collect()
    }

    /// Tokenizes a whole document line by line, offsets relative to the
    /// document.
    fn tokenize_document(&self, text: &str) -> Vec<HostToken> {
        let mut state = ScannerState::new();
        let mut tokens = Vec::new();
        for (offset, line) in crate::lexer::lines(text) {
            tokens.extend(
                self.tokenize_line(line, &mut state)
                    .into_iter()
                    .map(|token| HostToken {
                        start: token.start + offset,
                        end: token.end + offset,
                        ..token
                    }),
            );
        }
        tokens
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostKind {
    CodeMirror,
    Monaco,
}

impl HostKind {
    pub fn name(self) -> &'static str {
        match self {
            HostKind::CodeMirror => "codemirror",
            HostKind::Monaco => "monaco",
        }
    }
}

impl fmt::Display for HostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HostKind {
    type Err = HighlightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "codemirror" | "cm" => Ok(HostKind::CodeMirror),
            "monaco" => Ok(HostKind::Monaco),
            _ => Err(HighlightError::UnknownHost(s.to_string())),
        }
    }
}

/// One of the supported hosts, chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Host {
    CodeMirror(CodeMirror),
    Monaco(Monaco),
}

impl Host {
    pub fn new(kind: HostKind) -> Self {
        log::debug!("using {} host adapter", kind);
        match kind {
            HostKind::CodeMirror => Host::CodeMirror(CodeMirror),
            HostKind::Monaco => Host::Monaco(Monaco),
        }
    }

    pub fn kind(&self) -> HostKind {
        match self {
            Host::CodeMirror(_) => HostKind::CodeMirror,
            Host::Monaco(_) => HostKind::Monaco,
        }
    }
}

impl LineTokenizer for Host {
    fn style(&self, category: Category) -> Option<&'static str> {
        match self {
            Host::CodeMirror(host) => host.style(category),
            Host::Monaco(host) => host.style(category),
        }
    }

    fn tokenize_line(&self, line: &str, state: &mut ScannerState) -> Vec<HostToken> {
        match self {
            Host::CodeMirror(host) => host.tokenize_line(line, state),
            Host::Monaco(host) => host.tokenize_line(line, state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_kind_from_str() {
        assert_eq!("codemirror".parse::<HostKind>().unwrap(), HostKind::CodeMirror);
        assert_eq!("Monaco".parse::<HostKind>().unwrap(), HostKind::Monaco);
        assert!(matches!(
            "ace".parse::<HostKind>(),
            Err(HighlightError::UnknownHost(name)) if name == "ace"
        ));
    }

    #[test]
    fn test_host_dispatch() {
        let host = Host::new(HostKind::Monaco);
        assert_eq!(host.kind(), HostKind::Monaco);
        assert_eq!(host.language_id(), "simplicityhl");
        assert_eq!(host.style(Category::TypeName), Some("type"));

        let host = Host::new(HostKind::CodeMirror);
        assert_eq!(host.style(Category::TypeName), Some("builtin"));
    }

    #[test]
    fn test_tokenize_document_offsets() {
        let text = "let a = 1;\nlet b = 2;";
        let tokens = CodeMirror.tokenize_document(text);
        let second_let = tokens
            .iter()
            .filter(|t| t.style == Some("keyword"))
            .nth(1)
            .unwrap();
        assert_eq!(&text[second_let.start..second_let.end], "let");
        assert_eq!(second_let.start, 11);
    }
}
