//! CodeMirror simple-mode binding

use super::LineTokenizer;
use crate::language::LANGUAGE;
use crate::lexer::{Category, ScannerState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodeMirror;

impl CodeMirror {
    pub fn mime_types(&self) -> &'static [&'static str] {
        LANGUAGE.mime_types
    }

    /// Indentation for a line whose text after the cursor is `text_after`,
    /// given the state at the start of that line. A line opening with a
    /// closing bracket sits one level shallower.
    pub fn indentation(&self, state: &ScannerState, text_after: &str, unit: usize) -> usize {
        let closes = text_after
            .trim_start()
            .starts_with(|ch: char| LANGUAGE.brackets.iter().any(|&(_, close)| close == ch));
        let depth = if closes {
            state.depth().saturating_sub(1)
        } else {
            state.depth()
        };
        depth * unit
    }

    /// Whether typing `ch` should re-indent the current line.
    pub fn electric_input(&self, ch: char) -> bool {
        LANGUAGE.electric_chars.contains(ch)
    }
}

impl LineTokenizer for CodeMirror {
    fn style(&self, category: Category) -> Option<&'static str> {
        match category {
            Category::Comment => Some("comment"),
            Category::Keyword => Some("keyword"),
            Category::LiteralConstant => Some("atom"),
            Category::TypeName | Category::Builtin | Category::Namespace => Some("builtin"),
            Category::Identifier => Some("variable"),
            Category::FunctionReference => Some("variable-2"),
            Category::DefinitionName => Some("def"),
            Category::ConstantReference => Some("variable-3"),
            Category::Number => Some("number"),
            Category::String => Some("string"),
            Category::Operator => Some("operator"),
            Category::MacroInvocation => Some("meta"),
            Category::BracketOpen
            | Category::BracketClose
            | Category::Punctuation
            | Category::PlainText => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::classify_line;

    #[test]
    fn test_indentation_follows_brackets() {
        let host = CodeMirror;
        let mut state = ScannerState::new();
        classify_line("fn main() {\n", &mut state);
        assert_eq!(host.indentation(&state, "let x = 1;", 4), 4);
        assert_eq!(host.indentation(&state, "  }", 4), 0);
    }

    #[test]
    fn test_electric_input() {
        assert!(CodeMirror.electric_input('}'));
        assert!(!CodeMirror.electric_input(')'));
    }

    #[test]
    fn test_witness_styles() {
        let mut state = ScannerState::new();
        let line = "witness::SIG";
        let styles: Vec<_> = CodeMirror
            .tokenize_line(line, &mut state)
            .into_iter()
            .map(|t| (&line[t.start..t.end], t.style))
            .collect();
        assert_eq!(
            styles,
            vec![
                ("witness", Some("builtin")),
                ("::", Some("operator")),
                ("SIG", Some("variable-3")),
            ]
        );
    }
}
