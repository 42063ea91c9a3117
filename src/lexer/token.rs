//! Token and category definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

use super::state::Mode;

/// Display class assigned to a lexeme.
///
/// This enumeration is the contract between the classifier and every
/// rendering host: hosts map categories to their own style names and the
/// theme maps them to colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Comment,
    Keyword,
    /// `true`, `false`, `None` and the `Left`/`Right`/`Some` tags.
    LiteralConstant,
    TypeName,
    /// Built-in functions such as `unwrap`.
    Builtin,
    /// The `jet`, `witness` and `param` prefixes.
    Namespace,
    Identifier,
    FunctionReference,
    DefinitionName,
    ConstantReference,
    Number,
    String,
    Operator,
    BracketOpen,
    BracketClose,
    Punctuation,
    MacroInvocation,
    PlainText,
}

impl Category {
    pub const ALL: [Category; 18] = [
        Category::Comment,
        Category::Keyword,
        Category::LiteralConstant,
        Category::TypeName,
        Category::Builtin,
        Category::Namespace,
        Category::Identifier,
        Category::FunctionReference,
        Category::DefinitionName,
        Category::ConstantReference,
        Category::Number,
        Category::String,
        Category::Operator,
        Category::BracketOpen,
        Category::BracketClose,
        Category::Punctuation,
        Category::MacroInvocation,
        Category::PlainText,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Comment => "comment",
            Category::Keyword => "keyword",
            Category::LiteralConstant => "literal-constant",
            Category::TypeName => "type-name",
            Category::Builtin => "builtin",
            Category::Namespace => "namespace",
            Category::Identifier => "identifier",
            Category::FunctionReference => "function-reference",
            Category::DefinitionName => "definition-name",
            Category::ConstantReference => "constant-reference",
            Category::Number => "number",
            Category::String => "string",
            Category::Operator => "operator",
            Category::BracketOpen => "bracket-open",
            Category::BracketClose => "bracket-close",
            Category::Punctuation => "punctuation",
            Category::MacroInvocation => "macro-invocation",
            Category::PlainText => "plain-text",
        }
    }

    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Structural hint for folding and indentation: opening brackets nest one
    /// level deeper, closing brackets one level shallower.
    pub fn indent_delta(self) -> i32 {
        match self {
            Category::BracketOpen => 1,
            Category::BracketClose => -1,
            _ => 0,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A classified lexeme. Offsets are byte offsets into the classified text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token {
    pub start: usize,
    pub end: usize,
    pub category: Category,
    /// Scanning mode that was active when the token was emitted.
    pub mode: Mode,
}

impl Token {
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The token's text within `source`.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span()]
    }

    /// The same token shifted by `offset` bytes.
    pub fn shifted(self, offset: usize) -> Token {
        Token {
            start: self.start + offset,
            end: self.end + offset,
            ..self
        }
    }
}

/// Line/column position for human-readable token dumps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    pub fn new() -> Self {
        Position { line: 1, column: 1 }
    }

    pub fn advance(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_counts_characters() {
        let mut position = Position::new();
        for ch in "é→\nx".chars() {
            position.advance(ch);
        }
        assert_eq!(position, Position { line: 2, column: 2 });
        assert_eq!(position.to_string(), "2:2");
    }

    #[test]
    fn test_category_names_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_name(category.name()), Some(category));
        }
        assert_eq!(Category::from_name("keywords"), None);
    }
}
