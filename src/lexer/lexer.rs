//! ルールテーブルを駆動する走査ループ

use std::collections::VecDeque;

use super::rules::{rules_for, Emit};
use super::state::ScannerState;
use super::token::{Category, Position, Token};

/// 1つのテキストに対する遅延分類器
///
/// クローンすると同じ位置から独立したカーソルが得られ、任意の位置から
/// トークン列を再開できる。
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    offset: usize,
    state: ScannerState,
    pending: VecDeque<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_state(input, ScannerState::new())
    }

    /// 前のテキストから引き継いだ状態で `input` の分類を開始
    pub fn with_state(input: &'a str, state: ScannerState) -> Self {
        Self {
            input,
            offset: 0,
            state,
            pending: VecDeque::new(),
        }
    }

    pub fn state(&self) -> &ScannerState {
        &self.state
    }

    /// ここまで消費した後の状態
    pub fn into_state(self) -> ScannerState {
        self.state
    }

    fn emit(&mut self, start: usize, end: usize, category: Category) {
        let mode = self.state.mode();
        self.state.nest(category.indent_delta());
        self.pending.push_back(Token {
            start,
            end,
            category,
            mode,
        });
    }

    /// 字句を1つ消費し、生成したトークンをキューに積む
    fn step(&mut self) {
        let input = self.input;
        let base = self.offset;
        let rest = &input[base..];

        loop {
            let table = rules_for(self.state.mode());

            if let Some((rule, captures)) = table.find(rest) {
                let end = captures.get(0).map_or(0, |m| m.end());
                match rule.emit {
                    Emit::Whole(category) => self.emit(base, base + end, category),
                    Emit::Groups(categories) => {
                        let mut cursor = 0;
                        for (i, &category) in categories.iter().enumerate() {
                            let Some(group) = captures.get(i + 1) else {
                                continue;
                            };
                            if group.start() > cursor {
                                self.emit(base + cursor, base + group.start(), Category::PlainText);
                            }
                            if group.end() > group.start() {
                                self.emit(base + group.start(), base + group.end(), category);
                            }
                            cursor = cursor.max(group.end());
                        }
                        if end > cursor {
                            self.emit(base + cursor, base + end, Category::PlainText);
                        }
                    }
                }
                if let Some(transition) = rule.transition {
                    self.state.apply(transition);
                }
                self.offset = base + end;
                return;
            }

            match table.fallthrough {
                Some(transition) => self.state.apply(transition),
                None => {
                    let width = rest.chars().next().map_or(1, char::len_utf8);
                    self.emit(base, base + width, Category::PlainText);
                    self.offset = base + width;
                    return;
                }
            }
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.pending.pop_front() {
            return Some(token);
        }
        if self.offset >= self.input.len() {
            return None;
        }
        self.step();
        self.pending.pop_front()
    }
}

/// テキスト全体を `start` モードから分類
pub fn classify(input: &str) -> Lexer<'_> {
    Lexer::new(input)
}

/// Classifies one line from `state` and leaves the end-of-line state in it.
///
/// `line` may include its terminator. Offsets in the returned tokens are
/// relative to the start of the line.
pub fn classify_line(line: &str, state: &mut ScannerState) -> Vec<Token> {
    let mut lexer = Lexer::with_state(line, std::mem::take(state));
    let tokens = lexer.by_ref().collect();
    *state = lexer.into_state();
    tokens
}

/// Splits `input` into lines with their terminators, paired with the byte
/// offset each line starts at.
pub fn lines(input: &str) -> impl Iterator<Item = (usize, &str)> + '_ {
    input.split_inclusive('\n').scan(0, |offset, line| {
        let start = *offset;
        *offset += line.len();
        Some((start, line))
    })
}

/// デバッグ用：トークンごとに `line:column category "text"` の1行を出力
pub fn format_tokens(input: &str, tokens: &[Token]) -> String {
    let mut position = Position::new();
    let mut consumed = 0;
    tokens
        .iter()
        .map(|token| {
            for ch in input[consumed..token.start].chars() {
                position.advance(ch);
            }
            consumed = token.start;
            format!("{:>6} {:<18} {:?}", position.to_string(), token.category, token.text(input))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Mode;

    fn categories(input: &str) -> Vec<(&str, Category)> {
        classify(input)
            .map(|t| (t.text(input), t.category))
            .collect()
    }

    #[test]
    fn test_basic_classification() {
        let input = "let x = 42;";
        assert_eq!(
            categories(input),
            vec![
                ("let", Category::Keyword),
                (" ", Category::PlainText),
                ("x", Category::Identifier),
                (" ", Category::PlainText),
                ("=", Category::Operator),
                (" ", Category::PlainText),
                ("42", Category::Number),
                (";", Category::Punctuation),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(classify("").count(), 0);
    }

    #[test]
    fn test_unmatched_multibyte_character() {
        let input = "é→";
        let tokens: Vec<_> = classify(input).collect();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text(input), "é");
        assert_eq!(tokens[1].text(input), "→");
        assert!(tokens.iter().all(|t| t.category == Category::PlainText));
    }

    #[test]
    fn test_function_name_mode_falls_through() {
        let input = "fn (x)";
        let tokens: Vec<_> = classify(input).collect();
        assert_eq!(tokens[0].category, Category::Keyword);
        assert_eq!(tokens[1].mode, Mode::Start);
        assert_eq!(tokens[2].text(input), "(");
        assert_eq!(tokens[2].category, Category::BracketOpen);
        assert_eq!(tokens[2].mode, Mode::Start);
    }

    #[test]
    fn test_lexer_is_restartable() {
        let mut lexer = classify("a + b");
        lexer.next();
        let checkpoint = lexer.clone();
        let rest: Vec<_> = lexer.collect();
        let replay: Vec<_> = checkpoint.collect();
        assert_eq!(rest, replay);
    }

    #[test]
    fn test_classify_line_threads_state() {
        let mut state = ScannerState::new();
        classify_line("/* open\n", &mut state);
        assert_eq!(state.mode(), Mode::Comment);
        let tokens = classify_line("still */ x", &mut state);
        assert_eq!(state.mode(), Mode::Start);
        assert_eq!(tokens[0].category, Category::Comment);
        assert_eq!(tokens[0].mode, Mode::Comment);
        assert_eq!(tokens.last().map(|t| t.category), Some(Category::Identifier));
    }

    #[test]
    fn test_bracket_depth() {
        let mut state = ScannerState::new();
        classify_line("fn main() {\n", &mut state);
        assert_eq!(state.depth(), 1);
        classify_line("    f([1, 2])\n", &mut state);
        assert_eq!(state.depth(), 1);
        classify_line("}\n", &mut state);
        assert_eq!(state.depth(), 0);
    }

    #[test]
    fn test_lines_keep_terminators() {
        let collected: Vec<_> = lines("a\nbc\n\nd").collect();
        assert_eq!(collected, vec![(0, "a\n"), (2, "bc\n"), (5, "\n"), (6, "d")]);
    }

    #[test]
    fn test_format_tokens() {
        let input = "x\n  y";
        let tokens: Vec<_> = classify(input).collect();
        let dump = format_tokens(input, &tokens);
        let rows: Vec<_> = dump.lines().collect();
        assert_eq!(rows.len(), 5);
        assert!(rows[0].contains("1:1"));
        assert!(rows[0].contains("identifier"));
        assert!(rows[4].contains("2:3"));
    }
}
