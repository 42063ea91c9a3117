//! Monaco Monarch-style binding

use serde_json::{json, Value};

use super::{HostToken, LineTokenizer};
use crate::lexer::{Category, ScannerState};
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Monaco;

impl Monaco {
    /// Categories rendered with Monaco scope `scope`.
    pub fn categories<'a>(&'a self, scope: &'a str) -> impl Iterator<Item = Category> + 'a {
        Category::ALL
            .into_iter()
            .filter(move |&category| self.style(category) == Some(scope))
    }

    /// The theme in the shape `monaco.editor.defineTheme` expects.
    pub fn theme_definition(&self, theme: &Theme) -> Value {
        let rules: Vec<Value> = theme
            .styles
            .iter()
            .filter_map(|(&category, style)| {
                let token = self.style(category)?;
                let mut rule = json!({ "token": token });
                if let Some(foreground) = style.foreground {
                    rule["foreground"] = json!(foreground.to_string().trim_start_matches('#'));
                }
                let font_style: Vec<&str> = [(style.bold, "bold"), (style.italic, "italic")]
                    .into_iter()
                    .filter_map(|(on, name)| on.then_some(name))
                    .collect();
                if !font_style.is_empty() {
                    rule["fontStyle"] = json!(font_style.join(" "));
                }
                Some(rule)
            })
            .collect();
        let colors: serde_json::Map<String, Value> = theme
            .colors
            .iter()
            .map(|(key, rgb)| (key.clone(), json!(rgb.to_string())))
            .collect();

        json!({
            "name": theme.name,
            "base": "vs-dark",
            "inherit": true,
            "rules": rules,
            "colors": colors,
        })
    }
}

impl LineTokenizer for Monaco {
    fn style(&self, category: Category) -> Option<&'static str> {
        match category {
            Category::Comment => Some("comment"),
            Category::Keyword => Some("keyword"),
            Category::LiteralConstant => Some("constant"),
            Category::TypeName => Some("type"),
            Category::Builtin => Some("predefined"),
            Category::Namespace => Some("namespace"),
            Category::Identifier => Some("identifier"),
            Category::FunctionReference => Some("function"),
            Category::DefinitionName => Some("function.definition"),
            Category::ConstantReference => Some("variable.witness"),
            Category::Number => Some("number"),
            Category::String => Some("string"),
            Category::Operator => Some("operator"),
            Category::BracketOpen | Category::BracketClose => Some("delimiter.bracket"),
            Category::Punctuation => Some("delimiter"),
            Category::MacroInvocation => Some("macro"),
            Category::PlainText => None,
        }
    }

    /// Monaco renders runs, so neighbouring tokens with the same scope are
    /// merged into one.
    fn tokenize_line(&self, line: &str, state: &mut ScannerState) -> Vec<HostToken> {
        let mut merged: Vec<HostToken> = Vec::new();
        for token in crate::lexer::classify_line(line, state) {
            let style = self.style(token.category);
            match merged.last_mut() {
                Some(last) if last.style == style && last.end == token.start => {
                    last.end = token.end;
                }
                _ => merged.push(HostToken {
                    start: token.start,
                    end: token.end,
                    style,
                }),
            }
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_are_merged() {
        let mut state = ScannerState::new();
        let tokens = Monaco.tokenize_line("f(())  ;", &mut state);
        let styles: Vec<_> = tokens.iter().map(|t| (t.start, t.end, t.style)).collect();
        assert_eq!(
            styles,
            vec![
                (0, 1, Some("function")),
                (1, 5, Some("delimiter.bracket")),
                (5, 7, None),
                (7, 8, Some("delimiter")),
            ]
        );
    }

    #[test]
    fn test_categories_for_scope() {
        let brackets: Vec<_> = Monaco.categories("delimiter.bracket").collect();
        assert_eq!(brackets, vec![Category::BracketOpen, Category::BracketClose]);
        assert_eq!(Monaco.categories("keyword").collect::<Vec<_>>(), vec![Category::Keyword]);
        assert_eq!(Monaco.categories("function.jet").count(), 0);
    }

    #[test]
    fn test_theme_definition() {
        let definition = Monaco.theme_definition(&Theme::default());
        assert_eq!(definition["base"], "vs-dark");
        assert_eq!(definition["colors"]["editor.background"], "#1E1E1E");
        let rules = definition["rules"].as_array().unwrap();
        let keyword = rules.iter().find(|r| r["token"] == "keyword").unwrap();
        assert_eq!(keyword["foreground"], "C586C0");
        assert_eq!(keyword["fontStyle"], "bold");
        let comment = rules.iter().find(|r| r["token"] == "comment").unwrap();
        assert_eq!(comment["fontStyle"], "italic");
    }
}
