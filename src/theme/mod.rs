//! Colour themes keyed by token category.
//!
//! Themes are written in the same shape as a Monaco `defineTheme` call:
//!
//! ```json
//! {
//!   "name": "my-theme",
//!   "inherit": true,
//!   "rules": [{ "token": "keyword", "foreground": "C586C0", "fontStyle": "bold" }],
//!   "colors": { "editor.background": "#1E1E1E" }
//! }
//! ```
//!
//! `token` is a category name such as `keyword` or `function-reference`, or
//! a Monaco scope such as `function.definition`, so the output of
//! [`Monaco::theme_definition`](crate::host::Monaco::theme_definition) loads
//! back unchanged. With `inherit` (the default) the rules are layered over
//! `simplicity-dark`, and `name` may then be omitted.

use colored::Colorize;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{HighlightError, HighlightResult};
use crate::host::Monaco;
use crate::lexer::{Category, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parses `#RRGGBB` or `RRGGBB`.
    pub fn parse(value: &str) -> Option<Rgb> {
        let hex = value.strip_prefix('#').unwrap_or(value);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Style {
    pub foreground: Option<Rgb>,
    pub bold: bool,
    pub italic: bool,
}

impl Style {
    pub const fn color(r: u8, g: u8, b: u8) -> Self {
        Self {
            foreground: Some(Rgb(r, g, b)),
            bold: false,
            italic: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn italic(self) -> Self {
        Self {
            italic: true,
            ..self
        }
    }

    /// Parses a Monaco `fontStyle` string such as `"bold italic"`.
    fn with_font_style(mut self, font_style: &str) -> Self {
        for word in font_style.split_whitespace() {
            match word {
                "bold" => self.bold = true,
                "italic" => self.italic = true,
                _ => {}
            }
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Theme {
    pub name: String,
    pub styles: IndexMap<Category, Style>,
    /// Editor chrome colours, e.g. `editor.background`.
    pub colors: IndexMap<String, Rgb>,
}

pub const DEFAULT_THEME: &str = "simplicity-dark";

impl Default for Theme {
    fn default() -> Self {
        Self::simplicity_dark()
    }
}

#[derive(Debug, Deserialize)]
struct ThemeFile {
    name: Option<String>,
    #[serde(default = "default_inherit")]
    inherit: bool,
    #[serde(default)]
    rules: Vec<ThemeRule>,
    #[serde(default)]
    colors: IndexMap<String, String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeRule {
    token: String,
    foreground: Option<String>,
    #[serde(default)]
    font_style: String,
}

fn default_inherit() -> bool {
    true
}

impl Theme {
    /// The dark palette shipped with both editor integrations.
    pub fn simplicity_dark() -> Self {
        let styles = [
            (Category::Comment, Style::color(0x6A, 0x99, 0x55).italic()),
            (Category::Keyword, Style::color(0xC5, 0x86, 0xC0).bold()),
            (Category::LiteralConstant, Style::color(0x56, 0x9C, 0xD6)),
            (Category::TypeName, Style::color(0x4E, 0xC9, 0xB0).bold()),
            (Category::Builtin, Style::color(0x4E, 0xC9, 0xB0)),
            (Category::Namespace, Style::color(0x4E, 0xC9, 0xB0)),
            (Category::FunctionReference, Style::color(0xDC, 0xDC, 0xAA)),
            (Category::DefinitionName, Style::color(0xDC, 0xDC, 0xAA)),
            (Category::ConstantReference, Style::color(0x9C, 0xDC, 0xFE).italic()),
            (Category::Number, Style::color(0xB5, 0xCE, 0xA8)),
            (Category::String, Style::color(0xCE, 0x91, 0x78)),
            (Category::Operator, Style::color(0xD4, 0xD4, 0xD4)),
            (Category::MacroInvocation, Style::color(0xC5, 0x86, 0xC0)),
        ];
        let colors = [
            ("editor.background", Rgb(0x1E, 0x1E, 0x1E)),
            ("editor.foreground", Rgb(0xD4, 0xD4, 0xD4)),
            ("editor.lineHighlightBackground", Rgb(0x2A, 0x2A, 0x2A)),
            ("editorCursor.foreground", Rgb(0xAE, 0xAF, 0xAD)),
            ("editor.selectionBackground", Rgb(0x26, 0x4F, 0x78)),
            ("editor.inactiveSelectionBackground", Rgb(0x3A, 0x3D, 0x41)),
        ];
        Self {
            name: DEFAULT_THEME.to_string(),
            styles: styles.into_iter().collect(),
            colors: colors
                .into_iter()
                .map(|(key, rgb)| (key.to_string(), rgb))
                .collect(),
        }
    }

    /// Built-in themes by name.
    pub fn builtin(name: &str) -> Option<Theme> {
        (name == DEFAULT_THEME).then(Theme::simplicity_dark)
    }

    pub fn from_json(json: &str) -> HighlightResult<Theme> {
        let file: ThemeFile = serde_json::from_str(json)?;
        let mut theme = if file.inherit {
            Theme::simplicity_dark()
        } else {
            Theme {
                name: String::new(),
                styles: IndexMap::new(),
                colors: IndexMap::new(),
            }
        };
        if let Some(name) = file.name {
            theme.name = name;
        }

        for rule in file.rules {
            let categories: Vec<Category> = match Category::from_name(&rule.token) {
                Some(category) => vec![category],
                None => Monaco.categories(&rule.token).collect(),
            };
            if categories.is_empty() {
                return Err(HighlightError::UnknownCategory(rule.token));
            }
            let foreground = match rule.foreground {
                Some(value) => Some(Rgb::parse(&value).ok_or_else(|| {
                    HighlightError::InvalidColor {
                        token: rule.token.clone(),
                        value,
                    }
                })?),
                None => None,
            };
            let style = Style {
                foreground,
                bold: false,
                italic: false,
            }
            .with_font_style(&rule.font_style);
            for category in categories {
                theme.styles.insert(category, style);
            }
        }

        for (key, value) in file.colors {
            let rgb = Rgb::parse(&value).ok_or_else(|| HighlightError::InvalidColor {
                token: key.clone(),
                value,
            })?;
            theme.colors.insert(key, rgb);
        }

        Ok(theme)
    }

    pub fn load(path: &Path) -> HighlightResult<Theme> {
        log::debug!("loading theme from {}", path.display());
        let json = fs::read_to_string(path).map_err(|source| HighlightError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let theme = Self::from_json(&json)?;
        log::debug!("loaded theme '{}' with {} styles", theme.name, theme.styles.len());
        Ok(theme)
    }

    pub fn style(&self, category: Category) -> Option<&Style> {
        self.styles.get(&category)
    }

    /// Renders classified `source` with ANSI colours.
    pub fn paint(&self, source: &str, tokens: &[Token]) -> String {
        let mut out = String::with_capacity(source.len() * 2);
        for token in tokens {
            let text = token.text(source);
            let Some(style) = self.style(token.category) else {
                out.push_str(text);
                continue;
            };
            // Paint line by line so terminals never see a style spanning a newline.
            for (i, part) in text.split('\n').enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                if part.is_empty() {
                    continue;
                }
                let mut painted = part.normal();
                if let Some(Rgb(r, g, b)) = style.foreground {
                    painted = painted.truecolor(r, g, b);
                }
                if style.bold {
                    painted = painted.bold();
                }
                if style.italic {
                    painted = painted.italic();
                }
                out.push_str(&painted.to_string());
            }
        }
        out
    }
}
