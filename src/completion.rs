//! Autocomplete suggestions and hover text built from the language tables.

use serde::Serialize;

use crate::language::{
    self, Jet, JetGroup, BUILTIN_FUNCTIONS, BUILTIN_TYPES, CONSTANTS, KEYWORDS, PRIMITIVE_TYPES, SNIPPETS,
    VARIANTS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompletionKind {
    Function,
    Keyword,
    Type,
    Snippet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionItem {
    pub label: String,
    pub kind: CompletionKind,
    pub insert_text: String,
    /// Insert text contains `${n}` tab stops.
    pub is_snippet: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    /// Set on jet items only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<JetGroup>,
}

impl CompletionItem {
    fn plain(label: &str, kind: CompletionKind) -> Self {
        Self {
            label: label.to_string(),
            kind,
            insert_text: label.to_string(),
            is_snippet: false,
            detail: None,
            documentation: None,
            group: None,
        }
    }

    fn jet(jet: &Jet) -> Self {
        let label = jet.qualified_name();
        Self {
            insert_text: label.clone(),
            label,
            kind: CompletionKind::Function,
            is_snippet: false,
            detail: Some(jet.signature.to_string()),
            documentation: Some(jet.description.to_string()),
            group: Some(jet.group),
        }
    }
}

/// Every suggestion whose label starts with `prefix`; jets also match on
/// their bare name. An empty prefix returns the full list.
///
/// Order: jets grouped by [`JetGroup`], keywords and literal constants,
/// types, built-in functions, snippets.
pub fn completions(prefix: &str) -> Vec<CompletionItem> {
    let mut items: Vec<CompletionItem> = language::JETS
        .iter()
        .filter(|jet| jet.name.starts_with(prefix) || jet.qualified_name().starts_with(prefix))
        .map(CompletionItem::jet)
        .collect();
    items.sort_by_key(|item| item.group);

    let words = [
        (KEYWORDS, CompletionKind::Keyword),
        (CONSTANTS, CompletionKind::Keyword),
        (VARIANTS, CompletionKind::Keyword),
        (PRIMITIVE_TYPES, CompletionKind::Type),
        (BUILTIN_TYPES, CompletionKind::Type),
        (BUILTIN_FUNCTIONS, CompletionKind::Function),
    ];
    for (list, kind) in words {
        items.extend(
            list.iter()
                .filter(|word| word.starts_with(prefix))
                .map(|word| CompletionItem::plain(word, kind)),
        );
    }

    items.extend(
        SNIPPETS
            .iter()
            .filter(|snippet| snippet.label.starts_with(prefix))
            .map(|snippet| CompletionItem {
                label: snippet.label.to_string(),
                kind: CompletionKind::Snippet,
                insert_text: snippet.template.to_string(),
                is_snippet: true,
                detail: None,
                documentation: Some(snippet.description.to_string()),
                group: None,
            }),
    );

    items
}

/// Markdown hover contents, one entry per paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hover {
    pub contents: Vec<String>,
}

/// Hover for a jet named either `name` or `jet::name`.
pub fn hover(word: &str) -> Option<Hover> {
    let jet = language::jet(word)?;
    Some(Hover {
        contents: vec![
            format!("**{}**", jet.qualified_name()),
            format!("`{}`", jet.signature),
            jet.description.to_string(),
        ],
    })
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// The identifier under byte `column` of `line`, as `(start, end, word)`.
///
/// A word directly preceded by `jet::` is widened to include the prefix so
/// that hovering either half of `jet::sha_256` finds the jet.
pub fn word_at(line: &str, column: usize) -> Option<(usize, usize, &str)> {
    if column > line.len() || !line.is_char_boundary(column) {
        return None;
    }
    let mut start = line[..column]
        .char_indices()
        .rev()
        .take_while(|&(_, ch)| is_word_char(ch))
        .last()
        .map_or(column, |(i, _)| i);
    let mut end = line[column..]
        .char_indices()
        .find(|&(_, ch)| !is_word_char(ch))
        .map_or(line.len(), |(i, _)| column + i);
    if start == end {
        return None;
    }

    if line[..start].ends_with("jet::") && !line[..start - 5].ends_with(is_word_char) {
        start -= "jet::".len();
    } else if &line[start..end] == "jet" && line[end..].starts_with("::") {
        let tail = &line[end + 2..];
        let len = tail.find(|ch: char| !is_word_char(ch)).unwrap_or(tail.len());
        if len > 0 {
            end += 2 + len;
        }
    }
    Some((start, end, &line[start..end]))
}
