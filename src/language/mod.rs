//! Static language tables for SimplicityHL.
//!
//! These lists are the single source of truth for the classifier rules,
//! completion suggestions and hover text. Both editor hosts read them from
//! here, so the keyword and type sets cannot drift apart between hosts.

use indexmap::IndexMap;
use serde::Serialize;
use std::sync::LazyLock;

mod jets;

pub use jets::JETS;

/// Reserved words.
pub const KEYWORDS: &[&str] = &[
    "fn", "let", "match", "if", "else", "while", "for", "return", "type", "mod", "const",
];

/// Boolean and unit literal constants.
pub const CONSTANTS: &[&str] = &["true", "false", "None"];

/// Constructor tags of the `Either` and `Option` sum types.
pub const VARIANTS: &[&str] = &["Left", "Right", "Some"];

/// Unsigned integers, signed integers and `bool`.
pub const PRIMITIVE_TYPES: &[&str] = &[
    "u1", "u2", "u4", "u8", "u16", "u32", "u64", "u128", "u256", "i8", "i16", "i32", "i64",
    "bool",
];

/// Compound types and the type aliases the compiler predefines.
pub const BUILTIN_TYPES: &[&str] = &[
    // Compound
    "Either", "Option", "List",
    // Cryptography
    "Ctx8", "Pubkey", "Message64", "Message", "Signature", "Scalar", "Fe", "Gej", "Ge", "Point",
    // Time locks
    "Height", "Time", "Distance", "Duration", "Lock", "Outpoint",
    // Confidential transactions
    "Confidential1", "ExplicitAsset", "Asset1", "ExplicitAmount", "Amount1", "ExplicitNonce",
    "Nonce", "TokenAmount1",
];

/// Built-in functions callable without a namespace.
pub const BUILTIN_FUNCTIONS: &[&str] = &[
    "unwrap", "unwrap_left", "unwrap_right", "for_while", "is_none", "array_fold", "into", "fold",
    "dbg",
];

/// Namespaces that qualify references to externally supplied items.
pub const NAMESPACES: &[Namespace] = &[
    Namespace { prefix: "jet", naming: Naming::Snake },
    Namespace { prefix: "witness", naming: Naming::UpperSnake },
    Namespace { prefix: "param", naming: Naming::Snake },
];

/// Case convention expected of the name after `prefix::`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Naming {
    /// `lower_snake`, a function-like reference.
    Snake,
    /// `UPPER_SNAKE`, a constant-like reference.
    UpperSnake,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Namespace {
    pub prefix: &'static str,
    pub naming: Naming,
}

/// Group a jet belongs to. Jet completions are ordered by group and carry
/// it as a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum JetGroup {
    Arithmetic,
    Bitwise,
    Comparison,
    Crypto,
    Elements,
}

/// A built-in, externally verified primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Jet {
    pub name: &'static str,
    pub signature: &'static str,
    pub description: &'static str,
    pub group: JetGroup,
}

impl Jet {
    /// The namespace-qualified name, e.g. `jet::sha_256`.
    pub fn qualified_name(&self) -> String {
        format!("jet::{}", self.name)
    }
}

static JETS_BY_NAME: LazyLock<IndexMap<&'static str, &'static Jet>> =
    LazyLock::new(|| JETS.iter().map(|jet| (jet.name, jet)).collect());

/// Looks up a jet by its bare name or by its `jet::`-qualified name.
pub fn jet(name: &str) -> Option<&'static Jet> {
    let bare = name.strip_prefix("jet::").unwrap_or(name);
    JETS_BY_NAME.get(bare).copied()
}

/// An editor snippet; `${n:label}` marks the n-th tab stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snippet {
    pub label: &'static str,
    pub template: &'static str,
    pub description: &'static str,
}

pub const SNIPPETS: &[Snippet] = &[
    Snippet {
        label: "fn main",
        template: "fn main() {\n\t${1}\n}",
        description: "Main function template",
    },
    Snippet {
        label: "assert",
        template: "assert!(${1:condition})",
        description: "Assertion statement",
    },
    Snippet {
        label: "witness",
        template: "let ${1:name}: ${2:type} = witness::${3:NAME};",
        description: "Witness declaration",
    },
];

/// Editor-facing language configuration shared by every host.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageConfig {
    pub id: &'static str,
    pub aliases: &'static [&'static str],
    pub extensions: &'static [&'static str],
    pub mime_types: &'static [&'static str],
    pub line_comment: &'static str,
    pub block_comment: (&'static str, &'static str),
    pub brackets: &'static [(char, char)],
    pub auto_closing_pairs: &'static [(char, char)],
    pub surrounding_pairs: &'static [(char, char)],
    pub electric_chars: &'static str,
    pub folding_start: &'static str,
    pub folding_end: &'static str,
}

pub const LANGUAGE: LanguageConfig = LanguageConfig {
    id: "simplicityhl",
    aliases: &["SimplicityHL", "Simfony", "simplicityhl"],
    extensions: &[".simf"],
    mime_types: &["text/x-simplicityhl", "text/x-simfony", "text/x-simf"],
    line_comment: "//",
    block_comment: ("/*", "*/"),
    brackets: &[('{', '}'), ('[', ']'), ('(', ')')],
    auto_closing_pairs: &[('{', '}'), ('[', ']'), ('(', ')'), ('"', '"'), ('\'', '\'')],
    surrounding_pairs: &[('{', '}'), ('[', ']'), ('(', ')'), ('"', '"'), ('\'', '\'')],
    electric_chars: "{}[]",
    folding_start: r"^\s*//\s*#?region\b",
    folding_end: r"^\s*//\s*#?endregion\b",
};

impl LanguageConfig {
    /// Whether `path` names a SimplicityHL source file.
    pub fn matches_path(&self, path: &std::path::Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.extensions.iter().any(|ext| name.ends_with(ext))
    }
}

/// The program shown in a freshly opened editor.
pub const DEFAULT_SOURCE: &str = "// Welcome to Simplicity IDE
// Write your Simplicity contract here

fn main() {
    // Example: Simple assertion
    assert!(true)
}";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::path::Path;

    #[test]
    fn test_jet_lookup_accepts_both_spellings() {
        let bare = jet("sha_256").expect("sha_256 is a jet");
        let qualified = jet("jet::sha_256").expect("jet::sha_256 is a jet");
        assert_eq!(bare, qualified);
        assert_eq!(bare.signature, "Hash256 -> Hash256");
        assert_eq!(bare.qualified_name(), "jet::sha_256");
    }

    #[test]
    fn test_unknown_jet() {
        assert!(jet("sha_512").is_none());
        assert!(jet("jet::").is_none());
        assert!(jet("").is_none());
    }

    #[test]
    fn test_jet_names_are_unique() {
        let names: HashSet<_> = JETS.iter().map(|jet| jet.name).collect();
        assert_eq!(names.len(), JETS.len());
    }

    #[test]
    fn test_tables_are_disjoint() {
        let mut seen = HashSet::new();
        for word in KEYWORDS
            .iter()
            .chain(CONSTANTS)
            .chain(VARIANTS)
            .chain(PRIMITIVE_TYPES)
            .chain(BUILTIN_TYPES)
            .chain(BUILTIN_FUNCTIONS)
        {
            assert!(seen.insert(*word), "{} listed twice", word);
        }
    }

    #[test]
    fn test_matches_path() {
        assert!(LANGUAGE.matches_path(Path::new("contracts/p2pk.simf")));
        assert!(!LANGUAGE.matches_path(Path::new("contracts/p2pk.rs")));
        assert!(!LANGUAGE.matches_path(Path::new("/")));
    }
}
