//! Declarative classification rules.
//!
//! Each scanning mode owns an ordered list of rules. The scanner tries them
//! in declaration order at the current offset and the first non-empty match
//! wins, so the order below is the priority order:
//!
//! 1. comments (nothing inside a comment is ever reclassified)
//! 2. macro invocations such as `assert!`
//! 3. `fn` introducing a definition, then the remaining keywords
//! 4. literal constants, then sum-type constructor tags
//! 5. primitive types, built-in types, then any capitalised identifier
//! 6. built-in functions
//! 7. `jet::`, `witness::` and `param::` references
//! 8. hexadecimal, binary and decimal numbers
//! 9. string literals
//! 10. function calls (identifier followed by `(`)
//! 11. compound operators before single-character operators
//! 12. brackets and punctuation
//! 13. plain lowercase identifiers
//!
//! No pattern matches across a line terminator, which keeps line-by-line
//! classification identical to whole-text classification.

use fancy_regex::{Captures, Regex};
use std::sync::LazyLock;

use super::state::{Mode, Transition};
use super::token::Category;
use crate::language::{
    Naming, BUILTIN_FUNCTIONS, BUILTIN_TYPES, CONSTANTS, KEYWORDS, NAMESPACES, PRIMITIVE_TYPES,
    VARIANTS,
};

/// What a matching rule emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    /// One token spanning the whole match.
    Whole(Category),
    /// One token per capture group, in group order.
    Groups(&'static [Category]),
}

#[derive(Debug)]
pub struct Rule {
    pub name: &'static str,
    pattern: Regex,
    pub emit: Emit,
    pub transition: Option<Transition>,
}

/// `\b` over ASCII word characters only; the engine's own `\b` is
/// Unicode-aware.
const ASCII_BOUNDARY: &str =
    "(?:(?<![A-Za-z0-9_])(?=[A-Za-z0-9_])|(?<=[A-Za-z0-9_])(?![A-Za-z0-9_]))";

impl Rule {
    /// Compiles `pattern` anchored at the scan offset. Every `\b` in it is an
    /// ASCII word boundary.
    fn new(name: &'static str, pattern: &str, emit: Emit, transition: Option<Transition>) -> Self {
        let anchored = format!("^(?:{})", pattern.replace(r"\b", ASCII_BOUNDARY));
        let pattern = Regex::new(&anchored)
            .unwrap_or_else(|e| panic!("rule `{}` has an invalid pattern: {}", name, e));
        Self {
            name,
            pattern,
            emit,
            transition,
        }
    }

    /// Matches the rule at the start of `rest`. Empty matches never count.
    pub fn captures<'t>(&self, rest: &'t str) -> Option<Captures<'t>> {
        let captures = self.pattern.captures(rest).ok().flatten()?;
        let whole = captures.get(0)?;
        if whole.end() == 0 {
            return None;
        }
        Some(captures)
    }
}

/// The ordered rule list of one mode.
#[derive(Debug)]
pub struct ModeRules {
    pub rules: Vec<Rule>,
    /// Applied without consuming input when no rule matches. Modes without
    /// one fall back to a single plain-text character.
    pub fallthrough: Option<Transition>,
}

impl ModeRules {
    fn new(rules: Vec<Rule>, fallthrough: Option<Transition>) -> Self {
        Self { rules, fallthrough }
    }

    pub fn find<'t>(&self, rest: &'t str) -> Option<(&Rule, Captures<'t>)> {
        self.rules
            .iter()
            .find_map(|rule| rule.captures(rest).map(|captures| (rule, captures)))
    }
}

struct Grammar {
    start: ModeRules,
    comment: ModeRules,
    function_name: ModeRules,
}

static GRAMMAR: LazyLock<Grammar> = LazyLock::new(|| Grammar {
    start: ModeRules::new(start_rules(), None),
    comment: ModeRules::new(comment_rules(), None),
    function_name: ModeRules::new(
        function_name_rules(),
        Some(Transition::Goto(Mode::Start)),
    ),
});

pub fn rules_for(mode: Mode) -> &'static ModeRules {
    let grammar = &*GRAMMAR;
    match mode {
        Mode::Start => &grammar.start,
        Mode::Comment => &grammar.comment,
        Mode::FunctionName => &grammar.function_name,
    }
}

/// `\b(?:a|b|c)\b` for a closed word set.
fn words(list: &[&str]) -> String {
    format!(r"\b(?:{})\b", list.join("|"))
}

const IDENT_TAIL: &str = "[a-zA-Z0-9_]*";

fn start_rules() -> Vec<Rule> {
    use Category::*;
    use Emit::*;

    let mut rules = vec![
        Rule::new("line-comment", r"//.*", Whole(Comment), None),
        Rule::new("block-comment", r"/\*.*?\*/", Whole(Comment), None),
        Rule::new(
            "block-comment-open",
            r"/\*.*\n?",
            Whole(Comment),
            Some(Transition::Push(Mode::Comment)),
        ),
        Rule::new(
            "macro",
            &format!(r"\b[a-z_]{}!(?!=)", IDENT_TAIL),
            Whole(MacroInvocation),
            None,
        ),
        Rule::new(
            "function-definition",
            r"\b(fn)([ \t]+)",
            Groups(&[Keyword, PlainText]),
            Some(Transition::Goto(Mode::FunctionName)),
        ),
        Rule::new("keyword", &words(KEYWORDS), Whole(Keyword), None),
        Rule::new("constant", &words(CONSTANTS), Whole(LiteralConstant), None),
        Rule::new("variant", &words(VARIANTS), Whole(LiteralConstant), None),
        Rule::new("primitive-type", &words(PRIMITIVE_TYPES), Whole(TypeName), None),
        Rule::new("builtin-type", &words(BUILTIN_TYPES), Whole(TypeName), None),
        Rule::new(
            "capitalized-type",
            &format!(r"\b[A-Z]{}\b", IDENT_TAIL),
            Whole(TypeName),
            None,
        ),
        Rule::new("builtin-function", &words(BUILTIN_FUNCTIONS), Whole(Builtin), None),
    ];

    for namespace in NAMESPACES {
        let (name, emit): (&str, &'static [Category]) = match namespace.naming {
            Naming::Snake => (
                r"([a-z_][a-zA-Z0-9_]*)",
                &[Namespace, Operator, FunctionReference],
            ),
            Naming::UpperSnake => (r"([A-Z_][A-Z0-9_]*)\b", &[Namespace, Operator, ConstantReference]),
        };
        rules.push(Rule::new(
            "namespace-reference",
            &format!(r"\b({})(::){}", namespace.prefix, name),
            Groups(emit),
            None,
        ));
    }

    rules.extend([
        Rule::new("hex-number", r"\b0x[0-9a-fA-F_]+\b", Whole(Number), None),
        Rule::new("binary-number", r"\b0b[01_]+\b", Whole(Number), None),
        Rule::new("decimal-number", r"\b[0-9][0-9_]*\b", Whole(Number), None),
        Rule::new("string", r#""(?:[^\\"\n]|\\.)*?""#, Whole(String), None),
        Rule::new(
            "function-call",
            &format!(r"\b[a-z_]{}(?=[ \t]*\()", IDENT_TAIL),
            Whole(FunctionReference),
            None,
        ),
        Rule::new(
            "compound-operator",
            r"->|=>|::|==|!=|<=|>=|&&|\|\|",
            Whole(Operator),
            None,
        ),
        Rule::new("operator", r"[+\-*/%&|^!~<>=:]", Whole(Operator), None),
        Rule::new("bracket-open", r"[{\[(]", Whole(BracketOpen), None),
        Rule::new("bracket-close", r"[}\])]", Whole(BracketClose), None),
        Rule::new("punctuation", r"[;,.]", Whole(Punctuation), None),
        Rule::new(
            "identifier",
            &format!(r"\b[a-z_]{}\b", IDENT_TAIL),
            Whole(Identifier),
            None,
        ),
    ]);

    rules
}

fn comment_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "block-comment-close",
            r".*?\*/",
            Emit::Whole(Category::Comment),
            Some(Transition::Pop),
        ),
        Rule::new("block-comment-line", r".*\n?", Emit::Whole(Category::Comment), None),
    ]
}

fn function_name_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "definition-name",
            &format!("[a-zA-Z_]{}", IDENT_TAIL),
            Emit::Whole(Category::DefinitionName),
            Some(Transition::Goto(Mode::Start)),
        ),
        Rule::new("blank", r"[ \t]+", Emit::Whole(Category::PlainText), None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_rule(mode: Mode, text: &str) -> Option<&'static str> {
        rules_for(mode).find(text).map(|(rule, _)| rule.name)
    }

    #[test]
    fn test_every_pattern_compiles() {
        for mode in [Mode::Start, Mode::Comment, Mode::FunctionName] {
            assert!(!rules_for(mode).rules.is_empty());
        }
    }

    #[test]
    fn test_only_function_name_falls_through() {
        assert_eq!(rules_for(Mode::Start).fallthrough, None);
        assert_eq!(rules_for(Mode::Comment).fallthrough, None);
        assert_eq!(
            rules_for(Mode::FunctionName).fallthrough,
            Some(Transition::Goto(Mode::Start))
        );
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(first_rule(Mode::Start, "// fn"), Some("line-comment"));
        assert_eq!(first_rule(Mode::Start, "assert!(x)"), Some("macro"));
        assert_eq!(first_rule(Mode::Start, "fn main"), Some("function-definition"));
        assert_eq!(first_rule(Mode::Start, "fn"), Some("keyword"));
        assert_eq!(first_rule(Mode::Start, "Some(x)"), Some("variant"));
        assert_eq!(first_rule(Mode::Start, "u256"), Some("primitive-type"));
        assert_eq!(first_rule(Mode::Start, "Pubkey"), Some("builtin-type"));
        assert_eq!(first_rule(Mode::Start, "Word64"), Some("capitalized-type"));
        assert_eq!(first_rule(Mode::Start, "unwrap(x)"), Some("builtin-function"));
        assert_eq!(first_rule(Mode::Start, "jet::add_32"), Some("namespace-reference"));
        assert_eq!(first_rule(Mode::Start, "0b1010"), Some("binary-number"));
        assert_eq!(first_rule(Mode::Start, "check (x)"), Some("function-call"));
        assert_eq!(first_rule(Mode::Start, "->"), Some("compound-operator"));
        assert_eq!(first_rule(Mode::Start, "check"), Some("identifier"));
    }

    #[test]
    fn test_macro_does_not_swallow_not_equal() {
        assert_eq!(first_rule(Mode::Start, "x!=y"), Some("identifier"));
    }

    #[test]
    fn test_group_rules_cover_whole_match() {
        let (rule, captures) = rules_for(Mode::Start).find("witness::MY_VAL;").unwrap();
        let Emit::Groups(categories) = rule.emit else {
            panic!("namespace references emit groups");
        };
        assert_eq!(captures.len(), categories.len() + 1);
        let groups_end = captures.get(categories.len()).unwrap().end();
        assert_eq!(groups_end, captures.get(0).unwrap().end());
    }

    #[test]
    fn test_word_boundaries_are_ascii() {
        let (rule, captures) = rules_for(Mode::Start).find("café").unwrap();
        assert_eq!(rule.name, "identifier");
        assert_eq!(captures.get(0).unwrap().as_str(), "caf");
        assert_eq!(first_rule(Mode::Start, "é"), None);
        assert_eq!(first_rule(Mode::Start, "u8é"), Some("primitive-type"));
    }

    #[test]
    fn test_empty_matches_are_rejected() {
        assert!(rules_for(Mode::Comment).find("").is_none());
        assert!(rules_for(Mode::Start).find("").is_none());
    }
}
