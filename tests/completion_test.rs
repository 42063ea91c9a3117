//! 補完とホバーのテスト

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use simplicityhl_highlight::completion::{completions, hover, word_at, CompletionKind};
    use simplicityhl_highlight::language::{self, JETS};
    use test_case::test_case;

    #[test]
    fn test_every_jet_is_suggested_and_documented() {
        let items = completions("jet::");
        assert_eq!(items.len(), JETS.len());
        for (item, jet) in items.iter().zip(JETS) {
            assert_eq!(item.label, jet.qualified_name());
            assert_eq!(item.detail.as_deref(), Some(jet.signature));
            assert!(hover(&item.label).is_some(), "{} has no hover", item.label);
        }
    }

    #[test_case("le", &["jet::left_shift_32", "let"]; "jet before keyword")]
    #[test_case("Ri", &["Right"]; "variant")]
    #[test_case("u12", &["u128"]; "primitive type")]
    #[test_case("unwrap", &["unwrap", "unwrap_left", "unwrap_right"]; "builtin functions")]
    #[test_case("zzz", &[]; "nothing")]
    fn test_prefix_filtering(prefix: &str, expected: &[&str]) {
        let labels: Vec<String> = completions(prefix).into_iter().map(|i| i.label).collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn test_fn_prefix_offers_keyword_and_snippet() {
        let items = completions("fn");
        let kinds: Vec<_> = items.iter().map(|i| (i.label.as_str(), i.kind)).collect();
        assert_eq!(
            kinds,
            vec![("fn", CompletionKind::Keyword), ("fn main", CompletionKind::Snippet)]
        );
        assert!(items[1].is_snippet);
        assert!(items[1].insert_text.contains("${1}"));
    }

    #[test]
    fn test_completion_json_shape() {
        let items = completions("sha_256");
        let json = serde_json::to_value(&items[0]).unwrap();
        assert_eq!(json["label"], "jet::sha_256");
        assert_eq!(json["kind"], "function");
        assert_eq!(json["insertText"], "jet::sha_256");
        assert_eq!(json["isSnippet"], false);
        assert_eq!(json["group"], "crypto");

        let keyword = serde_json::to_value(&completions("let")[0]).unwrap();
        assert!(keyword.get("group").is_none());
    }

    #[test]
    fn test_hover_contents() {
        let contents = hover("jet::add_32").unwrap().contents;
        assert_eq!(contents[0], "**jet::add_32**");
        assert_eq!(contents[1], "`(Word32, Word32) -> (Bit, Word32)`");
        assert_eq!(contents[2], language::jet("add_32").unwrap().description);
        assert!(hover("let").is_none());
    }

    #[test_case("let x = jet::sha_256(y);", 4, Some("x"); "plain identifier")]
    #[test_case("let x = jet::sha_256(y);", 9, Some("jet::sha_256"); "on namespace")]
    #[test_case("let x = jet::sha_256(y);", 15, Some("jet::sha_256"); "on jet name")]
    #[test_case("let x = jet::sha_256(y);", 20, Some("jet::sha_256"); "end of word")]
    #[test_case("a = b", 2, None; "between words")]
    #[test_case("ab", 3, None; "past end")]
    fn test_word_at(line: &str, column: usize, expected: Option<&str>) {
        assert_eq!(word_at(line, column).map(|(_, _, word)| word), expected);
    }

    #[test]
    fn test_hover_from_cursor() {
        let line = "    let h = jet::sha_256_ctx_8_init();";
        let (start, end, word) = word_at(line, 20).unwrap();
        assert_eq!(&line[start..end], word);
        assert!(hover(word).is_some());
    }
}
