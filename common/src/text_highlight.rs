//! Utilities for highlighting matched text in suggestion lists.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightTextSpan {
    pub text: String,
    pub is_highlighted: bool,
    pub index: u64,
}

/// Splits `text` into alternating plain/highlighted spans around every
/// case-insensitive occurrence of `query`. Highlighted spans are numbered in
/// order of appearance.
pub fn split_match_spans(text: &str, query: &str) -> Vec<HighlightTextSpan> {
    let query = query.trim();
    if text.is_empty() {
        return vec![];
    }
    if query.is_empty() {
        return vec![plain_span(text)];
    }

    let haystack = text.to_lowercase();
    let needle = query.to_lowercase();
    // The span boundaries below index into `text`; bail out of highlighting
    // if lower-casing changed any byte offsets.
    if haystack.len() != text.len() {
        return vec![plain_span(text)];
    }

    let mut spans = Vec::new();
    let mut highlight_index = 0;
    let mut cursor = 0;
    while let Some(offset) = haystack[cursor..].find(&needle) {
        let start = cursor + offset;
        let end = start + needle.len();
        if start > cursor {
            spans.push(plain_span(&text[cursor..start]));
        }
        spans.push(HighlightTextSpan {
            text: text[start..end].to_string(),
            is_highlighted: true,
            index: highlight_index,
        });
        highlight_index += 1;
        cursor = end;
    }
    if cursor < text.len() {
        spans.push(plain_span(&text[cursor..]));
    }
    spans
}

fn plain_span(text: &str) -> HighlightTextSpan {
    HighlightTextSpan { text: text.to_string(), is_highlighted: false, index: 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(spans: &[HighlightTextSpan]) -> String {
        spans.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_no_query_is_a_single_plain_span() {
        let spans = split_match_spans("Creatine Monohydrate", "");
        assert_eq!(spans.len(), 1);
        assert!(!spans[0].is_highlighted);
    }

    #[test]
    fn test_case_insensitive_match_preserves_original_casing() {
        let spans = split_match_spans("Creatine Monohydrate", "creatine");
        assert_eq!(spans[0].text, "Creatine");
        assert!(spans[0].is_highlighted);
        assert_eq!(joined(&spans), "Creatine Monohydrate");
    }

    #[test]
    fn test_repeated_matches_are_numbered() {
        let spans = split_match_spans("whey on whey", "whey");
        let highlighted: Vec<_> = spans.iter().filter(|s| s.is_highlighted).collect();
        assert_eq!(highlighted.len(), 2);
        assert_eq!(highlighted[0].index, 0);
        assert_eq!(highlighted[1].index, 1);
    }

    #[test]
    fn test_unmatched_query_yields_plain_text() {
        let spans = split_match_spans("Beta-Alanine", "creatine");
        assert_eq!(spans.len(), 1);
        assert!(!spans[0].is_highlighted);
        assert_eq!(joined(&spans), "Beta-Alanine");
    }
}
