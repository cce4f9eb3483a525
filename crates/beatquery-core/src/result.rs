use crate::bpm::BpmRange;
use crate::key::Key;
use crate::tokenizer::{QueryToken, TokenKind};
use serde::{Deserialize, Serialize};

/// Facets extracted from one search query, each in query order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    pub bpm_values: Vec<u16>,
    pub bpm_ranges: Vec<BpmRange>,
    pub keys: Vec<Key>,
    pub keywords: Vec<String>,
}

impl ParseResult {
    pub fn from_tokens(tokens: impl IntoIterator<Item = QueryToken>) -> Self {
        let mut result = Self::default();
        for token in tokens {
            match token.kind {
                TokenKind::BpmValue(bpm) => result.bpm_values.push(bpm),
                TokenKind::BpmRange(range) => result.bpm_ranges.push(range),
                TokenKind::Keys(keys) => result.keys.extend(keys),
                TokenKind::Keyword(keyword) => result.keywords.push(keyword),
                TokenKind::Rejected => {}
            }
        }
        result
    }

    /// True when the query yielded nothing searchable
    pub fn is_empty(&self) -> bool {
        self.bpm_values.is_empty()
            && self.bpm_ranges.is_empty()
            && self.keys.is_empty()
            && self.keywords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::Tokenizer;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_shape() {
        let result = Tokenizer::default().parse("C#m trap 150-170 140");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "bpmValues": [140],
                "bpmRanges": [[150, 170]],
                "keys": ["Csmin"],
                "keywords": ["trap"],
            })
        );
    }

    #[test]
    fn test_empty_query() {
        assert!(Tokenizer::default().parse("").is_empty());
        assert!(Tokenizer::default().parse(" 999 - , ").is_empty());
        assert!(!Tokenizer::default().parse("x").is_empty());
    }
}
