//! # Content Filter
//!
//! Whole-token, case-insensitive masking of blocked words.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::errors::{ChirpError, ChirpResult};

/// Longest accepted chirp body, in characters
pub const MAX_CHIRP_LENGTH: usize = 140;

/// Replacement for a blocked token
pub const MASK: &str = "****";

/// Vocabulary used when none is configured
pub const DEFAULT_BLOCKED_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

/// Set of blocked words, stored lowercase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct BlockedWords(HashSet<String>);

impl BlockedWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        )
    }

    /// Whether `token` matches a blocked word, ignoring case
    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(&token.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for BlockedWords {
    fn default() -> Self {
        Self::new(DEFAULT_BLOCKED_WORDS)
    }
}

impl From<Vec<String>> for BlockedWords {
    fn from(words: Vec<String>) -> Self {
        Self::new(words)
    }
}

impl From<BlockedWords> for Vec<String> {
    fn from(words: BlockedWords) -> Self {
        let mut list: Vec<String> = words.0.into_iter().collect();
        list.sort();
        list
    }
}

/// Mask every blocked token in `text`
///
/// Splits on single spaces only, so runs of spaces survive as empty tokens and
/// the output keeps the input's spacing.
pub fn filter(text: &str, blocked: &BlockedWords) -> String {
    text.split(' ')
        .map(|token| if blocked.contains(token) { MASK } else { token })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Reject bodies longer than [`MAX_CHIRP_LENGTH`] characters
pub fn validate_body(body: &str) -> ChirpResult<()> {
    let length = body.chars().count();
    if length > MAX_CHIRP_LENGTH {
        return Err(ChirpError::TooLong {
            length,
            max: MAX_CHIRP_LENGTH,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kerfuffle() -> BlockedWords {
        BlockedWords::new(["kerfuffle"])
    }

    #[test]
    fn test_masks_whole_token() {
        assert_eq!(filter("this is kerfuffle", &kerfuffle()), "this is ****");
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert_eq!(filter("Kerfuffle now", &kerfuffle()), "**** now");
        assert_eq!(filter("KERFUFFLE", &kerfuffle()), "****");
    }

    #[test]
    fn test_no_partial_token_match() {
        assert_eq!(filter("kerfufflement", &kerfuffle()), "kerfufflement");
        assert_eq!(filter("kerfuffle!", &kerfuffle()), "kerfuffle!");
    }

    #[test]
    fn test_spacing_preserved() {
        assert_eq!(filter("a  kerfuffle ", &kerfuffle()), "a  **** ");
        assert_eq!(filter("", &kerfuffle()), "");
    }

    #[test]
    fn test_default_vocabulary() {
        let blocked = BlockedWords::default();
        assert_eq!(blocked.len(), 3);
        assert_eq!(
            filter("Sharbert and fornax", &blocked),
            "**** and ****"
        );
    }

    #[test]
    fn test_configured_words_are_lowercased() {
        let blocked = BlockedWords::new(["FooBar"]);
        assert!(blocked.contains("foobar"));
        assert_eq!(filter("FOOBAR baz", &blocked), "**** baz");
    }

    #[test]
    fn test_length_boundary() {
        let ok = "a".repeat(MAX_CHIRP_LENGTH);
        let too_long = "a".repeat(MAX_CHIRP_LENGTH + 1);

        assert!(validate_body(&ok).is_ok());
        assert_eq!(
            validate_body(&too_long),
            Err(ChirpError::TooLong {
                length: 141,
                max: 140
            })
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 140 two-byte characters
        let body = "é".repeat(MAX_CHIRP_LENGTH);
        assert_eq!(body.len(), 280);
        assert!(validate_body(&body).is_ok());
    }

    #[test]
    fn test_blocked_words_serde() {
        let blocked: BlockedWords = serde_json::from_str(r#"["Fornax"]"#).unwrap();
        assert!(blocked.contains("fornax"));
        assert_eq!(serde_json::to_string(&blocked).unwrap(), r#"["fornax"]"#);
    }
}
