use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Splits already-lowercased text into word tokens.
///
/// The scorer never lowercases inside a tokenizer; it hands over
/// `document.to_lowercase()` and counts whatever comes back.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Lowercase `document` and tokenize it
    #[inline]
    fn tokenize_lowercase(&self, document: &str) -> Vec<String> {
        self.tokenize(&document.to_lowercase())
    }
}

/// UAX #29 word boundaries, punctuation excluded
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeWordTokenizer;

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_words().map(str::to_owned).collect()
    }
}

/// Splits on whitespace only. Punctuation stays attached to its word
/// (`"ir."` and `"ir"` are different tokens).
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_owned).collect()
    }
}

/// Tokenizer selection for config files and the CLI
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TokenizerKind {
    #[default]
    UnicodeWords,
    Whitespace,
}

impl Tokenizer for TokenizerKind {
    fn tokenize(&self, text: &str) -> Vec<String> {
        match self {
            TokenizerKind::UnicodeWords => UnicodeWordTokenizer.tokenize(text),
            TokenizerKind::Whitespace => WhitespaceTokenizer.tokenize(text),
        }
    }
}

/// TokenFrequency
/// Occurrence counts of each token in one document, plus the total token count.
/// Insertion order of first occurrence is kept.
///
/// # Examples
/// ```
/// use tfidf_scorer::TokenFrequency;
/// let mut freq = TokenFrequency::new();
/// freq.add_tokens(&["ir", "is", "ir"]);
/// assert_eq!(freq.token_count("ir"), 2);
/// assert_eq!(freq.token_sum(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TokenFrequency {
    token_count: IndexMap<String, u32>,
    total_token_count: u64,
}

impl TokenFrequency {
    /// Create an empty TokenFrequency
    pub fn new() -> Self {
        TokenFrequency {
            token_count: IndexMap::new(),
            total_token_count: 0,
        }
    }

    /// Lowercase and tokenize `document`, then count its tokens
    pub fn from_document<T>(tokenizer: &T, document: &str) -> Self
    where
        T: Tokenizer + ?Sized,
    {
        let mut freq = Self::new();
        freq.add_tokens(&tokenizer.tokenize_lowercase(document));
        freq
    }

    /// Add a token
    ///
    /// # Arguments
    /// * `token` - token to count
    #[inline]
    pub fn add_token(&mut self, token: &str) -> &mut Self {
        let count = self.token_count.entry(token.to_string()).or_insert(0);
        *count += 1;
        self.total_token_count += 1;
        self
    }

    /// Add several tokens
    ///
    /// # Arguments
    /// * `tokens` - slice of tokens to count
    #[inline]
    pub fn add_tokens<T>(&mut self, tokens: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for token in tokens {
            self.add_token(token.as_ref());
        }
        self
    }

    /// Occurrence count of `token`, 0 when absent
    ///
    /// # Returns
    /// * `u32` - number of exact matches
    #[inline]
    pub fn token_count(&self, token: &str) -> u32 {
        *self.token_count.get(token).unwrap_or(&0)
    }

    /// Total number of tokens, duplicates included
    #[inline]
    pub fn token_sum(&self) -> u64 {
        self.total_token_count
    }

    /// Number of distinct tokens
    #[inline]
    pub fn token_num(&self) -> usize {
        self.token_count.len()
    }

    /// Distinct tokens, in order of first occurrence
    #[inline]
    pub fn token_set_ref_str(&self) -> Vec<&str> {
        self.token_count.keys().map(|s| s.as_str()).collect()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total_token_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unicode_tokenizer_drops_punctuation() {
        let tokens = UnicodeWordTokenizer.tokenize("menna love studying ir.");
        assert_eq!(tokens, vec!["menna", "love", "studying", "ir"]);
    }

    #[test]
    fn unicode_tokenizer_keeps_contractions_whole() {
        let tokens = UnicodeWordTokenizer.tokenize("don't stop, it's fine!");
        assert_eq!(tokens, vec!["don't", "stop", "it's", "fine"]);
    }

    #[test]
    fn whitespace_tokenizer_keeps_punctuation_attached() {
        let tokens = WhitespaceTokenizer.tokenize("menna love  studying ir.");
        assert_eq!(tokens, vec!["menna", "love", "studying", "ir."]);
    }

    #[test]
    fn tokenize_lowercase_lowercases_first() {
        let tokens = TokenizerKind::UnicodeWords.tokenize_lowercase("Studying IR is enjoyable.");
        assert_eq!(tokens, vec!["studying", "ir", "is", "enjoyable"]);
    }

    #[test]
    fn token_frequency_counts_exact_matches() {
        let freq = TokenFrequency::from_document(&UnicodeWordTokenizer, "IR class is full of IR students.");
        assert_eq!(freq.token_sum(), 7);
        assert_eq!(freq.token_num(), 6);
        assert_eq!(freq.token_count("ir"), 2);
        assert_eq!(freq.token_count("IR"), 0);
        assert_eq!(freq.token_count("i"), 0);
        assert_eq!(freq.token_set_ref_str(), vec!["ir", "class", "is", "full", "of", "students"]);
    }

    #[test]
    fn punctuation_only_document_is_empty() {
        let freq = TokenFrequency::from_document(&UnicodeWordTokenizer, "... !!");
        assert!(freq.is_empty());
        assert_eq!(freq.token_num(), 0);
    }

    #[test]
    fn tokenizer_kind_parses_from_kebab_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            tokenizer: TokenizerKind,
        }
        let w: Wrapper = toml::from_str("tokenizer = \"whitespace\"").unwrap();
        assert_eq!(w.tokenizer, TokenizerKind::Whitespace);
        let w: Wrapper = toml::from_str("tokenizer = \"unicode-words\"").unwrap();
        assert_eq!(w.tokenizer, TokenizerKind::UnicodeWords);
    }
}
