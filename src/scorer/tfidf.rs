use serde::{Deserialize, Serialize};

use crate::{error::{Error, Result}, scorer::{corpus::Corpus, token::{TokenFrequency, Tokenizer}}};

/// Formulas for the TF and IDF factors.
///
/// Implement this to plug a different weighting into `TfIdfScorer<T, E>`.
/// Callers guarantee `token_sum > 0` and `doc_num > 0`.
pub trait TfIdfEngine {
    /// TF from the number of matching tokens and the document length
    fn tf(count: u32, token_sum: u64) -> f64;
    /// IDF from the corpus size and the number of documents containing the word
    fn idf(doc_num: usize, doc_freq: usize) -> f64;
}

/// Log-smoothed TF-IDF
/// - tf  = log10(count / token_sum + 1)
/// - idf = log10(doc_num / (doc_freq + 1))
///
/// An absent word has tf 0. A word found in every document has a small
/// negative idf.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultTfIdfEngine;

impl TfIdfEngine for DefaultTfIdfEngine {
    #[inline]
    fn tf(count: u32, token_sum: u64) -> f64 {
        (count as f64 / token_sum as f64 + 1.0).log10()
    }

    #[inline]
    fn idf(doc_num: usize, doc_freq: usize) -> f64 {
        (doc_num as f64 / (doc_freq as f64 + 1.0)).log10()
    }
}

/// How a word is looked up in a document when counting document frequency.
///
/// TF always matches whole tokens. The substring policies deliberately do
/// not, so `"i"` is found inside `"ir"` or `"is"`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum IdfMatching {
    /// Substring of the lowercased document text
    #[default]
    CaseFoldedSubstring,
    /// Substring of the document text as given
    RawSubstring,
    /// Exact token of the lowercased, tokenized document
    Token,
}

impl IdfMatching {
    /// Whether `word` counts as present in `document`
    pub fn matches<T>(&self, word: &str, document: &str, tokenizer: &T) -> bool
    where
        T: Tokenizer + ?Sized,
    {
        match self {
            IdfMatching::CaseFoldedSubstring => document.to_lowercase().contains(word),
            IdfMatching::RawSubstring => document.contains(word),
            IdfMatching::Token => tokenizer
                .tokenize_lowercase(document)
                .iter()
                .any(|token| token == word),
        }
    }
}

/// Number of documents in `corpus` containing `word` under `matching`
pub fn document_frequency<T>(word: &str, corpus: &Corpus, matching: IdfMatching, tokenizer: &T) -> usize
where
    T: Tokenizer + ?Sized,
{
    corpus
        .iter()
        .filter(|doc| matching.matches(word, doc, tokenizer))
        .count()
}

/// TF of `word` in `document` with the default engine.
///
/// # Arguments
/// * `word` - lowercase word, matched against whole tokens
/// * `document` - raw document text, lowercased before tokenizing
/// * `tokenizer` - word splitter
///
/// # Returns
/// * `Result<f64>` - `log10(count / total + 1)`, `Error::NoTokens` when the
///   document yields no tokens
pub fn term_frequency<T>(word: &str, document: &str, tokenizer: &T) -> Result<f64>
where
    T: Tokenizer + ?Sized,
{
    let freq = TokenFrequency::from_document(tokenizer, document);
    term_frequency_of::<DefaultTfIdfEngine>(word, &freq)
}

/// TF of `word` from precomputed token counts
pub fn term_frequency_of<E: TfIdfEngine>(word: &str, freq: &TokenFrequency) -> Result<f64> {
    if freq.is_empty() {
        return Err(Error::NoTokens);
    }
    Ok(E::tf(freq.token_count(word), freq.token_sum()))
}

/// IDF of `word` across `corpus` with the default engine.
///
/// # Arguments
/// * `word` - word to look up
/// * `corpus` - non-empty corpus
/// * `matching` - document containment policy
/// * `tokenizer` - only used by `IdfMatching::Token`
///
/// # Returns
/// * `f64` - `log10(doc_num / (doc_freq + 1))`
pub fn inverse_document_frequency<T>(word: &str, corpus: &Corpus, matching: IdfMatching, tokenizer: &T) -> f64
where
    T: Tokenizer + ?Sized,
{
    let doc_freq = document_frequency(word, corpus, matching, tokenizer);
    DefaultTfIdfEngine::idf(corpus.get_doc_num(), doc_freq)
}
