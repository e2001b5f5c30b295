//! This crate computes TF-IDF word scores over a small corpus of documents.

pub mod config;
pub mod error;
pub mod report;
pub mod scorer;
pub mod utils;

/// TF-IDF Scorer
/// The top-level struct of this crate.
/// For every distinct word of a corpus it computes `tf * idf` and collects
/// the results in a `ScoreMap`.
///
/// `TfIdfScorer<T, E>` has the following generic parameters:
/// - `T`: Tokenizer (e.g., TokenizerKind, UnicodeWordTokenizer, WhitespaceTokenizer)
/// - `E`: TF/IDF formula engine (e.g., DefaultTfIdfEngine)
///
/// A word that appears in several documents keeps the score computed for
/// the last of them, in corpus order. `score_documents` returns the
/// per-document maps when the overwritten values are needed.
///
/// `par_score` gives the same map as `score`, computed on the rayon pool.
pub use scorer::TfIdfScorer;

/// Score a corpus with the default tokenizer and IDF matching
pub use scorer::score;

/// Corpus
/// Ordered, immutable collection of document strings.
/// Construction rejects an empty collection and blank documents, so IDF is
/// always defined.
///
/// `Corpus::sample()` provides the four-sentence sample corpus.
pub use scorer::corpus::Corpus;

/// Score Map
/// Word -> score mapping produced by the scorer.
/// Supports sorted views, top-N extraction, serialization and a
/// `word<TAB>score` text rendering.
pub use scorer::score_map::ScoreMap;

/// Tokenizers
/// `Tokenizer` is the seam for word splitting. The scorer lowercases each
/// document before handing it over.
/// - `UnicodeWordTokenizer`: UAX #29 word boundaries, punctuation excluded
/// - `WhitespaceTokenizer`: whitespace split, punctuation kept on the word
/// - `TokenizerKind`: config/CLI selection of the above
///
/// `TokenFrequency` counts tokens of a single document.
pub use scorer::token::{TokenFrequency, Tokenizer, TokenizerKind, UnicodeWordTokenizer, WhitespaceTokenizer};

/// TF-IDF Calculation Engine
/// `TfIdfEngine` defines the TF and IDF formulas; `DefaultTfIdfEngine`
/// uses log10 smoothing on both.
///
/// `IdfMatching` decides how a word is found in a document when counting
/// document frequency.
pub use scorer::tfidf::{
    document_frequency, inverse_document_frequency, term_frequency, DefaultTfIdfEngine, IdfMatching, TfIdfEngine,
};

pub use config::ScorerConfig;
pub use error::{Error, Result};
pub use report::OutputFormat;
