pub mod corpus;
pub mod score_map;
pub mod tfidf;
pub mod token;

use std::marker::PhantomData;

use indexmap::{IndexMap, IndexSet};
use rayon::prelude::*;
use tracing::{debug, info, trace};

use crate::{
    config::ScorerConfig,
    error::{Error, Result},
    scorer::{
        corpus::Corpus,
        score_map::ScoreMap,
        tfidf::{document_frequency, term_frequency_of, DefaultTfIdfEngine, IdfMatching, TfIdfEngine},
        token::{TokenFrequency, Tokenizer, TokenizerKind},
    },
};

/// Word IDF, computed once per distinct word of a corpus
type IdfCache<'a> = IndexMap<&'a str, f64>;

/// TF-IDF scorer
///
/// `TfIdfScorer<T, E>` has the following generic parameters:
/// - `T`: tokenizer (e.g., TokenizerKind, UnicodeWordTokenizer)
/// - `E`: TF/IDF formulas (e.g., DefaultTfIdfEngine)
///
/// The scorer holds no corpus; every call takes one and recomputes
/// everything from it.
#[derive(Debug, Clone)]
pub struct TfIdfScorer<T = TokenizerKind, E = DefaultTfIdfEngine>
where
    T: Tokenizer,
    E: TfIdfEngine,
{
    tokenizer: T,
    idf_matching: IdfMatching,
    _marker: PhantomData<E>,
}

impl Default for TfIdfScorer {
    fn default() -> Self {
        Self::new(TokenizerKind::default())
    }
}

impl From<&ScorerConfig> for TfIdfScorer {
    fn from(config: &ScorerConfig) -> Self {
        Self::new(config.tokenizer).with_idf_matching(config.idf_matching)
    }
}

impl<T, E> TfIdfScorer<T, E>
where
    T: Tokenizer,
    E: TfIdfEngine,
{
    /// Create a scorer with the default IDF matching
    pub fn new(tokenizer: T) -> Self {
        Self {
            tokenizer,
            idf_matching: IdfMatching::default(),
            _marker: PhantomData,
        }
    }

    pub fn with_idf_matching(mut self, idf_matching: IdfMatching) -> Self {
        self.idf_matching = idf_matching;
        self
    }

    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }

    pub fn idf_matching(&self) -> IdfMatching {
        self.idf_matching
    }

    /// TF of `word` in `document`
    /// Fails with `Error::NoTokens` when the document yields no tokens
    pub fn term_frequency(&self, word: &str, document: &str) -> Result<f64> {
        let freq = TokenFrequency::from_document(&self.tokenizer, document);
        term_frequency_of::<E>(word, &freq)
    }

    /// IDF of `word` across `corpus`
    pub fn inverse_document_frequency(&self, word: &str, corpus: &Corpus) -> f64 {
        let doc_freq = document_frequency(word, corpus, self.idf_matching, &self.tokenizer);
        E::idf(corpus.get_doc_num(), doc_freq)
    }

    /// Score map over the whole corpus.
    ///
    /// Each document is scored in order and written into one map keyed by
    /// word, so a word found in several documents keeps the score of the
    /// last one. Scores from earlier documents are lost, not summed or
    /// averaged; use [`Self::score_documents`] when they matter.
    pub fn score(&self, corpus: &Corpus) -> Result<ScoreMap> {
        let per_doc = self.score_documents(corpus)?;
        Ok(Self::merge(per_doc))
    }

    /// One score map per document, in corpus order.
    /// IDF values are shared across documents.
    pub fn score_documents(&self, corpus: &Corpus) -> Result<Vec<ScoreMap>> {
        let freqs = corpus
            .iter()
            .enumerate()
            .map(|(index, doc)| self.token_frequency(index, doc))
            .collect::<Result<Vec<_>>>()?;

        let vocab = Self::vocabulary(&freqs);
        let idf: IdfCache = vocab
            .into_iter()
            .map(|word| (word, self.inverse_document_frequency(word, corpus)))
            .collect();
        info!(doc_num = corpus.get_doc_num(), vocab_size = idf.len(), "scoring corpus");

        Ok(freqs
            .iter()
            .enumerate()
            .map(|(index, freq)| Self::document_scores(index, freq, &idf))
            .collect())
    }

    /// Distinct words of all documents, in first-seen order
    fn vocabulary(freqs: &[TokenFrequency]) -> Vec<&str> {
        let mut seen = IndexSet::new();
        for freq in freqs {
            seen.extend(freq.token_set_ref_str());
        }
        seen.into_iter().collect()
    }

    fn token_frequency(&self, index: usize, document: &str) -> Result<TokenFrequency> {
        let freq = TokenFrequency::from_document(&self.tokenizer, document);
        if freq.is_empty() {
            return Err(Error::EmptyDocument { index });
        }
        debug!(index, tokens = freq.token_sum(), distinct = freq.token_num(), "tokenized document");
        Ok(freq)
    }

    /// `idf_cache` holds every word of `freq`, it is built from the same token counts
    fn document_scores(index: usize, freq: &TokenFrequency, idf_cache: &IdfCache) -> ScoreMap {
        let mut scores = ScoreMap::with_capacity(freq.token_num());
        for word in freq.token_set_ref_str() {
            let tf = E::tf(freq.token_count(word), freq.token_sum());
            let idf = idf_cache[word];
            trace!(index, word, tf, idf, "scored word");
            scores.insert(word, tf * idf);
        }
        scores
    }

    /// Fold per-document maps in order, later documents overwrite
    fn merge(per_doc: Vec<ScoreMap>) -> ScoreMap {
        per_doc.into_iter().fold(ScoreMap::new(), |mut acc, scores| {
            acc.overwrite_with(scores);
            acc
        })
    }
}

impl<T, E> TfIdfScorer<T, E>
where
    T: Tokenizer,
    E: TfIdfEngine + Send + Sync,
{
    /// Same result as [`Self::score`], with tokenizing, IDF and per-document
    /// scoring spread over the rayon pool. Maps are merged in corpus order.
    pub fn par_score(&self, corpus: &Corpus) -> Result<ScoreMap> {
        let per_doc = self.par_score_documents(corpus)?;
        Ok(Self::merge(per_doc))
    }

    /// Parallel [`Self::score_documents`]
    pub fn par_score_documents(&self, corpus: &Corpus) -> Result<Vec<ScoreMap>> {
        let freqs = corpus
            .documents()
            .par_iter()
            .enumerate()
            .map(|(index, doc)| self.token_frequency(index, doc))
            .collect::<Result<Vec<_>>>()?;

        let vocab = Self::vocabulary(&freqs);
        let idf_values: Vec<f64> = vocab
            .par_iter()
            .map(|word| self.inverse_document_frequency(word, corpus))
            .collect();
        let idf: IdfCache = vocab.into_iter().zip(idf_values).collect();
        info!(
            doc_num = corpus.get_doc_num(),
            vocab_size = idf.len(),
            threads = rayon::current_num_threads(),
            "scoring corpus in parallel"
        );

        Ok(freqs
            .par_iter()
            .enumerate()
            .map(|(index, freq)| Self::document_scores(index, freq, &idf))
            .collect())
    }
}

/// Score `corpus` with the default tokenizer and IDF matching
pub fn score(corpus: &Corpus) -> Result<ScoreMap> {
    let scorer: TfIdfScorer = TfIdfScorer::default();
    scorer.score(corpus)
}
