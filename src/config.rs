//! Defaults and the TOML-backed scorer configuration.
//!
//! Compile-time defaults are constants here; runtime overrides come from a
//! config file and CLI flags in `main.rs`.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    scorer::{corpus::Corpus, tfidf::IdfMatching, token::TokenizerKind},
};

/// Sample corpus used when no documents are configured.
pub const SAMPLE_CORPUS: [&str; 4] = [
    "Menna love studying IR.",
    "IR is not for everyone.",
    "IR class is full of students.",
    "Studying IR is enjoyable.",
];

/// Absolute tolerance for comparing scores.
pub const SCORE_TOLERANCE: f64 = 1e-9;

/// Default log filter for the binary when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "tfidf_scorer=info";

/// Scorer settings, typically read from a TOML file:
///
/// ```toml
/// tokenizer = "unicode-words"
/// idf_matching = "case-folded-substring"
/// parallel = false
/// documents = ["Menna love studying IR.", "IR is not for everyone."]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScorerConfig {
    pub tokenizer: TokenizerKind,
    pub idf_matching: IdfMatching,
    /// score documents on the rayon pool
    pub parallel: bool,
    /// corpus documents in order; the sample corpus when absent
    pub documents: Option<Vec<String>>,
}

impl ScorerConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Configured corpus, validated; the sample corpus when none is set
    pub fn corpus(&self) -> Result<Corpus> {
        match &self.documents {
            Some(documents) => Corpus::new(documents.iter().cloned()),
            None => Ok(Corpus::sample()),
        }
    }
}
