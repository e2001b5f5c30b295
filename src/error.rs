use thiserror::Error;

/// Errors surfaced while building a corpus or computing scores.
/// All of them are deterministic for a given input.
#[derive(Debug, Error)]
pub enum Error {
    #[error("corpus contains no documents")]
    EmptyCorpus,

    #[error("document {index} is empty")]
    EmptyDocument { index: usize },

    #[error("document contains no tokens")]
    NoTokens,

    #[error("i/o error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to encode report as json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to encode report as cbor: {0}")]
    Cbor(#[from] serde_cbor::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
