use std::{io::Write, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use tfidf_scorer::{
    config::DEFAULT_LOG_FILTER, report, Corpus, Error, IdfMatching, OutputFormat, Result, ScorerConfig, TfIdfScorer,
    TokenizerKind,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tfidf-scorer", about = "TF-IDF word scores for a small corpus")]
struct Args {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Document text, repeat for several documents (overrides config documents)
    #[arg(short, long = "doc")]
    docs: Vec<String>,

    /// Corpus file, one document per non-empty line
    #[arg(short, long, conflicts_with = "docs")]
    file: Option<PathBuf>,

    /// Word splitter
    #[arg(long, value_enum)]
    tokenizer: Option<TokenizerKind>,

    /// How words are found in documents when counting document frequency
    #[arg(long, value_enum)]
    idf_matching: Option<IdfMatching>,

    /// Score documents in parallel
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Output encoding
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Only print the N highest scores
    #[arg(long)]
    top: Option<usize>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "scoring failed");
            ExitCode::FAILURE
        }
    }
}

/// Config with CLI overrides applied, and the corpus to score.
/// Corpus source precedence: `--doc`, `--file`, config `documents`, sample corpus.
fn resolve(args: &Args) -> Result<(ScorerConfig, Corpus)> {
    let mut config = match &args.config {
        Some(path) => ScorerConfig::from_path(path)?,
        None => ScorerConfig::default(),
    };
    if let Some(tokenizer) = args.tokenizer {
        config.tokenizer = tokenizer;
    }
    if let Some(idf_matching) = args.idf_matching {
        config.idf_matching = idf_matching;
    }
    config.parallel |= args.parallel;

    let corpus = if !args.docs.is_empty() {
        Corpus::new(args.docs.iter().cloned())?
    } else if let Some(path) = &args.file {
        Corpus::from_path(path)?
    } else {
        config.corpus()?
    };
    Ok((config, corpus))
}

fn run(args: Args) -> Result<()> {
    let (config, corpus) = resolve(&args)?;
    let scorer: TfIdfScorer = TfIdfScorer::from(&config);
    let start = Instant::now();
    let scores = if config.parallel {
        scorer.par_score(&corpus)?
    } else {
        scorer.score(&corpus)?
    };
    info!(
        doc_num = corpus.get_doc_num(),
        words = scores.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "done"
    );

    let bytes = report::render(&scores, args.format, args.top)?;
    std::io::stdout()
        .lock()
        .write_all(&bytes)
        .map_err(|source| Error::Io { path: "<stdout>".to_string(), source })
}
