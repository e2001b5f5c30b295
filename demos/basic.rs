use tfidf_scorer::{Corpus, IdfMatching, TfIdfScorer, UnicodeWordTokenizer};

fn main() -> tfidf_scorer::Result<()> {
    // build corpus
    let corpus = Corpus::new([
        "Rust is fast and memory safe.",
        "Rust has a strong type system.",
        "Python is dynamically typed.",
    ])?;

    // score with the default settings
    let scorer: TfIdfScorer<UnicodeWordTokenizer> = TfIdfScorer::new(UnicodeWordTokenizer);
    let scores = scorer.score(&corpus)?;
    println!("Scores:\n{}", scores);

    // per document view, before later documents overwrite shared words
    for (index, doc_scores) in scorer.score_documents(&corpus)?.iter().enumerate() {
        println!("document {}: rust = {:?}", index, doc_scores.get("rust"));
    }

    // token-exact document frequency instead of substring containment
    let strict = scorer.with_idf_matching(IdfMatching::Token);
    println!("top 3 (token matching):\n{}", strict.score(&corpus)?.top(3));
    Ok(())
}
