use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{config::SAMPLE_CORPUS, error::{Error, Result}};

/// Ordered, immutable collection of documents.
/// Holds at least one document and none of them is blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Corpus {
    documents: Vec<String>,
}

impl Corpus {
    /// Create a corpus from documents in order.
    /// Fails on an empty collection or a whitespace-only document.
    pub fn new<I, S>(documents: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let documents: Vec<String> = documents.into_iter().map(Into::into).collect();
        if documents.is_empty() {
            return Err(Error::EmptyCorpus);
        }
        if let Some(index) = documents.iter().position(|doc| doc.trim().is_empty()) {
            return Err(Error::EmptyDocument { index });
        }
        Ok(Self { documents })
    }

    /// The four-sentence sample corpus
    pub fn sample() -> Self {
        Self {
            documents: SAMPLE_CORPUS.iter().map(|doc| doc.to_string()).collect(),
        }
    }

    /// One document per non-empty line
    pub fn from_lines(text: &str) -> Result<Self> {
        Self::new(text.lines().filter(|line| !line.trim().is_empty()))
    }

    /// Read a corpus file, one document per non-empty line
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_lines(&text)
    }

    /// Get the number of documents in the corpus
    #[inline]
    pub fn get_doc_num(&self) -> usize {
        self.documents.len()
    }

    #[inline]
    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.documents.iter()
    }
}

impl Default for Corpus {
    fn default() -> Self {
        Self::sample()
    }
}

impl TryFrom<Vec<String>> for Corpus {
    type Error = Error;

    fn try_from(documents: Vec<String>) -> Result<Self> {
        Self::new(documents)
    }
}

impl From<Corpus> for Vec<String> {
    fn from(corpus: Corpus) -> Self {
        corpus.documents
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_corpus() {
        let err = Corpus::new(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, Error::EmptyCorpus));
    }

    #[test]
    fn rejects_blank_document_with_its_index() {
        let err = Corpus::new(["IR is fun.", "   \t", "more text"]).unwrap_err();
        assert!(matches!(err, Error::EmptyDocument { index: 1 }));
        assert_eq!(err.to_string(), "document 1 is empty");
    }

    #[test]
    fn sample_keeps_document_order() {
        let corpus = Corpus::sample();
        assert_eq!(corpus.get_doc_num(), 4);
        assert_eq!(corpus.documents()[0], "Menna love studying IR.");
        assert_eq!(corpus.documents()[3], "Studying IR is enjoyable.");
    }

    #[test]
    fn from_lines_skips_blank_lines() {
        let corpus = Corpus::from_lines("first doc\n\n  \nsecond doc\n").unwrap();
        assert_eq!(corpus.documents(), &["first doc".to_string(), "second doc".to_string()]);
    }

    #[test]
    fn from_lines_rejects_text_without_documents() {
        assert!(matches!(Corpus::from_lines("\n \n").unwrap_err(), Error::EmptyCorpus));
    }

    #[test]
    fn from_path_reports_missing_file() {
        let err = Corpus::from_path("/nonexistent/corpus.txt").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn deserialize_validates_documents() {
        let corpus: Corpus = serde_json::from_str(r#"["a b", "c"]"#).unwrap();
        assert_eq!(corpus.get_doc_num(), 2);
        assert!(serde_json::from_str::<Corpus>("[]").is_err());
        assert!(serde_json::from_str::<Corpus>(r#"["ok", ""]"#).is_err());
    }
}
