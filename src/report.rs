//! Presentation of a score map: sorted, optionally truncated, encoded.

use serde::{Deserialize, Serialize};

use crate::{error::Result, scorer::score_map::ScoreMap};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// `word<TAB>score` lines
    #[default]
    Text,
    Json,
    Cbor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub word: String,
    pub score: f64,
}

/// Entries of `scores` by descending score, cut to `top` when given
pub fn ranked_entries(scores: &ScoreMap, top: Option<usize>) -> Vec<ScoreEntry> {
    let sorted = scores.sorted_by_score_desc();
    let limit = top.unwrap_or(sorted.len());
    sorted
        .into_iter()
        .take(limit)
        .map(|(word, score)| ScoreEntry { word: word.to_string(), score })
        .collect()
}

/// Encode the ranked entries of `scores` in `format`.
/// Text output is the `Display` rendering of [`ScoreMap`].
pub fn render(scores: &ScoreMap, format: OutputFormat, top: Option<usize>) -> Result<Vec<u8>> {
    let bytes = match format {
        OutputFormat::Text => match top {
            Some(n) => scores.top(n).to_string(),
            None => scores.to_string(),
        }
        .into_bytes(),
        OutputFormat::Json => {
            let mut out = serde_json::to_vec_pretty(&ranked_entries(scores, top))?;
            out.push(b'\n');
            out
        }
        OutputFormat::Cbor => serde_cbor::to_vec(&ranked_entries(scores, top))?,
    };
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores() -> ScoreMap {
        let mut map = ScoreMap::new();
        map.insert("menna", 0.029);
        map.insert("ir", -0.009);
        map.insert("class", 0.05);
        map
    }

    #[test]
    fn ranked_entries_respects_top() {
        let entries = ranked_entries(&scores(), Some(2));
        assert_eq!(
            entries,
            vec![
                ScoreEntry { word: "class".into(), score: 0.05 },
                ScoreEntry { word: "menna".into(), score: 0.029 },
            ]
        );
        assert_eq!(ranked_entries(&scores(), None).len(), 3);
        assert!(ranked_entries(&scores(), Some(0)).is_empty());
    }

    #[test]
    fn renders_text() {
        let out = render(&scores(), OutputFormat::Text, None).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "class\t0.050000\nmenna\t0.029000\nir\t-0.009000\n"
        );
    }

    #[test]
    fn text_matches_score_map_display() {
        let map = scores();
        let all = render(&map, OutputFormat::Text, None).unwrap();
        assert_eq!(String::from_utf8(all).unwrap(), map.to_string());
        let first = render(&map, OutputFormat::Text, Some(1)).unwrap();
        assert_eq!(String::from_utf8(first).unwrap(), "class\t0.050000\n");
        assert_eq!(map.top(1).to_string(), "class\t0.050000\n");
        assert!(render(&map, OutputFormat::Text, Some(0)).unwrap().is_empty());
    }

    #[test]
    fn renders_json() {
        let out = render(&scores(), OutputFormat::Json, Some(1)).unwrap();
        let parsed: Vec<ScoreEntry> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, vec![ScoreEntry { word: "class".into(), score: 0.05 }]);
    }

    #[test]
    fn renders_cbor() {
        let out = render(&scores(), OutputFormat::Cbor, None).unwrap();
        let parsed: Vec<ScoreEntry> = serde_cbor::from_slice(&out).unwrap();
        assert_eq!(parsed, ranked_entries(&scores(), None));
    }
}
