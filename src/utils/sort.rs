use std::cmp::Ordering;

/// Sort `(key, score)` pairs by descending score.
/// - NaN scores are dropped
/// - equal scores are ordered by ascending key, so output is deterministic
#[inline]
pub fn sort_by_score_desc<K: Ord>(entries: &mut Vec<(K, f64)>) {
    entries.retain(|(_, s)| !s.is_nan());
    entries.sort_by(|a, b| match b.1.total_cmp(&a.1) {
        Ordering::Equal => a.0.cmp(&b.0),
        ord => ord,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys<K: Clone>(entries: &[(K, f64)]) -> Vec<K> {
        entries.iter().map(|(k, _)| k.clone()).collect()
    }

    #[test]
    fn sorts_descending_and_breaks_ties_by_key() {
        let mut entries = vec![("b", 0.5), ("a", 0.5), ("c", 1.0), ("d", -0.25)];
        sort_by_score_desc(&mut entries);
        assert_eq!(keys(&entries), vec!["c", "a", "b", "d"]);
    }

    #[test]
    fn drops_nan_scores() {
        let mut entries = vec![("x", f64::NAN), ("y", 0.1)];
        sort_by_score_desc(&mut entries);
        assert_eq!(keys(&entries), vec!["y"]);
    }

    #[test]
    fn handles_empty_and_single() {
        let mut entries: Vec<(&str, f64)> = vec![];
        sort_by_score_desc(&mut entries);
        assert!(entries.is_empty());

        let mut entries = vec![("only", 0.0)];
        sort_by_score_desc(&mut entries);
        assert_eq!(keys(&entries), vec!["only"]);
    }
}
