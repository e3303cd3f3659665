//! Unit-cost string edit distance and derived similarity.

/// Classic Levenshtein distance: minimum single-character inserts, deletes,
/// and substitutions to turn one string into the other.
///
/// Two-row dynamic programming over `char`s: O(n·m) time, O(min(n,m)) space.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };
    if short.is_empty() {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0usize; short.len() + 1];
    for (i, lc) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let substitution = prev[j] + usize::from(lc != sc);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[short.len()]
}

/// Similarity in `[0, 1]`: `1 − distance / max_len` over lowercased inputs.
///
/// Defined as 0.0 when either string is empty.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let max_len = a.chars().count().max(b.chars().count());
    1.0 - edit_distance(&a, &b) as f64 / max_len as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_basics() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("khan", "khna"), 2);
    }

    #[test]
    fn distance_counts_chars_not_bytes() {
        assert_eq!(edit_distance("کارڈ", "کارڈ"), 0);
        assert_eq!(edit_distance("کارڈ", "کار"), 1);
    }

    #[test]
    fn case_only_difference_is_full_similarity() {
        assert_eq!(
            similarity("Muhammad Ahmad Khan", "muhammad ahmad khan"),
            1.0
        );
    }

    #[test]
    fn empty_side_means_zero_similarity() {
        assert_eq!(similarity("", "Ahmad"), 0.0);
        assert_eq!(similarity("Ahmad", ""), 0.0);
        assert_eq!(similarity("", ""), 0.0);
    }

    #[test]
    fn close_names_score_above_threshold() {
        assert!(similarity("Muhammad Ahmad Khan", "Muhammed Ahmad Khan") > 0.9);
    }

    #[test]
    fn unrelated_names_score_low() {
        assert!(similarity("Muhammad Ahmad Khan", "Zainab Bibi") < 0.4);
    }
}
