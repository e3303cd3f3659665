use proptest::prelude::*;

use verid_match::{canonicalize, edit_distance, similarity};

proptest! {
    /// Edit distance is symmetric.
    #[test]
    fn edit_distance_symmetric(a in ".{0,30}", b in ".{0,30}") {
        prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
    }

    /// Distance to self is zero; zero distance means equal char sequences.
    #[test]
    fn edit_distance_identity(a in ".{0,30}") {
        prop_assert_eq!(edit_distance(&a, &a), 0);
    }

    /// Distance is at least the length difference and at most the longer length.
    #[test]
    fn edit_distance_bounds(a in ".{0,30}", b in ".{0,30}") {
        let (la, lb) = (a.chars().count(), b.chars().count());
        let d = edit_distance(&a, &b);
        prop_assert!(d >= la.abs_diff(lb));
        prop_assert!(d <= la.max(lb));
    }

    /// Similarity stays in [0, 1].
    #[test]
    fn similarity_bounded(a in ".{0,30}", b in ".{0,30}") {
        let s = similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&s));
    }

    /// A string is fully similar to itself regardless of case, unless empty.
    #[test]
    fn similarity_self_is_one(a in "[a-zA-Z ]{1,30}") {
        prop_assert_eq!(similarity(&a, &a.to_uppercase()), 1.0);
    }

    /// Canonicalization is idempotent.
    #[test]
    fn canonicalize_idempotent(a in ".{0,40}") {
        let once = canonicalize(&a);
        prop_assert_eq!(canonicalize(&once), once.clone());
    }

    /// Canonicalization ignores separator characters entirely.
    #[test]
    fn canonicalize_ignores_separators(a in "[a-z0-9]{0,20}") {
        let spaced: String = a.chars().flat_map(|c| [c, '-']).collect();
        prop_assert_eq!(canonicalize(&spaced), canonicalize(&a));
    }
}
