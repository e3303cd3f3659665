//! Canonicalization for exact-match comparison.

/// Strip every non-alphanumeric character and uppercase the rest.
///
/// `"42101-1234567-8"` and `"4210112345678"` canonicalize identically, as do
/// `"01/01/1990"` and `"01-01-1990"`.
pub fn canonicalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_are_stripped() {
        assert_eq!(canonicalize("42101-1234567-8"), "4210112345678");
        assert_eq!(canonicalize("01/01/1990"), "01011990");
        assert_eq!(canonicalize("01.01.1990"), "01011990");
    }

    #[test]
    fn case_is_folded() {
        assert_eq!(canonicalize("ab-12"), canonicalize("AB 12"));
    }

    #[test]
    fn empty_and_separator_only_collapse_to_empty() {
        assert_eq!(canonicalize(""), "");
        assert_eq!(canonicalize("--//.."), "");
    }
}
