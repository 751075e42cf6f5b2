//! Order-preserving duplicate removal.

use std::collections::HashSet;

/// Removes repeated entries, keeping the first occurrence of each.
///
/// Comparison is exact string equality: `http://x` and `http://x/` are
/// different entries.
///
/// ```rust
/// use docharvest::links::dedup;
///
/// let unique = dedup(["a", "b", "a", "c", "b"]);
/// assert_eq!(unique, vec!["a", "b", "c"]);
/// ```
pub fn dedup<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for item in items {
        let item = item.into();
        if seen.insert(item.clone()) {
            unique.push(item);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_order() {
        assert_eq!(dedup(["a", "b", "a", "c", "b"]), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_no_normalization() {
        assert_eq!(
            dedup(["http://x", "http://x/", "http://x"]),
            vec!["http://x", "http://x/"]
        );
    }

    #[test]
    fn test_empty() {
        assert!(dedup(Vec::<String>::new()).is_empty());
    }
}
