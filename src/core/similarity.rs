use std::collections::HashSet;

/// Jaccard similarity of two string lists treated as sets
///
/// Returns `|A ∩ B| / |A ∪ B|`, or 0.0 when either list is empty.
/// Duplicates within a list are ignored; comparison is case-sensitive.
pub fn jaccard_similarity(a: &[String], b: &[String]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let set_a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let set_b: HashSet<&str> = b.iter().map(String::as_str).collect();

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();

    intersection as f64 / union as f64
}
