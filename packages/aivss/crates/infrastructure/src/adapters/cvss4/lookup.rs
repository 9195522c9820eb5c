/// Scores of the highest severity vector in each macrovector, keyed by the
/// six EQ levels. Sorted by key.
static MACROVECTOR_SCORES: [([u8; 6], f64); 270] = [
    ([0, 0, 0, 0, 0, 0], 10.0),
    ([0, 0, 0, 0, 0, 1], 9.9),
    ([0, 0, 0, 0, 1, 0], 9.8),
    ([0, 0, 0, 0, 1, 1], 9.5),
    ([0, 0, 0, 0, 2, 0], 9.5),
    ([0, 0, 0, 0, 2, 1], 9.2),
    ([0, 0, 0, 1, 0, 0], 10.0),
    ([0, 0, 0, 1, 0, 1], 9.6),
    ([0, 0, 0, 1, 1, 0], 9.3),
    ([0, 0, 0, 1, 1, 1], 8.7),
    ([0, 0, 0, 1, 2, 0], 9.1),
    ([0, 0, 0, 1, 2, 1], 8.1),
    ([0, 0, 0, 2, 0, 0], 9.3),
    ([0, 0, 0, 2, 0, 1], 9.0),
    ([0, 0, 0, 2, 1, 0], 8.9),
    ([0, 0, 0, 2, 1, 1], 8.0),
    ([0, 0, 0, 2, 2, 0], 8.1),
    ([0, 0, 0, 2, 2, 1], 6.8),
    ([0, 0, 1, 0, 0, 0], 9.8),
    ([0, 0, 1, 0, 0, 1], 9.5),
    ([0, 0, 1, 0, 1, 0], 9.5),
    ([0, 0, 1, 0, 1, 1], 9.2),
    ([0, 0, 1, 0, 2, 0], 9.0),
    ([0, 0, 1, 0, 2, 1], 8.4),
    ([0, 0, 1, 1, 0, 0], 9.3),
    ([0, 0, 1, 1, 0, 1], 9.2),
    ([0, 0, 1, 1, 1, 0], 8.9),
    ([0, 0, 1, 1, 1, 1], 8.1),
    ([0, 0, 1, 1, 2, 0], 8.1),
    ([0, 0, 1, 1, 2, 1], 6.5),
    ([0, 0, 1, 2, 0, 0], 8.8),
    ([0, 0, 1, 2, 0, 1], 8.0),
    ([0, 0, 1, 2, 1, 0], 7.8),
    ([0, 0, 1, 2, 1, 1], 7.0),
    ([0, 0, 1, 2, 2, 0], 6.9),
    ([0, 0, 1, 2, 2, 1], 4.8),
    ([0, 0, 2, 0, 0, 1], 9.2),
    ([0, 0, 2, 0, 1, 1], 8.2),
    ([0, 0, 2, 0, 2, 1], 7.2),
    ([0, 0, 2, 1, 0, 1], 7.9),
    ([0, 0, 2, 1, 1, 1], 6.9),
    ([0, 0, 2, 1, 2, 1], 5.0),
    ([0, 0, 2, 2, 0, 1], 6.9),
    ([0, 0, 2, 2, 1, 1], 5.5),
    ([0, 0, 2, 2, 2, 1], 2.7),
    ([0, 1, 0, 0, 0, 0], 9.9),
    ([0, 1, 0, 0, 0, 1], 9.7),
    ([0, 1, 0, 0, 1, 0], 9.5),
    ([0, 1, 0, 0, 1, 1], 9.2),
    ([0, 1, 0, 0, 2, 0], 9.2),
    ([0, 1, 0, 0, 2, 1], 8.5),
    ([0, 1, 0, 1, 0, 0], 9.5),
    ([0, 1, 0, 1, 0, 1], 9.1),
    ([0, 1, 0, 1, 1, 0], 9.0),
    ([0, 1, 0, 1, 1, 1], 8.3),
    ([0, 1, 0, 1, 2, 0], 8.4),
    ([0, 1, 0, 1, 2, 1], 7.1),
    ([0, 1, 0, 2, 0, 0], 9.2),
    ([0, 1, 0, 2, 0, 1], 8.1),
    ([0, 1, 0, 2, 1, 0], 8.2),
    ([0, 1, 0, 2, 1, 1], 7.1),
    ([0, 1, 0, 2, 2, 0], 7.2),
    ([0, 1, 0, 2, 2, 1], 5.3),
    ([0, 1, 1, 0, 0, 0], 9.5),
    ([0, 1, 1, 0, 0, 1], 9.3),
    ([0, 1, 1, 0, 1, 0], 9.2),
    ([0, 1, 1, 0, 1, 1], 8.5),
    ([0, 1, 1, 0, 2, 0], 8.5),
    ([0, 1, 1, 0, 2, 1], 7.3),
    ([0, 1, 1, 1, 0, 0], 9.2),
    ([0, 1, 1, 1, 0, 1], 8.2),
    ([0, 1, 1, 1, 1, 0], 8.0),
    ([0, 1, 1, 1, 1, 1], 7.2),
    ([0, 1, 1, 1, 2, 0], 7.0),
    ([0, 1, 1, 1, 2, 1], 5.9),
    ([0, 1, 1, 2, 0, 0], 8.4),
    ([0, 1, 1, 2, 0, 1], 7.0),
    ([0, 1, 1, 2, 1, 0], 7.1),
    ([0, 1, 1, 2, 1, 1], 5.2),
    ([0, 1, 1, 2, 2, 0], 5.0),
    ([0, 1, 1, 2, 2, 1], 3.0),
    ([0, 1, 2, 0, 0, 1], 8.6),
    ([0, 1, 2, 0, 1, 1], 7.5),
    ([0, 1, 2, 0, 2, 1], 5.2),
    ([0, 1, 2, 1, 0, 1], 7.1),
    ([0, 1, 2, 1, 1, 1], 5.2),
    ([0, 1, 2, 1, 2, 1], 2.9),
    ([0, 1, 2, 2, 0, 1], 6.3),
    ([0, 1, 2, 2, 1, 1], 2.9),
    ([0, 1, 2, 2, 2, 1], 1.7),
    ([1, 0, 0, 0, 0, 0], 9.8),
    ([1, 0, 0, 0, 0, 1], 9.5),
    ([1, 0, 0, 0, 1, 0], 9.4),
    ([1, 0, 0, 0, 1, 1], 8.7),
    ([1, 0, 0, 0, 2, 0], 9.1),
    ([1, 0, 0, 0, 2, 1], 8.1),
    ([1, 0, 0, 1, 0, 0], 9.4),
    ([1, 0, 0, 1, 0, 1], 8.9),
    ([1, 0, 0, 1, 1, 0], 8.6),
    ([1, 0, 0, 1, 1, 1], 7.4),
    ([1, 0, 0, 1, 2, 0], 7.7),
    ([1, 0, 0, 1, 2, 1], 6.4),
    ([1, 0, 0, 2, 0, 0], 8.7),
    ([1, 0, 0, 2, 0, 1], 7.5),
    ([1, 0, 0, 2, 1, 0], 7.4),
    ([1, 0, 0, 2, 1, 1], 6.3),
    ([1, 0, 0, 2, 2, 0], 6.3),
    ([1, 0, 0, 2, 2, 1], 4.9),
    ([1, 0, 1, 0, 0, 0], 9.4),
    ([1, 0, 1, 0, 0, 1], 8.9),
    ([1, 0, 1, 0, 1, 0], 8.8),
    ([1, 0, 1, 0, 1, 1], 7.7),
    ([1, 0, 1, 0, 2, 0], 7.6),
    ([1, 0, 1, 0, 2, 1], 6.7),
    ([1, 0, 1, 1, 0, 0], 8.6),
    ([1, 0, 1, 1, 0, 1], 7.6),
    ([1, 0, 1, 1, 1, 0], 7.4),
    ([1, 0, 1, 1, 1, 1], 5.8),
    ([1, 0, 1, 1, 2, 0], 5.9),
    ([1, 0, 1, 1, 2, 1], 5.0),
    ([1, 0, 1, 2, 0, 0], 7.2),
    ([1, 0, 1, 2, 0, 1], 5.7),
    ([1, 0, 1, 2, 1, 0], 5.7),
    ([1, 0, 1, 2, 1, 1], 5.2),
    ([1, 0, 1, 2, 2, 0], 5.2),
    ([1, 0, 1, 2, 2, 1], 2.5),
    ([1, 0, 2, 0, 0, 1], 8.3),
    ([1, 0, 2, 0, 1, 1], 7.0),
    ([1, 0, 2, 0, 2, 1], 5.4),
    ([1, 0, 2, 1, 0, 1], 6.5),
    ([1, 0, 2, 1, 1, 1], 5.8),
    ([1, 0, 2, 1, 2, 1], 2.6),
    ([1, 0, 2, 2, 0, 1], 5.3),
    ([1, 0, 2, 2, 1, 1], 2.1),
    ([1, 0, 2, 2, 2, 1], 1.3),
    ([1, 1, 0, 0, 0, 0], 9.5),
    ([1, 1, 0, 0, 0, 1], 9.0),
    ([1, 1, 0, 0, 1, 0], 8.8),
    ([1, 1, 0, 0, 1, 1], 7.6),
    ([1, 1, 0, 0, 2, 0], 7.6),
    ([1, 1, 0, 0, 2, 1], 7.0),
    ([1, 1, 0, 1, 0, 0], 9.0),
    ([1, 1, 0, 1, 0, 1], 7.7),
    ([1, 1, 0, 1, 1, 0], 7.5),
    ([1, 1, 0, 1, 1, 1], 6.2),
    ([1, 1, 0, 1, 2, 0], 6.1),
    ([1, 1, 0, 1, 2, 1], 5.3),
    ([1, 1, 0, 2, 0, 0], 7.7),
    ([1, 1, 0, 2, 0, 1], 6.6),
    ([1, 1, 0, 2, 1, 0], 6.8),
    ([1, 1, 0, 2, 1, 1], 5.9),
    ([1, 1, 0, 2, 2, 0], 5.2),
    ([1, 1, 0, 2, 2, 1], 3.0),
    ([1, 1, 1, 0, 0, 0], 8.9),
    ([1, 1, 1, 0, 0, 1], 7.8),
    ([1, 1, 1, 0, 1, 0], 7.6),
    ([1, 1, 1, 0, 1, 1], 6.7),
    ([1, 1, 1, 0, 2, 0], 6.2),
    ([1, 1, 1, 0, 2, 1], 5.8),
    ([1, 1, 1, 1, 0, 0], 7.4),
    ([1, 1, 1, 1, 0, 1], 5.9),
    ([1, 1, 1, 1, 1, 0], 5.7),
    ([1, 1, 1, 1, 1, 1], 5.7),
    ([1, 1, 1, 1, 2, 0], 4.7),
    ([1, 1, 1, 1, 2, 1], 2.3),
    ([1, 1, 1, 2, 0, 0], 6.1),
    ([1, 1, 1, 2, 0, 1], 5.2),
    ([1, 1, 1, 2, 1, 0], 5.7),
    ([1, 1, 1, 2, 1, 1], 2.9),
    ([1, 1, 1, 2, 2, 0], 2.4),
    ([1, 1, 1, 2, 2, 1], 1.6),
    ([1, 1, 2, 0, 0, 1], 7.1),
    ([1, 1, 2, 0, 1, 1], 5.9),
    ([1, 1, 2, 0, 2, 1], 3.0),
    ([1, 1, 2, 1, 0, 1], 5.8),
    ([1, 1, 2, 1, 1, 1], 2.6),
    ([1, 1, 2, 1, 2, 1], 1.5),
    ([1, 1, 2, 2, 0, 1], 2.3),
    ([1, 1, 2, 2, 1, 1], 1.3),
    ([1, 1, 2, 2, 2, 1], 0.6),
    ([2, 0, 0, 0, 0, 0], 9.3),
    ([2, 0, 0, 0, 0, 1], 8.7),
    ([2, 0, 0, 0, 1, 0], 8.6),
    ([2, 0, 0, 0, 1, 1], 7.2),
    ([2, 0, 0, 0, 2, 0], 7.5),
    ([2, 0, 0, 0, 2, 1], 5.8),
    ([2, 0, 0, 1, 0, 0], 8.6),
    ([2, 0, 0, 1, 0, 1], 7.4),
    ([2, 0, 0, 1, 1, 0], 7.4),
    ([2, 0, 0, 1, 1, 1], 6.1),
    ([2, 0, 0, 1, 2, 0], 5.6),
    ([2, 0, 0, 1, 2, 1], 3.4),
    ([2, 0, 0, 2, 0, 0], 7.0),
    ([2, 0, 0, 2, 0, 1], 5.4),
    ([2, 0, 0, 2, 1, 0], 5.2),
    ([2, 0, 0, 2, 1, 1], 4.0),
    ([2, 0, 0, 2, 2, 0], 4.0),
    ([2, 0, 0, 2, 2, 1], 2.2),
    ([2, 0, 1, 0, 0, 0], 8.5),
    ([2, 0, 1, 0, 0, 1], 7.5),
    ([2, 0, 1, 0, 1, 0], 7.4),
    ([2, 0, 1, 0, 1, 1], 5.5),
    ([2, 0, 1, 0, 2, 0], 6.2),
    ([2, 0, 1, 0, 2, 1], 5.1),
    ([2, 0, 1, 1, 0, 0], 7.2),
    ([2, 0, 1, 1, 0, 1], 5.7),
    ([2, 0, 1, 1, 1, 0], 5.5),
    ([2, 0, 1, 1, 1, 1], 4.1),
    ([2, 0, 1, 1, 2, 0], 4.6),
    ([2, 0, 1, 1, 2, 1], 1.9),
    ([2, 0, 1, 2, 0, 0], 5.3),
    ([2, 0, 1, 2, 0, 1], 3.6),
    ([2, 0, 1, 2, 1, 0], 3.4),
    ([2, 0, 1, 2, 1, 1], 1.9),
    ([2, 0, 1, 2, 2, 0], 1.9),
    ([2, 0, 1, 2, 2, 1], 0.8),
    ([2, 0, 2, 0, 0, 1], 6.4),
    ([2, 0, 2, 0, 1, 1], 5.1),
    ([2, 0, 2, 0, 2, 1], 2.0),
    ([2, 0, 2, 1, 0, 1], 4.7),
    ([2, 0, 2, 1, 1, 1], 2.1),
    ([2, 0, 2, 1, 2, 1], 1.1),
    ([2, 0, 2, 2, 0, 1], 2.4),
    ([2, 0, 2, 2, 1, 1], 0.9),
    ([2, 0, 2, 2, 2, 1], 0.4),
    ([2, 1, 0, 0, 0, 0], 8.8),
    ([2, 1, 0, 0, 0, 1], 7.5),
    ([2, 1, 0, 0, 1, 0], 7.3),
    ([2, 1, 0, 0, 1, 1], 5.3),
    ([2, 1, 0, 0, 2, 0], 6.0),
    ([2, 1, 0, 0, 2, 1], 5.0),
    ([2, 1, 0, 1, 0, 0], 7.3),
    ([2, 1, 0, 1, 0, 1], 5.5),
    ([2, 1, 0, 1, 1, 0], 5.9),
    ([2, 1, 0, 1, 1, 1], 4.0),
    ([2, 1, 0, 1, 2, 0], 4.1),
    ([2, 1, 0, 1, 2, 1], 2.0),
    ([2, 1, 0, 2, 0, 0], 5.4),
    ([2, 1, 0, 2, 0, 1], 4.3),
    ([2, 1, 0, 2, 1, 0], 4.5),
    ([2, 1, 0, 2, 1, 1], 2.2),
    ([2, 1, 0, 2, 2, 0], 2.0),
    ([2, 1, 0, 2, 2, 1], 1.1),
    ([2, 1, 1, 0, 0, 0], 7.5),
    ([2, 1, 1, 0, 0, 1], 5.5),
    ([2, 1, 1, 0, 1, 0], 5.8),
    ([2, 1, 1, 0, 1, 1], 4.5),
    ([2, 1, 1, 0, 2, 0], 4.0),
    ([2, 1, 1, 0, 2, 1], 2.1),
    ([2, 1, 1, 1, 0, 0], 6.1),
    ([2, 1, 1, 1, 0, 1], 5.1),
    ([2, 1, 1, 1, 1, 0], 4.8),
    ([2, 1, 1, 1, 1, 1], 1.8),
    ([2, 1, 1, 1, 2, 0], 2.0),
    ([2, 1, 1, 1, 2, 1], 0.9),
    ([2, 1, 1, 2, 0, 0], 4.6),
    ([2, 1, 1, 2, 0, 1], 1.8),
    ([2, 1, 1, 2, 1, 0], 1.7),
    ([2, 1, 1, 2, 1, 1], 0.7),
    ([2, 1, 1, 2, 2, 0], 0.8),
    ([2, 1, 1, 2, 2, 1], 0.2),
    ([2, 1, 2, 0, 0, 1], 5.3),
    ([2, 1, 2, 0, 1, 1], 2.4),
    ([2, 1, 2, 0, 2, 1], 1.4),
    ([2, 1, 2, 1, 0, 1], 2.4),
    ([2, 1, 2, 1, 1, 1], 1.2),
    ([2, 1, 2, 1, 2, 1], 0.5),
    ([2, 1, 2, 2, 0, 1], 1.0),
    ([2, 1, 2, 2, 1, 1], 0.3),
    ([2, 1, 2, 2, 2, 1], 0.1),
];

/// Score of the macrovector `levels`, or `None` if no vector maps to it
pub fn macrovector_score(levels: [u8; 6]) -> Option<f64> {
    MACROVECTOR_SCORES
        .binary_search_by(|(key, _)| key.cmp(&levels))
        .ok()
        .map(|idx| MACROVECTOR_SCORES[idx].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted() {
        assert!(MACROVECTOR_SCORES.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_known_entries() {
        assert_eq!(macrovector_score([0, 0, 0, 2, 0, 0]), Some(9.3));
        assert_eq!(macrovector_score([2, 1, 2, 2, 2, 1]), Some(0.1));
        assert_eq!(macrovector_score([3, 0, 0, 0, 0, 0]), None);
        assert_eq!(macrovector_score([0, 0, 2, 0, 0, 0]), None);
    }
}
