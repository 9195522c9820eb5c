use crate::ports::{BaseScorer, ScoringError};

/// Score used when the algorithm rejects a vector
pub const FALLBACK_BASE_SCORE: f64 = 0.0;

/// Result of asking the base score algorithm for a score.
///
/// A rejection is not an error for the caller: the score falls back to
/// [`FALLBACK_BASE_SCORE`] and the reason is kept so it can be shown.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseScoreOutcome {
    pub score: f64,
    pub rejection: Option<ScoringError>,
}

impl BaseScoreOutcome {
    pub fn is_rejected(&self) -> bool {
        self.rejection.is_some()
    }
}

pub fn compute_base_score(scorer: &impl BaseScorer, vector: &str) -> BaseScoreOutcome {
    match scorer.score(vector) {
        Ok(score) => BaseScoreOutcome {
            score,
            rejection: None,
        },
        Err(e) => {
            tracing::warn!(%vector, error = %e, "Base score algorithm rejected vector, using fallback");
            BaseScoreOutcome {
                score: FALLBACK_BASE_SCORE,
                rejection: Some(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(f64);

    impl BaseScorer for Fixed {
        fn score(&self, _vector: &str) -> Result<f64, ScoringError> {
            Ok(self.0)
        }
    }

    struct Rejecting;

    impl BaseScorer for Rejecting {
        fn score(&self, vector: &str) -> Result<f64, ScoringError> {
            Err(ScoringError::MissingPrefix {
                expected: "CVSS:4.0".into(),
                found: vector.into(),
            })
        }
    }

    #[test]
    fn test_accepted_vector_passes_score_through() {
        let outcome = compute_base_score(&Fixed(7.7), "CVSS:4.0/AV:N");
        assert_eq!(outcome.score, 7.7);
        assert!(!outcome.is_rejected());
    }

    #[test]
    fn test_rejection_falls_back_to_zero() {
        let outcome = compute_base_score(&Rejecting, "garbage");
        assert_eq!(outcome.score, FALLBACK_BASE_SCORE);
        assert!(matches!(
            outcome.rejection,
            Some(ScoringError::MissingPrefix { .. })
        ));
    }
}
