use thiserror::Error;

/// Why a base score algorithm refused a vector string.
///
/// `offset` values are byte offsets of the offending `KEY:VALUE` component.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    #[error("Vector must start with '{expected}', found '{found}'")]
    MissingPrefix { expected: String, found: String },

    #[error("Malformed component '{component}'")]
    Malformed { component: String, offset: usize },

    #[error("Unknown metric '{metric}'")]
    UnknownMetric { metric: String, offset: usize },

    #[error("Invalid value '{value}' for metric {metric}")]
    InvalidValue {
        metric: String,
        value: String,
        offset: usize,
    },

    #[error("Metric {metric} appears more than once")]
    DuplicateMetric { metric: String, offset: usize },

    #[error("Mandatory metric {metric} is missing")]
    MissingMetric { metric: String },
}

impl ScoringError {
    /// Byte range of the vector that caused the rejection, if it points at one
    pub fn span(&self) -> Option<(usize, usize)> {
        match self {
            ScoringError::MissingPrefix { found, .. } => Some((0, found.len())),
            ScoringError::Malformed { component, offset } => Some((*offset, component.len())),
            ScoringError::UnknownMetric { metric, offset } => Some((*offset, metric.len())),
            ScoringError::InvalidValue {
                metric,
                value,
                offset,
            } => Some((*offset, metric.len() + 1 + value.len())),
            ScoringError::DuplicateMetric { metric, offset } => Some((*offset, metric.len())),
            ScoringError::MissingMetric { .. } => None,
        }
    }
}

/// A standard vulnerability base score algorithm.
///
/// Implementations must be pure: the same vector always yields the same result.
pub trait BaseScorer {
    /// Score a vector string on the 0.0..=10.0 scale
    fn score(&self, vector: &str) -> Result<f64, ScoringError>;
}

impl<T: BaseScorer + ?Sized> BaseScorer for &T {
    fn score(&self, vector: &str) -> Result<f64, ScoringError> {
        (**self).score(vector)
    }
}
