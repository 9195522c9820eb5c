use crate::catalog::MetricId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Unknown base metric: {0}")]
    UnknownMetric(String),

    #[error("Invalid value '{value}' for {metric} (allowed: {allowed})")]
    InvalidMetricValue {
        metric: MetricId,
        value: String,
        allowed: String,
    },

    #[error("Base metric {0} has no selected value")]
    MissingMetric(MetricId),

    #[error("Unknown factor: {0}")]
    UnknownFactor(String),

    #[error("Invalid grade {0}, expected 0.0, 0.5 or 1.0")]
    InvalidGrade(f64),

    #[error("Invalid grade '{0}', expected None, Partial or Full")]
    InvalidGradeLabel(String),

    #[error("Unknown threat multiplier '{0}'")]
    UnknownThreatMultiplier(String),
}
