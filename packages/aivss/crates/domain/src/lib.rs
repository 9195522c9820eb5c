pub mod catalog;
pub mod codec;
pub mod error;
pub mod inputs;
pub mod ports;
pub mod profile;
pub mod report;
pub mod scenario;
pub mod scoring;

pub use catalog::{FactorId, Grade, MetricId};
pub use codec::VectorCodec;
pub use error::DomainError;
pub use inputs::{BaseMetricSelection, FactorSet, SessionInputs, ThreatMultiplier};
pub use ports::{BaseScorer, ScoringError};
pub use profile::{Profile, ProfileError, ProfileId, ProfileStore};
pub use report::{ChartData, ReportSnapshot};
pub use scenario::ScenarioLoader;
pub use scoring::{evaluate, Evaluation, RiskLevel, ScoreResult};
