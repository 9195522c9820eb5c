pub mod base_scorer;

pub use base_scorer::{BaseScorer, ScoringError};
