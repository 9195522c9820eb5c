//! Agentic AI vulnerability scoring.
//!
//! Combines the CVSS v4.0 base score with an agentic AI risk score and a
//! threat multiplier into one composite rating.

pub use application;
pub use domain;
pub use infrastructure;
