pub mod adapters;

pub use adapters::cvss4::CvssV4Scorer;
