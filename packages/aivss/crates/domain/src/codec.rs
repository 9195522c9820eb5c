use crate::inputs::{BaseMetricSelection, ThreatMultiplier};

/// Scheme prefix expected by the CVSS v4.0 base score algorithm
pub const BASE_VECTOR_PREFIX: &str = "CVSS:4.0";

/// Scheme prefix of the composite summary vector
pub const SUMMARY_VECTOR_PREFIX: &str = "AIVSS:1.0";

/// Encodes calculator inputs into vector strings. Encode only.
pub struct VectorCodec;

impl VectorCodec {
    /// `CVSS:4.0/AV:N/AC:L/...` with every metric in catalog order
    pub fn encode_base(selection: &BaseMetricSelection) -> String {
        let mut vector = String::from(BASE_VECTOR_PREFIX);
        for (metric, value) in selection.iter() {
            vector.push('/');
            vector.push_str(metric.code());
            vector.push(':');
            vector.push(value);
        }
        vector
    }

    /// `AIVSS:1.0/CVSS:9.3/AARS:5.0`
    pub fn encode_summary(base_score: f64, secondary_score: f64) -> String {
        format!(
            "{}/CVSS:{:.1}/AARS:{:.1}",
            SUMMARY_VECTOR_PREFIX, base_score, secondary_score
        )
    }

    /// Summary vector with the threat multiplier appended, as used in reports
    pub fn encode_summary_with_threat(
        base_score: f64,
        secondary_score: f64,
        threat: ThreatMultiplier,
    ) -> String {
        format!(
            "{}/TM:{}",
            Self::encode_summary(base_score, secondary_score),
            threat
        )
    }
}
