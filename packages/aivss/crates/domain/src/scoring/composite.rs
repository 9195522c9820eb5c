/// `((base + secondary) / 2) * multiplier`
///
/// The result is not clamped. With a large secondary score and a multiplier
/// above 1.0 it can exceed 10.0; presentation layers decide how to cap it.
pub fn compute_composite_score(base_score: f64, secondary_score: f64, multiplier: f64) -> f64 {
    ((base_score + secondary_score) / 2.0) * multiplier
}
