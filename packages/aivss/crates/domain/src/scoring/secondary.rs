use crate::inputs::FactorSet;

/// Agentic AI Risk Score: the plain sum of every factor's grade.
///
/// No weighting or normalization, so ten factors at full grade give 10.0.
pub fn compute_secondary_score(factors: &FactorSet) -> f64 {
    factors.grades().map(|(_, grade)| grade.value()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FactorId, Grade};

    #[test]
    fn test_sum_of_grades() {
        assert_eq!(compute_secondary_score(&FactorSet::uniform(Grade::None)), 0.0);
        assert_eq!(compute_secondary_score(&FactorSet::uniform(Grade::Partial)), 5.0);
        assert_eq!(compute_secondary_score(&FactorSet::uniform(Grade::Full)), 10.0);
        // autonomy, tool_use, learning_adaptation, resource_access at 0.5
        assert_eq!(compute_secondary_score(&FactorSet::default()), 2.0);
    }

    #[test]
    fn test_single_factor_contributes_raw_grade() {
        let mut factors = FactorSet::uniform(Grade::None);
        factors.set(FactorId::Persistence, Grade::Full);
        assert_eq!(compute_secondary_score(&factors), 1.0);
    }
}
