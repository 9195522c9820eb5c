use crate::catalog::{MetricId, BASE_METRICS, METRIC_COUNT};
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One selected value for every base metric in the catalog.
///
/// Backed by a fixed array indexed by [`MetricId`], so a selection can never be
/// partial. Serializes as a `{ "AV": "N", ... }` map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, String>",
    into = "BTreeMap<String, String>"
)]
pub struct BaseMetricSelection {
    values: [char; METRIC_COUNT],
}

impl Default for BaseMetricSelection {
    fn default() -> Self {
        Self {
            values: std::array::from_fn(|i| BASE_METRICS[i].default),
        }
    }
}

impl BaseMetricSelection {
    pub fn get(&self, metric: MetricId) -> char {
        self.values[metric.index()]
    }

    pub fn set(&mut self, metric: MetricId, value: char) -> Result<(), DomainError> {
        let definition = metric.definition();
        if !definition.allows(value) {
            return Err(DomainError::InvalidMetricValue {
                metric,
                value: value.to_string(),
                allowed: definition.allowed_values(),
            });
        }
        self.values[metric.index()] = value;
        Ok(())
    }

    /// Set a metric from its textual code and value, e.g. `("AV", "N")`
    pub fn set_code(&mut self, code: &str, value: &str) -> Result<(), DomainError> {
        let metric = MetricId::from_code(code.trim())
            .ok_or_else(|| DomainError::UnknownMetric(code.trim().to_string()))?;
        let value = single_char(value.trim()).ok_or_else(|| DomainError::InvalidMetricValue {
            metric,
            value: value.trim().to_string(),
            allowed: metric.definition().allowed_values(),
        })?;
        self.set(metric, value)
    }

    /// Overlay the given `code -> value` pairs onto the catalog defaults
    pub fn from_partial(pairs: &BTreeMap<String, String>) -> Result<Self, DomainError> {
        let mut selection = Self::default();
        for (code, value) in pairs {
            selection.set_code(code, value)?;
        }
        Ok(selection)
    }

    /// `(metric, value)` pairs in canonical catalog order
    pub fn iter(&self) -> impl Iterator<Item = (MetricId, char)> + '_ {
        MetricId::ALL.into_iter().map(move |m| (m, self.get(m)))
    }
}

fn single_char(value: &str) -> Option<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c.to_ascii_uppercase()),
        _ => None,
    }
}

impl TryFrom<BTreeMap<String, String>> for BaseMetricSelection {
    type Error = DomainError;

    fn try_from(pairs: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        if let Some(missing) = MetricId::ALL
            .into_iter()
            .find(|m| !pairs.contains_key(m.code()))
        {
            return Err(DomainError::MissingMetric(missing));
        }
        Self::from_partial(&pairs)
    }
}

impl From<BaseMetricSelection> for BTreeMap<String, String> {
    fn from(selection: BaseMetricSelection) -> Self {
        selection
            .iter()
            .map(|(m, v)| (m.code().to_string(), v.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_metric() {
        let selection = BaseMetricSelection::default();
        assert_eq!(selection.iter().count(), METRIC_COUNT);
        assert_eq!(selection.get(MetricId::AttackVector), 'N');
        assert_eq!(selection.get(MetricId::SubsequentAvailability), 'N');
    }

    #[test]
    fn test_invalid_value_leaves_selection_unchanged() {
        let mut selection = BaseMetricSelection::default();
        let err = selection.set(MetricId::AttackComplexity, 'N').unwrap_err();

        assert!(matches!(err, DomainError::InvalidMetricValue { .. }));
        assert_eq!(selection, BaseMetricSelection::default());
    }

    #[test]
    fn test_set_code() {
        let mut selection = BaseMetricSelection::default();
        selection.set_code("pr", "h").unwrap_err();
        selection.set_code("PR", "h").unwrap();
        assert_eq!(selection.get(MetricId::PrivilegesRequired), 'H');

        assert_eq!(
            selection.set_code("XX", "N"),
            Err(DomainError::UnknownMetric("XX".into()))
        );
        assert!(selection.set_code("AV", "NA").is_err());
    }

    #[test]
    fn test_deserialize_requires_every_metric() {
        let json = r#"{ "AV": "N" }"#;
        let err = serde_json::from_str::<BaseMetricSelection>(json).unwrap_err();
        assert!(err.to_string().contains("has no selected value"));

        let full = serde_json::to_string(&BaseMetricSelection::default()).unwrap();
        let back: BaseMetricSelection = serde_json::from_str(&full).unwrap();
        assert_eq!(back, BaseMetricSelection::default());
    }
}
