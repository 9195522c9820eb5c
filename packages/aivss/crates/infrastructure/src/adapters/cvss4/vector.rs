use domain::catalog::{MetricId, METRIC_COUNT};
use domain::codec::BASE_VECTOR_PREFIX;
use domain::ScoringError;

/// A fully specified CVSS v4.0 base vector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedVector {
    values: [char; METRIC_COUNT],
}

impl ParsedVector {
    /// Parse `CVSS:4.0/AV:N/...`. Every base metric must appear exactly once;
    /// order is free.
    pub fn parse(vector: &str) -> Result<Self, ScoringError> {
        let (prefix, body) = vector.split_once('/').unwrap_or((vector, ""));
        if prefix != BASE_VECTOR_PREFIX {
            return Err(ScoringError::MissingPrefix {
                expected: BASE_VECTOR_PREFIX.to_string(),
                found: prefix.to_string(),
            });
        }

        let mut values: [Option<char>; METRIC_COUNT] = [None; METRIC_COUNT];
        let mut offset = prefix.len() + 1;

        for component in body.split('/').filter(|_| !body.is_empty()) {
            let (metric, value) = parse_component(component, offset)?;

            let slot = &mut values[metric.index()];
            if slot.is_some() {
                return Err(ScoringError::DuplicateMetric {
                    metric: metric.code().to_string(),
                    offset,
                });
            }
            *slot = Some(value);
            offset += component.len() + 1;
        }

        let mut parsed = [' '; METRIC_COUNT];
        for metric in MetricId::ALL {
            parsed[metric.index()] =
                values[metric.index()].ok_or_else(|| ScoringError::MissingMetric {
                    metric: metric.code().to_string(),
                })?;
        }

        Ok(Self { values: parsed })
    }

    pub fn get(&self, metric: MetricId) -> char {
        self.values[metric.index()]
    }
}

fn parse_component(component: &str, offset: usize) -> Result<(MetricId, char), ScoringError> {
    let Some((key, value)) = component.split_once(':') else {
        return Err(ScoringError::Malformed {
            component: component.to_string(),
            offset,
        });
    };

    let metric = MetricId::from_code(key).ok_or_else(|| ScoringError::UnknownMetric {
        metric: key.to_string(),
        offset,
    })?;

    let invalid = || ScoringError::InvalidValue {
        metric: key.to_string(),
        value: value.to_string(),
        offset,
    };

    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if metric.definition().allows(c) => Ok((metric, c)),
        _ => Err(invalid()),
    }
}
