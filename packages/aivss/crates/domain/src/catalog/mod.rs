pub mod factors;
pub mod metrics;

pub use factors::{FactorId, FactorTemplate, Grade, FACTOR_COUNT, FACTOR_TEMPLATES};
pub use metrics::{
    metrics_in, BaseMetric, MetricGroup, MetricId, MetricOption, BASE_METRICS, METRIC_COUNT,
};
