// Metric configuration and score normalization.
// Pure functions only; nothing here touches the network or the PDF backend.

pub mod metrics;
pub mod normalize;

pub use metrics::{MetricDefinition, MetricKey, METRICS};
pub use normalize::{normalize, normalize_str};
