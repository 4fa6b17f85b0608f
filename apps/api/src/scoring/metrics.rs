use serde::{Deserialize, Serialize};

/// Keys of the five performance metrics the model is asked to rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricKey {
    Formatting,
    ContentQuality,
    AtsCompatibility,
    KeywordUsage,
    QuantifiableAchievements,
}

impl MetricKey {
    /// The key as it appears in the model's `performanceMetrics` object.
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKey::Formatting => "formatting",
            MetricKey::ContentQuality => "contentQuality",
            MetricKey::AtsCompatibility => "atsCompatibility",
            MetricKey::KeywordUsage => "keywordUsage",
            MetricKey::QuantifiableAchievements => "quantifiableAchievements",
        }
    }
}

/// Static display configuration for one metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDefinition {
    pub key: MetricKey,
    pub label: &'static str,
    /// Fallback rating on the 1–10 scale when the model omits the metric.
    pub default_value: f64,
    pub icon: &'static str,
}

/// Display order is the order of this table.
pub const METRICS: [MetricDefinition; 5] = [
    MetricDefinition {
        key: MetricKey::Formatting,
        label: "Formatting",
        default_value: 7.0,
        icon: "🎨",
    },
    MetricDefinition {
        key: MetricKey::ContentQuality,
        label: "Content Quality",
        default_value: 6.0,
        icon: "📝",
    },
    MetricDefinition {
        key: MetricKey::AtsCompatibility,
        label: "ATS Compatibility",
        default_value: 6.0,
        icon: "🤖",
    },
    MetricDefinition {
        key: MetricKey::KeywordUsage,
        label: "Keyword Usage",
        default_value: 5.0,
        icon: "🔍",
    },
    MetricDefinition {
        key: MetricKey::QuantifiableAchievements,
        label: "Quantified Results",
        default_value: 4.0,
        icon: "📊",
    },
];
