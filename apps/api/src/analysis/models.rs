use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::checklist::ChecklistItem;
use crate::scoring::MetricKey;

/// Untrusted model output. Only the merger may look inside; everything else
/// consumes `NormalizedAnalysis`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RawModelAnalysis(pub(crate) Value);

impl RawModelAnalysis {
    pub fn new(value: Value) -> Self {
        Self(value)
    }
}

/// Performance ratings keyed by metric, on the model's 1–10 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    pub formatting: f64,
    pub content_quality: f64,
    pub ats_compatibility: f64,
    pub keyword_usage: f64,
    pub quantifiable_achievements: f64,
}

impl PerformanceMetrics {
    pub fn get(&self, key: MetricKey) -> f64 {
        match key {
            MetricKey::Formatting => self.formatting,
            MetricKey::ContentQuality => self.content_quality,
            MetricKey::AtsCompatibility => self.ats_compatibility,
            MetricKey::KeywordUsage => self.keyword_usage,
            MetricKey::QuantifiableAchievements => self.quantifiable_achievements,
        }
    }

    pub fn set(&mut self, key: MetricKey, value: f64) {
        let slot = match key {
            MetricKey::Formatting => &mut self.formatting,
            MetricKey::ContentQuality => &mut self.content_quality,
            MetricKey::AtsCompatibility => &mut self.ats_compatibility,
            MetricKey::KeywordUsage => &mut self.keyword_usage,
            MetricKey::QuantifiableAchievements => &mut self.quantifiable_achievements,
        };
        *slot = value;
    }
}

/// Fully defaulted analysis: every field present and well-typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedAnalysis {
    pub overall_score: String,
    pub summary: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub keywords: Vec<String>,
    pub action_items: Vec<String>,
    pub pro_tips: Vec<String>,
    pub performance_metrics: PerformanceMetrics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    Available,
    Unavailable,
}

/// One metric ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricScore {
    pub key: MetricKey,
    pub label: &'static str,
    pub icon: &'static str,
    pub value: f64,
    pub percent: u8,
}

/// Everything one run produces for the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub run_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub service_status: ServiceStatus,
    pub page_count: u32,
    pub extracted_chars: usize,
    pub checklist: Vec<ChecklistItem>,
    pub analysis: NormalizedAnalysis,
    pub overall_percent: u8,
    pub metrics: Vec<MetricScore>,
}
