//! Analysis Merger — the single gate from untrusted model JSON to
//! `NormalizedAnalysis`.
//!
//! A partially populated object never fails; missing or mistyped fields take
//! their defaults. Only a non-object input is rejected.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::analysis::models::{NormalizedAnalysis, PerformanceMetrics, RawModelAnalysis};
use crate::scoring::{MetricDefinition, MetricKey};

const DEFAULT_OVERALL_SCORE: &str = "0";

#[derive(Debug, Error)]
#[error("Model analysis must be a JSON object, got {found}")]
pub struct MergeError {
    pub found: &'static str,
}

pub fn merge(
    raw: &RawModelAnalysis,
    metrics: &[MetricDefinition],
) -> Result<NormalizedAnalysis, MergeError> {
    let object = raw.0.as_object().ok_or(MergeError {
        found: json_type_name(&raw.0),
    })?;
    Ok(from_object(object, metrics))
}

/// What an empty model object merges to: score "0", no text, default ratings.
pub fn defaults(metrics: &[MetricDefinition]) -> NormalizedAnalysis {
    from_object(&Map::new(), metrics)
}

fn from_object(object: &Map<String, Value>, metrics: &[MetricDefinition]) -> NormalizedAnalysis {
    NormalizedAnalysis {
        overall_score: overall_score(object.get("overallScore")),
        summary: object
            .get("summary")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        strengths: string_list(object, "strengths"),
        improvements: string_list(object, "improvements"),
        keywords: string_list(object, "keywords"),
        action_items: string_list(object, "actionItems"),
        pro_tips: string_list(object, "proTips"),
        performance_metrics: performance_metrics(object.get("performanceMetrics"), metrics),
    }
}

fn overall_score(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => DEFAULT_OVERALL_SCORE.to_string(),
    }
}

/// Strings pass through; other scalars are rendered as JSON text; nulls drop.
fn string_list(object: &Map<String, Value>, field: &str) -> Vec<String> {
    object
        .get(field)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| match item {
                    Value::Null => None,
                    Value::String(s) => Some(s.clone()),
                    other => Some(other.to_string()),
                })
                .collect()
        })
        .unwrap_or_default()
}

fn performance_metrics(value: Option<&Value>, metrics: &[MetricDefinition]) -> PerformanceMetrics {
    let supplied = value.and_then(Value::as_object);

    // Start from the built-in table so a short `metrics` slice still leaves
    // every field populated.
    let mut result = default_metrics();
    for metric in metrics {
        let rating = supplied
            .and_then(|m| m.get(metric.key.as_str()))
            .and_then(numeric)
            .unwrap_or(metric.default_value);
        result.set(metric.key, rating);
    }
    result
}

fn default_metrics() -> PerformanceMetrics {
    let mut result = PerformanceMetrics {
        formatting: 0.0,
        content_quality: 0.0,
        ats_compatibility: 0.0,
        keyword_usage: 0.0,
        quantifiable_achievements: 0.0,
    };
    for metric in crate::scoring::METRICS {
        result.set(metric.key, metric.default_value);
    }
    result
}

/// JSON numbers, or strings that are entirely a number.
fn numeric(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Metric value for a key, for callers that only have the key.
pub fn metric_value(analysis: &NormalizedAnalysis, key: MetricKey) -> f64 {
    analysis.performance_metrics.get(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::METRICS;
    use serde_json::json;

    fn merged(value: Value) -> NormalizedAnalysis {
        merge(&RawModelAnalysis::new(value), &METRICS).unwrap()
    }

    #[test]
    fn test_empty_object_gets_all_defaults() {
        let analysis = merged(json!({}));

        assert_eq!(analysis.overall_score, "0");
        assert_eq!(analysis.summary, "");
        assert!(analysis.strengths.is_empty());
        assert!(analysis.improvements.is_empty());
        assert!(analysis.keywords.is_empty());
        assert!(analysis.action_items.is_empty());
        assert!(analysis.pro_tips.is_empty());
        for metric in METRICS {
            assert_eq!(analysis.performance_metrics.get(metric.key), metric.default_value);
        }
    }

    #[test]
    fn test_serialized_metrics_have_exactly_five_keys() {
        let analysis = defaults(&METRICS);
        let value = serde_json::to_value(&analysis).unwrap();
        let metrics = value["performanceMetrics"].as_object().unwrap();
        assert_eq!(metrics.len(), 5);
        for metric in METRICS {
            assert!(metrics.contains_key(metric.key.as_str()));
        }
    }

    #[test]
    fn test_missing_keywords_only() {
        let analysis = merged(json!({
            "overallScore": "8/10",
            "summary": "Good match",
            "strengths": ["Rust", "APIs"],
            "improvements": ["Add metrics"],
            "actionItems": ["Add Kubernetes"],
            "proTips": ["Lead with impact"],
            "performanceMetrics": {
                "formatting": 9,
                "contentQuality": 8,
                "atsCompatibility": 7,
                "keywordUsage": 6,
                "quantifiableAchievements": 5
            }
        }));

        assert!(analysis.keywords.is_empty());
        assert_eq!(analysis.overall_score, "8/10");
        assert_eq!(analysis.summary, "Good match");
        assert_eq!(analysis.strengths, vec!["Rust", "APIs"]);
        assert_eq!(analysis.improvements, vec!["Add metrics"]);
        assert_eq!(analysis.action_items, vec!["Add Kubernetes"]);
        assert_eq!(analysis.pro_tips, vec!["Lead with impact"]);
        assert_eq!(analysis.performance_metrics.formatting, 9.0);
        assert_eq!(analysis.performance_metrics.quantifiable_achievements, 5.0);
    }

    #[test]
    fn test_partial_metrics_fall_back_per_key() {
        let analysis = merged(json!({
            "performanceMetrics": { "formatting": 3, "keywordUsage": "8", "contentQuality": "high" }
        }));
        let metrics = &analysis.performance_metrics;
        assert_eq!(metrics.formatting, 3.0);
        assert_eq!(metrics.keyword_usage, 8.0);
        assert_eq!(metrics.content_quality, 6.0);
        assert_eq!(metrics.ats_compatibility, 6.0);
        assert_eq!(metrics.quantifiable_achievements, 4.0);
    }

    #[test]
    fn test_mistyped_lists_become_empty() {
        let analysis = merged(json!({
            "strengths": "not a list",
            "keywords": null,
            "proTips": {"a": 1}
        }));
        assert!(analysis.strengths.is_empty());
        assert!(analysis.keywords.is_empty());
        assert!(analysis.pro_tips.is_empty());
    }

    #[test]
    fn test_list_items_are_stringified() {
        let analysis = merged(json!({ "keywords": ["Rust", 42, null, true] }));
        assert_eq!(analysis.keywords, vec!["Rust", "42", "true"]);
    }

    #[test]
    fn test_numeric_overall_score_keeps_json_text() {
        assert_eq!(merged(json!({ "overallScore": 8 })).overall_score, "8");
        assert_eq!(merged(json!({ "overallScore": 7.5 })).overall_score, "7.5");
        assert_eq!(merged(json!({ "overallScore": [1] })).overall_score, "0");
    }

    #[test]
    fn test_non_object_is_rejected() {
        let err = merge(&RawModelAnalysis::new(json!([1, 2])), &METRICS).unwrap_err();
        assert_eq!(err.found, "array");
        assert!(merge(&RawModelAnalysis::new(json!("text")), &METRICS).is_err());
        assert!(merge(&RawModelAnalysis::new(Value::Null), &METRICS).is_err());
    }

    #[test]
    fn test_defaults_match_empty_object() {
        let from_empty = merged(json!({}));
        let built = defaults(&METRICS);
        assert_eq!(built.overall_score, from_empty.overall_score);
        assert_eq!(built.summary, from_empty.summary);
        assert!(built.strengths.is_empty() && built.pro_tips.is_empty());
        for metric in METRICS {
            assert_eq!(
                built.performance_metrics.get(metric.key),
                from_empty.performance_metrics.get(metric.key)
            );
        }
    }

    #[test]
    fn test_metric_value_lookup() {
        let analysis = merged(json!({ "performanceMetrics": { "atsCompatibility": 2 } }));
        assert_eq!(metric_value(&analysis, MetricKey::AtsCompatibility), 2.0);
    }
}
