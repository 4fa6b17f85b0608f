//! Locates and vets the JSON object inside a model reply.

use serde_json::Value;

use crate::analysis::models::RawModelAnalysis;
use crate::analysis::AnalysisError;

/// The span from the first `{` through the last `}`, if both exist in order.
/// Prose or markdown fences around the object are ignored.
pub fn json_span(reply: &str) -> Option<&str> {
    let start = reply.find('{')?;
    let end = reply.rfind('}')?;
    (end > start).then(|| &reply[start..=end])
}

/// Turns reply text into an untrusted analysis, or classifies why it can't.
///
/// - no span, or a span that doesn't parse → `MalformedModelResponse`
/// - a non-empty `error` field → `NotAResume` with the model's text
/// - no usable `overallScore` → `MalformedModelResponse`
pub fn interpret_reply(reply: &str) -> Result<RawModelAnalysis, AnalysisError> {
    let span = json_span(reply).ok_or_else(|| {
        AnalysisError::MalformedModelResponse("no JSON object in model reply".to_string())
    })?;

    let parsed: Value = serde_json::from_str(span)
        .map_err(|e| AnalysisError::MalformedModelResponse(format!("invalid JSON: {e}")))?;

    if let Some(reason) = parsed.get("error").filter(|v| is_truthy(v)) {
        let reason = match reason {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        return Err(AnalysisError::NotAResume(reason));
    }

    if !parsed.get("overallScore").is_some_and(is_truthy) {
        return Err(AnalysisError::MalformedModelResponse(
            "reply has neither overallScore nor error".to_string(),
        ));
    }

    Ok(RawModelAnalysis::new(parsed))
}

/// Missing, null, false, 0 and "" all count as absent.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0 && !v.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
