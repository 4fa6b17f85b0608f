//! One analysis run, upload to report.
//!
//! Flow: Extracting → Evaluating → AwaitingExternalAnalysis → Merging → Ready.
//! `Failed` is reachable from Extracting, AwaitingExternalAnalysis and Merging.
//! An unavailable service is not a failure: the run skips to Ready with a
//! placeholder analysis so the locally computed checklist survives.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::merge::{defaults, merge, metric_value};
use crate::analysis::models::{
    AnalysisReport, MetricScore, NormalizedAnalysis, RawModelAnalysis, ServiceStatus,
};
use crate::analysis::prompts::{build_analysis_prompt, ANALYSIS_SYSTEM};
use crate::analysis::response::interpret_reply;
use crate::analysis::AnalysisError;
use crate::checklist::{self, ChecklistItem};
use crate::extraction::{extract_text, PdfBackend};
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::{AnalysisService, ChatMessage, Readiness};
use crate::scoring::{normalize, normalize_str, MetricDefinition, METRICS};

pub const UNAVAILABLE_SUMMARY: &str = "AI analysis is unavailable right now. \
    The checklist below was computed locally from your resume; try again later for a full score.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStage {
    AwaitingInput,
    Extracting,
    Evaluating,
    AwaitingExternalAnalysis,
    Merging,
    Ready,
    Failed,
}

/// Per-run bookkeeping; logs every transition under the run id.
struct RunTracker {
    run_id: Uuid,
    stage: RunStage,
}

impl RunTracker {
    fn new() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            stage: RunStage::AwaitingInput,
        }
    }

    fn advance(&mut self, next: RunStage) {
        info!(run_id = %self.run_id, from = ?self.stage, to = ?next, "run stage");
        self.stage = next;
    }

    fn fail(&mut self, error: AnalysisError) -> AnalysisError {
        warn!(run_id = %self.run_id, stage = ?self.stage, "run failed: {error}");
        self.stage = RunStage::Failed;
        error
    }
}

/// Stateless between runs; share it behind `Arc` across requests.
#[derive(Clone)]
pub struct Analyzer {
    backend: Arc<dyn PdfBackend>,
    service: Arc<dyn AnalysisService>,
    model: String,
    metrics: &'static [MetricDefinition],
}

impl Analyzer {
    pub fn new(
        backend: Arc<dyn PdfBackend>,
        service: Arc<dyn AnalysisService>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            service,
            model: model.into(),
            metrics: &METRICS,
        }
    }

    pub fn service(&self) -> &dyn AnalysisService {
        self.service.as_ref()
    }

    pub async fn run(
        &self,
        pdf: bytes::Bytes,
        job_description: &str,
    ) -> Result<AnalysisReport, AnalysisError> {
        let mut tracker = RunTracker::new();

        tracker.advance(RunStage::Extracting);
        let document = match extract_text(Arc::clone(&self.backend), pdf).await {
            Ok(document) => document,
            Err(e) => return Err(tracker.fail(e.into())),
        };

        tracker.advance(RunStage::Evaluating);
        let checklist = checklist::evaluate(&document.text);

        tracker.advance(RunStage::AwaitingExternalAnalysis);
        let raw = match self.request_analysis(&tracker, &document.text, job_description).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracker.advance(RunStage::Ready);
                return Ok(self.report(
                    &tracker,
                    document.page_count,
                    &document.text,
                    checklist,
                    self.placeholder_analysis(),
                    ServiceStatus::Unavailable,
                ));
            }
            Err(e) => return Err(tracker.fail(e)),
        };

        tracker.advance(RunStage::Merging);
        let analysis = match merge(&raw, self.metrics) {
            Ok(analysis) => analysis,
            Err(e) => return Err(tracker.fail(e.into())),
        };

        tracker.advance(RunStage::Ready);
        Ok(self.report(
            &tracker,
            document.page_count,
            &document.text,
            checklist,
            analysis,
            ServiceStatus::Available,
        ))
    }

    /// `Ok(None)` means the service is not ready or could not be reached.
    async fn request_analysis(
        &self,
        tracker: &RunTracker,
        document_text: &str,
        job_description: &str,
    ) -> Result<Option<RawModelAnalysis>, AnalysisError> {
        if let Readiness::NotReady(reason) = self.service.readiness().await {
            warn!(run_id = %tracker.run_id, "analysis service not ready: {reason}");
            return Ok(None);
        }

        let messages = [
            ChatMessage::system(format!("{ANALYSIS_SYSTEM} {JSON_ONLY_INSTRUCTION}")),
            ChatMessage::user(build_analysis_prompt(document_text, job_description)),
        ];

        let reply = match self.service.chat(&messages, &self.model).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(run_id = %tracker.run_id, "analysis service unavailable: {e}");
                return Ok(None);
            }
        };

        interpret_reply(reply.content()).map(Some)
    }

    fn placeholder_analysis(&self) -> NormalizedAnalysis {
        let mut analysis = defaults(self.metrics);
        analysis.summary = UNAVAILABLE_SUMMARY.to_string();
        analysis
    }

    fn report(
        &self,
        tracker: &RunTracker,
        page_count: u32,
        text: &str,
        checklist: Vec<ChecklistItem>,
        analysis: NormalizedAnalysis,
        service_status: ServiceStatus,
    ) -> AnalysisReport {
        let metrics = self
            .metrics
            .iter()
            .map(|metric| {
                let value = metric_value(&analysis, metric.key);
                MetricScore {
                    key: metric.key,
                    label: metric.label,
                    icon: metric.icon,
                    value,
                    percent: normalize(value),
                }
            })
            .collect();

        AnalysisReport {
            run_id: tracker.run_id,
            analyzed_at: Utc::now(),
            service_status,
            page_count,
            extracted_chars: text.chars().count(),
            checklist,
            overall_percent: normalize_str(&analysis.overall_score),
            analysis,
            metrics,
        }
    }
}
