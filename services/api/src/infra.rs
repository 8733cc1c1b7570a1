use founder_fit::error::AppError;
use founder_fit::scoring::EvaluationRequest;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Reads an `{ idea, roster }` document from disk.
pub(crate) fn load_evaluation_request(path: &Path) -> Result<EvaluationRequest, AppError> {
    let raw = std::fs::read_to_string(path)?;
    parse_evaluation_request(&raw, &path.display().to_string())
}

/// Parses a request document; `origin` names where it came from in error messages.
pub(crate) fn parse_evaluation_request(
    raw: &str,
    origin: &str,
) -> Result<EvaluationRequest, AppError> {
    serde_json::from_str(raw).map_err(|source| AppError::InvalidInput {
        origin: origin.to_string(),
        source,
    })
}
