use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use vawa_screener::config::{AppConfig, ConfigError};
use vawa_screener::error::AppError;
use vawa_screener::workflows::self_petition::{AnswerRecord, Language};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Reads a JSON answer record from disk.
pub(crate) fn load_answers(path: &Path) -> Result<AnswerRecord, AppError> {
    let raw = std::fs::read_to_string(path)?;
    parse_answers(&raw)
}

pub(crate) fn parse_answers(raw: &str) -> Result<AnswerRecord, AppError> {
    Ok(serde_json::from_str(raw)?)
}

/// A `--language` flag wins over `APP_REPORT_LANGUAGE`.
pub(crate) fn resolve_language(
    config: &AppConfig,
    requested: Option<&str>,
) -> Result<Language, AppError> {
    match requested {
        Some(code) => Language::from_code(code)
            .ok_or_else(|| ConfigError::InvalidLanguage(code.to_string()).into()),
        None => Ok(config.screening.report_language),
    }
}
