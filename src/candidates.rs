//! Candidate loading for the terminal host.
//!
//! A candidate file is either a JSON array (strings or keyed objects) or
//! plain text with one candidate per line. Blank lines and lines starting
//! with `#` are skipped in the plain form.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::CandidateSettings;
use crate::error::AppError;
use crate::suggest::{contains_ignore_case, Candidate, Deliver, Source};

/// Parse candidate file contents.
pub fn parse_candidates(content: &str) -> Result<Vec<Value>, AppError> {
    let trimmed = content.trim_start();
    if trimmed.starts_with('[') {
        let values: Vec<Value> =
            serde_json::from_str(trimmed).map_err(|e| AppError::Candidates(e.to_string()))?;
        if let Some(bad) = values.iter().find(|v| !(v.is_string() || v.is_object())) {
            return Err(AppError::Candidates(format!(
                "expected strings or objects, found {}",
                bad
            )));
        }
        return Ok(values);
    }

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| Value::String(line.to_string()))
        .collect())
}

/// Read and parse a candidate file.
pub fn load_candidates(path: &Path) -> Result<Vec<Value>, AppError> {
    let content = std::fs::read_to_string(path)?;
    let values = parse_candidates(&content)?;
    debug!(path = %path.display(), count = values.len(), "Loaded candidates");
    Ok(values)
}

/// Collect candidates from the configured file and inline list.
pub fn collect_candidates(settings: &CandidateSettings) -> Result<Vec<Value>, AppError> {
    let mut values = match &settings.file {
        Some(path) => load_candidates(path)?,
        None => Vec::new(),
    };
    values.extend(settings.inline.iter().cloned().map(Value::String));

    if values.is_empty() {
        warn!("No candidates configured; suggestions will stay empty");
    }
    Ok(values)
}

/// Build the suggestion source.
///
/// With a non-zero latency, lookups are answered from a tokio task after
/// the delay, which exercises deferred delivery. Must then be called inside
/// a tokio runtime.
pub fn build_source(values: Vec<Value>, latency: Duration) -> Source<Value> {
    if latency.is_zero() {
        return Source::Static(values);
    }

    info!(latency_ms = latency.as_millis() as u64, "Serving candidates with simulated latency");
    let values = Arc::new(values);
    // Answers like a remote search would: already filtered for the query.
    Source::deferred(move |_query: &str, deliver: Deliver<Value>| {
        let values = Arc::clone(&values);
        tokio::spawn(async move {
            tokio::time::sleep(latency).await;
            let hits: Vec<Value> = values
                .iter()
                .filter(|v| contains_ignore_case(&v.text(), deliver.query()))
                .cloned()
                .collect();
            debug!(query = deliver.query(), hits = hits.len(), "Delivering delayed candidates");
            deliver.deliver(hits);
        });
    })
}
