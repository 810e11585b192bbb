//! Print job encoding handler.

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use log::{debug, warn};

use crate::template::PrintJob;

/// Handle POST /api/jobs/encode - encode a JSON print job to printer bytes.
pub async fn encode(Json(job): Json<PrintJob>) -> Result<impl IntoResponse, (StatusCode, String)> {
    let bytes = job.output().map_err(|e| {
        warn!("rejected print job '{}': {}", job.template.name, e);
        (StatusCode::BAD_REQUEST, e.to_string())
    })?;

    debug!(
        "encoded print job '{}' ({} labels, {} bytes)",
        job.template.name,
        job.body.len(),
        bytes.len()
    );

    Ok(([(header::CONTENT_TYPE, "application/octet-stream")], bytes))
}
