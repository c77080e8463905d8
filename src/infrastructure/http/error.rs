//! Error and JSON response writers

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use crate::application::errors::{ApiError, ErrorKind};

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let detail = self.detail();

        match self.kind() {
            ErrorKind::Internal => tracing::error!(status = status.as_u16(), "{}", detail),
            _ => tracing::warn!(status = status.as_u16(), "{}", detail),
        }

        let body = json!({
            "error": {
                "status": status.as_u16(),
                "detail": detail,
            }
        });
        (status, Json(body)).into_response()
    }
}

/// Encode `body` as JSON. Encoding failures are classified as internal.
pub fn json_response<T: Serialize>(
    status: StatusCode,
    asset: &str,
    body: &T,
) -> Result<Response, ApiError> {
    let bytes = serde_json::to_vec(body).map_err(|err| ApiError::encoding(asset, err))?;
    Ok((status, [(header::CONTENT_TYPE, "application/json")], bytes).into_response())
}
