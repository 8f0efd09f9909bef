use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use medidir_storage::StorageError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The JSON body carried by every error response.
///
/// `message` is the stable summary shown to callers; `error` echoes the
/// underlying failure description.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub message: String,
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: error.into(),
        }
    }
}

/// High-level API errors mapped to HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Required create fields are absent (or falsy, which counts as absent).
    #[error("Missing required fields: {0}")]
    MissingFields(String),
    /// No record resolves for the identifier.
    #[error("No doctor record matches id {0}")]
    DoctorNotFound(String),
    /// Storage or other unexpected failure, carrying the failed operation
    /// as context for the response message.
    #[error("{context}: {message}")]
    Storage {
        context: &'static str,
        message: String,
    },
}

impl ApiError {
    pub fn missing_fields(fields: &[&str]) -> Self {
        Self::MissingFields(fields.join(", "))
    }

    pub fn doctor_not_found(id: impl Into<String>) -> Self {
        Self::DoctorNotFound(id.into())
    }

    pub fn storage(context: &'static str, message: impl Into<String>) -> Self {
        Self::Storage {
            context,
            message: message.into(),
        }
    }

    /// Translates a storage failure, keeping NotFound distinct from the
    /// generic server error so missing records surface as 404.
    pub fn from_storage(context: &'static str, err: StorageError) -> Self {
        match err {
            StorageError::NotFound { id } => Self::DoctorNotFound(id),
            other => Self::Storage {
                context,
                message: other.to_string(),
            },
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFields(_) => StatusCode::BAD_REQUEST,
            ApiError::DoctorNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The stable human-facing summary for the response body.
    pub fn message(&self) -> &str {
        match self {
            ApiError::MissingFields(_) => "Missing required fields",
            ApiError::DoctorNotFound(_) => "Doctor not found",
            ApiError::Storage { context, .. } => context,
        }
    }

    fn detail(&self) -> String {
        match self {
            ApiError::MissingFields(fields) => fields.clone(),
            ApiError::DoctorNotFound(id) => format!("No doctor record matches id {id}"),
            ApiError::Storage { message, .. } => message.clone(),
        }
    }

    pub fn to_error_body(&self) -> ErrorBody {
        ErrorBody::new(self.message(), self.detail())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match serde_json::to_vec(&self.to_error_body()) {
            Ok(b) => b,
            Err(_) => {
                // Fallback minimal body if serialization fails
                let fallback = ErrorBody::new("Internal server error", "Serialization failure");
                serde_json::to_vec(&fallback).unwrap_or_else(|_| b"{}".to_vec())
            }
        };

        let mut builder = axum::http::Response::builder().status(status);
        builder = builder.header(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        builder
            .body(axum::body::Body::from(body))
            .unwrap_or_else(|_| {
                axum::http::Response::builder()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .header(
                        header::CONTENT_TYPE,
                        HeaderValue::from_static("application/json"),
                    )
                    .body(axum::body::Body::from("{}"))
                    .expect("build fallback response")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_response_sets_status_and_content_type() {
        let resp = ApiError::missing_fields(&["name"]).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let content_type = resp.headers().get(header::CONTENT_TYPE).unwrap();
        assert_eq!(content_type, &HeaderValue::from_static("application/json"));
    }

    #[test]
    fn api_error_variants_map_to_status() {
        let cases: Vec<(ApiError, StatusCode)> = vec![
            (ApiError::missing_fields(&["name"]), StatusCode::BAD_REQUEST),
            (ApiError::doctor_not_found("abc"), StatusCode::NOT_FOUND),
            (
                ApiError::storage("Error fetching doctors", "boom"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.status_code(), status);
        }
    }

    #[test]
    fn missing_fields_body_lists_field_names() {
        let err = ApiError::missing_fields(&["name", "experience", "consultationFee"]);
        let body = err.to_error_body();
        assert_eq!(body.message, "Missing required fields");
        assert_eq!(body.error, "name, experience, consultationFee");
    }

    #[test]
    fn not_found_body_uses_stable_message() {
        let body = ApiError::doctor_not_found("abc-123").to_error_body();
        assert_eq!(body.message, "Doctor not found");
        assert!(body.error.contains("abc-123"));
    }

    #[test]
    fn storage_body_echoes_underlying_message() {
        let err = ApiError::from_storage(
            "Error fetching doctors",
            StorageError::internal("connection reset"),
        );
        let body = err.to_error_body();
        assert_eq!(body.message, "Error fetching doctors");
        assert_eq!(body.error, "Internal error: connection reset");
    }

    #[test]
    fn storage_not_found_becomes_doctor_not_found() {
        let err = ApiError::from_storage("Error updating doctor", StorageError::not_found("xyz"));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_error_body().message, "Doctor not found");
    }

    #[test]
    fn error_body_serializes_to_two_fields() {
        let body = ErrorBody::new("Doctor not found", "No doctor record matches id x");
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["message"], "Doctor not found");
        assert_eq!(value["error"], "No doctor record matches id x");
        assert_eq!(value.as_object().unwrap().len(), 2);
    }
}
