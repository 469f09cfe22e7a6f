//! JSON error envelope for the `/api` routes

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::domain::ProviderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorType {
    InvalidRequestError,
    NotFoundError,
    ProviderError,
}

impl std::fmt::Display for ApiErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequestError => write!(f, "invalid_request_error"),
            Self::NotFoundError => write!(f, "not_found_error"),
            Self::ProviderError => write!(f, "provider_error"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: ApiErrorType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, error_type: ApiErrorType, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: ApiErrorDetail {
                    message: message.into(),
                    error_type,
                    param: None,
                    code: None,
                },
            },
        }
    }

    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.response.error.param = Some(param.into());
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.response.error.code = Some(code.into());
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        let status =
            StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::BAD_GATEWAY);

        let error_type = if err.is_not_found() {
            ApiErrorType::NotFoundError
        } else if status.is_client_error() {
            ApiErrorType::InvalidRequestError
        } else {
            ApiErrorType::ProviderError
        };

        Self::new(status, error_type, err.to_string())
            .with_param("id")
            .with_code(err.kind())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.response.error.error_type, self.response.error.message
        )
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_conversion() {
        let api_err: ApiError = ProviderError::not_found("doesnotexist").into();

        assert_eq!(api_err.status, StatusCode::NOT_FOUND);
        assert_eq!(api_err.response.error.error_type, ApiErrorType::NotFoundError);
        assert_eq!(api_err.response.error.param.as_deref(), Some("id"));
        assert_eq!(api_err.response.error.code.as_deref(), Some("not_found"));
    }

    #[test]
    fn test_provider_status_passthrough() {
        let api_err: ApiError = ProviderError::status(503, "pikachu").into();

        assert_eq!(api_err.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(api_err.response.error.error_type, ApiErrorType::ProviderError);
        assert_eq!(api_err.response.error.code.as_deref(), Some("provider_status"));
    }

    #[test]
    fn test_transport_is_bad_gateway() {
        let api_err: ApiError = ProviderError::transport("pikachu", "connection refused").into();

        assert_eq!(api_err.status, StatusCode::BAD_GATEWAY);
        assert_eq!(api_err.response.error.code.as_deref(), Some("transport"));
    }

    #[test]
    fn test_client_status_is_invalid_request() {
        let api_err: ApiError = ProviderError::status(400, "pikachu").into();

        assert_eq!(api_err.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            api_err.response.error.error_type,
            ApiErrorType::InvalidRequestError
        );
    }

    #[test]
    fn test_decode_is_provider_error() {
        let api_err: ApiError = ProviderError::decode("pikachu", "eof").into();

        assert_eq!(api_err.status, StatusCode::BAD_GATEWAY);
        assert_eq!(api_err.response.error.error_type, ApiErrorType::ProviderError);
        assert_eq!(
            api_err.to_string(),
            format!("provider_error: {}", api_err.response.error.message)
        );
    }

    #[test]
    fn test_error_serialization() {
        let err: ApiError = ProviderError::not_found("missingno").into();
        let json = serde_json::to_string(&err.response).unwrap();

        assert!(json.contains("\"type\":\"not_found_error\""));
        assert!(json.contains("missingno"));
    }
}
