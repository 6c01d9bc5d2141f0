use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use retranslate_mt::MtError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// A failed request: status code plus a user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn request_timeout() -> Self {
        Self {
            status: StatusCode::REQUEST_TIMEOUT,
            message: "The request timed out".to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }

    /// Mirror the gateway's status; failures without one become 500
    pub fn from_gateway(err: &MtError) -> Self {
        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Malformed body, wrong field types and wrong content type all become 400
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

/// Give bodiless 408 responses from the timeout layer the usual error payload
pub async fn timeout_as_json(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        return ApiError::request_timeout().into_response();
    }
    response
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_status_mirrored() {
        let cases = [
            (MtError::InvalidApiKey(String::new()), 403),
            (MtError::QuotaExceeded(String::new()), 456),
            (MtError::RateLimited(String::new()), 429),
            (
                MtError::Provider {
                    status: 502,
                    message: String::new(),
                },
                502,
            ),
            (MtError::Network("refused".to_string()), 500),
        ];
        for (err, expected) in cases {
            assert_eq!(ApiError::from_gateway(&err).status.as_u16(), expected, "{:?}", err);
        }
    }
}
