use crate::app_error::{AppError, ErrorCode};
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error before it gets converted into a status response.
        tracing::error!(error = ?self, "Request failed");

        let code = self.code();
        match self {
            AppError::InvalidInput(err) => {
                error_resp(StatusCode::BAD_REQUEST, code, Some(err.to_string()))
            }
            AppError::Database(_) => error_resp(StatusCode::SERVICE_UNAVAILABLE, code, None),
            AppError::Notification(_) => error_resp(StatusCode::BAD_GATEWAY, code, None),
            AppError::Internal(_) => error_resp(StatusCode::INTERNAL_SERVER_ERROR, code, None),
        }
    }
}

fn error_resp(status: StatusCode, code: ErrorCode, message: Option<String>) -> Response {
    let body = match message {
        Some(msg) => serde_json::json!({ "code": code.as_str(), "message": msg }),
        None => serde_json::json!({ "code": code.as_str() }),
    };
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_error::ValidationError;

    #[test]
    fn maps_errors_to_statuses() {
        let cases = [
            (
                AppError::InvalidInput(ValidationError::MissingEmail),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::Database("down".into()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                AppError::Notification("timeout".into()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                AppError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
