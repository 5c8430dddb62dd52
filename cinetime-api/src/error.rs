use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cinetime_booking::{CheckoutError, QuickBookingError, StepError};
use cinetime_catalog::SeatError;
use cinetime_core::{CatalogError, CoreError};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(String),
    #[error("{0}")]
    NotFoundError(String),
    #[error("{0}")]
    ConflictError(String),
    #[error("{0}")]
    PaymentError(String),
    #[error("{0}")]
    ServiceUnavailable(String),
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::ConflictError(msg) => (StatusCode::CONFLICT, msg),
            AppError::PaymentError(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!("Service unavailable: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, msg)
            }
            AppError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ValidationError(msg) => AppError::ValidationError(msg),
            CoreError::InternalError(msg) => AppError::Anyhow(anyhow::anyhow!(msg)),
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::MovieNotFound(_) | CatalogError::EventNotFound(_) => {
                AppError::NotFoundError(err.to_string())
            }
            CatalogError::Unavailable(_) => AppError::ServiceUnavailable(err.to_string()),
        }
    }
}

impl From<SeatError> for AppError {
    fn from(err: SeatError) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<StepError> for AppError {
    fn from(err: StepError) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<QuickBookingError> for AppError {
    fn from(err: QuickBookingError) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<CheckoutError> for AppError {
    fn from(err: CheckoutError) -> Self {
        match err {
            CheckoutError::Validation(e) => e.into(),
            CheckoutError::NotReady(e) => e.into(),
            CheckoutError::QuickBooking(e) => e.into(),
            CheckoutError::AlreadyProcessing => AppError::ConflictError(err.to_string()),
            CheckoutError::PaymentFailed => AppError::PaymentError(err.to_string()),
        }
    }
}
