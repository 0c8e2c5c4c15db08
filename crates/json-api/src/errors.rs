//! API Errors

use salvo::{
    Response, Scribe,
    http::StatusCode,
    oapi::{self, Components, EndpointOutRegister, Operation, ToSchema},
    writing::Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use snugfit_app::domain::bookings::{BookingsServiceError, models::BookingId};

/// Error response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    /// Always `"error"`
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Validation failures, in the order they were found
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("Content-Type must be application/json")]
    UnsupportedMediaType,

    #[error("{0}")]
    MalformedBody(String),

    #[error("validation failed with {} errors", .0.len())]
    Validation(Vec<String>),

    #[error("Order {0} not found")]
    NotFound(BookingId),

    #[error("internal server error")]
    Internal,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::MalformedBody(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn into_response(self) -> ErrorResponse {
        let (message, errors) = match self {
            Self::MalformedBody(message) => (None, Some(vec![message])),
            Self::Validation(errors) => (None, Some(errors)),
            other => (Some(other.to_string()), None),
        };

        ErrorResponse {
            status: "error".to_string(),
            message,
            errors,
        }
    }
}

impl From<BookingsServiceError> for ApiError {
    fn from(error: BookingsServiceError) -> Self {
        match error {
            BookingsServiceError::NotFound(id) => Self::NotFound(id),
            BookingsServiceError::Invalid(errors) => Self::Validation(errors),
        }
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            error!("request failed: {self}");
        }

        res.status_code(status_code);
        res.render(Json(self.into_response()));
    }
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut Components, operation: &mut Operation) {
        for (status_code, description) in [
            (StatusCode::BAD_REQUEST, "Invalid order payload"),
            (StatusCode::NOT_FOUND, "Order not found"),
            (StatusCode::UNSUPPORTED_MEDIA_TYPE, "Body is not JSON"),
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        ] {
            operation.responses.insert(
                status_code.as_str(),
                oapi::Response::new(description)
                    .add_content("application/json", ErrorResponse::to_schema(components)),
            );
        }
    }
}
