use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

pub type ServiceResult<T> = Result<T, AppError>;
pub type ServiceResponse<T> = ServiceResult<Json<T>>;

#[track_caller]
pub fn unexpected<T, E: Into<anyhow::Error>>(e: E) -> ServiceResult<T> {
    let caller = std::panic::Location::caller();
    error!("An unexpected error has occurred at {caller}: {}", e.into());
    Err(AppError::Unexpected)
}

#[derive(Debug)]
pub enum AppError {
    Unexpected,
    Unauthorized,
    DecodingRequestFailed,

    RunsNotFound,
    RunsInvalidStatus,
    RunsAlreadyModerated,

    /// The optimistic status change was rolled back; carries the storage
    /// collaborator's failure reason.
    ModerationPersistFailed(String),
    /// The local removal could not be confirmed and the record set was
    /// reloaded from storage; carries the failure reason.
    ModerationReloadRequired(String),
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    #[track_caller]
    fn from(e: E) -> Self {
        unexpected::<(), E>(e).unwrap_err()
    }
}

impl AppError {
    pub const fn code(&self) -> &'static str {
        match self {
            AppError::Unexpected => "unexpected",
            AppError::Unauthorized => "unauthorized",
            AppError::DecodingRequestFailed => "decoding_request_failed",

            AppError::RunsNotFound => "runs.not_found",
            AppError::RunsInvalidStatus => "runs.invalid_status",
            AppError::RunsAlreadyModerated => "runs.already_moderated",

            AppError::ModerationPersistFailed(_) => "moderation.persist_failed",
            AppError::ModerationReloadRequired(_) => "moderation.reload_required",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Unexpected => "An unexpected error has occurred.",
            AppError::Unauthorized => "You are not authorized to perform this action.",
            AppError::DecodingRequestFailed => "Failed to decode request",

            AppError::RunsNotFound => "This speedrun does not exist.",
            AppError::RunsInvalidStatus => "Unknown speedrun status.",
            AppError::RunsAlreadyModerated => {
                "This speedrun has already been moderated and cannot change status again."
            }

            AppError::ModerationPersistFailed(reason) => reason,
            AppError::ModerationReloadRequired(reason) => reason,
        }
    }

    pub const fn http_status_code(&self) -> StatusCode {
        match self {
            AppError::DecodingRequestFailed | AppError::RunsInvalidStatus => {
                StatusCode::BAD_REQUEST
            }

            AppError::Unauthorized => StatusCode::UNAUTHORIZED,

            AppError::RunsNotFound => StatusCode::NOT_FOUND,

            AppError::RunsAlreadyModerated => StatusCode::CONFLICT,

            AppError::Unexpected
            | AppError::ModerationPersistFailed(_)
            | AppError::ModerationReloadRequired(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn response_parts(&self) -> (StatusCode, Json<ErrorResponse>) {
        let status = self.http_status_code();
        let response = ErrorResponse {
            code: self.code(),
            message: self.message().to_owned(),
        };
        (status, Json(response))
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.response_parts().into_response()
    }
}
