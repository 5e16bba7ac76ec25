use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Body sent to clients for any server-side failure.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong!";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            other => {
                error!("{:?}", other);
                (other.status_code(), GENERIC_ERROR_MESSAGE).into_response()
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Parse an integer path segment, rejecting anything that is not one.
pub fn parse_id(raw: &str, what: &str) -> AppResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::InvalidRequest(format!("Invalid {} id", what)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_integers() {
        assert_eq!(parse_id("42", "card").unwrap(), 42);
        assert_eq!(parse_id("-3", "card").unwrap(), -3);
    }

    #[test]
    fn parse_id_rejects_garbage() {
        let err = parse_id("abc", "card").unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Invalid request: Invalid card id");
    }

    #[test]
    fn database_errors_map_to_500() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
