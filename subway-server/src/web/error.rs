//! Mapping of domain errors onto HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::domain::InvalidDistance;
use crate::path::PathError;
use crate::store::StoreError;

use super::dto::ErrorResponse;

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Unauthorized { message: String },
    NotFound { message: String },
    Conflict { message: String },
    Internal { message: String },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            AppError::BadRequest { message }
            | AppError::Unauthorized { message }
            | AppError::NotFound { message }
            | AppError::Conflict { message }
            | AppError::Internal { message } => message,
        }
    }
}

impl From<PathError> for AppError {
    fn from(e: PathError) -> Self {
        let message = e.to_string();
        match e {
            PathError::IdenticalEndpoints(_) | PathError::UnknownStation(_) => {
                AppError::BadRequest { message }
            }
            PathError::NoPath { .. } => AppError::NotFound { message },
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        let message = e.to_string();
        match e {
            StoreError::StationNotFound(_)
            | StoreError::LineNotFound(_)
            | StoreError::MemberNotFound(_)
            | StoreError::FavoriteNotFound(_) => AppError::NotFound { message },
            StoreError::DuplicateStation(_)
            | StoreError::DuplicateLine(_)
            | StoreError::DuplicateMember(_)
            | StoreError::DuplicateFavorite { .. }
            | StoreError::StationInUse(_) => AppError::Conflict { message },
            StoreError::InvalidInput(_)
            | StoreError::InvalidDistance(_)
            | StoreError::Line(_) => AppError::BadRequest { message },
            StoreError::InvalidCredentials | StoreError::Unauthorized => {
                AppError::Unauthorized { message }
            }
        }
    }
}

impl From<InvalidDistance> for AppError {
    fn from(e: InvalidDistance) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Internal {
            message: format!("Template error: {e}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(%status, message = self.message(), "Request failed");
        } else {
            warn!(%status, message = self.message(), "Request rejected");
        }

        let body = Json(ErrorResponse {
            error: self.message().to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Distance, LineError, StationId};

    #[test]
    fn path_errors() {
        let status = |e: PathError| AppError::from(e).status();
        assert_eq!(
            status(PathError::IdenticalEndpoints(StationId(1))),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status(PathError::UnknownStation(StationId(9))),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status(PathError::NoPath {
                from: StationId(1),
                to: StationId(2),
            }),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn store_errors() {
        let status = |e: StoreError| AppError::from(e).status();
        assert_eq!(
            status(StoreError::StationNotFound(StationId(1))),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status(StoreError::DuplicateStation("강남역".into())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status(StoreError::StationInUse(StationId(1))),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status(StoreError::Line(LineError::LastSection)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status(StoreError::Line(LineError::DistanceOverflow {
                first: Distance::new(3_000_000_000).unwrap(),
                second: Distance::new(3_000_000_000).unwrap(),
            })),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status(StoreError::Unauthorized),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn message_is_kept() {
        let err = AppError::from(StoreError::InvalidCredentials);
        assert_eq!(err.message(), "invalid email or password");
    }
}
