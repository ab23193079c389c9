use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use relink_admin::AdminError;
use relink_resolver::ResolveError;
use thiserror::Error;
use tracing::error;

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Admin(#[from] AdminError),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Admin(AdminError::Duplicate { .. }) => StatusCode::CONFLICT,
            AppError::Admin(AdminError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Admin(AdminError::Storage(_)) | AppError::Resolve(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relink_core::{LinkId, StorageError};

    #[test]
    fn status_per_error() {
        let duplicate = AppError::from(AdminError::Duplicate {
            active_link: "a.com".into(),
            history_link: String::new(),
        });
        assert_eq!(duplicate.status(), StatusCode::CONFLICT);

        let missing = AppError::from(AdminError::NotFound(LinkId::new("x")));
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let storage = AppError::from(ResolveError::Storage(StorageError::Unavailable("down".into())));
        assert_eq!(storage.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
