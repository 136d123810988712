use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use radiocircolo_mixcloud::MixcloudError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Podcast not found")]
    PodcastNotFound,

    #[error("catalog error: {0}")]
    Catalog(#[from] MixcloudError),

    #[error("database error: {0}")]
    Database(#[from] DbErr),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::PodcastNotFound => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": "Podcast not found" })),
            )
                .into_response(),
            other => {
                // Upstream detail stays in the logs.
                tracing::error!(error = %other, "failed to build podcast response");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
