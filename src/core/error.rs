use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::constants::{INVALID_DATASET_MESSAGE, STORE_FAILURE_PREFIX};
use crate::shared::types::ErrorResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid dataset kind: {0:?}")]
    InvalidDatasetKind(String),

    /// The store could not be reached or refused the connection
    #[error("Store connection failure: {0}")]
    StoreConnection(#[source] sqlx::Error),

    /// The store was reachable but the query itself failed
    #[error("Store query failure: {0}")]
    StoreQuery(#[source] sqlx::Error),
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Configuration(_) => AppError::StoreConnection(err),
            _ => AppError::StoreQuery(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidDatasetKind(ref kind) => {
                tracing::debug!("Rejected dataset kind: {:?}", kind);
                (StatusCode::BAD_REQUEST, INVALID_DATASET_MESSAGE.to_string())
            }
            AppError::StoreConnection(ref e) => {
                tracing::error!("Store connection failure: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("{}{}", STORE_FAILURE_PREFIX, e),
                )
            }
            AppError::StoreQuery(ref e) => {
                tracing::error!("Store query failure: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("{}{}", STORE_FAILURE_PREFIX, e),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        serde_json::from_slice(&bytes).expect("body should be JSON")
    }

    #[test]
    fn test_pool_errors_classify_as_connection_failures() {
        assert!(matches!(
            AppError::from(sqlx::Error::PoolTimedOut),
            AppError::StoreConnection(_)
        ));
        assert!(matches!(
            AppError::from(sqlx::Error::PoolClosed),
            AppError::StoreConnection(_)
        ));
    }

    #[test]
    fn test_row_errors_classify_as_query_failures() {
        assert!(matches!(
            AppError::from(sqlx::Error::RowNotFound),
            AppError::StoreQuery(_)
        ));
        assert!(matches!(
            AppError::from(sqlx::Error::ColumnNotFound("latitude".to_string())),
            AppError::StoreQuery(_)
        ));
    }

    #[tokio::test]
    async fn test_invalid_dataset_kind_is_client_error() {
        let response = AppError::InvalidDatasetKind("xyz".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Tipe data tidak valid.");
    }

    #[tokio::test]
    async fn test_store_failures_are_server_errors_with_detail() {
        for err in [
            AppError::from(sqlx::Error::PoolTimedOut),
            AppError::from(sqlx::Error::RowNotFound),
        ] {
            let detail = match &err {
                AppError::StoreConnection(e) | AppError::StoreQuery(e) => e.to_string(),
                AppError::InvalidDatasetKind(_) => unreachable!(),
            };
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

            let body = body_json(response).await;
            assert_eq!(
                body["error"],
                format!("Koneksi database gagal: {}", detail).as_str()
            );
        }
    }
}
