use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Misses carry no payload; the reason only goes to the log.
            AppError::NotFound(msg) => {
                debug!(reason = %msg, "Not found");
                StatusCode::NOT_FOUND.into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn not_found_renders_empty_404() {
        let res = AppError::NotFound("Product 9 not found".to_string()).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());
    }

    #[test]
    fn display_is_the_message() {
        let err = AppError::NotFound("Product 9 not found".to_string());
        assert_eq!(err.to_string(), "Product 9 not found");
    }
}
