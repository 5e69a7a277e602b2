use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AnnouncementError {
    #[error("{0}")]
    Unauthorized(&'static str),

    #[error("{0}")]
    BadRequest(&'static str),

    #[error("Announcement not found")]
    NotFound,

    #[error("store error: {0}")]
    Store(#[from] anyhow::Error),
}

impl AnnouncementError {
    pub fn status(&self) -> StatusCode {
        match self {
            AnnouncementError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AnnouncementError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AnnouncementError::NotFound => StatusCode::NOT_FOUND,
            AnnouncementError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AnnouncementError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AnnouncementError::Store(e) => {
                tracing::error!("announcement store failure: {e:#}");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub type AnnouncementResult<T> = Result<T, AnnouncementError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AnnouncementError::Unauthorized("Authentication required").status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AnnouncementError::BadRequest("No fields to update").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AnnouncementError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AnnouncementError::Store(anyhow::anyhow!("connection reset")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_store_error_is_not_leaked() {
        let response = AnnouncementError::Store(anyhow::anyhow!("password=hunter2")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "Internal server error");
    }
}
