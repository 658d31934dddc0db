use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::error;

use crate::models::Submission;
use crate::sheets::RowWriter;

const PING_RESPONSE: &str = "Hello from the other side";

#[derive(Clone)]
pub struct ApiState {
    pub sheets: Arc<dyn RowWriter>,
}

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/contact", post(contact))
        .with_state(state)
}

async fn ping() -> &'static str {
    PING_RESPONSE
}

/// Authorize, append one row, hand back whatever the service said.
/// Any failure comes back as a 400 with the raw error text.
async fn contact(State(state): State<ApiState>, Json(submission): Json<Submission>) -> Response {
    match state.sheets.append(&submission).await {
        Ok(ack) => (StatusCode::OK, Json(ack)).into_response(),
        Err(e) => {
            error!("Error {}", e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use serde_json::json;
    use tokio::sync::Mutex;
    use tower::ServiceExt;

    use super::*;
    use crate::sheets::SheetsError;

    struct RecordingWriter {
        rows: Mutex<Vec<Submission>>,
    }

    #[async_trait]
    impl RowWriter for RecordingWriter {
        async fn append(&self, submission: &Submission) -> Result<serde_json::Value, SheetsError> {
            self.rows.lock().await.push(submission.clone());
            Ok(json!({ "updates": { "updatedRows": 1 } }))
        }
    }

    struct UnauthorizedWriter;

    #[async_trait]
    impl RowWriter for UnauthorizedWriter {
        async fn append(&self, _submission: &Submission) -> Result<serde_json::Value, SheetsError> {
            Err(SheetsError::TokenRejected {
                status: StatusCode::UNAUTHORIZED,
                body: "invalid_grant".to_string(),
            })
        }
    }

    fn contact_request() -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/contact")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({
                    "name": "Ada",
                    "email": "ada@example.com",
                    "message": "Hi there"
                })
                .to_string(),
            ))
            .unwrap()
    }

    #[tokio::test]
    async fn ping_answers_with_the_liveness_string() {
        let app = router(ApiState {
            sheets: Arc::new(UnauthorizedWriter),
        });

        let response = app
            .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Hello from the other side");
    }

    #[tokio::test]
    async fn well_formed_submission_appends_exactly_one_row() {
        let writer = Arc::new(RecordingWriter {
            rows: Mutex::new(Vec::new()),
        });
        let app = router(ApiState {
            sheets: writer.clone(),
        });

        let response = app.oneshot(contact_request()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let ack: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(ack["updates"]["updatedRows"], 1);

        let rows = writer.rows.lock().await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Ada");
        assert_eq!(rows[0].email, "ada@example.com");
        assert_eq!(rows[0].message, "Hi there");
    }

    #[tokio::test]
    async fn second_identical_request_appends_a_second_row() {
        let writer = Arc::new(RecordingWriter {
            rows: Mutex::new(Vec::new()),
        });
        let app = router(ApiState {
            sheets: writer.clone(),
        });

        app.clone().oneshot(contact_request()).await.unwrap();
        app.oneshot(contact_request()).await.unwrap();

        assert_eq!(writer.rows.lock().await.len(), 2);
    }

    #[tokio::test]
    async fn authorization_failure_is_a_400_with_no_row_written() {
        let app = router(ApiState {
            sheets: Arc::new(UnauthorizedWriter),
        });

        let response = app.oneshot(contact_request()).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("invalid_grant"));
    }
}
