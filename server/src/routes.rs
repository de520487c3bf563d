use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use delivery::ValidationResult;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{error::AppError, state::AppState};

#[derive(Deserialize)]
pub struct ValidateAddressRequest {
    address: String,
}

#[derive(Serialize)]
pub struct ValidateAddressResponse {
    pub success: bool,
    pub data: ValidationResult,
}

pub async fn validate_address_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ValidateAddressRequest>, JsonRejection>,
) -> Result<Json<ValidateAddressResponse>, AppError> {
    // Missing field, non-string value, and malformed JSON all count as
    // caller errors; the classifier is never invoked for them.
    let Json(request) = payload.map_err(|_| AppError::InvalidAddress)?;

    if request.address.trim().is_empty() {
        return Err(AppError::InvalidAddress);
    }

    let result = state.areas.classify(&request.address);
    debug!(
        "Address classified: valid={} confidence={}",
        result.is_valid, result.confidence
    );

    Ok(Json(ValidateAddressResponse {
        success: true,
        data: result,
    }))
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode, header::CONTENT_TYPE},
        routing::post,
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::validate_address_handler;
    use crate::state::AppState;

    fn app() -> Router {
        Router::new()
            .route("/validate-address", post(validate_address_handler))
            .with_state(AppState::new())
    }

    async fn send(body: String) -> (StatusCode, Value) {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/validate-address")
                    .header(CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_serviceable_address() {
        let request = json!({ "address": "Jl. Raya Cimangis No. 123, Kota Depok" });
        let (status, body) = send(request.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["isValid"], true);
        assert_eq!(body["data"]["confidence"], 95);
        assert_eq!(body["data"]["detectedArea"], "Cimangis, Depok");
    }

    #[tokio::test]
    async fn test_unserviceable_address_is_still_success() {
        let request = json!({ "address": "Jl. Sudirman, Jakarta Selatan" });
        let (status, body) = send(request.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["isValid"], false);
        assert_eq!(body["data"]["confidence"], 95);
    }

    #[tokio::test]
    async fn test_missing_address_field() {
        let (status, body) = send(json!({}).to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Alamat tidak valid");
    }

    #[tokio::test]
    async fn test_non_string_address() {
        let (status, body) = send(json!({ "address": 42 }).to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Alamat tidak valid");
    }

    #[tokio::test]
    async fn test_empty_address() {
        let (status, body) = send(json!({ "address": "   " }).to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let (status, body) = send("not json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Alamat tidak valid");
    }
}
