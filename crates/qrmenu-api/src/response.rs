//! API Response wrapper

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

/// `{ success, data, message? }` on success, `{ success: false, error }` on failure.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
        }
    }

    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::success(data)
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(message.into()),
        }
    }
}

pub type ApiResult<T> = Result<Json<ApiResponse<T>>, crate::ApiError>;

/// 201 with the created resource.
pub fn created<T: Serialize>(data: T, message: &str) -> (StatusCode, Json<ApiResponse<T>>) {
    (
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(data, message)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope() {
        let body = serde_json::to_value(ApiResponse::success_with_message(1, "Done")).unwrap();
        assert_eq!(body, json!({ "success": true, "data": 1, "message": "Done" }));
    }

    #[test]
    fn test_unit_data_serializes_as_null() {
        let body = serde_json::to_value(ApiResponse::success(())).unwrap();
        assert_eq!(body, json!({ "success": true, "data": null }));
    }

    #[test]
    fn test_error_envelope() {
        let body = serde_json::to_value(ApiResponse::error("Menu not found")).unwrap();
        assert_eq!(body, json!({ "success": false, "error": "Menu not found" }));
    }
}
