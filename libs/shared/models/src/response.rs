use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";

/// `{status, message, data}` envelope returned by every API endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: STATUS_SUCCESS,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR,
            message: message.into(),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = if self.status == STATUS_SUCCESS {
            StatusCode::OK
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_shape() {
        let response = ApiResponse::success("Food recommendations retrieved", vec!["a", "b"]);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value, json!({
            "status": "success",
            "message": "Food recommendations retrieved",
            "data": ["a", "b"]
        }));
    }

    #[test]
    fn test_error_envelope_has_null_data() {
        let value = serde_json::to_value(ApiResponse::error("boom")).unwrap();

        assert_eq!(value["status"], "error");
        assert_eq!(value["message"], "boom");
        assert!(value["data"].is_null());
    }
}
