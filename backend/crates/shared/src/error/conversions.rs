//! Error conversions - response and framework integration
//!
//! Maps [`AppError`] onto the HTTP surface. Gated behind the `axum`
//! feature so domain crates can depend on the kernel without pulling
//! in the framework.

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for super::app_error::AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // RFC 7807 Problem Details for HTTP APIs
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": self.message(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(all(test, feature = "axum"))]
mod tests {
    use crate::error::app_error::AppError;
    use axum::response::IntoResponse;

    #[test]
    fn test_status_carried_to_response() {
        let response = AppError::not_found("no such post").into_response();
        assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);

        let response = AppError::internal("Database error").into_response();
        assert_eq!(
            response.status(),
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
