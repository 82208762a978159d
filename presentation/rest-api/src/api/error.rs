use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Builds the `(status, body)` pair every error mapper returns.
pub fn error_response(
    status: StatusCode,
    name: &str,
    message: &str,
) -> (StatusCode, Json<ErrorResponse>) {
    (status, Json(ErrorResponse::new(name, message)))
}
