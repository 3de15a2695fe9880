use crate::domain::models::CreateMazeError;

use super::handlers::ParseCreateMazeHttpRequestError;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> ApiSuccess<T>
where
    T: Serialize,
{
    pub(super) fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    UnprocessableEntity(String),
}

impl From<CreateMazeError> for ApiError {
    fn from(e: CreateMazeError) -> Self {
        match e {
            CreateMazeError::Generate(cause) => Self::UnprocessableEntity(cause.to_string()),
        }
    }
}

impl From<ParseCreateMazeHttpRequestError> for ApiError {
    fn from(e: ParseCreateMazeHttpRequestError) -> Self {
        Self::UnprocessableEntity(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        use ApiError::*;

        match self {
            UnprocessableEntity(message) => {
                tracing::debug!("rejected request: {}", message);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ApiResponseBody::new_error(
                        StatusCode::UNPROCESSABLE_ENTITY,
                        message,
                    )),
                )
                    .into_response()
            }
        }
    }
}

/// Generic response structure shared by all API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponseBody<T: Serialize> {
    status_code: u16,
    data: T,
}

impl<T: Serialize> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

/// The response data format for all error responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}
