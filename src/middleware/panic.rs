use std::any::Any;

use axum::response::{IntoResponse, Response};
use tower_http::catch_panic::CatchPanicLayer;

use crate::error::AppError;

/// Last resort: a panic inside a handler comes back as the same JSON error
/// envelope the rest of the API speaks, instead of a bare 500.
pub fn catch_panic_layer() -> CatchPanicLayer<fn(Box<dyn Any + Send + 'static>) -> Response> {
    CatchPanicLayer::custom(panic_response)
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let details = panic
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| panic.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic");

    let message = if cfg!(debug_assertions) {
        format!("Request handler panicked: {details}")
    } else {
        "Request handler panicked".to_string()
    };
    AppError::internal(message).into_response()
}
