//! Liveness endpoint. Always public — exempt from the auth interceptor by
//! virtue of not matching any of the gated routes.

use axum::http::StatusCode;

pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
