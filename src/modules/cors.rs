use axum::{
    http::{
        header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_ORIGIN},
        HeaderValue, StatusCode,
    },
    response::IntoResponse,
};
use tower_http::set_header::SetResponseHeaderLayer;

pub const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Answers `OPTIONS` on the relay routes without looking at the body.
pub async fn preflight() -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS),
        ],
        "ok",
    )
}

/// Adds `Access-Control-Allow-Origin: *` to every response that does not
/// already carry one.
pub fn allow_any_origin() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"))
}
