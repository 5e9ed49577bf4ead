use axum::{body::Body, http::StatusCode, response::Response};

#[track_caller]
pub(crate) fn assert_status_ok(response: &Response<Body>) {
    assert_eq!(response.status(), StatusCode::OK);
}

#[track_caller]
pub(crate) fn assert_content_type(response: &Response<Body>, want: &str) {
    let content_type = response
        .headers()
        .get("content-type")
        .expect("response has no content-type header");

    assert_eq!(content_type, want);
}

#[track_caller]
pub(crate) fn assert_hx_redirect(response: &Response<Body>, endpoint: &str) {
    let target = response
        .headers()
        .get("hx-redirect")
        .expect("response has no hx-redirect header")
        .to_str()
        .expect("hx-redirect header is not valid text");

    assert_eq!(target, endpoint, "want a redirect to \"{endpoint}\"");
}
