//! HTTP response building module
//!
//! Builders for the success and not-found responses, decoupled from the
//! handlers that decide which one to send.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build a 200 response carrying raw file bytes.
///
/// An unmatched extension resolves to no content type; the header is
/// then written with an empty value rather than omitted.
pub fn build_file_response(
    content: Vec<u8>,
    content_type: Option<&str>,
) -> Response<Full<Bytes>> {
    let content_length = content.len();

    Response::builder()
        .status(200)
        .header("Content-Type", content_type.unwrap_or(""))
        .header("Content-Length", content_length)
        .body(Full::new(Bytes::from(content)))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build a 404 response with a fixed HTML body.
pub fn build_not_found_response(body: &'static str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/html")
        .header("Content-Length", body.len())
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from(body)))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
