//! Static file serving module
//!
//! The three request handlers: home page, public asset, and the 404
//! fallback. The file-backed handlers make exactly one read attempt and
//! produce exactly one response.

use crate::handler::router::RequestContext;
use crate::http::{mime, path, response};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

const HOME_FILE: &str = "index.html";

// The home and asset read-failure bodies are distinct, both verbatim.
const HOME_MISS_BODY: &str = "<h1>Not found</h1>";
const ASSET_MISS_BODY: &str = "<h1>Site Not found</h1>";
const MISSING_BODY: &str = "<h1>404 Not Found</h1>";

/// Serve the fixed home page file.
///
/// Always reads `index.html` under the public root with a fixed
/// `text/html` content type; the request URL plays no part.
pub async fn serve_home(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    let file_path = Path::new(ctx.public_dir).join(HOME_FILE);

    match fs::read(&file_path).await {
        Ok(content) => response::build_file_response(content, Some("text/html")),
        Err(e) => {
            logger::log_read_error(&file_path, &e);
            response::build_not_found_response(HOME_MISS_BODY)
        }
    }
}

/// Serve an arbitrary asset from the public directory.
///
/// The URL collapses to its final segment for both the content-type
/// lookup and the filesystem path.
pub async fn serve_asset(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    let file_name = path::file_name(ctx.url);
    let content_type = mime::content_type_for(file_name);
    let file_path = path::resolve(ctx.public_dir, ctx.url);

    match fs::read(&file_path).await {
        Ok(content) => response::build_file_response(content, content_type),
        Err(e) => {
            logger::log_read_error(&file_path, &e);
            response::build_not_found_response(ASSET_MISS_BODY)
        }
    }
}

/// Fallback for unmatched routes: fixed 404, no filesystem access.
pub fn missing() -> Response<Full<Bytes>> {
    response::build_not_found_response(MISSING_BODY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use std::path::PathBuf;

    /// Per-test scratch directory acting as the public root
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pubserve-test-{}-{name}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    fn ctx<'a>(url: &'a str, public_dir: &'a str) -> RequestContext<'a> {
        RequestContext { url, public_dir }
    }

    async fn body_bytes(resp: Response<Full<Bytes>>) -> Bytes {
        resp.into_body().collect().await.expect("collect body").to_bytes()
    }

    #[tokio::test]
    async fn test_home_serves_index_html() {
        let dir = scratch_dir("home-ok");
        std::fs::write(dir.join("index.html"), "<p>hi</p>").expect("write fixture");
        let public = dir.to_str().expect("utf-8 temp path");

        let resp = serve_home(&ctx("/", public)).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/html");
        assert_eq!(body_bytes(resp).await, "<p>hi</p>");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn test_home_miss_is_404_not_found() {
        let resp = serve_home(&ctx("/", "no-such-public-dir")).await;
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.headers()["Content-Type"], "text/html");
        assert_eq!(body_bytes(resp).await, "<h1>Not found</h1>");
    }

    #[tokio::test]
    async fn test_asset_served_with_resolved_type() {
        let dir = scratch_dir("asset-ok");
        std::fs::write(dir.join("style.css"), "body { margin: 0 }").expect("write fixture");
        let public = dir.to_str().expect("utf-8 temp path");

        let resp = serve_asset(&ctx("/public/style.css", public)).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/css");
        assert_eq!(body_bytes(resp).await, "body { margin: 0 }");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn test_asset_url_collapses_to_final_segment() {
        let dir = scratch_dir("asset-nested");
        std::fs::write(dir.join("style.css"), "h1 { color: red }").expect("write fixture");
        let public = dir.to_str().expect("utf-8 temp path");

        // Directory prefixes in the URL are discarded
        let resp = serve_asset(&ctx("/public/sub/deep/style.css", public)).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(body_bytes(resp).await, "h1 { color: red }");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn test_asset_binary_round_trip() {
        let dir = scratch_dir("asset-binary");
        let jpeg: Vec<u8> = (0..=255).cycle().take(1024).collect();
        std::fs::write(dir.join("photo.jpg"), &jpeg).expect("write fixture");
        let public = dir.to_str().expect("utf-8 temp path");

        let resp = serve_asset(&ctx("/public/photo.jpg", public)).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "image/jpeg");
        assert_eq!(body_bytes(resp).await, jpeg);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn test_asset_unmatched_extension_has_empty_type() {
        let dir = scratch_dir("asset-unknown-ext");
        std::fs::write(dir.join("notes.txt"), "plain").expect("write fixture");
        let public = dir.to_str().expect("utf-8 temp path");

        let resp = serve_asset(&ctx("/public/notes.txt", public)).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn test_asset_miss_is_404_site_not_found() {
        let dir = scratch_dir("asset-miss");
        let public = dir.to_str().expect("utf-8 temp path");

        let resp = serve_asset(&ctx("/public/missing.css", public)).await;
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.headers()["Content-Type"], "text/html");
        assert_eq!(body_bytes(resp).await, "<h1>Site Not found</h1>");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn test_missing_handler_fixed_404() {
        let resp = missing();
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.headers()["Content-Type"], "text/html");
        assert_eq!(body_bytes(resp).await, "<h1>404 Not Found</h1>");
    }
}
