//! Request routing dispatch module
//!
//! Entry point for HTTP request processing. Selects exactly one of the
//! three handlers per request; writing the response is the handler's job.

use crate::config::AppState;
use crate::handler::static_files;
use crate::logger::{self, AccessLogEntry};
use chrono::Local;
use http_body_util::Full;
use hyper::body::{Body, Bytes, Incoming};
use hyper::{Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    /// Request target as received: path plus query, no normalization
    pub url: &'a str,
    /// Public directory root the file handlers read from
    pub public_dir: &'a str,
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<Incoming>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let uri = req.uri();
    let target = uri.path_and_query().map_or(uri.path(), |pq| pq.as_str());

    let ctx = RequestContext {
        url: target,
        public_dir: &state.config.files.public_dir,
    };

    let response = route_request(&ctx).await;

    if state.config.logging.access_log {
        let entry = access_entry(&req, peer_addr, &response);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Select a handler for the request URL.
///
/// The method is never inspected: an exact `/` serves the home page, a
/// URL containing `public` anywhere serves an asset, anything else is a
/// fixed 404.
async fn route_request(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    if ctx.url == "/" {
        static_files::serve_home(ctx).await
    } else if ctx.url.contains("public") {
        static_files::serve_asset(ctx).await
    } else {
        static_files::missing()
    }
}

/// Build the access log entry for a finished request
fn access_entry(
    req: &Request<Incoming>,
    peer_addr: SocketAddr,
    response: &Response<Full<Bytes>>,
) -> AccessLogEntry {
    let uri = req.uri();
    let target = uri.path_and_query().map_or(uri.path(), |pq| pq.as_str());
    let body_bytes = response.body().size_hint().exact().unwrap_or(0);

    AccessLogEntry {
        remote_addr: peer_addr.to_string(),
        time: Local::now(),
        method: req.method().to_string(),
        target: target.to_string(),
        http_version: logger::http_version_label(req.version()),
        status: response.status().as_u16(),
        body_bytes: usize::try_from(body_bytes).unwrap_or(usize::MAX),
        referer: header_value(req, "referer"),
        user_agent: header_value(req, "user-agent"),
    }
}

fn header_value(req: &Request<Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}
