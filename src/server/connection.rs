// Connection handling module
// Serves a single accepted TCP connection

use std::net::SocketAddr;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Serve one connection in a spawned task.
///
/// Wraps the stream in `TokioIo` and hands every request on it to the
/// router. Serve failures are logged and never fatal to the process;
/// requests on other connections are unaffected.
pub fn handle_connection(stream: tokio::net::TcpStream, peer_addr: SocketAddr, state: Arc<AppState>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new()
            .keep_alive(true)
            .serve_connection(
                io,
                service_fn(move |req| {
                    let state = Arc::clone(&state);
                    async move { handler::handle_request(req, peer_addr, state).await }
                }),
            );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
