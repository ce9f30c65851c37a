// Connection handling module
// Serves HTTP/1.1 on each accepted TCP connection

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::sync::Arc;

use crate::handler::{self, Mux};
use crate::logger;

/// Serve a single connection in a spawned task.
///
/// Connections are independent: a failing connection is logged and dropped
/// without affecting the accept loop or other connections.
pub fn handle_connection(stream: tokio::net::TcpStream, mux: &Arc<Mux>) {
    let mux = Arc::clone(mux);

    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let mut builder = http1::Builder::new();
        builder.keep_alive(true);

        let conn = builder.serve_connection(
            io,
            service_fn(move |req| handler::handle_request(req, Arc::clone(&mux))),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
