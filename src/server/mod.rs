// Server module entry point
// Binds the listener and runs the accept loop

pub mod connection;
pub mod listener;

use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::error::Result;
use crate::handler::{self, Mux};
use crate::logger;

pub use listener::bind;

const MIN_ACCEPT_BACKOFF: Duration = Duration::from_millis(5);
const MAX_ACCEPT_BACKOFF: Duration = Duration::from_secs(1);

/// Register the greeting route, bind the configured address and serve forever.
///
/// Returns only if startup fails.
pub async fn run(config: &Config) -> Result<()> {
    let mux = Arc::new(handler::greeting_mux()?);
    let listener = bind(config.socket_addr()?)?;
    serve(listener, mux).await;
    Ok(())
}

/// Accept connections on `listener` until the process is killed.
///
/// Accept errors (e.g. out of file descriptors) are logged and retried after
/// a backoff that doubles from 5ms up to 1s and resets on the next success.
pub async fn serve(listener: TcpListener, mux: Arc<Mux>) {
    let mut backoff: Option<Duration> = None;

    loop {
        match listener.accept().await {
            Ok((stream, _peer_addr)) => {
                backoff = None;
                connection::handle_connection(stream, &mux);
            }
            Err(e) => {
                let delay = next_backoff(backoff);
                logger::log_error(&format!(
                    "Failed to accept connection: {e}; retrying in {delay:?}"
                ));
                backoff = Some(delay);
                tokio::time::sleep(delay).await;
            }
        }
    }
}

fn next_backoff(current: Option<Duration>) -> Duration {
    current.map_or(MIN_ACCEPT_BACKOFF, |d| (d * 2).min(MAX_ACCEPT_BACKOFF))
}
