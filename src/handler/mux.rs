//! Request multiplexer
//!
//! Matches request paths to registered handlers. Patterns are exact paths;
//! a request whose path has no registration gets the multiplexer's own 404.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

use super::greeting;
use crate::error::{Result, ServerError};
use crate::http;

/// Request information a handler needs, borrowed from the incoming request
pub struct RequestContext<'a> {
    pub method: &'a Method,
    pub path: &'a str,
}

/// A route handler
pub type HandlerFn = fn(&RequestContext<'_>) -> Response<Full<Bytes>>;

#[derive(Default)]
pub struct Mux {
    routes: Vec<(String, HandlerFn)>,
}

impl Mux {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for requests whose path equals `pattern`
    pub fn handle(&mut self, pattern: &str, handler: HandlerFn) -> Result<()> {
        if self.routes.iter().any(|(p, _)| p == pattern) {
            return Err(ServerError::DuplicateRoute(pattern.to_string()));
        }
        self.routes.push((pattern.to_string(), handler));
        Ok(())
    }

    /// Look up the handler registered for `path`
    pub fn handler(&self, path: &str) -> Option<HandlerFn> {
        self.routes
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, h)| *h)
    }

    pub fn dispatch(&self, ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
        match self.handler(ctx.path) {
            Some(handler) => handler(ctx),
            None => http::build_not_found_response(),
        }
    }
}

/// Build the service's multiplexer: the greeting handler on `/hello`
pub fn greeting_mux() -> Result<Mux> {
    let mut mux = Mux::new();
    mux.handle(greeting::HELLO_PATH, greeting::hello)?;
    Ok(mux)
}

/// Main entry point for HTTP request handling
#[allow(clippy::unused_async)]
pub async fn handle_request<B>(
    req: Request<B>,
    mux: Arc<Mux>,
) -> std::result::Result<Response<Full<Bytes>>, Infallible> {
    let ctx = RequestContext {
        method: req.method(),
        path: req.uri().path(),
    };
    Ok(mux.dispatch(&ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use hyper::StatusCode;

    async fn send(mux: &Arc<Mux>, method: Method, uri: &str) -> (StatusCode, Bytes) {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .body(())
            .unwrap();
        let resp = handle_request(req, Arc::clone(mux)).await.unwrap();
        let status = resp.status();
        (status, resp.into_body().collect().await.unwrap().to_bytes())
    }

    #[tokio::test]
    async fn test_dispatch_registered_route() {
        let mux = Arc::new(greeting_mux().unwrap());
        let (status, body) = send(&mux, Method::GET, "/hello").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, greeting::GREETING_BODY);
    }

    #[tokio::test]
    async fn test_query_string_ignored_for_matching() {
        let mux = Arc::new(greeting_mux().unwrap());
        let (status, body) = send(&mux, Method::GET, "/hello?name=x").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, greeting::GREETING_BODY);
    }

    #[tokio::test]
    async fn test_wrong_method_reaches_handler() {
        let mux = Arc::new(greeting_mux().unwrap());
        let (status, body) = send(&mux, Method::POST, "/hello").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, greeting::METHOD_NOT_SUPPORTED_BODY);
    }

    #[tokio::test]
    async fn test_unregistered_path_gets_mux_404() {
        let mux = Arc::new(greeting_mux().unwrap());
        for path in ["/", "/world", "/hello/", "/hellox"] {
            let (status, body) = send(&mux, Method::GET, path).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "path {path}");
            assert_eq!(body, http::response::NOT_FOUND_BODY, "path {path}");
        }
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut mux = greeting_mux().unwrap();
        let err = mux.handle("/hello", greeting::hello).unwrap_err();
        assert!(matches!(err, ServerError::DuplicateRoute(ref p) if p == "/hello"));
    }

    #[test]
    fn test_empty_mux_has_no_handlers() {
        let mux = Mux::new();
        assert!(mux.handler("/hello").is_none());
    }
}
