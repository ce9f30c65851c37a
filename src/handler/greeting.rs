//! Greeting handler
//!
//! The single business rule of the service: `GET /hello` answers `Hello!`.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Response, StatusCode};

use super::mux::RequestContext;
use crate::http;

/// Path the greeting handler is registered on
pub const HELLO_PATH: &str = "/hello";

pub const GREETING_BODY: &str = "Hello!";
pub const PATH_NOT_FOUND_BODY: &str = "404 not found.";
pub const METHOD_NOT_SUPPORTED_BODY: &str = "Method is not supported.";

/// Answer a request routed to `/hello`.
///
/// A method mismatch is reported as 404, not 405. The path check cannot
/// fail through the multiplexer, which only dispatches exact matches, but
/// it guards direct callers.
pub fn hello(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    if ctx.path != HELLO_PATH {
        return http::build_error_response(StatusCode::NOT_FOUND, PATH_NOT_FOUND_BODY);
    }

    if *ctx.method != Method::GET {
        return http::build_error_response(StatusCode::NOT_FOUND, METHOD_NOT_SUPPORTED_BODY);
    }

    http::build_text_response(StatusCode::OK, GREETING_BODY)
}
