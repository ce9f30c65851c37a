//! Request handler module
//!
//! Path multiplexing and the greeting handler it dispatches to.

pub mod greeting;
pub mod mux;

// Re-export main entry point
pub use mux::{greeting_mux, handle_request, Mux, RequestContext};
