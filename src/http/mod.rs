//! HTTP protocol layer module
//!
//! Response construction, decoupled from the greeting logic.

pub mod response;

pub use response::{build_error_response, build_not_found_response, build_text_response};
