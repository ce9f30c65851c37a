//! A minimal HTTP greeting service.
//!
//! `GET /hello` answers `Hello!`; any other method on `/hello` gets a 404
//! with `Method is not supported.`; every other path gets the
//! multiplexer's own 404.

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;

pub use error::{Result, ServerError};
