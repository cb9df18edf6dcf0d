//! SimpleServer - single-connection static file server
//!
//! Core library for request parsing, file probing and response writing.

pub mod config;
pub mod files;
pub mod http;
pub mod server;
