//! Web interface: an axum server exposing the analyzer as a small JSON API
//! plus a single-page frontend.

pub mod server;
