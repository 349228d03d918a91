//! appointments - A small notary appointment service
//!
//! Create, list, and delete appointments over HTTP, backed by a single
//! relational table.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;
