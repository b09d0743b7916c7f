//! Adapters - concrete implementations of the ports.
//!
//! `postgres` is the production persistence layer, `memory` backs tests
//! and local development, and `http` exposes the REST API.

pub mod http;
pub mod memory;
pub mod postgres;
