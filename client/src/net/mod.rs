//! Networking modules for the JSON-over-HTTP backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the `Backend` boundary and its HTTP implementation, `types`
//! the wire schema, `config` the backend origin, and `error` the two failure
//! kinds a call can produce.

pub mod api;
pub mod config;
pub mod error;
pub mod types;
