//! Static content compiled into the client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Catalogs here never change at runtime and never reach the backend; state
//! refers to entries by id.

pub mod scenarios;
pub mod technical;
