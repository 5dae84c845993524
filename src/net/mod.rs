//! Networking for the Ask AI widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` talks to the remote answering endpoint; `types` defines its wire
//! schema and the failure taxonomy.

pub mod api;
pub mod types;
