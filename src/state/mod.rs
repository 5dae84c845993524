//! Session state for the Ask AI widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! One mounted widget owns one `SearchState` behind a Leptos signal; the
//! component and handle layers mutate it only through the transition methods
//! defined here.

pub mod search;
