//! UI components for the Ask AI widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ai_search` is the embeddable search box; it owns its session state and
//! hands an imperative handle to the surrounding container.

pub mod ai_search;
