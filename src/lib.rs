//! Embeddable "Ask AI" search widget for the Shesha documentation site.
//!
//! One text input, a rolling 3-turn chat window sent for context, and a
//! Markdown answer with source links from the remote answering endpoint.
//! The docs site supplies all styling; this crate emits the markup, the
//! class hooks, and the behavior.
//!
//! ARCHITECTURE
//! ============
//! `state` holds the session flag machine, `net` the endpoint call and wire
//! schema, `components` the Leptos view. The `csr` feature gates browser-only
//! dependencies; without it the crate still compiles (server-side rendering
//! included), with the network call stubbed out.

pub mod components;
pub mod net;
pub mod state;

pub use components::ai_search::{AiSearch, AiSearchHandle};

#[cfg(feature = "csr")]
use leptos::prelude::*;
#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;

/// Attach the widget to the host element with the given id.
///
/// Exported to the embedding page as `mountAskAi`. Mount failures are logged
/// rather than thrown: a docs page without the anchor element just renders
/// without the widget.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(js_name = "mountAskAi")]
pub fn mount_ask_ai(anchor_id: &str) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        leptos::logging::error!("no document to mount the Ask AI widget into");
        return;
    };
    let Some(anchor) = document.get_element_by_id(anchor_id) else {
        leptos::logging::error!("Ask AI mount element #{anchor_id} not found");
        return;
    };
    let Ok(host) = anchor.dyn_into::<web_sys::HtmlElement>() else {
        leptos::logging::error!("Ask AI mount element #{anchor_id} is not an HTML element");
        return;
    };

    leptos::mount::mount_to(host, || view! { <AiSearch/> }).forget();
}
