//! The embeddable "Ask AI" search box: input bar, result area, and the
//! dispatcher for the remote answering endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `AiSearch` instance owns one `SearchState` signal for its lifetime.
//! The surrounding container (the docs site's modal chrome) supplies an
//! optional close callback and can receive an [`AiSearchHandle`] for
//! imperative reset/close.
//!
//! DESIGN
//! ======
//! The result area is a three-way switch (examples, loading, answer) driven
//! entirely by `SearchState` flags; the disclaimer row rides on the
//! completion flag. Submissions pass through `SearchState::accept_submission`
//! before a request starts. Answers arrive as Markdown and are rendered to
//! HTML with raw HTML stripped. In browser builds a window scroll listener
//! marks the result container once, then detaches itself; component teardown
//! detaches it if it never fired.

#[cfg(test)]
#[path = "ai_search_test.rs"]
mod ai_search_test;

#[cfg(feature = "csr")]
use std::sync::{Arc, Mutex};

use leptos::prelude::*;
use pulldown_cmark::{Event, Options, Parser, html};

use crate::net::api;
use crate::net::types::history_payload;
use crate::state::search::SearchState;

/// Canned example queries offered before the user types.
const EXAMPLE_QUERIES: &[&str] = &[
    "What is Shesha?",
    "What version of Node do I need installed?",
    "How do I validate a South African phone number?",
    "How do I filter with dynamic properties or input?",
    "How do I see which properties are exposed for a on a code editor?",
];

/// Imperative control surface handed to the embedding container.
///
/// Obtained through the `handle` prop of [`AiSearch`]; the slot is cleared
/// again when the widget unmounts, so a container can never drive a disposed
/// instance.
#[derive(Clone, Copy)]
pub struct AiSearchHandle {
    state: RwSignal<SearchState>,
    on_close: Option<Callback<()>>,
}

impl AiSearchHandle {
    /// Clear all session state, chat window and sources included, then run
    /// the close path.
    pub fn reset_modal(&self) {
        self.state.set(SearchState::default());
        self.close_modal();
    }

    /// Invoke the container's close callback, then apply the close-side
    /// clearing. The chat window survives for the next open.
    pub fn close_modal(&self) {
        if let Some(cb) = self.on_close {
            cb.run(());
        }
        self.state.update(SearchState::dismiss);
    }
}

/// Ask AI search box: one text input, canned examples, and the answer area.
///
/// `on_close` is invoked whenever the widget asks its container to close;
/// `handle` is a slot the widget fills with its imperative handle while
/// mounted.
#[component]
pub fn AiSearch(
    #[prop(optional)] on_close: Option<Callback<()>>,
    #[prop(optional)] handle: Option<RwSignal<Option<AiSearchHandle>>>,
) -> impl IntoView {
    let state = RwSignal::new(SearchState::default());

    if let Some(slot) = handle {
        slot.set(Some(AiSearchHandle { state, on_close }));
        on_cleanup(move || slot.set(None));
    }

    // Scroll watcher: mark the result container on the first window scroll,
    // then detach. The marker class drives a CSS affordance only. Cleanup
    // closures must be `Send + Sync`, so the handle sits in a sync slot; the
    // listener itself exists only in browser builds.
    let scrolled = RwSignal::new(false);
    #[cfg(feature = "csr")]
    {
        let scroll_listener = Arc::new(Mutex::new(None::<WindowListenerHandle>));
        let listener_for_cb = Arc::clone(&scroll_listener);
        let listener = window_event_listener(leptos::ev::scroll, move |_| {
            scrolled.set(true);
            if let Ok(Some(active)) = listener_for_cb.lock().map(|mut slot| slot.take()) {
                active.remove();
            }
        });
        if let Ok(mut slot) = scroll_listener.lock() {
            *slot = Some(listener);
        }
        let listener_for_cleanup = Arc::clone(&scroll_listener);
        on_cleanup(move || {
            if let Ok(Some(active)) = listener_for_cleanup.lock().map(|mut slot| slot.take()) {
                active.remove();
            }
        });
    }

    let submit = move |raw: String| {
        let Some(query) = state.with_untracked(|s| s.accept_submission(&raw)) else {
            return;
        };
        state.update(|s| s.begin_search(&query));
        let history = state.with_untracked(|s| history_payload(&s.chat_history));
        leptos::task::spawn_local(async move {
            let applied = match api::ask(&query, &history).await {
                Ok(message) => state.try_update(|s| {
                    s.complete_search(&message.response_message, message.source);
                }),
                Err(e) => {
                    leptos::logging::warn!("ask request failed: {e}");
                    state.try_update(SearchState::fail_search)
                }
            };
            if applied.is_none() {
                leptos::logging::warn!("ask response arrived after widget teardown; dropped");
            }
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            submit(state.with_untracked(|s| s.input_display().to_owned()));
        }
    };

    // The loading guard here also protects `select_term`: a click during an
    // in-flight request must not flip the canned-selection flag.
    let on_example_click = move |query: &'static str| {
        if state.with_untracked(|s| s.is_loading) {
            return;
        }
        state.update(SearchState::select_term);
        submit(query.to_owned());
    };

    view! {
        <div class="ai-search-result-wrapper">
            <header class="ai-search-bar-header">
                <div class="custom-search-container">
                    <img src="/img/ask-ai-robot-icon.svg" alt="Ask AI"/>
                    <input
                        id="question-input"
                        name="question-input"
                        type="text"
                        placeholder="What is Shesha?"
                        prop:value=move || state.get().input_display().to_owned()
                        on:keydown=on_keydown
                        on:input=move |ev| state.update(|s| s.edit_input(&event_target_value(&ev)))
                        disabled=move || state.get().input_locked()
                    />
                    <span class="ai-submit-message">"Submit message"</span>
                    <img src="/img/ai-enter-icon.svg" alt="Enter"/>
                </div>
            </header>

            {move || {
                state.get().is_loading.then(|| view! {
                    <div class="loading-icon-container">
                        <span class="loading-icon" aria-hidden="true"></span>
                        <span class="ai-loading-time-info">
                            "AI generated responses can take up to a minute."
                        </span>
                    </div>
                })
            }}

            <div class="ai-result-container" class:scrolled=move || scrolled.get()>
                {move || {
                    state.get().show_examples.then(|| view! {
                        <div class="ai-query-wrapper">
                            <span class="ai-query-heading">"Examples"</span>
                            {EXAMPLE_QUERIES
                                .iter()
                                .copied()
                                .map(|query| {
                                    view! {
                                        <span
                                            class="ai-search-term"
                                            on:click=move |_| on_example_click(query)
                                        >
                                            {query}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    })
                }}

                {move || {
                    let s = state.get();
                    s.shows_answer().then(|| {
                        let rendered = render_answer_html(&s.answer);
                        view! {
                            <div class="search-term-answer">
                                <div class="ai-answer-body" inner_html=rendered></div>
                                <p class="ai-source-heading">"Sources:"</p>
                                <ul class="ai-source-list">
                                    {s.sources
                                        .iter()
                                        .map(|url| {
                                            let href = url.clone();
                                            view! {
                                                <li class="ai-source-list__item">
                                                    <a href=href>{url.clone()}</a>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                }}

                {move || {
                    state.get().is_answer_complete.then(|| view! {
                        <div class="ai-experimental">
                            <span class="ai-experimental-info">
                                "Shesha AI is experimental and may produce incorrect answers."
                            </span>
                        </div>
                    })
                }}
            </div>
        </div>
    }
}

fn render_answer_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    // Drop raw inline/block HTML from model output before rendering.
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
