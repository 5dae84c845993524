//! Ask-AI session state: input text, display flags, answer, and the rolling
//! chat window.
//!
//! DESIGN
//! ======
//! The widget's entire lifecycle is a handful of flag flips around one network
//! call, so every transition is a pure method on `SearchState`. The component
//! layer mutates a single `RwSignal<SearchState>` through these methods and
//! never flips fields ad hoc, which keeps the flag machine testable on the
//! native target without a DOM.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

/// Maximum number of chat turns retained and sent with each request.
pub const CHAT_HISTORY_CAP: usize = 3;

/// Answer text shown when a request fails for any reason.
pub const FALLBACK_ANSWER: &str = "Sorry, I don't know how to help with that.";

/// Who produced a chat turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// One turn of the rolling conversation window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

impl ChatTurn {
    #[must_use]
    pub fn new(role: ChatRole, text: &str) -> Self {
        Self { role, text: text.to_owned() }
    }
}

/// Session state for one mounted Ask AI widget.
///
/// Created on mount and dropped on unmount; nothing here survives a page
/// reload.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchState {
    /// Live text in the input box.
    pub input_value: String,
    /// Query currently being answered; shown in the input while a canned
    /// example is selected.
    pub search_term: String,
    /// Latest answer text (Markdown), or the fallback message after a failure.
    pub answer: String,
    /// True while a request is in flight.
    pub is_loading: bool,
    /// True while the canned example list is visible (initial state and after
    /// reset/close).
    pub show_examples: bool,
    /// True once a successful answer has been fully received.
    pub is_answer_complete: bool,
    /// True while the active query came from the canned list rather than the
    /// keyboard.
    pub term_selected: bool,
    /// Source URLs from the most recent successful answer.
    pub sources: Vec<String>,
    /// Rolling window of the last [`CHAT_HISTORY_CAP`] turns, oldest first.
    pub chat_history: Vec<ChatTurn>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            input_value: String::new(),
            search_term: String::new(),
            answer: String::new(),
            is_loading: false,
            show_examples: true,
            is_answer_complete: false,
            term_selected: false,
            sources: Vec::new(),
            chat_history: Vec::new(),
        }
    }
}

impl SearchState {
    /// Gate a submission attempt: the trimmed query when it is non-empty and
    /// no request is in flight, `None` otherwise. The dispatcher starts a
    /// search only for an accepted query.
    #[must_use]
    pub fn accept_submission(&self, raw: &str) -> Option<String> {
        let query = raw.trim();
        if query.is_empty() || self.is_loading {
            return None;
        }
        Some(query.to_owned())
    }

    /// Record `query` as the in-flight turn: loading on, prior answer cleared,
    /// examples hidden, completion flag cleared, and the user turn appended to
    /// the history window.
    pub fn begin_search(&mut self, query: &str) {
        self.is_loading = true;
        self.answer.clear();
        self.search_term = query.to_owned();
        self.show_examples = false;
        self.is_answer_complete = false;
        self.push_turn(ChatRole::User, query);
    }

    /// Store a successful answer: loading off, answer and sources replaced,
    /// input and active term cleared, assistant turn appended to the window.
    pub fn complete_search(&mut self, message: &str, sources: Vec<String>) {
        self.is_loading = false;
        self.answer = message.to_owned();
        self.sources = sources;
        self.is_answer_complete = true;
        self.input_value.clear();
        self.search_term.clear();
        self.push_turn(ChatRole::Assistant, message);
    }

    /// Collapse any request failure to the fixed fallback answer.
    ///
    /// Sources are left as-is: a prior turn's list may still render under the
    /// fallback. The user turn appended by [`Self::begin_search`] is not
    /// rolled back either.
    pub fn fail_search(&mut self) {
        self.is_loading = false;
        self.answer = FALLBACK_ANSWER.to_owned();
    }

    /// Re-open the input for a fresh turn after a completed answer, keeping
    /// the chat window and the rendered answer.
    pub fn allow_followup(&mut self) {
        self.is_loading = false;
        self.show_examples = false;
        self.term_selected = false;
        self.is_answer_complete = false;
    }

    /// Apply a keyboard edit. Ignored while loading; stores the live value
    /// and, when a completed answer is on screen, re-opens for a fresh turn.
    pub fn edit_input(&mut self, value: &str) {
        if self.is_loading {
            return;
        }
        self.input_value = value.to_owned();
        if self.is_answer_complete {
            self.allow_followup();
        }
    }

    /// Mark the next submission as coming from the canned list, so the input
    /// box mirrors the active term while the request runs.
    pub fn select_term(&mut self) {
        self.term_selected = true;
    }

    /// Full reset: every field back to its initial value, chat window and
    /// sources included.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Close-the-modal clearing: drop the answer and its flags and re-show the
    /// examples, but keep the chat window, input text, and sources for the
    /// next open.
    pub fn dismiss(&mut self) {
        self.term_selected = false;
        self.answer.clear();
        self.is_loading = false;
        self.is_answer_complete = false;
        self.show_examples = true;
    }

    /// Text the input box should display: the active term while a canned
    /// example is selected, otherwise the live-typed value.
    #[must_use]
    pub fn input_display(&self) -> &str {
        if self.term_selected {
            &self.search_term
        } else {
            &self.input_value
        }
    }

    /// True while the input must refuse edits: a request is in flight and no
    /// answer has completed yet.
    #[must_use]
    pub fn input_locked(&self) -> bool {
        self.is_loading && !self.is_answer_complete
    }

    /// True when the renderer is in answer mode: not loading, with answer text
    /// present. The fallback message counts as an answer here.
    #[must_use]
    pub fn shows_answer(&self) -> bool {
        !self.is_loading && !self.answer.is_empty()
    }

    fn push_turn(&mut self, role: ChatRole, text: &str) {
        if self.chat_history.len() >= CHAT_HISTORY_CAP {
            self.chat_history.remove(0);
        }
        self.chat_history.push(ChatTurn::new(role, text));
    }
}
