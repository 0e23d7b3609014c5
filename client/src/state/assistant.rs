//! State container for the assistant view.

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

use movies::{MovieDetail, MovieSummary};

/// State for the movie assistant view.
///
/// Wrapped in an `RwSignal` and provided via context; components read
/// slots reactively and mutate only through the transition methods below.
///
/// The result list and the selection are displayed mutually exclusively
/// (the detail view replaces the list) but both stay in memory so "back"
/// restores the list without a refetch.
#[derive(Clone, Debug, Default)]
pub struct AssistantState {
    /// Search box text. Persists across searches, never cleared.
    pub query: String,
    /// Latest successful search results, replaced wholesale.
    pub results: Vec<MovieSummary>,
    /// Currently selected movie, if any.
    pub selected: Option<MovieDetail>,
    /// Chat box text. Deliberately kept after a send so it can be resent.
    pub chat_input: String,
    /// Latest assistant reply (or error display). No transcript is kept;
    /// each send overwrites the previous reply.
    pub chat_reply: String,
    /// Monotonic token for in-flight searches. Responses carrying a stale
    /// token are dropped so an overlapping earlier search can never
    /// overwrite a later one.
    search_seq: u64,
}

impl AssistantState {
    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    pub fn set_chat_input(&mut self, text: String) {
        self.chat_input = text;
    }

    /// Start a search: bump and return the sequence token the response
    /// must present.
    pub fn begin_search(&mut self) -> u64 {
        self.search_seq += 1;
        self.search_seq
    }

    /// Current search token; responses from earlier tokens are stale.
    #[must_use]
    pub fn search_seq(&self) -> u64 {
        self.search_seq
    }

    /// Apply a successful search response: replace the result list and
    /// clear the selection. Stale responses are ignored outright.
    pub fn apply_search_success(&mut self, seq: u64, results: Vec<MovieSummary>) {
        if seq != self.search_seq {
            return;
        }
        self.results = results;
        self.selected = None;
    }

    /// Apply a failed search: empty the result list, leave the selection
    /// untouched. Stale failures are ignored outright.
    pub fn apply_search_failure(&mut self, seq: u64) {
        if seq != self.search_seq {
            return;
        }
        self.results = Vec::new();
    }

    /// Apply a detail fetch result. A `null` body means no record: the
    /// detail view is suppressed and the user falls back to the list.
    pub fn apply_detail(&mut self, detail: Option<MovieDetail>) {
        self.selected = detail;
    }

    /// A failed detail fetch suppresses the detail view.
    pub fn apply_detail_failure(&mut self) {
        self.selected = None;
    }

    /// "Back" from the detail view: clear the selection only.
    pub fn go_back(&mut self) {
        self.selected = None;
    }

    /// Overwrite the chat reply. Used for replies, error displays, and
    /// precondition messages alike; the chat input is not cleared.
    pub fn apply_chat_reply(&mut self, reply: String) {
        self.chat_reply = reply;
    }

    /// Identifier of the selected movie, if one is selected.
    #[must_use]
    pub fn selected_id(&self) -> Option<i64> {
        self.selected.as_ref().map(|d| d.id)
    }
}
