//! Assistant page: search, result list, detail view, chat.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::movie_card::MovieCard;
use crate::components::movie_detail::MovieDetailView;
use crate::components::search_bar::SearchBar;
use crate::state::assistant::AssistantState;

/// The movie assistant view.
///
/// The result list and the detail view are mutually exclusive on screen:
/// selecting a movie replaces the list, "back" restores it. Both live in
/// the same state container the whole time.
#[component]
pub fn AssistantPage() -> impl IntoView {
    let assistant = expect_context::<RwSignal<AssistantState>>();

    let has_selection = move || assistant.get().selected.is_some();

    view! {
        <div class="assistant-page">
            <header class="assistant-page__header">
                <h1>"Movie Assistant"</h1>
                <SearchBar/>
            </header>

            <Show
                when=has_selection
                fallback=move || {
                    view! {
                        <div class="assistant-page__results">
                            {move || {
                                assistant
                                    .get()
                                    .results
                                    .into_iter()
                                    .map(|movie| view! { <MovieCard movie=movie/> })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    }
                }
            >
                <div class="assistant-page__detail">
                    <MovieDetailView/>
                    <ChatPanel/>
                </div>
            </Show>
        </div>
    }
}
