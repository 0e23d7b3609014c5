//! Search input driving the result list.

use leptos::prelude::*;

use crate::state::assistant::AssistantState;

/// Search bar: free-text query, searched on Enter or button click.
///
/// Each search takes a fresh sequence token before the call goes out;
/// whichever response comes back checks its token against the container
/// so a slow earlier search can never overwrite a newer one.
#[component]
pub fn SearchBar() -> impl IntoView {
    let assistant = expect_context::<RwSignal<AssistantState>>();

    let do_search = move || {
        let query = assistant.get().query;

        #[cfg(feature = "hydrate")]
        {
            let mut seq = 0;
            assistant.update(|s| seq = s.begin_search());
            leptos::task::spawn_local(async move {
                match crate::net::api::search_movies(&query).await {
                    Ok(results) => assistant.update(|s| s.apply_search_success(seq, results)),
                    Err(e) => {
                        log::warn!("search: {e}");
                        assistant.update(|s| s.apply_search_failure(seq));
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = query;
        }
    };

    let on_click = move |_| do_search();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_search();
        }
    };

    view! {
        <div class="search-bar">
            <input
                class="search-bar__input"
                type="text"
                placeholder="Search movies..."
                prop:value=move || assistant.get().query
                on:input=move |ev| assistant.update(|s| s.set_query(event_target_value(&ev)))
                on:keydown=on_keydown
            />
            <button class="btn btn--primary" on:click=on_click>
                "Search"
            </button>
        </div>
    }
}
