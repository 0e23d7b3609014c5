//! Result-list card for one movie summary.

use leptos::prelude::*;
use movies::{poster_thumb_url, MovieSummary};

use crate::state::assistant::AssistantState;

/// One search result. Clicking fetches the full record and switches to
/// the detail view; a fetch failure suppresses the detail view and the
/// user stays on the list.
#[component]
pub fn MovieCard(movie: MovieSummary) -> impl IntoView {
    let assistant = expect_context::<RwSignal<AssistantState>>();

    let poster = poster_thumb_url(movie.poster_path.as_deref());
    let movie_id = movie.id;

    let on_click = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_movie_details(movie_id).await {
                    Ok(detail) => assistant.update(|s| s.apply_detail(detail)),
                    Err(e) => {
                        log::warn!("detail: {e}");
                        assistant.update(|s| s.apply_detail_failure());
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (movie_id, assistant);
        }
    };

    view! {
        <button class="movie-card" on:click=on_click>
            {poster.map(|url| view! { <img class="movie-card__poster" src=url alt=""/> })}
            <div class="movie-card__body">
                <span class="movie-card__title">{movie.title}</span>
                <span class="movie-card__date">{movie.release_date}</span>
            </div>
        </button>
    }
}
