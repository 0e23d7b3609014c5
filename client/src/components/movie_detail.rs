//! Detail view for the selected movie.

use leptos::prelude::*;
use movies::poster_large_url;

use crate::state::assistant::AssistantState;

/// Full record for the selected movie with a back button.
///
/// "Back" only clears the selection; the result list is still in memory
/// and reappears untouched.
#[component]
pub fn MovieDetailView() -> impl IntoView {
    let assistant = expect_context::<RwSignal<AssistantState>>();

    let on_back = move |_| assistant.update(AssistantState::go_back);

    view! {
        <div class="movie-detail">
            <button class="btn movie-detail__back" on:click=on_back>
                "Back"
            </button>
            {move || {
                assistant
                    .get()
                    .selected
                    .map(|detail| {
                        let poster = poster_large_url(detail.poster_path.as_deref());
                        view! {
                            <div class="movie-detail__body">
                                {poster
                                    .map(|url| view! { <img class="movie-detail__poster" src=url alt=""/> })}
                                <div class="movie-detail__text">
                                    <h2>{detail.title}</h2>
                                    <p class="movie-detail__date">{detail.release_date}</p>
                                    <p class="movie-detail__rating">
                                        {format!("Rating: {:.1}", detail.vote_average)}
                                    </p>
                                    <p class="movie-detail__overview">{detail.overview}</p>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
