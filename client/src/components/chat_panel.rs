//! Chat panel for asking about the selected movie.

use leptos::prelude::*;

use crate::net::chat::chat_preconditions;
use crate::state::assistant::AssistantState;

/// Chat input plus the latest assistant reply.
///
/// Preconditions run before any network call: blank text first, then a
/// missing selection; either aborts with a local message. The input is
/// kept after a send so the question can be resent; only the reply slot
/// is overwritten.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let assistant = expect_context::<RwSignal<AssistantState>>();

    let do_send = move || {
        let state = assistant.get();
        match chat_preconditions(&state.chat_input, state.selected_id()) {
            Err(guard) => assistant.update(|s| s.apply_chat_reply(guard.message().to_owned())),
            Ok((movie_id, text)) => {
                #[cfg(feature = "hydrate")]
                {
                    leptos::task::spawn_local(async move {
                        let reply = crate::net::api::send_chat_message(movie_id, &text).await;
                        assistant.update(|s| s.apply_chat_reply(reply));
                    });
                }

                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (movie_id, text);
                }
            }
        }
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="chat-panel">
            {move || {
                let reply = assistant.get().chat_reply;
                (!reply.is_empty()).then(|| view! { <div class="chat-panel__reply">{reply}</div> })
            }}
            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Ask about this movie..."
                    prop:value=move || assistant.get().chat_input
                    on:input=move |ev| assistant.update(|s| s.set_chat_input(event_target_value(&ev)))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary" on:click=on_click>
                    "Send"
                </button>
            </div>
        </div>
    }
}
