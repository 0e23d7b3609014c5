//! Root application component and HTML shell.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::StaticSegment;

use crate::pages::assistant::AssistantPage;
use crate::state::assistant::AssistantState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared assistant state context and mounts the single page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let assistant = RwSignal::new(AssistantState::default());
    provide_context(assistant);

    view! {
        <Stylesheet id="leptos" href="/pkg/movie-assistant.css"/>
        <Title text="Movie Assistant"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=AssistantPage/>
            </Routes>
        </Router>
    }
}
