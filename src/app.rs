mod contact;
mod header;
mod homepage;
mod projects;
mod resume;

pub use contact::{send_contact_message, RelayProxy};

use header::Header;
use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::NAME;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="font-sans bg-white text-black scroll-smooth">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{NAME} - {title}") />
        <Meta name="description" content=crate::content::INTRO />

        <Router>
            <Header />
            <main class="flex flex-col flex-grow w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}
