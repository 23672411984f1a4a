#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use portfolio_site::{
        app::*,
        contact::relay::{EmailJsDispatcher, RelayConfig},
    };
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::EnvFilter;

    // a missing .env is fine, the variables may come from the real environment
    _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let dispatcher = match RelayConfig::from_env().and_then(EmailJsDispatcher::new) {
        Ok(dispatcher) => {
            tracing::info!(endpoint = %dispatcher.config().endpoint, "email relay configured");
            Some(dispatcher)
        }
        Err(err) => {
            tracing::warn!("contact form disabled: {err}");
            None
        }
    };

    let conf = get_configuration(None).unwrap();
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || {
                if let Some(dispatcher) = dispatcher.clone() {
                    provide_context(dispatcher);
                }
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    tracing::info!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // unless we want this to work with e.g., Trunk for pure client-side testing
    // see lib.rs for hydration function instead
}
