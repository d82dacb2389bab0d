mod api;
mod auth;
#[cfg(not(feature = "web"))]
mod cli;
mod config;
mod error;
mod history;
mod logging;
mod models;
mod notify;
mod rewards;
mod storage;
#[cfg(test)]
mod testing;
mod validation;
#[cfg_attr(not(feature = "web"), allow(dead_code))]
mod views;

#[cfg(not(any(feature = "web", feature = "cli")))]
compile_error!("enable the `web` or the `cli` feature");

use dioxus::prelude::*;
use std::sync::Arc;
use views::{
    Dashboard, Home, LoadingSpinner, Login, Navbar, PageNotFound, Register, RequireAuth, Rewards,
    SendTokens, Toaster, TransactionHistory,
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
#[allow(dead_code)]
enum Route {
    #[layout(Navbar)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[layout(RequireAuth)]
            #[route("/dashboard")]
            Dashboard {},
            #[route("/send-tokens")]
            SendTokens {},
            #[route("/rewards")]
            Rewards {},
            #[route("/history")]
            TransactionHistory {},
        #[end_layout]
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

#[cfg(feature = "web")]
fn main() {
    logging::init();
    log::info!(
        "Token of Thanks starting against {}",
        config::ClientConfig::from_build_env().api_url
    );
    dioxus::launch(App);
}

#[cfg(not(feature = "web"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use clap::Parser;

    logging::init();
    let args = cli::Args::parse();
    cli::run(args).await
}

fn token_store() -> Arc<dyn storage::TokenStore> {
    #[cfg(feature = "web")]
    {
        Arc::new(storage::LocalTokenStore)
    }
    #[cfg(not(feature = "web"))]
    {
        Arc::new(storage::MemoryTokenStore::default())
    }
}

#[allow(dead_code)]
#[component]
fn App() -> Element {
    let session = auth::provide_session(config::ClientConfig::from_build_env(), token_store());
    notify::provide_toasts();

    use_future(move || async move { auth::restore_session(session).await });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Title { "Token of Thanks" }
        div { class: "app-container",
            if session.read().is_loading() {
                LoadingSpinner {}
            } else {
                Router::<Route> {}
            }
            Toaster {}
        }
    }
}
