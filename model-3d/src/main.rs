//! 3D Model Panel
//!
//! Lets the user pick an ocean dataset and variables, then embeds the 3D
//! model plot rendered by the backend in an iframe.
//!
//! Data flow:
//! 1. Initial props are read from the page URL (`?props=<percent-encoded JSON>`);
//!    without them the panel starts from the default dataset.
//! 2. Metadata endpoints are resolved against the page origin.
//! 3. On mount the panel commits the initial draft, which sets the iframe source.
//! 4. Selector changes edit the draft; "Apply" commits it and reloads the plot.

use dioxus::prelude::*;
use ocean_panel_ui::components::{ErrorDisplay, Model3DPanel};
use ocean_panel_ui::state::AppState;
use ocean_query::api::ApiConfig;
use ocean_query::InitialProps;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("model-3d-root"))
        .launch(App);
}

/// Props from the page URL, a message if they could not be read, and the
/// backend location.
fn load_page_config() -> (InitialProps, Option<String>, ApiConfig) {
    let location = web_sys::window().map(|window| window.location());
    let origin = location
        .as_ref()
        .and_then(|l| l.origin().ok())
        .unwrap_or_default();
    let search = location
        .as_ref()
        .and_then(|l| l.search().ok())
        .unwrap_or_default();

    let (props, error) = match InitialProps::from_location_search(&search) {
        Ok(props) => (props, None),
        Err(e) => {
            log::error!("Failed to read initial props: {:#}", e);
            (
                InitialProps::default(),
                Some(format!("Could not read panel settings from the page URL: {:#}", e)),
            )
        }
    };

    log::info!("3D model panel starting with dataset {:?}", props.dataset);
    (props, error, ApiConfig::new(&origin))
}

#[component]
fn App() -> Element {
    let (props, load_error, api) = use_hook(load_page_config);
    use_context_provider(|| AppState::new(&props, api));

    rsx! {
        div {
            style: "height: 100vh; box-sizing: border-box; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = load_error.as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            Model3DPanel {}
        }
    }
}
