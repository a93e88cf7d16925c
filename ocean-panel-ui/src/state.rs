//! Application state managed via Dioxus context.
//!
//! `AppState` is provided once by the app root with `use_context_provider`.
//! Components retrieve it with `use_context::<AppState>()` and mutate the
//! controller through `state.panel.write()`.

use dioxus::prelude::*;
use ocean_query::api::ApiConfig;
use ocean_query::{InitialProps, PanelController};

/// Shared state for the 3D model panel.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Selection, draft query and committed query
    pub panel: Signal<PanelController>,
    /// Where the metadata endpoints live
    pub api: Signal<ApiConfig>,
}

impl AppState {
    pub fn new(props: &InitialProps, api: ApiConfig) -> Self {
        Self {
            panel: Signal::new(PanelController::new(props)),
            api: Signal::new(api),
        }
    }
}
