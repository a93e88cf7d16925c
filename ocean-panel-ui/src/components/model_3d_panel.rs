//! The 3D model panel: selection on the left, plot on the right.

use super::{PanelFrame, PlotViewport, SelectionRow};
use crate::state::AppState;
use dioxus::prelude::*;

/// Commits the initial draft once on mount; nothing is rendered before that
/// first commit.
#[component]
pub fn Model3DPanel() -> Element {
    let mut state = use_context::<AppState>();

    // Write-only access, so this effect never re-runs.
    use_effect(move || {
        if state.panel.write().mount() {
            log::info!("3D model panel mounted");
        }
    });

    let (ready, url) = {
        let panel = state.panel.read();
        (panel.is_ready(), panel.url().unwrap_or_default().to_string())
    };

    rsx! {
        div {
            style: "height: 100%;",
            if ready {
                div {
                    style: "display: flex; gap: 12px; height: 100%;",
                    div {
                        style: "flex: 0 0 17%; height: 100%;",
                        PanelFrame {
                            title: "Data Selection".to_string(),
                            SelectionRow {}
                        }
                    }
                    div {
                        style: "flex: 0 0 66%; height: 100%;",
                        PlotViewport { src: url }
                    }
                }
            }
        }
    }
}
