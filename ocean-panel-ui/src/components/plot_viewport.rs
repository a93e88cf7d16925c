//! Embedded frame showing the rendered 3D model.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PlotViewportProps {
    /// Committed plot URL
    pub src: String,
}

/// Fills its parent with an iframe pointed at `src`. The backend request is
/// made by the frame itself; a failed plot simply shows an empty frame.
#[component]
pub fn PlotViewport(props: PlotViewportProps) -> Element {
    rsx! {
        div {
            style: "height: 100%; width: 100%;",
            iframe {
                src: "{props.src}",
                title: "3D model",
                style: "border: 0; width: 100%; height: 100%;",
            }
        }
    }
}
