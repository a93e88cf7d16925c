//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Inline variant sized to sit inside a combo box
    #[props(default = false)]
    pub compact: bool,
}

/// Displays an error message in a styled box. The full-width banner is used
/// for page-level failures; the compact form replaces a combo box's options.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let style = if props.compact {
        "padding: 4px 6px; background: #FFEBEE; color: #C62828; border-radius: 3px; font-size: 12px; word-break: break-word;"
    } else {
        "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;"
    };
    let heading = if props.compact { "Could not load options: " } else { "Error: " };

    rsx! {
        div {
            style: "{style}",
            role: "alert",
            strong { "{heading}" }
            "{props.message}"
        }
    }
}
