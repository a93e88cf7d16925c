//! Collapsible panel with a title bar.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PanelFrameProps {
    /// Text shown in the title bar
    pub title: String,
    #[props(default = true)]
    pub default_expanded: bool,
    pub children: Element,
}

/// Bordered panel whose body collapses when the title bar is clicked.
#[component]
pub fn PanelFrame(props: PanelFrameProps) -> Element {
    let mut expanded = use_signal(|| props.default_expanded);

    let on_toggle = move |_: MouseEvent| {
        let open = expanded();
        expanded.set(!open);
    };

    rsx! {
        div {
            style: "border: 1px solid #337ab7; border-radius: 4px; margin-bottom: 8px;",
            div {
                style: "background: #337ab7; color: white; padding: 8px 12px; cursor: pointer; font-size: 15px;",
                onclick: on_toggle,
                "{props.title}"
            }
            if expanded() {
                div {
                    style: "padding: 8px 12px;",
                    {props.children}
                }
            }
        }
    }
}
