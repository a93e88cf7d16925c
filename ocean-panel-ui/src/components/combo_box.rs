//! Selection widget that loads its own option list.

use super::{ErrorDisplay, LoadingSpinner};
use dioxus::prelude::*;
use ocean_query::api::ApiClient;
use ocean_query::options::{default_selection, toggle_value, OptionItem};

#[derive(Props, Clone, PartialEq)]
pub struct ComboBoxProps {
    /// Field key passed back through `on_update`
    pub id: String,
    pub label: String,
    /// Metadata endpoint answering a JSON list of `{id, value}` items
    pub endpoint: String,
    /// Currently selected ids
    pub values: Vec<String>,
    #[props(default = false)]
    pub multiple: bool,
    /// Id to select once options load if nothing is selected yet
    #[props(default = String::new())]
    pub default_value: String,
    /// Called with `(id, selected ids)` on every user change
    pub on_update: EventHandler<(String, Vec<String>)>,
}

/// Dropdown (single) or checkbox list (multiple) fed from `endpoint`.
///
/// Options are re-fetched whenever `endpoint` changes; a response for an
/// older endpoint is discarded by the resource.
#[component]
pub fn ComboBox(props: ComboBoxProps) -> Element {
    let on_update = props.on_update;
    let endpoint = props.endpoint.clone();

    let options = use_resource(use_reactive!(|(endpoint,)| async move {
        ApiClient::default()
            .fetch_options(&endpoint)
            .await
            .map_err(|e| {
                log::error!("Failed to load options: {:#}", e);
                format!("{:#}", e)
            })
    }));

    // Re-runs when the options load or the selection changes; once the
    // default is applied the selection is non-empty and nothing is emitted.
    let values = props.values.clone();
    let key = props.id.clone();
    let default_value = props.default_value.clone();
    use_effect(use_reactive!(|(values, key, default_value)| {
        let selection = match &*options.read() {
            Some(Ok(items)) => default_selection(&values, &default_value, items),
            _ => None,
        };
        if let Some(id) = selection {
            log::info!("{}: selecting default {}", key, id);
            on_update.call((key, vec![id]));
        }
    }));

    let loaded = (*options.read()).clone();
    let select_id = format!("{}-select", props.id);

    let body = match loaded {
        None => rsx! { LoadingSpinner {} },
        Some(Err(message)) => rsx! { ErrorDisplay { message, compact: true } },
        Some(Ok(items)) if props.multiple => {
            let rows: Vec<(OptionItem, bool, (String, Vec<String>))> = items
                .into_iter()
                .map(|item| {
                    let checked = props.values.contains(&item.id);
                    let update = (props.id.clone(), toggle_value(&props.values, &item.id));
                    (item, checked, update)
                })
                .collect();

            rsx! {
                div {
                    id: "{select_id}",
                    style: "max-height: 240px; overflow-y: auto;",
                    for (item, checked, update) in rows {
                        label {
                            key: "{item.id}",
                            style: "display: block; font-size: 13px;",
                            input {
                                r#type: "checkbox",
                                checked: checked,
                                onchange: move |_| on_update.call(update.clone()),
                            }
                            " {item.value}"
                        }
                    }
                }
            }
        }
        Some(Ok(items)) => {
            let selected = props.values.first().cloned().unwrap_or_default();
            let field = props.id.clone();
            let on_change = move |evt: Event<FormData>| {
                on_update.call((field.clone(), vec![evt.value()]));
            };

            rsx! {
                select {
                    id: "{select_id}",
                    style: "width: 100%;",
                    onchange: on_change,
                    if selected.is_empty() {
                        option {
                            value: "",
                            disabled: true,
                            selected: true,
                            "Select..."
                        }
                    }
                    for item in items.iter() {
                        option {
                            key: "{item.id}",
                            value: "{item.id}",
                            selected: item.id == selected,
                            "{item.value}"
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "{select_id}",
                style: "display: block; font-weight: bold; margin-bottom: 4px;",
                "{props.label}"
            }
            {body}
        }
    }
}
