//! Dataset and variable selectors with the Apply button.

use super::ComboBox;
use crate::state::AppState;
use dioxus::prelude::*;
use ocean_query::panel::{DATASET_KEY, VARIABLE_KEY};
use ocean_query::InitialProps;

/// Reads the selection from AppState and routes combo-box changes into the
/// panel controller. Apply commits the draft, which reloads the viewport.
#[component]
pub fn SelectionRow() -> Element {
    let mut state = use_context::<AppState>();
    let api = state.api.read().clone();
    let (dataset, variables) = {
        let panel = state.panel.read();
        (panel.dataset().map(str::to_string), panel.variables().to_vec())
    };
    let dataset_values: Vec<String> = dataset.iter().cloned().collect();
    let default_dataset = InitialProps::default().dataset.unwrap_or_default();

    let on_dataset = move |(key, values): (String, Vec<String>)| {
        if let Some(value) = values.first() {
            state.panel.write().update_dataset(&key, value);
        }
    };

    let on_variables = move |(key, values): (String, Vec<String>)| {
        state.panel.write().update_variables(&key, values);
    };

    let on_apply = move |_: MouseEvent| {
        state.panel.write().commit_query();
    };

    rsx! {
        ComboBox {
            id: DATASET_KEY.to_string(),
            label: "Dataset".to_string(),
            endpoint: api.datasets_endpoint(),
            values: dataset_values,
            default_value: default_dataset,
            on_update: on_dataset,
        }

        if let Some(dataset) = dataset.as_ref() {
            ComboBox {
                id: VARIABLE_KEY.to_string(),
                label: "Variables".to_string(),
                endpoint: api.variables_endpoint(dataset),
                values: variables,
                multiple: true,
                on_update: on_variables,
            }
        }

        button {
            style: "margin-top: 8px; padding: 6px 16px;",
            onclick: on_apply,
            "Apply"
        }
    }
}
