//! Panel controller: selection state, draft query and committed query.
//!
//! The controller is a plain state holder. The Dioxus panel keeps it in a
//! `Signal` and calls these methods from event handlers; nothing here
//! touches the network.

use crate::props::InitialProps;
use crate::query::{derive_url, Query};

/// Field key the dataset combo box reports changes under.
pub const DATASET_KEY: &str = "dataset";
/// Field key the variable combo box reports changes under.
pub const VARIABLE_KEY: &str = "variable";

/// Lifecycle of the panel. `Ready` is entered by the first commit and never left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelPhase {
    #[default]
    Uninitialized,
    Ready,
}

/// What the user currently has selected in the combo boxes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    pub dataset: Option<String>,
    pub variables: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelController {
    selection: SelectionState,
    draft: Query,
    committed: Option<Query>,
    url: Option<String>,
    phase: PanelPhase,
}

impl PanelController {
    pub fn new(props: &InitialProps) -> Self {
        Self {
            selection: SelectionState {
                dataset: props.dataset.clone(),
                variables: props.variable.clone(),
            },
            draft: Query::from_props(props),
            committed: None,
            url: None,
            phase: PanelPhase::Uninitialized,
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn dataset(&self) -> Option<&str> {
        self.selection.dataset.as_deref()
    }

    pub fn variables(&self) -> &[String] {
        &self.selection.variables
    }

    pub fn draft(&self) -> &Query {
        &self.draft
    }

    pub fn committed(&self) -> Option<&Query> {
        self.committed.as_ref()
    }

    /// Source of the plot viewport; `None` until the first commit.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == PanelPhase::Ready
    }

    /// Select `new_id` as the dataset, carrying the draft's options for the
    /// previously selected dataset over to the new id.
    pub fn rename_dataset(&mut self, new_id: &str) {
        self.draft = self
            .draft
            .with_dataset_renamed(self.selection.dataset.as_deref(), new_id);
        self.selection.dataset = Some(new_id.to_string());
        log::debug!("dataset selected: {}", new_id);
    }

    /// Combo-box callback form of [`rename_dataset`](Self::rename_dataset).
    /// Changes reported under any key other than `"dataset"` are ignored.
    ///
    /// Returns whether the change was applied.
    pub fn update_dataset(&mut self, key: &str, value: &str) -> bool {
        if key != DATASET_KEY {
            return false;
        }
        self.rename_dataset(value);
        true
    }

    /// Replace the selected variables. Discarded while no dataset is selected.
    ///
    /// Returns whether the change was applied.
    pub fn set_variables(&mut self, values: Vec<String>) -> bool {
        if self.selection.dataset.is_none() {
            log::warn!("ignoring variable selection {:?}: no dataset selected", values);
            return false;
        }
        self.selection.variables = values;
        true
    }

    /// Combo-box callback form of [`set_variables`](Self::set_variables).
    /// The key is not inspected.
    pub fn update_variables(&mut self, _key: &str, values: Vec<String>) -> bool {
        self.set_variables(values)
    }

    /// Promote the draft to the committed query and re-derive the plot URL.
    pub fn commit_query(&mut self) -> &str {
        let url = derive_url(&self.draft);
        log::info!("committing 3D model query: {}", url);
        self.committed = Some(self.draft.clone());
        self.phase = PanelPhase::Ready;
        self.url.insert(url).as_str()
    }

    /// Mount-time commit. Only the first call commits; returns whether it did.
    pub fn mount(&mut self) -> bool {
        if self.phase != PanelPhase::Uninitialized {
            return false;
        }
        self.commit_query();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::DatasetOptions;
    use serde_json::json;

    fn giops_props() -> InitialProps {
        InitialProps {
            area: json!("A1"),
            interp: "gaussian".to_string(),
            neighbours: 10,
            projection: "EPSG:4326".to_string(),
            radius: 25.0,
            time: json!(0),
            dataset: Some("giops".to_string()),
            variable: vec!["votemper".to_string()],
        }
    }

    #[test]
    fn mount_commits_initial_draft() {
        let mut panel = PanelController::new(&giops_props());
        assert_eq!(panel.phase(), PanelPhase::Uninitialized);
        assert_eq!(panel.url(), None);

        assert!(panel.mount());

        assert!(panel.is_ready());
        assert_eq!(
            panel.url(),
            Some("/api/v1.0/3d_model/?query=%7B%22area%22%3A%22A1%22%2C%22datasets%22%3A%7B%7D%2C%22interp%22%3A%22gaussian%22%2C%22neighbours%22%3A10%2C%22projection%22%3A%22EPSG%3A4326%22%2C%22radius%22%3A25%2C%22time%22%3A0%7D")
        );
        assert_eq!(panel.dataset(), Some("giops"));
        assert_eq!(panel.variables(), ["votemper".to_string()]);
    }

    #[test]
    fn mount_commits_only_once() {
        let mut panel = PanelController::new(&giops_props());
        assert!(panel.mount());
        let first = panel.url().map(str::to_string);

        panel.rename_dataset("riops");
        assert!(!panel.mount());

        assert_eq!(panel.url().map(str::to_string), first);
    }

    #[test]
    fn commit_snapshots_the_draft() {
        let mut panel = PanelController::new(&giops_props());
        panel.mount();
        let committed_url = panel.url().map(str::to_string);
        let committed_query = panel.committed().cloned();

        panel.rename_dataset("riops");

        assert_eq!(panel.url().map(str::to_string), committed_url);
        assert_eq!(panel.committed().cloned(), committed_query);
        assert_ne!(panel.committed(), Some(panel.draft()));
    }

    #[test]
    fn commit_reflects_draft_at_call_time() {
        let mut panel = PanelController::new(&giops_props());
        panel.mount();
        panel.rename_dataset("riops");

        let url = panel.commit_query().to_string();

        assert_eq!(url, derive_url(panel.draft()));
        assert_eq!(panel.committed(), Some(panel.draft()));
    }

    #[test]
    fn rename_moves_dataset_entry() {
        let mut props = giops_props();
        props.dataset = None;
        let mut panel = PanelController::new(&props);

        panel.rename_dataset("giops");
        let mut options = DatasetOptions::new();
        options.insert("depth".to_string(), json!(0));
        panel.draft = panel.draft.with_dataset_options("giops", options.clone());

        panel.rename_dataset("riops");

        assert!(!panel.draft().datasets.contains_key("giops"));
        assert_eq!(panel.draft().datasets.get("riops"), Some(&Some(options)));
        assert_eq!(panel.dataset(), Some("riops"));
    }

    #[test]
    fn rename_without_prior_entry_leaves_single_key() {
        let mut panel = PanelController::new(&giops_props());
        panel.rename_dataset("riops");
        panel.rename_dataset("glorys");

        let keys: Vec<&String> = panel.draft().datasets.keys().collect();
        assert_eq!(keys, ["glorys"]);
    }

    #[test]
    fn update_dataset_ignores_other_keys() {
        let mut panel = PanelController::new(&giops_props());
        let before = panel.clone();

        assert!(!panel.update_dataset("variable", "riops"));
        assert_eq!(panel, before);

        assert!(panel.update_dataset(DATASET_KEY, "riops"));
        assert_eq!(panel.dataset(), Some("riops"));
    }

    #[test]
    fn variables_ignored_without_dataset() {
        let mut props = giops_props();
        props.dataset = None;
        let mut panel = PanelController::new(&props);

        assert!(!panel.set_variables(vec!["vosaline".to_string()]));
        assert_eq!(panel.variables(), ["votemper".to_string()]);
    }

    #[test]
    fn variables_replaced_with_dataset() {
        let mut panel = PanelController::new(&giops_props());
        let values = vec!["vosaline".to_string(), "votemper".to_string()];

        assert!(panel.update_variables(VARIABLE_KEY, values.clone()));
        assert_eq!(panel.variables(), values.as_slice());
        // Variables live in the selection only.
        assert!(panel.draft().datasets.is_empty());
    }
}
