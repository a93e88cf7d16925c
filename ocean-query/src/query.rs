//! The plot query and the URL derived from it.

use crate::canonical::{percent_encode, to_canonical_string};
use crate::props::InitialProps;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Path of the backend endpoint that renders the 3D model plot.
pub const PLOT_ENDPOINT: &str = "/api/v1.0/3d_model/";

/// Dataset-specific plot options, opaque to the panel.
pub type DatasetOptions = Map<String, Value>;

/// Parameters sent to the 3D model endpoint.
///
/// `Query` is never mutated in place by the panel: every change produces a
/// new value from the previous one, so a committed query cannot be altered
/// by later edits to the draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub area: Value,
    /// Keyed by dataset id. A `None` entry is a dataset that was selected
    /// without carrying any options; it is left out of the serialized form.
    #[serde(serialize_with = "serialize_present_entries")]
    pub datasets: BTreeMap<String, Option<DatasetOptions>>,
    pub interp: String,
    pub neighbours: u32,
    pub projection: String,
    pub radius: f64,
    pub time: Value,
}

fn serialize_present_entries<S: Serializer>(
    datasets: &BTreeMap<String, Option<DatasetOptions>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(
        datasets
            .iter()
            .filter_map(|(id, options)| options.as_ref().map(|options| (id, options))),
    )
}

impl Query {
    /// Build the initial draft. The `dataset` and `variable` props belong to
    /// the selection state and do not appear in the query.
    pub fn from_props(props: &InitialProps) -> Self {
        Self {
            area: props.area.clone(),
            datasets: BTreeMap::new(),
            interp: props.interp.clone(),
            neighbours: props.neighbours,
            projection: props.projection.clone(),
            radius: props.radius,
            time: props.time.clone(),
        }
    }

    /// Return a copy whose `datasets` entry under `from` now lives under `to`.
    ///
    /// The old key is removed whether or not it existed. When nothing was
    /// stored under `from`, `to` is recorded with no options.
    pub fn with_dataset_renamed(&self, from: Option<&str>, to: &str) -> Self {
        let mut datasets = self.datasets.clone();
        let moved = from.and_then(|old| datasets.remove(old)).flatten();
        datasets.insert(to.to_string(), moved);
        Self {
            datasets,
            ..self.clone()
        }
    }

    /// Return a copy with `options` stored under dataset `id`.
    pub fn with_dataset_options(&self, id: &str, options: DatasetOptions) -> Self {
        let mut datasets = self.datasets.clone();
        datasets.insert(id.to_string(), Some(options));
        Self {
            datasets,
            ..self.clone()
        }
    }

    /// Canonical JSON form of this query.
    pub fn to_canonical_string(&self) -> String {
        to_canonical_string(self)
    }
}

/// URL of the plot for `query`, relative to the backend origin.
pub fn derive_url(query: &Query) -> String {
    format!(
        "{}?query={}",
        PLOT_ENDPOINT,
        percent_encode(&query.to_canonical_string())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_query() -> Query {
        Query {
            area: json!("A1"),
            datasets: BTreeMap::new(),
            interp: "gaussian".to_string(),
            neighbours: 10,
            projection: "EPSG:4326".to_string(),
            radius: 25.0,
            time: json!(0),
        }
    }

    #[test]
    fn canonical_form_matches_browser_encoding() {
        assert_eq!(
            sample_query().to_canonical_string(),
            r#"{"area":"A1","datasets":{},"interp":"gaussian","neighbours":10,"projection":"EPSG:4326","radius":25,"time":0}"#
        );
    }

    #[test]
    fn derive_url_percent_encodes_the_query() {
        assert_eq!(
            derive_url(&sample_query()),
            "/api/v1.0/3d_model/?query=%7B%22area%22%3A%22A1%22%2C%22datasets%22%3A%7B%7D%2C%22interp%22%3A%22gaussian%22%2C%22neighbours%22%3A10%2C%22projection%22%3A%22EPSG%3A4326%22%2C%22radius%22%3A25%2C%22time%22%3A0%7D"
        );
    }

    #[test]
    fn derive_url_ignores_option_insertion_order() {
        let mut forward = DatasetOptions::new();
        forward.insert("variable".to_string(), json!(["votemper"]));
        forward.insert("depth".to_string(), json!(0));
        forward.insert("colourmap".to_string(), json!("thermal"));

        let mut backward = DatasetOptions::new();
        backward.insert("colourmap".to_string(), json!("thermal"));
        backward.insert("depth".to_string(), json!(0));
        backward.insert("variable".to_string(), json!(["votemper"]));

        let a = sample_query().with_dataset_options("giops", forward);
        let b = sample_query().with_dataset_options("giops", backward);
        assert_eq!(derive_url(&a), derive_url(&b));
    }

    #[test]
    fn rename_moves_options_and_drops_old_key() {
        let mut options = DatasetOptions::new();
        options.insert("depth".to_string(), json!(5));
        let before = sample_query().with_dataset_options("giops", options.clone());

        let after = before.with_dataset_renamed(Some("giops"), "riops");

        assert!(!after.datasets.contains_key("giops"));
        assert_eq!(after.datasets.get("riops"), Some(&Some(options)));
        // The source value is untouched.
        assert!(before.datasets.contains_key("giops"));
    }

    #[test]
    fn rename_from_missing_key_records_empty_entry() {
        let after = sample_query().with_dataset_renamed(Some("giops"), "riops");
        assert_eq!(after.datasets.len(), 1);
        assert_eq!(after.datasets.get("riops"), Some(&None));
        assert!(after.to_canonical_string().contains(r#""datasets":{}"#));
    }

    #[test]
    fn rename_to_same_id_keeps_options() {
        let mut options = DatasetOptions::new();
        options.insert("depth".to_string(), json!(5));
        let before = sample_query().with_dataset_options("giops", options.clone());
        let after = before.with_dataset_renamed(Some("giops"), "giops");
        assert_eq!(after, before);
    }

    #[test]
    fn present_dataset_options_are_serialized() {
        let query = sample_query().with_dataset_options("giops", DatasetOptions::new());
        assert!(query
            .to_canonical_string()
            .contains(r#""datasets":{"giops":{}}"#));
    }
}
