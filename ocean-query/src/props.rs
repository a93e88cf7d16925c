//! Initial properties handed to the panel by the hosting page.

use anyhow::Context;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Name of the page query-string parameter carrying the props as JSON.
pub const PROPS_PARAM: &str = "props";

/// Initial draft query and selection, as supplied by the hosting page.
///
/// Every field is optional in JSON; missing fields take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialProps {
    pub area: Value,
    pub interp: String,
    pub neighbours: u32,
    pub projection: String,
    /// Search radius in kilometres.
    pub radius: f64,
    pub time: Value,
    pub dataset: Option<String>,
    /// A single variable id or a list of them.
    #[serde(deserialize_with = "one_or_many")]
    pub variable: Vec<String>,
}

impl Default for InitialProps {
    fn default() -> Self {
        Self {
            area: Value::Array(Vec::new()),
            interp: "gaussian".to_string(),
            neighbours: 10,
            projection: "EPSG:3857".to_string(),
            radius: 25.0,
            time: Value::from(-1),
            dataset: Some("giops_day".to_string()),
            variable: vec!["votemper".to_string()],
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values,
    })
}

impl InitialProps {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("invalid initial props JSON")
    }

    /// Read props from a page query string such as `?props=%7B...%7D`.
    ///
    /// Without a `props` parameter the defaults are used.
    pub fn from_location_search(search: &str) -> anyhow::Result<Self> {
        let search = search.strip_prefix('?').unwrap_or(search);
        let encoded = search
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(name, _)| *name == PROPS_PARAM)
            .map(|(_, value)| value);

        match encoded {
            Some(encoded) => {
                let json = urlencoding::decode(encoded)
                    .with_context(|| format!("`{}` parameter is not valid UTF-8", PROPS_PARAM))?;
                Self::from_json(&json)
            }
            None => {
                log::debug!("no `{}` parameter in page URL, using defaults", PROPS_PARAM);
                Ok(Self::default())
            }
        }
    }
}
