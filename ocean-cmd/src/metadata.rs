//! Dataset and variable listings from the metadata endpoints.

use ocean_query::api::{ApiClient, ApiConfig};
use ocean_query::options::OptionItem;

/// One `id<TAB>label` line per option.
pub fn format_options(options: &[OptionItem]) -> String {
    options
        .iter()
        .map(|o| format!("{}\t{}", o.id, o.value))
        .collect::<Vec<_>>()
        .join("\n")
}

pub async fn run_datasets(base_url: &str) -> anyhow::Result<()> {
    let client = ApiClient::new(ApiConfig::new(base_url));
    let datasets = client.datasets().await?;
    log::info!("{} datasets available", datasets.len());
    println!("{}", format_options(&datasets));
    Ok(())
}

pub async fn run_variables(base_url: &str, dataset: &str) -> anyhow::Result<()> {
    let client = ApiClient::new(ApiConfig::new(base_url));
    let variables = client.variables(dataset).await?;
    log::info!("{} variables available for {}", variables.len(), dataset);
    println!("{}", format_options(&variables));
    Ok(())
}
