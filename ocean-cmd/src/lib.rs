//! Command implementations for the ocean panel CLI.
//!
//! Provides subcommands for deriving the 3D model plot URL the panel would
//! load and for listing the datasets and variables its combo boxes offer.

use clap::Subcommand;

pub mod metadata;
pub mod url;

#[derive(Subcommand)]
pub enum Command {
    /// Print the plot URL the panel commits on mount for the given props
    Url {
        /// Initial props as JSON, or `@path` to read them from a file
        #[arg(short = 'p', long)]
        props: String,

        /// Backend origin to prefix the URL with
        #[arg(short = 'b', long)]
        base_url: Option<String>,
    },

    /// List datasets offered by the backend
    Datasets {
        /// Backend origin, e.g. https://navigator.oceansdata.ca
        #[arg(short = 'b', long)]
        base_url: String,
    },

    /// List vector-capable variables of a dataset
    Variables {
        /// Backend origin, e.g. https://navigator.oceansdata.ca
        #[arg(short = 'b', long)]
        base_url: String,

        /// Dataset id
        #[arg(short = 'd', long)]
        dataset: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Url { props, base_url } => url::run_url(&props, base_url.as_deref()),
        Command::Datasets { base_url } => metadata::run_datasets(&base_url).await,
        Command::Variables { base_url, dataset } => {
            metadata::run_variables(&base_url, &dataset).await
        }
    }
}
