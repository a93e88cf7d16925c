//! Ocean panel CLI - derive 3D model plot URLs and browse dataset metadata.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "ocean-cli",
    version,
    about = "Derive 3D model plot URLs and list the datasets and variables a backend offers"
)]
struct Cli {
    /// Log requests and derived queries (overridden by RUST_LOG)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: ocean_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
    ocean_cmd::run(cli.command).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_is_accepted_after_the_subcommand() {
        let cli = Cli::try_parse_from(["ocean-cli", "datasets", "-b", "http://localhost", "-v"])
            .unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, ocean_cmd::Command::Datasets { .. }));
    }

    #[test]
    fn quiet_by_default() {
        let cli = Cli::try_parse_from(["ocean-cli", "url", "-p", "{}"]).unwrap();
        assert!(!cli.verbose);
    }
}
