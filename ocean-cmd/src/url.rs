//! Plot URL derivation from the command line.

use anyhow::Context;
use ocean_query::api::ApiConfig;
use ocean_query::{InitialProps, PanelController};
use std::fs;

/// Read props given inline or as `@path`.
pub fn read_props(arg: &str) -> anyhow::Result<InitialProps> {
    match arg.strip_prefix('@') {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read props file {}", path))?;
            InitialProps::from_json(&json)
        }
        None => InitialProps::from_json(arg),
    }
}

/// URL the panel shows right after mount for `props`.
pub fn mount_url(props: &InitialProps, base_url: Option<&str>) -> String {
    let mut panel = PanelController::new(props);
    panel.mount();
    let config = ApiConfig::new(base_url.unwrap_or_default());
    match panel.committed() {
        Some(query) => config.plot_url(query),
        None => String::new(),
    }
}

pub fn run_url(props_arg: &str, base_url: Option<&str>) -> anyhow::Result<()> {
    let props = read_props(props_arg)?;
    log::info!(
        "Deriving plot URL for dataset {:?}, variables {:?}",
        props.dataset,
        props.variable
    );
    println!("{}", mount_url(&props, base_url));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const GIOPS_PROPS: &str = r#"{"dataset":"giops","variable":["votemper"],"area":"A1","time":0,
        "interp":"gaussian","neighbours":10,"projection":"EPSG:4326","radius":25}"#;

    #[test]
    fn mount_url_for_giops_props() {
        let props = read_props(GIOPS_PROPS).unwrap();
        assert_eq!(
            mount_url(&props, None),
            "/api/v1.0/3d_model/?query=%7B%22area%22%3A%22A1%22%2C%22datasets%22%3A%7B%7D%2C%22interp%22%3A%22gaussian%22%2C%22neighbours%22%3A10%2C%22projection%22%3A%22EPSG%3A4326%22%2C%22radius%22%3A25%2C%22time%22%3A0%7D"
        );
    }

    #[test]
    fn mount_url_with_base() {
        let props = read_props(GIOPS_PROPS).unwrap();
        let url = mount_url(&props, Some("https://navigator.oceansdata.ca/"));
        assert!(url.starts_with("https://navigator.oceansdata.ca/api/v1.0/3d_model/?query="));
    }

    #[test]
    fn props_read_from_file() {
        let path = std::env::temp_dir().join(format!("ocean-cmd-props-{}.json", std::process::id()));
        fs::write(&path, GIOPS_PROPS).unwrap();

        let props = read_props(&format!("@{}", path.display())).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(props.dataset.as_deref(), Some("giops"));
    }

    #[test]
    fn missing_props_file_is_an_error() {
        assert!(read_props("@/nonexistent/ocean-props.json").is_err());
    }
}
