//! src/configuration.rs
use serde_aux::field_attributes::deserialize_number_from_string;
use std::path::PathBuf;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub cluster: ClusterSettings,
    pub storage: StorageSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ClusterSettings {
    /// How many map shards run concurrently. One means the sequential
    /// harness.
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub workers: u16,
}

#[derive(serde::Deserialize, Clone)]
pub struct StorageSettings {
    /// Directory the table store keeps its table files in.
    pub root: PathBuf,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory.");
    let config_dir = base_path.join("configuration");

    let settings = config::Config::builder()
        .add_source(config::File::from(config_dir.join("base.yaml")))
        .add_source(
            config::Environment::with_prefix("ROWTALLY")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;
    settings.try_deserialize::<Settings>()
}
