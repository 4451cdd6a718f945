use crate::cli::{Cli, SchemaRevision};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Deserialize, Default)]
pub struct GeneralConfig {
    #[serde(default)]
    pub base_dir: Option<PathBuf>,
    #[serde(default)]
    pub schema: Option<SchemaRevision>,
    #[serde(default)]
    pub log_filter: Option<String>,
}

/// Effective settings after CLI flags, config file and defaults are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_dir: PathBuf,
    pub schema: SchemaRevision,
    pub log_filter: String,
}

fn default_config_path() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".config/defect-init/config.toml"))
}

fn read_config(path: &Path) -> anyhow::Result<ConfigFile> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("cannot read config {}: {}", path.display(), e))?;
    toml::from_str(&raw)
        .map_err(|e| anyhow::anyhow!("invalid config {}: {}", path.display(), e))
}

/// An explicitly named file must exist; the default location is optional.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<ConfigFile> {
    if let Some(path) = explicit {
        return read_config(path);
    }
    match default_config_path() {
        Some(path) if path.exists() => read_config(&path),
        _ => Ok(ConfigFile::default()),
    }
}

pub fn resolve_settings(cli: &Cli, file: ConfigFile, cwd: PathBuf) -> Settings {
    let general = file.general;
    Settings {
        base_dir: cli.base_dir.clone().or(general.base_dir).unwrap_or(cwd),
        schema: cli.schema.or(general.schema).unwrap_or_default(),
        log_filter: general
            .log_filter
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
    }
}
