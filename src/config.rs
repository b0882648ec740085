use std::path::PathBuf;

use anyhow::{anyhow, Result};
use directories::ProjectDirs;

use crate::domain::entities::metrics::MetricParams;
use crate::infra::sample::SAMPLE_TABLE;

pub const DB_PATH_ENV: &str = "TARIF_DB_PATH";
pub const TABLE_ENV: &str = "TARIF_TABLE";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub default_table: String,
    pub metrics: MetricParams,
}

pub fn default_db_path() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("de", "tarif", "tarif")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    Ok(project_dirs.data_local_dir().join("salaries.db"))
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl AppConfig {
    /// Flag, then environment, then default.
    pub fn resolve(db_path: Option<PathBuf>, table: Option<String>) -> Result<Self> {
        let db_path = match db_path.or_else(|| env_value(DB_PATH_ENV).map(PathBuf::from)) {
            Some(path) => path,
            None => default_db_path()?,
        };
        let default_table = table
            .or_else(|| env_value(TABLE_ENV))
            .unwrap_or_else(|| SAMPLE_TABLE.to_string());

        Ok(Self {
            db_path,
            default_table,
            metrics: MetricParams::default(),
        })
    }
}
