// File: ./src/config.rs
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Overrides the save file location (used by tests and scripted runs).
pub const DATA_FILE_ENV: &str = "TASKBOB_DATA_FILE";
const DATA_FILE_NAME: &str = "tasks.txt";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where the task list is persisted.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

impl Config {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "taskbob", "taskbob")
    }

    pub fn get_path() -> Option<PathBuf> {
        Self::project_dirs().map(|proj| proj.config_dir().join("config.toml"))
    }

    /// Reads `config.toml`; a missing file yields the defaults.
    pub fn load() -> Result<Self> {
        match Self::get_path() {
            Some(path) if path.exists() => {
                let raw = fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?;
                Self::from_toml(&raw).with_context(|| format!("parsing {}", path.display()))
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Env var, then config file, then the platform data dir.
    pub fn data_path(&self) -> PathBuf {
        if let Ok(path) = env::var(DATA_FILE_ENV)
            && !path.trim().is_empty()
        {
            return PathBuf::from(path);
        }
        if let Some(path) = &self.data_file {
            return path.clone();
        }
        match Self::project_dirs() {
            Some(proj) => proj.data_dir().join(DATA_FILE_NAME),
            None => PathBuf::from("data").join(DATA_FILE_NAME),
        }
    }
}
