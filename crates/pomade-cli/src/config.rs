// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const APP_NAME: &str = "pomade";

const CONFIG_VERSION: i64 = 1;
const MAX_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub data: Data,
    #[serde(default)]
    pub ui: Ui,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            data: Data::default(),
            ui: Ui::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Data {
    pub snapshot_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ui {
    pub delay_ms: Option<u64>,
}

impl Default for Ui {
    fn default() -> Self {
        Self { delay_ms: Some(0) }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("POMADE_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set POMADE_CONFIG_PATH to the config file")
        })?;

        let app_dir = config_root.join(APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and move values under [data] and [ui]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if let Some(delay_ms) = self.ui.delay_ms {
            if delay_ms > MAX_DELAY_MS {
                bail!(
                    "config {} sets [ui].delay_ms = {delay_ms}; maximum is {MAX_DELAY_MS}",
                    path.display()
                );
            }
        }
        Ok(())
    }

    pub fn snapshot_path(&self) -> Option<PathBuf> {
        self.data.snapshot_path.as_ref().map(PathBuf::from)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.ui.delay_ms.unwrap_or(0))
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# {}\n\
             version = {CONFIG_VERSION}\n\
             \n\
             [data]\n\
             # snapshot_path = \"/path/to/snapshot.json\"\n\
             \n\
             [ui]\n\
             # Presentation-only delay before results print; correctness never depends on it.\n\
             delay_ms = 0\n",
            path.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, MAX_DELAY_MS};
    use anyhow::Result;
    use std::fs;
    use std::time::Duration;

    #[test]
    fn missing_file_falls_back_to_defaults() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config = Config::load(&dir.path().join("absent.toml"))?;
        assert_eq!(config.delay(), Duration::ZERO);
        assert_eq!(config.snapshot_path(), None);
        Ok(())
    }

    #[test]
    fn versioned_file_loads_sections() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "version = 1\n[data]\nsnapshot_path = \"/srv/salon.json\"\n[ui]\ndelay_ms = 250\n",
        )?;

        let config = Config::load(&path)?;
        assert_eq!(
            config.snapshot_path().map(|p| p.display().to_string()),
            Some("/srv/salon.json".to_owned())
        );
        assert_eq!(config.delay(), Duration::from_millis(250));
        Ok(())
    }

    #[test]
    fn unversioned_file_is_rejected() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ui]\ndelay_ms = 250\n")?;

        let error = Config::load(&path).expect_err("unversioned config should fail");
        assert!(error.to_string().contains("not versioned"));
        Ok(())
    }

    #[test]
    fn wrong_version_is_rejected() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(&path, "version = 9\n")?;

        let error = Config::load(&path).expect_err("wrong version should fail");
        assert!(error.to_string().contains("unsupported config version 9"));
        Ok(())
    }

    #[test]
    fn oversized_delay_is_rejected() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            format!("version = 1\n[ui]\ndelay_ms = {}\n", MAX_DELAY_MS + 1),
        )?;

        let error = Config::load(&path).expect_err("oversized delay should fail");
        assert!(error.to_string().contains("delay_ms"));
        Ok(())
    }

    #[test]
    fn example_config_round_trips_through_load() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(&path, Config::example_config(&path))?;

        let config = Config::load(&path)?;
        assert_eq!(config.delay(), Duration::ZERO);
        Ok(())
    }
}
