// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

pub const APP_NAME: &str = "glossa";
const CONFIG_VERSION: i64 = 1;
const DEFAULT_LOG_LEVEL: &str = "info";
const LOG_FILE_NAME: &str = "glossa.log";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub random: Random,
    #[serde(default)]
    pub log: Log,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            random: Random::default(),
            log: Log::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Random {
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Log {
    pub file: Option<String>,
    pub level: Option<String>,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            file: None,
            level: Some(DEFAULT_LOG_LEVEL.to_owned()),
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("GLOSSA_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set GLOSSA_CONFIG_PATH to the config file")
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
                    "config file {} is not versioned. Add `version = 1` and keep values under [random] and [log]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1. Run `glossa --print-example-config` for the current schema",
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
        if let Some(level) = &self.log.level
            && let Err(error) = EnvFilter::try_new(level)
        {
            bail!(
                "log.level in {} is not a valid filter ({error}); use a level such as \"info\" or \"glossa_app=debug\"",
                path.display()
            );
        }

        if let Some(file) = &self.log.file {
            if file.trim().is_empty() {
                bail!("log.file in {} must not be empty", path.display());
            }
            if Path::new(file).file_name().is_none() {
                bail!(
                    "log.file in {} must name a file, got {file:?}",
                    path.display()
                );
            }
        }

        Ok(())
    }

    pub fn seed(&self) -> Option<u64> {
        self.random.seed
    }

    pub fn log_level(&self) -> &str {
        self.log.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn log_path(&self) -> Result<PathBuf> {
        if let Some(file) = &self.log.file {
            return Ok(PathBuf::from(file));
        }
        if let Some(path) = env::var_os("GLOSSA_LOG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let data_root = dirs::data_local_dir().ok_or_else(|| {
            anyhow!("cannot resolve data directory; set [log].file or GLOSSA_LOG_PATH")
        })?;
        Ok(data_root.join(APP_NAME).join(LOG_FILE_NAME))
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# glossa config\n# Place this file at: {}\n\nversion = 1\n\n[random]\n# Optional. Unset draws terms using OS entropy.\n# seed = 42\n\n[log]\n# Optional. Default is the platform data dir (for example ~/.local/share/glossa/glossa.log)\n# file = \"/absolute/path/to/glossa.log\"\nlevel = \"{}\"\n",
            path.display(),
            DEFAULT_LOG_LEVEL,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use anyhow::Result;
    use std::path::PathBuf;
    use std::sync::{Mutex, OnceLock};

    fn write_config(content: &str) -> Result<(tempfile::TempDir, PathBuf)> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("config.toml");
        std::fs::write(&path, content)?;
        Ok((temp, path))
    }

    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        match ENV_LOCK.get_or_init(|| Mutex::new(())).lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    #[test]
    fn missing_config_uses_defaults() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let config = Config::load(&temp.path().join("missing.toml"))?;
        assert_eq!(config.version, 1);
        assert_eq!(config.seed(), None);
        assert_eq!(config.log_level(), "info");
        Ok(())
    }

    #[test]
    fn unversioned_config_is_rejected_with_actionable_message() -> Result<()> {
        let (_temp, path) = write_config("[random]\nseed = 3\n")?;
        let error = Config::load(&path).expect_err("unversioned config should fail");
        let message = error.to_string();
        assert!(message.contains("version = 1"));
        assert!(message.contains("[random] and [log]"));
        Ok(())
    }

    #[test]
    fn v1_config_parses() -> Result<()> {
        let (_temp, path) = write_config(
            "version = 1\n[random]\nseed = 1234\n[log]\nfile = \"/tmp/glossa-test.log\"\nlevel = \"debug\"\n",
        )?;
        let config = Config::load(&path)?;
        assert_eq!(config.seed(), Some(1234));
        assert_eq!(config.log_level(), "debug");
        assert_eq!(config.log_path()?, PathBuf::from("/tmp/glossa-test.log"));
        Ok(())
    }

    #[test]
    fn malformed_config_returns_parse_error() -> Result<()> {
        let (_temp, path) = write_config("{{not toml")?;
        let error = Config::load(&path).expect_err("malformed config should fail");
        assert!(error.to_string().contains("parse TOML config"));
        Ok(())
    }

    #[test]
    fn unsupported_config_version_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 2\n")?;
        let error = Config::load(&path).expect_err("v2 config should fail");
        assert!(error.to_string().contains("unsupported config version 2"));
        Ok(())
    }

    #[test]
    fn negative_seed_fails_to_decode() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[random]\nseed = -4\n")?;
        let error = Config::load(&path).expect_err("negative seed should fail");
        assert!(error.to_string().contains("decode config"));
        Ok(())
    }

    #[test]
    fn invalid_log_level_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[log]\nlevel = \"glossa=notalevel\"\n")?;
        let error = Config::load(&path).expect_err("bad level should fail");
        assert!(error.to_string().contains("log.level"));
        Ok(())
    }

    #[test]
    fn empty_log_file_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[log]\nfile = \"  \"\n")?;
        let error = Config::load(&path).expect_err("empty log file should fail");
        assert!(error.to_string().contains("must not be empty"));
        Ok(())
    }

    #[test]
    fn log_file_must_name_a_file() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[log]\nfile = \"/tmp/..\"\n")?;
        let error = Config::load(&path).expect_err("directory-like log file should fail");
        assert!(error.to_string().contains("must name a file"));
        Ok(())
    }

    #[test]
    fn default_path_honors_env_override() -> Result<()> {
        let _guard = env_lock();
        let temp = tempfile::tempdir()?;
        let override_path = temp.path().join("custom-config.toml");
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::set_var("GLOSSA_CONFIG_PATH", &override_path);
        }
        let resolved = Config::default_path()?;
        // SAFETY: test cleanup for process-local env mutation.
        unsafe {
            std::env::remove_var("GLOSSA_CONFIG_PATH");
        }
        assert_eq!(resolved, override_path);
        Ok(())
    }

    #[test]
    fn log_path_prefers_config_over_env_override() -> Result<()> {
        let _guard = env_lock();
        let (_temp, path) = write_config("version = 1\n[log]\nfile = \"/explicit/glossa.log\"\n")?;
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::set_var("GLOSSA_LOG_PATH", "/from/env.log");
        }
        let config = Config::load(&path)?;
        let resolved = config.log_path()?;
        // SAFETY: test cleanup for process-local env mutation.
        unsafe {
            std::env::remove_var("GLOSSA_LOG_PATH");
        }
        assert_eq!(resolved, PathBuf::from("/explicit/glossa.log"));
        Ok(())
    }

    #[test]
    fn log_path_uses_env_override_when_config_missing() -> Result<()> {
        let _guard = env_lock();
        let (_temp, path) = write_config("version = 1\n")?;
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::set_var("GLOSSA_LOG_PATH", "/from/env-only.log");
        }
        let config = Config::load(&path)?;
        let resolved = config.log_path()?;
        // SAFETY: test cleanup for process-local env mutation.
        unsafe {
            std::env::remove_var("GLOSSA_LOG_PATH");
        }
        assert_eq!(resolved, PathBuf::from("/from/env-only.log"));
        Ok(())
    }

    #[test]
    fn log_path_defaults_to_glossa_log() -> Result<()> {
        let _guard = env_lock();
        let (_temp, path) = write_config("version = 1\n")?;
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::remove_var("GLOSSA_LOG_PATH");
        }
        let config = Config::load(&path)?;
        let resolved = config.log_path()?;
        assert!(
            resolved.ends_with("glossa/glossa.log"),
            "got {}",
            resolved.display()
        );
        Ok(())
    }

    #[test]
    fn example_config_round_trips_through_loader() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("config.toml");
        let example = Config::example_config(&path);
        assert!(example.contains("version = 1"));
        assert!(example.contains("[random]"));
        assert!(example.contains("[log]"));

        std::fs::write(&path, example)?;
        let config = Config::load(&path)?;
        assert_eq!(config.log_level(), "info");
        assert_eq!(config.seed(), None);
        Ok(())
    }
}
