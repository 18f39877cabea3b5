// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! File-backed tracing setup. The terminal belongs to the browser, so log
//! output never goes to stdout or stderr.

use anyhow::{Context, Result, anyhow};
use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber writing to `log_path`. `RUST_LOG` takes
/// precedence over `level`. Fails if a subscriber is already installed.
pub fn init(log_path: &Path, level: &str) -> Result<()> {
    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(directory)
        .with_context(|| format!("create log directory {}", directory.display()))?;

    let file_name = log_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow!("log path {} has no usable file name", log_path.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)
        .with_context(|| format!("open log file {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level)?)
        .with_writer(appender)
        .with_ansi(false)
        .try_init()
        .map_err(|error| anyhow!("install tracing subscriber: {error}"))
}

fn env_filter(level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level).with_context(|| format!("invalid log level {level:?}"))
}
