// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use std::path::PathBuf;
use sui_hero_kit_config::LogConfig;
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

const LOG_FILE_NAME: &str = "logs.log";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log level '{level}': {source}")]
    InvalidLogLevel {
        level: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to create log directory or file appender: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to install the global subscriber: {0}")]
    InitError(#[from] tracing_subscriber::util::TryInitError),
}

/// Initialize tracing with the given configuration.
///
/// Console output always goes to stderr so that command output on stdout
/// stays machine readable. When `write_to_file` is set, logs are also written
/// to `<write_path>/logs.log` with size-based rotation:
/// - Current: logs.log
/// - After rotation: logs.log.1, logs.log.2, etc.
/// - Keeps up to `write_max_files` files in total
///
/// The returned guard flushes the file writer when dropped and must be held
/// for as long as logs should reach the file.
pub fn init(config: &LogConfig) -> Result<Option<WorkerGuard>, LoggingError> {
    let filter = build_filter(&config.level)?;
    let mut layers: Vec<BoxedLayer> = vec![console_layer(config)];

    let guard = if config.write_to_file {
        let (layer, guard) = file_layer(config)?;
        layers.push(layer);
        Some(guard)
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()?;

    Ok(guard)
}

/// `RUST_LOG` takes precedence over the configured level when set.
fn build_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| level.to_string());

    EnvFilter::try_new(&directives).map_err(|source| LoggingError::InvalidLogLevel {
        level: directives,
        source,
    })
}

fn console_layer(config: &LogConfig) -> BoxedLayer {
    if config.json {
        fmt::layer().json().with_writer(std::io::stderr).boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(!config.strip_ansi)
            .with_writer(std::io::stderr)
            .boxed()
    }
}

fn file_layer(config: &LogConfig) -> Result<(BoxedLayer, WorkerGuard), LoggingError> {
    let appender = file_appender(config)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer: BoxedLayer = if config.json {
        fmt::layer().json().with_writer(writer).boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .with_writer(writer)
            .boxed()
    };

    Ok((layer, guard))
}

fn file_appender(config: &LogConfig) -> Result<BasicRollingFileAppender, LoggingError> {
    std::fs::create_dir_all(&config.write_path)?;

    let path = PathBuf::from(&config.write_path).join(LOG_FILE_NAME);
    // write_max_files counts the current file as well
    let rotated = config.write_max_files.saturating_sub(1);

    Ok(BasicRollingFileAppender::new(
        path,
        RollingConditionBasic::new().max_size(config.write_max_file_size),
        rotated,
    )?)
}
