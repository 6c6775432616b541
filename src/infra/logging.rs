use std::path::Path;

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError, storage_layout::StorageLayout};

/// Where log lines go when no file is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogDestination {
    /// Keep the alternate screen clean: fall back to the cache log file.
    CacheFile,
    Stderr,
}

/// Installs the global subscriber. The returned guard flushes the file
/// writer on drop and must outlive the program's logging.
pub fn init(
    config: &LogConfig,
    destination: LogDestination,
) -> Result<Option<WorkerGuard>, AppError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file = match (&config.file, destination) {
        (Some(file), _) => Some(file.clone()),
        (None, LogDestination::CacheFile) => {
            let layout = StorageLayout::resolve()?;
            layout.ensure_dirs()?;
            Some(layout.log_file())
        }
        (None, LogDestination::Stderr) => None,
    };

    let Some(file) = file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(AppError::LoggingInit)?;
        return Ok(None);
    };

    let appender = file_appender(&file)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(false)
        .with_writer(writer)
        .try_init()
        .map_err(AppError::LoggingInit)?;

    Ok(Some(guard))
}

fn file_appender(file: &Path) -> Result<RollingFileAppender, AppError> {
    let (directory, file_name) = split_log_path(file)?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy().into_owned())
        .build(directory)
        .map_err(|error| AppError::LoggingInit(Box::new(error)))
}

fn split_log_path(file: &Path) -> Result<(&Path, &std::ffi::OsStr), AppError> {
    let file_name = file
        .file_name()
        .ok_or_else(|| AppError::StoragePathResolution {
            details: format!("log file path {} has no file name", file.display()),
        })?;
    let directory = file
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    Ok((directory, file_name))
}
