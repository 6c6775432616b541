use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::infra::{
    config::{file_config::FileConfig, AppConfig},
    error::AppError,
};

const DEFAULT_CONFIG_PATH: &str = "config.toml";
const MAX_SUCCESS_PERCENT: u8 = 100;

pub fn load(path: Option<&Path>) -> Result<AppConfig, AppError> {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let mut config = AppConfig::default();

    if !config_path.exists() {
        return Ok(config);
    }

    let raw = fs::read_to_string(&config_path).map_err(|source| AppError::ConfigRead {
        path: config_path.clone(),
        source,
    })?;

    let file_config: FileConfig = toml::from_str(&raw).map_err(|source| AppError::ConfigParse {
        path: config_path.clone(),
        source,
    })?;

    file_config.merge_into(&mut config);
    validate(&config, &config_path)?;

    Ok(config)
}

fn validate(config: &AppConfig, path: &Path) -> Result<(), AppError> {
    if config.sender.success_percent > MAX_SUCCESS_PERCENT {
        return Err(AppError::ConfigInvalid {
            path: path.to_path_buf(),
            details: format!(
                "sender.success_percent must be within 0..={MAX_SUCCESS_PERCENT}, got {}",
                config.sender.success_percent
            ),
        });
    }

    Ok(())
}
