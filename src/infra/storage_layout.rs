use std::{fs, path::PathBuf};

use crate::infra::error::AppError;

const APP_DIR_NAME: &str = "msgform";
const LOG_FILE_NAME: &str = "msgform.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    pub cache_dir: PathBuf,
}

impl StorageLayout {
    pub fn resolve() -> Result<Self, AppError> {
        let cache_base = dirs::cache_dir().ok_or_else(|| AppError::StoragePathResolution {
            details: "unable to resolve user cache directory".into(),
        })?;

        Ok(Self::under(cache_base))
    }

    fn under(cache_base: PathBuf) -> Self {
        Self {
            cache_dir: cache_base.join(APP_DIR_NAME),
        }
    }

    pub fn ensure_dirs(&self) -> Result<(), AppError> {
        fs::create_dir_all(&self.cache_dir).map_err(|source| AppError::StorageDirCreate {
            path: self.cache_dir.clone(),
            source,
        })
    }

    pub fn log_file(&self) -> PathBuf {
        self.cache_dir.join(LOG_FILE_NAME)
    }
}
