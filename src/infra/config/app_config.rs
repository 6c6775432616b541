use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::submission::StaleCompletionPolicy;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub sender: SenderConfig,
    pub submission: SubmissionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SenderConfig {
    pub simulated_latency_ms: u64,
    pub success_percent: u8,
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: 400,
            success_percent: 50,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SubmissionConfig {
    pub stale_completions: StaleCompletionPolicy,
}
