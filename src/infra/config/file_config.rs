use std::path::PathBuf;

use serde::Deserialize;

use crate::{
    domain::submission::StaleCompletionPolicy,
    infra::config::{AppConfig, LogConfig, SenderConfig, SubmissionConfig},
};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub sender: Option<FileSenderConfig>,
    pub submission: Option<FileSubmissionConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(sender) = self.sender {
            sender.merge_into(&mut config.sender);
        }

        if let Some(submission) = self.submission {
            submission.merge_into(&mut config.submission);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }

        if let Some(file) = self.file {
            config.file = Some(file);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileSenderConfig {
    pub simulated_latency_ms: Option<u64>,
    pub success_percent: Option<u8>,
}

impl FileSenderConfig {
    fn merge_into(self, config: &mut SenderConfig) {
        if let Some(latency_ms) = self.simulated_latency_ms {
            config.simulated_latency_ms = latency_ms;
        }

        if let Some(percent) = self.success_percent {
            config.success_percent = percent;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileSubmissionConfig {
    pub stale_completions: Option<StaleCompletionPolicy>,
}

impl FileSubmissionConfig {
    fn merge_into(self, config: &mut SubmissionConfig) {
        if let Some(policy) = self.stale_completions {
            config.stale_completions = policy;
        }
    }
}
