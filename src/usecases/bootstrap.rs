use std::{path::Path, sync::mpsc};

use crate::{
    domain::submission::SendCompletion,
    infra::{
        self,
        config::{AppConfig, FileConfigAdapter},
        contracts::ConfigAdapter,
        error::AppError,
        logging::LogDestination,
    },
    networking::CoinFlipSender,
    usecases::{
        context::AppContext,
        form::DefaultFormOrchestrator,
        observer::{StateObserver, TracingObserver},
        submit::{CompletionSink, SubmissionOrchestrator},
        validate_message::EmptyMessageValidator,
    },
};

pub type DefaultSubmissions<O> = SubmissionOrchestrator<EmptyMessageValidator, CoinFlipSender, O>;

pub struct FormComposition {
    pub orchestrator: DefaultFormOrchestrator<EmptyMessageValidator, CoinFlipSender, TracingObserver>,
    pub completions: mpsc::Receiver<SendCompletion>,
}

pub fn bootstrap(
    config_path: Option<&Path>,
    log_destination: LogDestination,
) -> Result<AppContext, AppError> {
    let config = load_config(&FileConfigAdapter::new(config_path))?;
    let log_guard = infra::logging::init(&config.logging, log_destination)?;

    Ok(AppContext::new(config, log_guard))
}

fn load_config(adapter: &dyn ConfigAdapter) -> Result<AppConfig, AppError> {
    adapter.load().map_err(AppError::Other)
}

/// Wires the default validator and the configured sender to `observer`.
pub fn compose_submissions<O: StateObserver>(
    config: &AppConfig,
    observer: O,
    completions: CompletionSink,
) -> DefaultSubmissions<O> {
    SubmissionOrchestrator::new(
        EmptyMessageValidator,
        CoinFlipSender::from_config(&config.sender),
        observer,
        completions,
        config.submission.stale_completions,
    )
}

pub fn compose_form(context: &AppContext) -> FormComposition {
    let (tx, rx) = mpsc::channel();
    let submissions = compose_submissions(&context.config, TracingObserver, tx);

    FormComposition {
        orchestrator: DefaultFormOrchestrator::new(submissions),
        completions: rx,
    }
}
