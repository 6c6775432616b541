use std::{thread, time::Duration};

use rand::Rng;

use crate::{
    domain::submission::{SendError, SendOutcome, SENT_RESPONSE},
    infra::config::SenderConfig,
    usecases::send_message::{MessageSender, OnComplete},
};

const SENDER_WORKER_SPAWN_FAILED: &str = "SENDER_WORKER_SPAWN_FAILED";
const WORKER_THREAD_NAME: &str = "msgform-sender";

/// Placeholder transport: waits a simulated latency on a worker thread, then
/// succeeds with a fixed response `success_percent` percent of the time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinFlipSender {
    latency: Duration,
    success_percent: u8,
}

impl CoinFlipSender {
    pub fn new(latency: Duration, success_percent: u8) -> Self {
        Self {
            latency,
            success_percent: success_percent.min(100),
        }
    }

    pub fn from_config(config: &SenderConfig) -> Self {
        Self::new(
            Duration::from_millis(config.simulated_latency_ms),
            config.success_percent,
        )
    }
}

impl MessageSender for CoinFlipSender {
    fn send(&self, text: &str, on_complete: OnComplete) {
        let latency = self.latency;
        let success_percent = self.success_percent;
        tracing::debug!(
            chars = text.chars().count(),
            latency_ms = latency.as_millis() as u64,
            "simulating message delivery"
        );

        let spawned = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_owned())
            .spawn(move || {
                if !latency.is_zero() {
                    thread::sleep(latency);
                }
                let outcome = flip(&mut rand::thread_rng(), success_percent);
                on_complete.complete(outcome);
            });

        // The closure, and with it `on_complete`, is dropped on failure, which
        // reports `UnableToSend`.
        if let Err(error) = spawned {
            tracing::warn!(
                code = SENDER_WORKER_SPAWN_FAILED,
                error = %error,
                "failed to spawn sender worker"
            );
        }
    }
}

fn flip<R: Rng + ?Sized>(rng: &mut R, success_percent: u8) -> SendOutcome {
    if rng.gen_ratio(u32::from(success_percent.min(100)), 100) {
        SendOutcome::Sent(SENT_RESPONSE.to_owned())
    } else {
        SendOutcome::Failed(SendError::UnableToSend)
    }
}
