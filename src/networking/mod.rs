//! Networking layer: transports behind the `MessageSender` contract.

pub mod coin_flip;

pub use coin_flip::CoinFlipSender;

/// Returns the networking module name for smoke checks.
pub fn module_name() -> &'static str {
    "networking"
}
