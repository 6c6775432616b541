use anyhow::Result;

use crate::usecases::{
    context::AppContext,
    contracts::{AppEventSource, FormOrchestrator},
};

use super::{terminal::TerminalSession, view};

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn FormOrchestrator,
) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        latency_ms = context.config.sender.simulated_latency_ms,
        success_percent = context.config.sender.success_percent,
        stale_completions = ?context.config.submission.stale_completions,
        "starting form TUI"
    );

    let mut terminal = TerminalSession::new()?;
    run_loop(event_source, orchestrator, |orchestrator| {
        terminal.draw(|frame| {
            view::render(
                frame,
                orchestrator.state(),
                orchestrator.submission(),
                orchestrator.pending_sends(),
            )
        })
    })
}

fn run_loop<D>(
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn FormOrchestrator,
    mut draw: D,
) -> Result<()>
where
    D: FnMut(&dyn FormOrchestrator) -> Result<()>,
{
    while orchestrator.state().is_running() {
        draw(&*orchestrator)?;

        match event_source.next_event()? {
            Some(event) => orchestrator.handle_event(event)?,
            None => continue,
        }
    }

    Ok(())
}
