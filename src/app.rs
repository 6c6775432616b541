use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    domain,
    infra::{self, logging::LogDestination},
    networking, ui,
    usecases::{self, bootstrap},
};

pub fn run(cli: Cli) -> Result<()> {
    let command = cli.command_or_default();
    let context = bootstrap::bootstrap(cli.config.as_deref(), log_destination(&command))?;

    tracing::debug!(
        ui = ui::module_name(),
        domain = domain::module_name(),
        networking = networking::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );

    match command {
        Command::Run => {
            infra::panic_hook::install_terminal_restore_hook();

            let bootstrap::FormComposition {
                mut orchestrator,
                completions,
            } = bootstrap::compose_form(&context);
            let mut event_source = ui::CrosstermEventSource::new(completions);

            ui::shell::start(&context, &mut event_source, &mut orchestrator)?;
        }
        Command::Send { message } => ui::oneshot::run(&context, &message)?,
    }

    Ok(())
}

fn log_destination(command: &Command) -> LogDestination {
    match command {
        Command::Run => LogDestination::CacheFile,
        Command::Send { .. } => LogDestination::Stderr,
    }
}
