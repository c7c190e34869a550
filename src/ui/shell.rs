use anyhow::Result;

use crate::{
    domain::shell_state::{ShellExit, ShellState},
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, ShellOrchestrator},
    },
};

use super::{terminal::TerminalSession, view};

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<ShellExit> {
    tracing::info!(
        log_level = %context.config.logging.level,
        conversations = orchestrator.state().conversations().len(),
        "starting conversation window"
    );

    let mut terminal = TerminalSession::new()?;
    run_loop(event_source, orchestrator, |state| {
        terminal.draw(|frame| view::render(frame, state))
    })
}

fn run_loop<D>(
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
    mut draw: D,
) -> Result<ShellExit>
where
    D: FnMut(&ShellState) -> Result<()>,
{
    while orchestrator.state().is_running() {
        draw(orchestrator.state())?;

        if let Some(event) = event_source.next_event()? {
            orchestrator.handle_event(event)?;
        }
    }

    Ok(orchestrator.state().exit().unwrap_or(ShellExit::Quit))
}
