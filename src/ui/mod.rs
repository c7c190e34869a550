//! UI layer: rendering and interaction entry points (prompt and full-screen).

mod event_source;
pub mod shell;
mod std_terminal;
mod styles;
mod terminal;
mod view;

pub(crate) use event_source::CrosstermEventSource;
pub(crate) use std_terminal::StdTerminal;

/// Returns the UI module name for smoke checks.
pub fn module_name() -> &'static str {
    "ui"
}
