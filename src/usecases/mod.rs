//! Use case layer: application workflows and orchestration.

pub mod auth_flow;
pub mod bootstrap;
pub mod context;
pub mod contracts;
pub mod delete_conversations;
pub mod list_conversations;
pub mod logout;
pub mod prompt_flow;
pub mod shell;
pub mod startup;

/// Returns the usecases module name for smoke checks.
pub fn module_name() -> &'static str {
    "usecases"
}
