//! Domain layer: core entities and business rules.

pub mod conversation;
pub mod credentials;
pub mod events;
pub mod selectable_list;
pub mod shell_state;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
