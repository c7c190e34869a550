//! VK integration layer: HTTP transport, direct authorization and message
//! method mapping.

mod auth;
mod client;
mod messages;
mod models;

pub use client::VkClient;
pub use messages::VkMessages;

/// Returns the vk module name for smoke checks.
pub fn module_name() -> &'static str {
    "vk"
}
