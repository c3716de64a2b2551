//! Contact module
//!
//! Opens a chat between the signed-in client and a provider from the
//! directory, then notifies the provider.

mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use service::ContactService;
pub use traits::{ChatApiTrait, NotificationTrait};
pub use types::ChatNavigation;
