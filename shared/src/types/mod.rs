//! Wire types shared by the domain and the HTTP adapters

pub mod response;

pub use response::{Chat, MessageResponse};
