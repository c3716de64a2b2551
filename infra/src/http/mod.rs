//! Marketplace REST API client
//!
//! [`UezApiClient`] talks to the backend with reqwest; `adapters` plugs it
//! into the core service traits.

mod adapters;
mod client;
mod wire;

pub use client::UezApiClient;
pub use wire::NotificationBody;
pub(crate) use wire::decode as decode_body;
