//! ViaCEP postal-code lookup

mod client;
mod response;

pub use client::ViaCepClient;
pub use response::{ViaCepAddress, ViaCepResponse};
