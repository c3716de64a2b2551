//! Tests for contact service

#[cfg(test)]
mod mocks;
