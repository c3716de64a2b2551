//! Tests for registration service

#[cfg(test)]
mod service_tests;
