//! Tests for address lookup service
