//! Shared fixtures for the test suite.

pub mod harness;
