//! Common test utilities for the webserver test suites

#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;

pub use fixtures::TestFixtures;
pub use helpers::{TestHelpers, TestServer};
