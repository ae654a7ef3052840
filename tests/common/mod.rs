//! Common test utilities and helpers.

pub mod test_utils;

pub use test_utils::*;
