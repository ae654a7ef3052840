//! Integration tests for the magic-mime classifier.
//!
//! These exercise the public entry points end-to-end against the builtin
//! rule set, files on disk and serialized configuration.

mod classify;
mod common;
