//! End-to-end classification tests.

mod config;
mod fallback;
mod files;
mod scenarios;
