//! stdassess - a terminal client for the standard assessment service
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod cli_output;
pub mod client;
pub mod config;
pub mod error;
pub mod health_check;
pub mod input;
pub mod logging;
pub mod markdown;
pub mod models;
pub mod submission;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod validation;
