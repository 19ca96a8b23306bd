//! ClgMate - campus discovery in the terminal
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod ads;
pub mod app;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod models;
pub mod onboarding;
pub mod startup;
pub mod terminal;
pub mod theme;
pub mod traits;
pub mod ui;
