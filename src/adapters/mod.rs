//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`StaticProfileSource`] - The built-in sample queue
//! - [`JsonFileProfileSource`] - Queue read from a JSON file
//! - [`SimulatedAdSdk`] - Ads SDK stand-in for desktop terminals
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockAdSdk`] - Recorded calls, injectable failures
//! - [`mock::MockProfileSource`] - Configurable fetch result
//! - [`mock::ManualScheduler`] - Hand-released timers

pub mod json_profiles;
pub mod mock;
pub mod simulated_ads;
pub mod static_profiles;

pub use json_profiles::JsonFileProfileSource;
pub use mock::{ManualScheduler, MockAdSdk, MockProfileSource};
pub use simulated_ads::SimulatedAdSdk;
pub use static_profiles::{builtin_profiles, StaticProfileSource};
