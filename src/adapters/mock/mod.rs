//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockAdSdk`] - Ads SDK that records calls and fails on demand
//! - [`MockProfileSource`] - Profile source with a configurable result
//! - [`ManualScheduler`] - Scheduler whose messages the test releases by hand

pub mod ads;
pub mod profiles;
pub mod scheduler;

pub use ads::{AdSdkCall, MockAdSdk};
pub use profiles::MockProfileSource;
pub use scheduler::ManualScheduler;
