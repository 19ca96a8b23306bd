//! Trait abstractions for the collaborators at the edge of the client.
//!
//! # Traits
//!
//! - [`ProfileSource`] - Supplies the ordered discovery queue
//! - [`AdSdk`] - The third-party mobile ads SDK
//! - [`Scheduler`] - Delivers delayed app messages (animation and flow timers)

pub mod ad_sdk;
pub mod profile_source;
pub mod scheduler;

pub use ad_sdk::AdSdk;
pub use profile_source::ProfileSource;
pub use scheduler::Scheduler;
