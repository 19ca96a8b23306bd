use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::banner::AdEvent;

/// Per-session banner counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdAnalytics {
    pub impressions: u64,
    pub clicks: u64,
    pub failures: u64,
    pub last_shown: Option<DateTime<Utc>>,
}

impl AdAnalytics {
    pub fn record(&mut self, event: &AdEvent, at: DateTime<Utc>) {
        match event {
            AdEvent::Impression => {
                self.impressions += 1;
                self.last_shown = Some(at);
            }
            AdEvent::Clicked => self.clicks += 1,
            AdEvent::FailedToLoad(_) => self.failures += 1,
            AdEvent::Loaded | AdEvent::Opened | AdEvent::Closed => {}
        }
    }

    /// Clicks per impression, 0.0 before the first impression.
    pub fn click_through_rate(&self) -> f64 {
        if self.impressions == 0 {
            0.0
        } else {
            self.clicks as f64 / self.impressions as f64
        }
    }
}
