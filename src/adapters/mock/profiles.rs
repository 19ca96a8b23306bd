//! Mock profile source for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::error::ProfileSourceError;
use crate::models::Profile;
use crate::traits::ProfileSource;

/// Profile source returning a configurable result and counting fetches.
#[derive(Debug, Clone)]
pub struct MockProfileSource {
    result: Arc<Mutex<Result<Vec<Profile>, ProfileSourceError>>>,
    fetches: Arc<Mutex<usize>>,
}

impl MockProfileSource {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self {
            result: Arc::new(Mutex::new(Ok(profiles))),
            fetches: Arc::new(Mutex::new(0)),
        }
    }

    pub fn failing(error: ProfileSourceError) -> Self {
        let source = Self::new(Vec::new());
        source.set_result(Err(error));
        source
    }

    pub fn set_result(&self, result: Result<Vec<Profile>, ProfileSourceError>) {
        *self.result.lock().unwrap() = result;
    }

    pub fn fetch_count(&self) -> usize {
        *self.fetches.lock().unwrap()
    }
}

#[async_trait]
impl ProfileSource for MockProfileSource {
    async fn fetch_queue(&self) -> Result<Vec<Profile>, ProfileSourceError> {
        *self.fetches.lock().unwrap() += 1;
        self.result.lock().unwrap().clone()
    }
}
