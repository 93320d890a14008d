use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::{Clock, PageRenderer};
use crate::use_cases::CheckLiveUseCase;

#[derive(Clone)]
pub struct AppState {
    pub status: Arc<CheckLiveUseCase>,
    // We use Arc<dyn Trait> to hold any implementation (dependency injection).
    pub renderer: Arc<dyn PageRenderer>,
}

// System clock adapter used by the credential cache.
#[derive(Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_seconds(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}
