use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{Clock, Credential, TwitchApi, UpstreamError};

// Owned cache for the Twitch app access token.
// The lock is held across a refresh so concurrent callers wait for a single
// token request instead of each issuing their own.
pub struct CredentialCache {
    api: Arc<dyn TwitchApi>,
    clock: Arc<dyn Clock>,
    slot: Mutex<Option<Credential>>,
}

impl CredentialCache {
    pub fn new(api: Arc<dyn TwitchApi>, clock: Arc<dyn Clock>) -> Self {
        Self {
            api,
            clock,
            slot: Mutex::new(None),
        }
    }

    pub async fn get_token(&self) -> Result<String, UpstreamError> {
        let mut slot = self.slot.lock().await;

        let now = self.clock.now_epoch_seconds();
        if let Some(credential) = slot.as_ref().filter(|credential| credential.is_fresh(now)) {
            tracing::debug!("using cached twitch token.");
            return Ok(credential.token.clone());
        }

        let grant = self.api.request_app_token().await.inspect_err(|e| {
            tracing::error!(error = %e, "failed to request twitch token.");
        })?;

        let credential = Credential::issue(grant, self.clock.now_epoch_seconds());
        tracing::info!(
            expires_in = credential.expires_in,
            expires_at = credential.expires_at,
            "twitch token refreshed."
        );

        let token = credential.token.clone();
        *slot = Some(credential);
        Ok(token)
    }

    // Drop the cached credential if it is still the rejected token.
    // A newer token cached by a concurrent refresh is kept.
    pub async fn invalidate(&self, rejected: &str) {
        let mut slot = self.slot.lock().await;
        if slot.as_ref().map(|credential| credential.token.as_str()) == Some(rejected) {
            slot.take();
        }
    }

    pub async fn cached(&self) -> Option<Credential> {
        self.slot.lock().await.clone()
    }
}
