use std::sync::Arc;

use crate::domain::{StatusError, TwitchApi};
use crate::use_cases::token_cache::CredentialCache;

// Resolves whether the configured channel is broadcasting right now.
pub struct CheckLiveUseCase {
    pub api: Arc<dyn TwitchApi>,
    pub credentials: Arc<CredentialCache>,
    pub channel: String,
}

impl CheckLiveUseCase {
    pub async fn execute(&self) -> Result<bool, StatusError> {
        let token = self
            .credentials
            .get_token()
            .await
            .map_err(StatusError::Auth)?;

        let streams = match self.api.list_streams(&token, &self.channel).await {
            Ok(streams) => streams,
            Err(e) => {
                // A rejected token must not be served again from the cache.
                if e.is_unauthorized() {
                    tracing::warn!("twitch rejected cached token; invalidating.");
                    self.credentials.invalidate(&token).await;
                }
                return Err(StatusError::Query(e));
            }
        };

        Ok(streams.is_live())
    }
}
