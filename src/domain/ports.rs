use async_trait::async_trait;

use crate::domain::credential::AppToken;
use crate::domain::errors::UpstreamError;
use crate::domain::stream::{StatusPage, StreamList};

// Port for the Twitch endpoints used by the status check.
// The use cases depend on this trait, not the reqwest client.
#[async_trait]
pub trait TwitchApi: Send + Sync {
    async fn request_app_token(&self) -> Result<AppToken, UpstreamError>;
    async fn list_streams(&self, token: &str, channel: &str) -> Result<StreamList, UpstreamError>;
}

// Port for retrieving the current time.
pub trait Clock: Send + Sync {
    fn now_epoch_seconds(&self) -> u64;
}

// Port for turning the status view model into HTML.
pub trait PageRenderer: Send + Sync {
    fn render(&self, page: &StatusPage) -> Result<String, String>;
}
