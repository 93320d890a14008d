use crate::domain::{AppToken, StreamList, TwitchApi, UpstreamError};
use crate::interface_adapters::protocol::{StreamsResponse, TokenResponse, TwitchErrorResponse};
use async_trait::async_trait;
use reqwest::{Client, Response};
use url::Url;

const CLIENT_CREDENTIALS_GRANT: &str = "client_credentials";

// Thin wrapper around reqwest for the Twitch token and Helix endpoints.
#[derive(Clone)]
pub struct TwitchClient {
    http: Client,
    client_id: String,
    client_secret: String,
    pub auth_url: String,
    pub api_url: String,
}

impl TwitchClient {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        auth_url: impl Into<String>,
        api_url: impl Into<String>,
    ) -> Self {
        Self {
            http: Client::new(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            auth_url: auth_url.into(),
            api_url: api_url.into(),
        }
    }

    // Credentials travel as query parameters on the token grant.
    fn token_url(&self) -> Result<Url, UpstreamError> {
        Url::parse_with_params(
            &self.auth_url,
            [
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("grant_type", CLIENT_CREDENTIALS_GRANT),
            ],
        )
        .map_err(|e| UpstreamError::InvalidUrl(e.to_string()))
    }

    fn streams_url(&self, channel: &str) -> Result<Url, UpstreamError> {
        let base = format!("{}/streams", self.api_url.trim_end_matches('/'));
        Url::parse_with_params(&base, [("user_login", channel)])
            .map_err(|e| UpstreamError::InvalidUrl(e.to_string()))
    }
}

// Keep upstream status/message so the caller can tell a rejected token apart.
async fn upstream_error(res: Response) -> UpstreamError {
    let status = res.status().as_u16();
    let message = res
        .json::<TwitchErrorResponse>()
        .await
        .ok()
        .map(|payload| payload.message);
    UpstreamError::Status { status, message }
}

#[async_trait]
impl TwitchApi for TwitchClient {
    async fn request_app_token(&self) -> Result<AppToken, UpstreamError> {
        let res = self
            .http
            .post(self.token_url()?)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        if !res.status().is_success() {
            return Err(upstream_error(res).await);
        }

        // Parse the grant into the domain token.
        res.json::<TokenResponse>()
            .await
            .map(AppToken::from)
            .map_err(|e| UpstreamError::Decode(e.to_string()))
    }

    async fn list_streams(&self, token: &str, channel: &str) -> Result<StreamList, UpstreamError> {
        let res = self
            .http
            .get(self.streams_url(channel)?)
            .bearer_auth(token)
            .header("Client-Id", &self.client_id)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        if !res.status().is_success() {
            return Err(upstream_error(res).await);
        }

        res.json::<StreamsResponse>()
            .await
            .map(StreamList::from)
            .map_err(|e| UpstreamError::Decode(e.to_string()))
    }
}
