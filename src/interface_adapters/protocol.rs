use serde::Deserialize;

use crate::domain::{AppToken, StreamList, StreamRecord};

// Payload returned by the authorization endpoint.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: u64,
}

// Payload returned by the streams endpoint.
#[derive(Debug, Deserialize)]
pub struct StreamsResponse {
    pub data: Vec<StreamEntry>,
}

#[derive(Debug, Deserialize)]
pub struct StreamEntry {
    #[serde(default)]
    pub user_name: String,
    // Twitch sends "live", or an empty string on error.
    #[serde(rename = "type", default)]
    pub stream_type: String,
}

// Error body Twitch attaches to 4xx responses.
#[derive(Debug, Deserialize)]
pub struct TwitchErrorResponse {
    pub message: String,
}

impl From<TokenResponse> for AppToken {
    fn from(response: TokenResponse) -> Self {
        AppToken {
            access_token: response.access_token,
            expires_in: response.expires_in,
        }
    }
}

impl From<StreamsResponse> for StreamList {
    fn from(response: StreamsResponse) -> Self {
        StreamList(
            response
                .data
                .into_iter()
                .map(|entry| StreamRecord {
                    user_name: entry.user_name,
                    stream_type: entry.stream_type,
                })
                .collect(),
        )
    }
}
