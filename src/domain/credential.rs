// Tokens are treated as expired this many seconds before Twitch says they are.
pub const TOKEN_EXPIRY_MARGIN_SECONDS: u64 = 2 * 60;

// Token grant returned by the authorization endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppToken {
    pub access_token: String,
    // Declared lifetime in seconds.
    pub expires_in: u64,
}

// Cached app access credential.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credential {
    pub token: String,
    pub expires_in: u64,
    // Absolute expiry in epoch seconds, already shortened by the safety margin.
    pub expires_at: u64,
}

impl Credential {
    pub fn issue(grant: AppToken, issued_at: u64) -> Self {
        let expires_at = issued_at
            .saturating_add(grant.expires_in)
            .saturating_sub(TOKEN_EXPIRY_MARGIN_SECONDS)
            .max(issued_at);

        Self {
            token: grant.access_token,
            expires_in: grant.expires_in,
            expires_at,
        }
    }

    pub fn is_fresh(&self, now: u64) -> bool {
        now < self.expires_at
    }
}
