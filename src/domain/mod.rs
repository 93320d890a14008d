mod credential;
mod errors;
mod ports;
mod stream;

// Re-export the domain boundary types and ports.
pub use credential::{AppToken, Credential, TOKEN_EXPIRY_MARGIN_SECONDS};
pub use errors::{StatusError, UpstreamError};
pub use ports::{Clock, PageRenderer, TwitchApi};
pub use stream::{StatusPage, StreamList, StreamRecord};
