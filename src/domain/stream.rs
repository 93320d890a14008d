// Stream type tag Twitch uses for an active broadcast.
const LIVE_STREAM_TYPE: &str = "live";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StreamRecord {
    pub user_name: String,
    pub stream_type: String,
}

impl StreamRecord {
    pub fn is_live(&self) -> bool {
        self.stream_type == LIVE_STREAM_TYPE
    }
}

// Current streams reported for a channel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StreamList(pub Vec<StreamRecord>);

impl StreamList {
    // Live when any record is live, regardless of where it sits in the list.
    pub fn is_live(&self) -> bool {
        self.0.iter().any(StreamRecord::is_live)
    }
}

// View model handed to the page renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusPage {
    pub is_live: bool,
    pub place: String,
}
