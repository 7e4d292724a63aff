//! Response types (Serialize)

use historical_news_core::Entry;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Entry list, or an explanatory message when the list would be empty.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum EntriesOrMessage {
    Entries(Vec<Entry>),
    Message(MessageResponse),
}

impl EntriesOrMessage {
    pub fn from_entries(entries: Vec<Entry>, empty_message: &'static str) -> Self {
        if entries.is_empty() {
            Self::Message(MessageResponse { message: empty_message })
        } else {
            Self::Entries(entries)
        }
    }
}
