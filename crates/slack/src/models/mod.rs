use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// `chat.postMessage` body.
#[derive(Serialize, Default, Setters, Debug, Clone)]
#[setters(into)]
pub struct PostMessage {
    pub channel: String,
    pub text: String,
    pub username: String,
    pub icon_emoji: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PostMessageResponse {
    pub ok: bool,
    pub error: Option<String>,
}
