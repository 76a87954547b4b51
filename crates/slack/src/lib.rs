use findmyshift::StaffRecord;
use thiserror::Error;

mod http;
pub mod models;

use crate::models::*;

pub const SLACK_API_URL: &str = "https://slack.com/api";
pub const MESSAGE_HEADER: &str = "Employees with empty FindMyShift:";
pub const DEFAULT_USERNAME: &str = "FindMyShift";
pub const DEFAULT_ICON_EMOJI: &str = ":calendar:";

#[derive(Debug, Error)]
pub enum SlackError {
    #[error("Slack rejected the message: {0}")]
    NotOk(String),

    #[error("Slack token is not a valid header value")]
    InvalidToken,

    #[error("Error in the request: {0}")]
    Request(#[from] reqwest::Error),
}

/// Header line followed by one `- name` line per record.
pub fn format_message(records: &[StaffRecord]) -> String {
    std::iter::once(MESSAGE_HEADER.to_string())
        .chain(records.iter().map(|r| format!("- {}", r.display_name)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn build_message(
    channel: &str,
    records: &[StaffRecord],
    username: Option<&str>,
    icon_emoji: Option<&str>,
) -> PostMessage {
    PostMessage::default()
        .channel(channel)
        .text(format_message(records))
        .username(username.unwrap_or(DEFAULT_USERNAME))
        .icon_emoji(icon_emoji.unwrap_or(DEFAULT_ICON_EMOJI))
}

pub async fn send_to_slack(
    token: &str,
    channel: &str,
    records: &[StaffRecord],
    username: Option<&str>,
    icon_emoji: Option<&str>,
) -> Result<(), SlackError> {
    send_to_slack_at(SLACK_API_URL, token, channel, records, username, icon_emoji).await
}

pub async fn send_to_slack_at(
    base_url: &str,
    token: &str,
    channel: &str,
    records: &[StaffRecord],
    username: Option<&str>,
    icon_emoji: Option<&str>,
) -> Result<(), SlackError> {
    let message = build_message(channel, records, username, icon_emoji);

    post_message(base_url, token, &message).await
}

/// `chat.postMessage` against `base_url`. Anything but `ok: true` is an error.
pub async fn post_message(
    base_url: &str,
    token: &str,
    message: &PostMessage,
) -> Result<(), SlackError> {
    let client = http::make_client(token)?;
    let url = format!("{}/chat.postMessage", base_url.trim_end_matches('/'));

    tracing::debug!(channel = %message.channel, "posting slack message");

    let response = client.post(url).json(message).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(SlackError::NotOk(format!("HTTP {status}")));
    }

    let body = response.json::<PostMessageResponse>().await?;

    if !body.ok {
        return Err(SlackError::NotOk(
            body.error.unwrap_or_else(|| "unknown_error".into()),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn message_lists_every_name() {
        let records = vec![StaffRecord::new("1", "Ann"), StaffRecord::new("2", "Bo")];

        assert_eq!(
            format_message(&records),
            "Employees with empty FindMyShift:\n- Ann\n- Bo"
        );
    }

    #[test]
    fn empty_message_is_the_header() {
        assert_eq!(format_message(&[]), MESSAGE_HEADER);
    }

    #[test]
    fn payload_uses_defaults() {
        let message = build_message("#ops", &[StaffRecord::new("1", "Ann")], None, None);
        let json = serde_json::to_value(&message).unwrap();

        assert_eq!(json["channel"], "#ops");
        assert_eq!(json["text"], "Employees with empty FindMyShift:\n- Ann");
        assert_eq!(json["username"], DEFAULT_USERNAME);
        assert_eq!(json["icon_emoji"], DEFAULT_ICON_EMOJI);
        assert!(json.get("blocks").is_none());
    }

    #[test]
    fn payload_overrides_identity() {
        let message = build_message("#ops", &[], Some("bot"), Some(":wave:"));
        let json = serde_json::to_value(&message).unwrap();

        assert_eq!(json["username"], "bot");
        assert_eq!(json["icon_emoji"], ":wave:");
        assert_eq!(json["text"], MESSAGE_HEADER);
    }

    #[test]
    fn large_roster_goes_in_the_text_only() {
        let records: Vec<StaffRecord> = (0..500)
            .map(|i| StaffRecord::new(i.to_string(), format!("Employee number {i}")))
            .collect();

        let json = serde_json::to_value(build_message("#ops", &records, None, None)).unwrap();
        let text = json["text"].as_str().unwrap();

        assert!(text.len() > 3000);
        assert_eq!(text.lines().count(), 501);
        assert!(text.ends_with("- Employee number 499"));
        assert!(json.get("blocks").is_none());
    }

    #[test]
    fn token_must_be_a_header() {
        assert!(matches!(
            http::get_headers("bad\ntoken"),
            Err(SlackError::InvalidToken)
        ));
    }
}
