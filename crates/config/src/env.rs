use thiserror::Error;

pub const API_KEY: &str = "API_KEY";
pub const TEAM_ID: &str = "TEAM_ID";
pub const SLACK_TOKEN: &str = "SLACK_TOKEN";
pub const SLACK_CHANNEL: &str = "SLACK_CHANNEL";
pub const SLACK_USERNAME: &str = "SLACK_USERNAME";
pub const SLACK_ICON_EMOJI: &str = "SLACK_ICON_EMOJI";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EnvError {
    #[error("Missing env `{0}`")]
    Missing(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlackEnv {
    pub token: String,
    pub channel: String,
    pub username: Option<String>,
    pub icon_emoji: Option<String>,
}

/// Values resolved once at startup and handed to the libraries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub api_key: String,
    pub team_id: String,
    pub slack: Option<SlackEnv>,
}

impl Environment {
    pub fn from_env(with_slack: bool) -> Result<Self, EnvError> {
        Self::from_lookup(with_slack, |key| std::env::var(key).ok())
    }

    /// Empty values count as missing.
    pub fn from_lookup<F>(with_slack: bool, lookup: F) -> Result<Self, EnvError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(EnvError::Missing(key));

        let slack = if with_slack {
            Some(SlackEnv {
                token: require(SLACK_TOKEN)?,
                channel: require(SLACK_CHANNEL)?,
                username: get(SLACK_USERNAME),
                icon_emoji: get(SLACK_ICON_EMOJI),
            })
        } else {
            None
        };

        Ok(Self {
            api_key: require(API_KEY)?,
            team_id: require(TEAM_ID)?,
            slack,
        })
    }
}
