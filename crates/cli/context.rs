use config::{Environment, Settings};
use findmyshift::{Client, ShiftsQuery};

use crate::cli::Args;

#[derive(Debug, Clone)]
pub struct GlobalContext {
    pub args: Args,
    pub env: Environment,
    pub settings: Settings,
    pub api_base_url: String,
    pub slack_api_url: String,
}

impl GlobalContext {
    pub fn new(args: Args, env: Environment, settings: Settings) -> Self {
        Self {
            args,
            env,
            settings,
            api_base_url: findmyshift::BASE_URL.to_string(),
            slack_api_url: slack::SLACK_API_URL.to_string(),
        }
    }

    pub fn client(&self) -> Client {
        Client::with_base_url(&self.api_base_url, &self.env.api_key, &self.env.team_id)
    }

    pub fn shifts_query(&self) -> ShiftsQuery {
        ShiftsQuery {
            days: self.args.days,
            from: self.args.from,
            to: self.args.to,
        }
    }
}
