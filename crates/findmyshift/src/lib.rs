use chrono::{Local, NaiveDate};
use reqwest::{header::*, StatusCode};
use serde::de::DeserializeOwned;

pub mod errors;
pub mod filter;
pub mod models;

pub use errors::ApiError;
pub use filter::filter_employees;
pub use models::{Employee, ShiftReport, ShiftsQuery, StaffRecord};

use models::DATE_FORMAT;

type Result<T> = std::result::Result<T, ApiError>;

pub const BASE_URL: &str = "https://findmyshift.com/api/v1.4";

#[derive(Debug, Clone)]
pub enum Param {
    ApiKey(String),
    TeamId(String),
    From(NaiveDate),
    To(NaiveDate),
    PublishedShifts(bool),
}

#[allow(clippy::from_over_into)]
impl Into<(String, String)> for Param {
    fn into(self) -> (String, String) {
        match self {
            Self::ApiKey(value) => ("apiKey".to_string(), value),
            Self::TeamId(value) => ("teamId".to_string(), value),
            Self::From(date) => ("from".to_string(), date.format(DATE_FORMAT).to_string()),
            Self::To(date) => ("to".to_string(), date.format(DATE_FORMAT).to_string()),
            Self::PublishedShifts(only) => (
                "publishedShifts".to_string(),
                if only { "yes" } else { "no" }.to_string(),
            ),
        }
    }
}

fn get_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    headers
}

fn make_url<I>(base: &str, path: &str, params: I) -> Result<reqwest::Url>
where
    I: IntoIterator<Item = Param>,
{
    let params: Vec<(String, String)> = params.into_iter().map(|p| p.into()).collect();

    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    reqwest::Url::parse_with_params(&format!("{base}/{path}"), params)
        .map_err(|_| ApiError::UrlParsing)
}

/// Read-only client for one FindMyShift team.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    team_id: String,
}

impl Client {
    pub fn new(api_key: &str, team_id: &str) -> Self {
        Self::with_base_url(BASE_URL, api_key, team_id)
    }

    pub fn with_base_url(base_url: &str, api_key: &str, team_id: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
            team_id: team_id.to_string(),
        }
    }

    fn credentials(&self) -> [Param; 2] {
        [
            Param::ApiKey(self.api_key.clone()),
            Param::TeamId(self.team_id.clone()),
        ]
    }

    async fn fetch<T, I>(&self, path: &str, params: I) -> Result<T>
    where
        I: IntoIterator<Item = Param>,
        T: DeserializeOwned,
    {
        let url = make_url(&self.base_url, path, self.credentials().into_iter().chain(params))?;

        tracing::debug!(path, "GET");

        let response = self.http.get(url).headers(get_headers()).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await?;
            tracing::debug!(path, %status, "request failed");

            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Json(e.to_string()))
    }

    /// `GET /staff/list`
    pub async fn get_employees(&self) -> Result<Vec<StaffRecord>> {
        self.fetch("/staff/list", []).await
    }

    /// `GET /reports/shifts`, unpublished shifts included.
    pub async fn get_shifts(&self, query: ShiftsQuery) -> Result<ShiftReport> {
        let today = Local::now().date_naive();
        let (from, to) = query.resolve(today)?;

        if query.from.is_none() && query.to.is_none() {
            tracing::debug!(%from, %to, "defaulting shift window");
        }

        self.fetch(
            "/reports/shifts",
            [
                Param::From(from),
                Param::To(to),
                Param::PublishedShifts(false),
            ],
        )
        .await
    }

    pub async fn get_employees_without_shifts(&self, days: u32) -> Result<Vec<Employee>> {
        self.get_employees_without_shifts_in(ShiftsQuery::with_days(days))
            .await
    }

    pub async fn get_employees_without_shifts_in(
        &self,
        query: ShiftsQuery,
    ) -> Result<Vec<Employee>> {
        tracing::debug!("Getting the list of employees...");
        let employees = self.get_employees().await?;

        tracing::debug!("Getting the list of shifts...");
        let shifts = self.get_shifts(query).await?;

        tracing::debug!(
            employees = employees.len(),
            with_shifts = shifts.len(),
            "Filtering employees without shifts..."
        );

        Ok(filter_employees(employees, &shifts))
    }
}
