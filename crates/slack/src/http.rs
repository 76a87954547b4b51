use reqwest::header::*;

use crate::SlackError;

pub(crate) fn make_client(token: &str) -> Result<reqwest::Client, SlackError> {
    let client = reqwest::ClientBuilder::new()
        .default_headers(get_headers(token)?)
        .build()?;

    Ok(client)
}

pub(crate) fn get_headers(token: &str) -> Result<HeaderMap, SlackError> {
    let mut bearer = HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|_| SlackError::InvalidToken)?;
    bearer.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/json; charset=utf-8"),
    );
    headers.insert(AUTHORIZATION, bearer);

    Ok(headers)
}
