//! The HTTP boundary: one blocking GET per page against the dataset
//! endpoint. Nothing raw escapes this module; every failure comes back as
//! a classified [`FetchError`] for the pagination loop to act on.

use crate::config::Config;
use crate::errors::{AppResult, FetchError};
use crate::models::FoodTruck;
use crate::query::Payload;
use log::debug;
use reqwest::blocking::Client;

/// Header carrying the optional Socrata app token.
pub const AUTH_HEADER: &str = "X-Auth-Token";

pub struct Fetcher {
    client: Client,
    base_url: String,
    app_token: Option<String>,
}

impl Fetcher {
    /// Build the client once per session; endpoint, token and timeout all
    /// come from the explicit configuration.
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let client = Client::builder().timeout(cfg.timeout).build()?;
        Ok(Self {
            client,
            base_url: cfg.base_url.clone(),
            app_token: cfg.app_token.clone(),
        })
    }

    /// Request one page. A non-2xx status or a transport failure becomes a
    /// [`FetchError`]; success is the parsed record list.
    pub fn fetch_page(&self, payload: &Payload) -> Result<Vec<FoodTruck>, FetchError> {
        let mut request = self.client.get(&self.base_url).query(payload);
        if let Some(token) = &self.app_token {
            request = request.header(AUTH_HEADER, token);
        }

        let request = request.build().map_err(FetchError::classify)?;
        debug!("GET {}", request.url());

        let response = self.client.execute(request).map_err(FetchError::classify)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status });
        }

        response.json().map_err(FetchError::classify)
    }
}
