use super::{ApiResult, Credentials, TrelloApi};
use crate::error::{ApiError, HifiError, Result};
use crate::model::{Board, Card, List};
use reqwest::blocking::Client;
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::debug;

const USER_AGENT: &str = concat!("hifi/", env!("CARGO_PKG_VERSION"));

/// Blocking Trello REST client.
pub struct HttpClient {
    http: Client,
    base_url: Url,
    credentials: Credentials,
}

impl HttpClient {
    /// Builds the client for the API rooted at `api_url` (e.g. `https://api.trello.com/1`).
    pub fn new(credentials: Credentials, api_url: &str) -> Result<Self> {
        let base_url = parse_api_url(api_url)?;
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| HifiError::Auth(format!("could not build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url,
            credentials,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> ApiResult<T> {
        debug!(%url, "GET");
        let resp = self
            .http
            .get(url)
            .query(&[
                ("key", self.credentials.app_key()),
                ("token", self.credentials.token()),
            ])
            .send()?;

        let status = resp.status();
        let body = resp.text()?;
        debug!(status = status.as_u16(), bytes = body.len(), "response");

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

impl TrelloApi for HttpClient {
    fn board(&self, board_id: &str) -> ApiResult<Board> {
        self.get_json(self.endpoint(&["boards", board_id]))
    }

    fn board_lists(&self, board_id: &str) -> ApiResult<Vec<List>> {
        self.get_json(self.endpoint(&["boards", board_id, "lists"]))
    }

    fn list_cards(&self, list_id: &str) -> ApiResult<Vec<Card>> {
        self.get_json(self.endpoint(&["lists", list_id, "cards"]))
    }
}

fn parse_api_url(api_url: &str) -> Result<Url> {
    let invalid = |reason: String| HifiError::InvalidApiUrl {
        url: api_url.to_string(),
        reason,
    };

    let url = Url::parse(api_url).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {:?}", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("not a base url".to_string()));
    }
    Ok(url)
}
