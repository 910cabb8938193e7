//! # Trello Client Layer
//!
//! The lookup pipeline talks to Trello exclusively through the [`TrelloApi`] trait.
//!
//! ## Implementations
//!
//! - [`http::HttpClient`]: the real REST client (blocking `reqwest`)
//!   - `GET /boards/{id}`, `GET /boards/{id}/lists`, `GET /lists/{id}/cards`
//!   - authenticates every request with `key` and `token` query parameters
//!
//! - [`memory::InMemoryTrello`]: canned boards, lists and cards for testing
//!   - records every call, can be told to fail a given call
//!
//! Every call is a single attempt: no retries, no pagination.

use crate::error::{ApiError, HifiError, Result};
use crate::model::{Board, Card, List};
use std::fmt;

pub mod http;
pub mod memory;

pub use http::HttpClient;
pub use memory::InMemoryTrello;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// The three read-only Trello lookups the pipeline needs.
pub trait TrelloApi {
    /// Fetch a board snapshot by id
    fn board(&self, board_id: &str) -> ApiResult<Board>;

    /// Fetch all lists of a board, in board order
    fn board_lists(&self, board_id: &str) -> ApiResult<Vec<List>>;

    /// Fetch all cards of a list, in list order
    fn list_cards(&self, list_id: &str) -> ApiResult<Vec<Card>>;
}

/// App key and user token, validated for use as query parameters.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    app_key: String,
    token: String,
}

impl Credentials {
    pub fn new(app_key: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let app_key = app_key.into();
        let token = token.into();
        validate_credential("app key", &app_key)?;
        validate_credential("token", &token)?;
        Ok(Self { app_key, token })
    }

    pub fn app_key(&self) -> &str {
        &self.app_key
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("app_key", &"<redacted>")
            .field("token", &"<redacted>")
            .finish()
    }
}

fn validate_credential(what: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(HifiError::Auth(format!("{what} is empty")));
    }
    if !value.chars().all(|c| c.is_ascii_graphic()) {
        return Err(HifiError::Auth(format!(
            "{what} contains whitespace or non-ASCII characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_hex_credentials() {
        let creds = Credentials::new("0123abcd", "deadbeef0123").unwrap();
        assert_eq!(creds.app_key(), "0123abcd");
        assert_eq!(creds.token(), "deadbeef0123");
    }

    #[test]
    fn rejects_empty_token() {
        let err = Credentials::new("key", "").unwrap_err();
        assert!(matches!(err, HifiError::Auth(_)));
        assert!(err.to_string().contains("token is empty"));
    }

    #[test]
    fn rejects_whitespace_in_app_key() {
        let err = Credentials::new("my key", "token").unwrap_err();
        assert!(err.to_string().contains("app key"));
    }

    #[test]
    fn rejects_non_ascii() {
        assert!(Credentials::new("key", "tökén").is_err());
        assert!(Credentials::new("key\n", "token").is_err());
    }

    #[test]
    fn debug_does_not_leak() {
        let creds = Credentials::new("secretkey", "secrettoken").unwrap();
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("secretkey"));
        assert!(!debug.contains("secrettoken"));
    }
}
