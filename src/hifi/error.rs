use crate::config::Setting;
use thiserror::Error;

/// Failure of a single Trello API call, before any pipeline context is attached.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Transport(#[source] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum HifiError {
    #[error("{0}")]
    Args(#[from] clap::Error),

    #[error(
        "TRELLO_APP_KEY, TRELLO_TOKEN, TRELLO_BOARD, and TRELLO_LIST are all required, or use the flags. Missing: {}",
        describe_missing(.0)
    )]
    MissingConfig(Vec<Setting>),

    #[error("Invalid API url {url:?}: {reason}")]
    InvalidApiUrl { url: String, reason: String },

    #[error("Authentication setup failed: {0}")]
    Auth(String),

    #[error("Error while retrieving board {id:?}: {source}")]
    Board { id: String, source: ApiError },

    #[error("Error while retrieving lists for board {board:?}: {source}")]
    Lists { board: String, source: ApiError },

    #[error("No list found named {name:?}, in board {board:?}")]
    ListNotFound { name: String, board: String },

    #[error("Error while retrieving cards for list {list:?}: {source}")]
    Cards { list: String, source: ApiError },

    #[error("Render error: {0}")]
    Render(#[from] minijinja::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// The request url carries `key` and `token` as query parameters, and reqwest
// prints the url in its Display output.
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.without_url())
    }
}

fn describe_missing(settings: &[Setting]) -> String {
    settings
        .iter()
        .map(|s| format!("{} ({})", s.env_var(), s.long_flag()))
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, HifiError>;
