use crate::error::{HifiError, Result};
use std::fmt;

pub const DEFAULT_API_URL: &str = "https://api.trello.com/1";
pub const API_URL_ENV: &str = "TRELLO_API_URL";

/// The required settings, each reachable through a flag and an environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    AppKey,
    Token,
    Board,
    List,
}

impl Setting {
    pub const ALL: [Setting; 4] = [
        Setting::AppKey,
        Setting::Token,
        Setting::Board,
        Setting::List,
    ];

    pub fn env_var(self) -> &'static str {
        match self {
            Setting::AppKey => "TRELLO_APP_KEY",
            Setting::Token => "TRELLO_TOKEN",
            Setting::Board => "TRELLO_BOARD",
            Setting::List => "TRELLO_LIST",
        }
    }

    pub fn long_flag(self) -> &'static str {
        match self {
            Setting::AppKey => "--app-key",
            Setting::Token => "--token",
            Setting::Board => "--board",
            Setting::List => "--list",
        }
    }
}

/// Raw flag values as they came off the command line, before the environment is consulted.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub app_key: Option<String>,
    pub token: Option<String>,
    pub board: Option<String>,
    pub list: Option<String>,
    pub api_url: Option<String>,
}

impl Settings {
    fn flag(&self, setting: Setting) -> Option<String> {
        match setting {
            Setting::AppKey => self.app_key.clone(),
            Setting::Token => self.token.clone(),
            Setting::Board => self.board.clone(),
            Setting::List => self.list.clone(),
        }
    }
}

/// Merges one option: a given flag always wins, even when empty.
pub fn resolve(flag: Option<String>, env: Option<String>) -> String {
    flag.or(env).unwrap_or_default()
}

/// Fully resolved configuration for a single run.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub app_key: String,
    pub token: String,
    pub board: String,
    pub list: String,
    pub api_url: String,
}

impl Config {
    /// Resolves every setting from `settings`, falling back to `env` per variable name.
    ///
    /// Fails with [`HifiError::MissingConfig`] naming every required value left empty.
    pub fn resolve<F>(settings: &Settings, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |setting: Setting| resolve(settings.flag(setting), env(setting.env_var()));

        let missing: Vec<Setting> = Setting::ALL
            .into_iter()
            .filter(|s| value(*s).is_empty())
            .collect();
        if !missing.is_empty() {
            return Err(HifiError::MissingConfig(missing));
        }

        let api_url = resolve(settings.api_url.clone(), env(API_URL_ENV));
        let api_url = if api_url.is_empty() {
            DEFAULT_API_URL.to_string()
        } else {
            api_url
        };

        Ok(Self {
            app_key: value(Setting::AppKey),
            token: value(Setting::Token),
            board: value(Setting::Board),
            list: value(Setting::List),
            api_url,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("app_key", &"<redacted>")
            .field("token", &"<redacted>")
            .field("board", &self.board)
            .field("list", &self.list)
            .field("api_url", &self.api_url)
            .finish()
    }
}
