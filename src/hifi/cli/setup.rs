use clap::{CommandFactory, Parser};
use hifi::config::Settings;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "hifi", bin_name = "hifi", version)]
#[command(
    about = "Render a Trello list into the weekly hacks newsletter",
    long_about = "Render a Trello list into the weekly hacks newsletter.\n\n\
        Every option can also be given through its environment variable \
        (TRELLO_APP_KEY, TRELLO_TOKEN, TRELLO_BOARD, TRELLO_LIST, TRELLO_API_URL). \
        Flags win over the environment."
)]
pub struct Cli {
    /// Trello app key [env: TRELLO_APP_KEY]
    #[arg(short = 'k', long = "app-key", help_heading = "Trello")]
    pub app_key: Option<String>,

    /// Trello token [env: TRELLO_TOKEN]
    #[arg(short = 't', long, help_heading = "Trello")]
    pub token: Option<String>,

    /// Trello board id with list [env: TRELLO_BOARD]
    #[arg(short = 'b', long, help_heading = "Trello")]
    pub board: Option<String>,

    /// Trello list to export [env: TRELLO_LIST]
    #[arg(short = 'l', long, help_heading = "Trello")]
    pub list: Option<String>,

    /// Trello API base url [env: TRELLO_API_URL] [default: https://api.trello.com/1]
    #[arg(long = "api-url", value_name = "URL", help_heading = "Trello")]
    pub api_url: Option<String>,

    /// Log progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            app_key: self.app_key.clone(),
            token: self.token.clone(),
            board: self.board.clone(),
            list: self.list.clone(),
            api_url: self.api_url.clone(),
        }
    }
}

/// Full help text, as shown by `--help`.
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins; otherwise `--verbose` selects debug output for this crate and
/// everything else stays at warn.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "warn,hifi=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
