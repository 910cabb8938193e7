//! # CLI Layer
//!
//! The only place that knows about the terminal:
//! - parses arguments (clap) and installs logging
//! - resolves configuration against the real process environment
//! - prints usage on configuration errors
//! - writes the rendered newsletter to stdout
//!
//! Everything else, argument errors included, is returned as a [`HifiError`] to
//! `main`, which prints it and exits with status 1.

use super::setup::{init_tracing, usage, Cli};
use clap::error::ErrorKind;
use clap::Parser;
use hifi::client::{Credentials, HttpClient};
use hifi::config::Config;
use hifi::error::{HifiError, Result};
use hifi::lookup::fetch_digest;
use hifi::render::{render_newsletter, today};
use std::io::Write;
use tracing::debug;

pub fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                e.print()?;
                return Ok(());
            }
            _ => return Err(e.into()),
        },
    };

    init_tracing(cli.verbose);

    let config = Config::resolve(&cli.settings(), |name| std::env::var(name).ok())
        .inspect_err(|e| {
            if matches!(e, HifiError::MissingConfig(_)) {
                eprintln!("{}", usage());
            }
        })?;
    debug!(?config, "resolved configuration");

    let credentials = Credentials::new(config.app_key.as_str(), config.token.as_str())?;
    let client = HttpClient::new(credentials, &config.api_url)?;

    let digest = fetch_digest(&client, &config.board, &config.list)?;
    let output = render_newsletter(&digest.list, &digest.cards, &today())?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
