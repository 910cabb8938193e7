//! # Hifi Architecture
//!
//! Hifi turns one Trello list into the weekly hacks newsletter. The work is a
//! straight line: resolve configuration, look up board → list → cards, render a
//! fixed template, print it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - clap parsing, logging setup, usage text                  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Lookup Pipeline (lookup.rs)                                │
//! │  - find_board → find_list → find_cards                      │
//! │  - Wraps client failures with board id / board / list name  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client Layer (client/)                                     │
//! │  - TrelloApi trait                                          │
//! │  - HttpClient (production), InMemoryTrello (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rendering ([`render`]) and configuration ([`config`]) sit beside the pipeline:
//! both are pure functions of their inputs, so they are tested without a network
//! or a real process environment.
//!
//! ## No I/O Assumptions Below the CLI
//!
//! Library code takes Rust values and returns `Result<T>`. It never prints, never
//! exits, and never reads the environment itself: `Config::resolve` is handed an
//! env lookup closure.
//!
//! ## Module Overview
//!
//! - [`config`]: settings, flag-over-env resolution, validation
//! - [`client`]: the `TrelloApi` seam and its implementations
//! - [`lookup`]: the board → list → cards pipeline
//! - [`render`]: the newsletter template
//! - [`model`]: `Board`, `List`, `Card`
//! - [`error`]: error types

pub mod client;
pub mod config;
pub mod error;
pub mod lookup;
pub mod model;
pub mod render;
