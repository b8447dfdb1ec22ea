//! trucknow library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod fetch;
pub mod models;
pub mod pager;
pub mod query;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::Cli;
use config::Config;
use errors::AppResult;
use pager::Outcome;

/// Entry point used by main.rs
pub fn run() -> AppResult<Outcome> {
    // --help/--version exit here, before any banner output
    let _cli = Cli::parse();

    // diagnostics only, driven by RUST_LOG; user-facing output goes
    // through the presenter
    env_logger::Builder::from_default_env().init();

    let cfg = Config::from_env();
    core::run_session(&cfg)
}
