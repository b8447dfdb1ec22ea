use clap::Parser;

const AFTER_HELP: &str = "\
Interactive keys (at the prompt after each page):
  <any input>  load the next page of results
  e            exit, case-insensitive

Environment:
  APP_TOKEN              Socrata app token, sent as X-Auth-Token (optional)
  TRUCKNOW_DATASET_URL   override the dataset endpoint
  TRUCKNOW_TIMEOUT_SECS  request timeout in seconds, clamped to 5-10
  RUST_LOG               diagnostic log filter (env_logger syntax)";

/// Command-line interface definition for trucknow.
/// The program takes no flags or subcommands; it is driven entirely by
/// the interactive prompt. clap still supplies --help/--version and
/// rejects stray arguments.
#[derive(Parser)]
#[command(
    name = "trucknow",
    version = env!("CARGO_PKG_VERSION"),
    about = "List San Francisco food trucks open right now, page by page",
    long_about = None,
    after_help = AFTER_HELP
)]
pub struct Cli {}
