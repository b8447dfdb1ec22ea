//! The interactive session: executes the pager's decisions against the
//! real fetcher, clock, terminal and stdin.

use crate::config::Config;
use crate::errors::AppResult;
use crate::fetch::Fetcher;
use crate::models::FoodTruck;
use crate::pager::{Action, Outcome, Pager};
use crate::query;
use crate::ui::{messages, presenter};
use crate::utils::time::TimeContext;
use log::{debug, warn};
use std::io::BufRead;
use std::thread;

/// Run one full session: banner, page loop, closing message. The returned
/// outcome is what `main` maps to the process exit code.
pub fn run_session(cfg: &Config) -> AppResult<Outcome> {
    let ctx = TimeContext::local_now();
    let fetcher = Fetcher::from_config(cfg)?;
    let mut pager = Pager::new(cfg.page_limit, cfg.max_retries);

    debug!(
        "session start: day_order={} time={} url={}",
        ctx.day_order, ctx.time_literal, cfg.base_url
    );
    presenter::print_opening(&ctx.now, cfg.page_limit);

    loop {
        match pager.next_action() {
            Action::Fetch { page_index } => {
                let payload = query::build_payload(
                    &FoodTruck::FIELDS,
                    ctx.day_order,
                    &ctx.time_literal,
                    FoodTruck::SORT_FIELD,
                    cfg.page_limit,
                    page_index,
                );
                match fetcher.fetch_page(&payload) {
                    Ok(trucks) => {
                        debug!("page {page_index}: {} records", trucks.len());
                        if pager.first_load() {
                            presenter::print_header();
                        }
                        presenter::print_trucks(&trucks);
                        pager.fetch_succeeded(trucks.len());
                    }
                    Err(err) => {
                        warn!("page {page_index} fetch failed: {err}");
                        messages::error(&err);
                        pager.fetch_failed();
                    }
                }
            }
            Action::Backoff { attempt } => {
                messages::warning(format!(
                    "Retrying in {}s (attempt {attempt} of {})...",
                    cfg.retry_delay.as_secs(),
                    cfg.max_retries
                ));
                thread::sleep(cfg.retry_delay);
                pager.backoff_elapsed();
            }
            Action::Prompt => {
                presenter::print_prompt(cfg.page_limit)?;
                let mut line = String::new();
                let read = std::io::stdin().lock().read_line(&mut line)?;
                let input = (read > 0).then_some(line.as_str());
                pager.input_received(input);
            }
            Action::Finish(outcome) => {
                presenter::print_end(outcome);
                return Ok(outcome);
            }
        }
    }
}
