//! Console rendering for a session: opening banner, column header, record
//! rows, the continuation prompt and the closing messages. All failures
//! are classified before anything reaches here; this module only formats
//! and prints.

use crate::models::FoodTruck;
use crate::pager::Outcome;
use crate::utils::colors::{self, BOLD, RESET};
use crate::utils::table::{self, Column};
use chrono::{DateTime, Local};
use std::io::{self, Write};

const BANNER_RULE: &str = "#####################################################################";

/// Banner timestamp layout, e.g. `09/08/2018 Sat 05:00 PM`.
const BANNER_TIME_FORMAT: &str = "%m/%d/%Y %a %I:%M %p";

/// Values wider than a column push the row out rather than truncate.
const COLUMNS: [Column; 4] = [
    Column::new("NAME", 40),
    Column::new("ADDRESS", 26),
    Column::new("OPEN", 6),
    Column::new("CLOSE", 6),
];

pub fn print_opening(now: &DateTime<Local>, page_limit: usize) {
    println!("{}", format_opening(now, page_limit));
    println!();
    println!();
}

fn format_opening(now: &DateTime<Local>, page_limit: usize) -> String {
    let time_string = now.format(BANNER_TIME_FORMAT);
    format!(
        "{BANNER_RULE}\n\
         *** SF food trucks open currently at {time_string} ***\n\
         *** You will view {page_limit} results at a time, ordered by the food truck's name alphabetically. ***\n\
         *** You can type any key to view {page_limit} results at a time. Or type letter 'e' case-insensitive to exit. ***"
    )
}

/// The column header, printed once per session, on the first successful
/// fetch.
pub fn print_header() {
    println!("{BOLD}{}{RESET}", table::header_line(&COLUMNS));
}

pub fn print_trucks(trucks: &[FoodTruck]) {
    for truck in trucks {
        println!("{}", format_row(truck));
    }
}

fn format_row(truck: &FoodTruck) -> String {
    let name = table::pad(&truck.applicant, COLUMNS[0].width);
    let address = table::pad(&truck.location, COLUMNS[1].width);
    let open = hours_cell(truck.start24.as_deref(), COLUMNS[2].width);
    let close = hours_cell(truck.end24.as_deref(), COLUMNS[3].width);
    format!("{name} {address} {open} {close}")
        .trim_end()
        .to_string()
}

/// Pad first, then dim: the placeholder's escape codes must not count
/// toward the column width.
fn hours_cell(value: Option<&str>, width: usize) -> String {
    colors::dim_placeholder(&table::pad(value.unwrap_or(colors::MISSING_TIME), width))
}

/// Ask whether to continue; the answer is read by the caller.
pub fn print_prompt(page_limit: usize) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write!(
        stdout,
        "\nGet the next {page_limit} results? Type letter 'e' to exit, or any other key to continue.\n"
    )?;
    stdout.flush()
}

/// Closing message for each way a session can end.
pub fn print_end(outcome: Outcome) {
    match outcome {
        Outcome::Completed => println!("#### END ####\n"),
        Outcome::RetriesExhausted => {
            println!("\nMax retries exceeded. Exiting the program... Bye!\n")
        }
        Outcome::Cancelled => println!("\nYou ended this program. Thanks for visiting! Bye!\n"),
    }
}
