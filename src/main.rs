//! trucknow main entrypoint.

use trucknow::run;

fn main() {
    println!();
    match run() {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
