//! The pagination loop's brain: a pure state machine that decides, one
//! step at a time, whether to fetch, wait, ask the user, or stop.
//!
//! The machine does no I/O of its own. [`Pager::next_action`] says what the
//! driver should do; the driver reports what happened back as an event
//! ([`Pager::fetch_succeeded`], [`Pager::fetch_failed`],
//! [`Pager::backoff_elapsed`], [`Pager::input_received`]). Every transition
//! is therefore testable without a network or a terminal.

/// Key the user types at the prompt (case-insensitively) to end the
/// session.
pub const EXIT_KEY: &str = "e";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Nothing fetched yet; goes straight to a fetch, with no prompt.
    FirstLoad,
    /// A page request should be issued for the current `page_index`.
    Fetching,
    /// The last request failed; wait out the fixed delay, then re-fetch
    /// the same page.
    Retrying,
    /// A full page was rendered; the user decides whether to continue.
    AwaitingInput,
    /// Terminal.
    Done(Outcome),
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Ran out of data: an empty or short page came back.
    Completed,
    /// Consecutive request failures reached the retry cap.
    RetriesExhausted,
    /// The user typed the exit key, or closed stdin, at the prompt.
    Cancelled,
}

impl Outcome {
    /// Process exit code reported by main.
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Completed => 0,
            Outcome::RetriesExhausted => 1,
            Outcome::Cancelled => 2,
        }
    }
}

/// The next thing the driver should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Issue the page request for `page_index` and report the result.
    Fetch { page_index: u64 },
    /// Sleep the fixed retry delay, then call [`Pager::backoff_elapsed`].
    /// `attempt` is the attempt number the re-fetch will be.
    Backoff { attempt: u32 },
    /// Read one line of input, then call [`Pager::input_received`].
    Prompt,
    /// Render the closing message and stop.
    Finish(Outcome),
}

#[derive(Debug)]
pub struct Pager {
    page_limit: usize,
    max_retries: u32,
    page_index: u64,
    retries: u32,
    /// True until the first successful fetch; the column header prints
    /// exactly once, on that fetch.
    first_load: bool,
    state: State,
}

impl Pager {
    pub fn new(page_limit: usize, max_retries: u32) -> Self {
        Self {
            page_limit,
            max_retries,
            page_index: 0,
            retries: 0,
            first_load: true,
            state: State::FirstLoad,
        }
    }

    pub fn next_action(&self) -> Action {
        match self.state {
            State::FirstLoad | State::Fetching => Action::Fetch {
                page_index: self.page_index,
            },
            State::Retrying => Action::Backoff {
                attempt: self.retries + 1,
            },
            State::AwaitingInput => Action::Prompt,
            State::Done(outcome) => Action::Finish(outcome),
        }
    }

    /// Current page, zero-based. Advances only after a successful,
    /// non-empty fetch.
    pub fn page_index(&self) -> u64 {
        self.page_index
    }

    /// Consecutive failures so far; any success clears the count.
    pub fn retries(&self) -> u32 {
        self.retries
    }

    /// True until the first fetch succeeds, however many retries that
    /// takes.
    pub fn first_load(&self) -> bool {
        self.first_load
    }

    /// A page came back with `record_count` records (possibly zero).
    pub fn fetch_succeeded(&mut self, record_count: usize) {
        if !matches!(self.state, State::FirstLoad | State::Fetching) {
            return;
        }
        self.retries = 0;
        self.first_load = false;
        if record_count == 0 {
            self.state = State::Done(Outcome::Completed);
        } else {
            self.page_index += 1;
            self.state = if record_count < self.page_limit {
                // a short page is the dataset's last
                State::Done(Outcome::Completed)
            } else {
                State::AwaitingInput
            };
        }
    }

    /// The page request failed, whatever the classification.
    pub fn fetch_failed(&mut self) {
        if !matches!(self.state, State::FirstLoad | State::Fetching) {
            return;
        }
        self.retries += 1;
        self.state = if self.retries >= self.max_retries {
            State::Done(Outcome::RetriesExhausted)
        } else {
            State::Retrying
        };
    }

    /// The fixed delay has passed; re-issue the same page request.
    pub fn backoff_elapsed(&mut self) {
        if self.state == State::Retrying {
            self.state = State::Fetching;
        }
    }

    /// One line of user input, or `None` when stdin closed. Only the line
    /// terminator is stripped before the comparison, so `" e"` continues.
    pub fn input_received(&mut self, line: Option<&str>) {
        if self.state != State::AwaitingInput {
            return;
        }
        let wants_exit = match line {
            None => true,
            Some(line) => line
                .trim_end_matches(['\r', '\n'])
                .eq_ignore_ascii_case(EXIT_KEY),
        };
        self.state = if wants_exit {
            State::Done(Outcome::Cancelled)
        } else {
            State::Fetching
        };
    }
}
