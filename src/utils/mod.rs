pub mod colors;
pub mod table;
pub mod time;

pub use time::TimeContext;
