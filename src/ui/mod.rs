pub mod messages;
pub mod presenter;
