pub mod add;
pub mod config;
pub mod day;
pub mod delete;
pub mod edit;
pub mod list;
pub mod month;
pub mod transfer;
pub mod year;
