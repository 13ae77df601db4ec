pub mod list;
pub mod rate;
pub mod setup;
pub mod ui;
