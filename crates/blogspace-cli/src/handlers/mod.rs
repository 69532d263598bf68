pub mod config;
pub mod logout;
pub mod posts;
pub mod tui;
