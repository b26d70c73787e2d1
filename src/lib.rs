pub mod cli;
pub mod config;
pub mod error;
pub mod games;
pub mod lobby;
pub mod selector;
pub mod selfcheck;
pub mod types;
pub mod util;
