//! Command handlers for the Econvery CLI

pub mod config;
pub mod rank;
pub mod taxonomy;

pub use config::handle_config_command;
pub use rank::{handle_profile_command, handle_rank_command, handle_score_command};
pub use taxonomy::{handle_authors_command, handle_journals_command, handle_options_command};
