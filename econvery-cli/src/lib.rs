pub mod args;
pub mod commands;
pub mod context;
pub mod handlers;
pub mod output;
pub mod utils;

pub use context::{CliContext, load_config};
pub use output::{
    CliColors, error_response, format_error, format_info, format_level, format_score,
    format_success, format_warning, output_error_json, print_json, print_match_result,
    print_ranked_list, print_summary,
};
pub use utils::{parse_papers, parse_profile, read_papers, read_profile};
