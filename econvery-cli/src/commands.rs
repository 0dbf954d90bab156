//! Command enum definitions
//!
//! This module contains all CLI command enums that define the command structure.

use crate::args::*;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Display version information
    Version,

    /// Score and rank papers against a profile
    #[command(
        alias = "discover",
        long_about = r#"
Score every paper against a research profile and print them best first.

Papers are JSON records as returned by the papers API: title, abstract (or
abstract_inverted_index), concepts with confidence scores, journal, citation
count and authors. Missing fields are treated as empty.

Scores run from 1 to 10:
  • 8+  Essential   - core reading for this profile
  • 5+  Moderate    - worth a look
  • 3+  Tangential  - touches the profile
  • <3  Weak        - unlikely to be relevant

EXAMPLES:
  econvery rank --profile me.json papers.json
  econvery rank -p me.json papers.json --min-score 5 --limit 20 --summary
  cat papers.json | econvery rank -p me.json - --output json
"#
    )]
    Rank(RankArgs),

    /// Score a single paper and explain the result
    Score(ScoreArgs),

    /// Validate a profile file and render it as text
    Profile(ProfileArgs),

    /// List the profile options offered by the taxonomy
    Options(OptionsArgs),

    /// List suggested seed authors for a field
    Authors(AuthorsArgs),

    /// List journals with known quality tiers
    Journals(JournalsArgs),

    /// Configuration inspection commands
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// List the configuration files that were loaded
    Sources,

    /// Check a configuration file without using it
    Validate(ValidateConfigArgs),
}
