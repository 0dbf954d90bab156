//! Configuration inspection handlers

use crate::commands::ConfigCommands;
use crate::context::CliContext;
use crate::output::*;
use colored::Colorize;
use econvery::config::ConfigLoader;
use econvery::prelude::*;
use serde_json::json;

pub fn handle_config_command(
    cmd: ConfigCommands,
    ctx: &CliContext,
    output_format: &str,
) -> econvery::Result<()> {
    match cmd {
        ConfigCommands::Show => {
            if output_format == "json" {
                print_json(&ctx.config)?;
            } else {
                let rendered = serde_json::to_string_pretty(&ctx.config)?;
                println!(
                    "{}",
                    "━━━ Effective configuration ━━━"
                        .color(CliColors::accent())
                        .bold()
                );
                println!("{}", rendered);
            }
        }

        ConfigCommands::Sources => {
            if output_format == "json" {
                print_json(&ctx.sources)?;
            } else if ctx.sources.is_empty() {
                println!(
                    "{}",
                    format_info("No configuration files loaded; using defaults and environment")
                );
            } else {
                for source in &ctx.sources {
                    println!("  • {}", source.display());
                }
            }
        }

        ConfigCommands::Validate(args) => {
            let config = validate_file(&args.file)?;
            if output_format == "json" {
                print_json(&json!({
                    "valid": true,
                    "file": args.file,
                    "config": config,
                }))?;
            } else {
                println!(
                    "{}",
                    format_success(&format!("{} is valid", args.file.display()))
                );
            }
        }
    }
    Ok(())
}

/// Load a single configuration file on top of the defaults and validate it.
pub fn validate_file(path: &std::path::Path) -> econvery::Result<EconveryConfig> {
    let mut loader = ConfigLoader::new();
    loader.load_file(path)?;
    Ok(loader.extract()?)
}
