use clap::{CommandFactory, Parser};
use econvery::config::{LogFormat, LogLevel};
use econvery::logging;
use econvery_cli::commands::Commands;
use econvery_cli::context::{CliContext, load_config};
use econvery_cli::handlers::*;
use econvery_cli::output::output_error_json;
use is_terminal::IsTerminal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "econvery")]
#[command(about = "Rank academic papers by relevance to a research profile", long_about = None)]
#[command(version = econvery::VERSION)]
struct Cli {
    /// Configuration file (TOML, YAML or JSON), merged over the default files
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Output format (table, json) - use json for tool integration
    #[arg(long, short, default_value = "table", global = true)]
    output: String,

    /// Machine-readable mode: JSON output and no log noise
    #[arg(long, global = true)]
    machine: bool,

    /// Show debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> econvery::Result<()> {
    let cli = Cli::parse();

    // Priority: machine flag > env var > cli arg
    let output_format = if cli.machine {
        "json".to_string()
    } else if let Ok(env_output) = std::env::var("ECONVERY_OUTPUT") {
        env_output
    } else {
        cli.output.clone()
    };

    if !std::io::stdout().is_terminal() || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    match run(cli, &output_format) {
        Ok(()) => {
            logging::shutdown();
            Ok(())
        }
        Err(e) => {
            output_error_json(&e, &output_format);
            logging::shutdown();
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli, output_format: &str) -> econvery::Result<()> {
    let is_quiet = cli.quiet
        || std::env::var("ECONVERY_QUIET")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

    match &cli.command {
        Commands::Version => {
            println!("Econvery CLI v{}", econvery::VERSION);
            return Ok(());
        }
        Commands::Completions(args) => {
            clap_complete::generate(
                args.shell,
                &mut Cli::command(),
                "econvery",
                &mut std::io::stdout(),
            );
            return Ok(());
        }
        _ => {}
    }

    let (config, sources) = load_config(cli.config.as_deref())?;

    // Console logs go to stderr so stdout stays parseable. Machine mode
    // implies quiet; otherwise the floor is warnings unless asked for more.
    let mut logging_config = config.logging.clone();
    logging_config.level = if is_quiet || cli.machine {
        LogLevel::Error
    } else if cli.verbose {
        LogLevel::Debug
    } else {
        logging_config.level.max(LogLevel::Warn)
    };
    if output_format == "json" && logging_config.format == LogFormat::Pretty {
        logging_config.format = LogFormat::Compact;
    }
    logging::init(&logging_config)?;

    let ctx = CliContext::from_config(config, sources)?;

    match cli.command {
        Commands::Rank(args) => handle_rank_command(args, &ctx, output_format),
        Commands::Score(args) => handle_score_command(args, &ctx, output_format),
        Commands::Profile(args) => handle_profile_command(args, &ctx, output_format),
        Commands::Options(args) => handle_options_command(args, &ctx, output_format),
        Commands::Authors(args) => handle_authors_command(args, &ctx, output_format),
        Commands::Journals(args) => handle_journals_command(args, &ctx, output_format),
        Commands::Config(cmd) => handle_config_command(cmd, &ctx, output_format),
        Commands::Version | Commands::Completions(_) => Ok(()),
    }
}
