use daab::cli::commands::{CliArgs, Commands};
use daab::cli::handlers::{handle_detect, handle_init};
use daab::util::logging::{init_from_env, init_logging, json_from_env, parse_level, LoggingConfig};
use daab::VERSION;

use clap::Parser;
use tracing::{debug, Level};

fn main() {
    let args = CliArgs::parse();
    let log_level = init_logging_from_args(&args);

    debug!("daab v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Init(init_args) => handle_init(init_args, args.quiet, log_level),
        Commands::Detect(detect_args) => handle_detect(detect_args),
    };

    std::process::exit(exit_code);
}

/// Flags win over `DAAB_LOG_LEVEL`; returns the level actually installed
fn init_logging_from_args(args: &CliArgs) -> Level {
    let level = if let Some(level_str) = &args.log_level {
        parse_level(level_str)
    } else if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        return init_from_env();
    };

    init_logging(LoggingConfig {
        use_json: json_from_env(),
        ..LoggingConfig::with_level(level)
    });
    level
}
