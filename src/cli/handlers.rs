//! Subcommand handlers; each returns the process exit code

use super::commands::{DetectArgs, InitArgs};
use super::output::{OutputFormat, OutputFormatter};
use crate::config::DaabConfig;
use crate::detection::Detector;
use crate::fs::RealFileSystem;
use crate::init::Initializer;
use crate::prompt::PromptMode;
use crate::store::YamlConfigStore;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::{debug, error, Level};

pub fn handle_init(args: &InitArgs, quiet: bool, log_level: Level) -> i32 {
    let settings = DaabConfig::default().with_log_level(log_level);
    debug!("{}", settings);

    let fs = RealFileSystem::new();
    let store = YamlConfigStore::new(settings.output_dir.clone());
    let mode = PromptMode::select(args.non_interactive, io::stdin().is_terminal());
    debug!(?mode, "Prompt mode selected");
    let mut prompter = mode.prompter();

    let result = Initializer::new(&fs, &store, prompter.as_mut(), args.project_path.clone())
        .with_settings(settings)
        .run();

    match result {
        Ok(report) => {
            if !quiet {
                println!(
                    "\n{}",
                    OutputFormatter::new(OutputFormat::Human).format_report(&report)
                );
            }
            0
        }
        Err(e) => {
            error!("Initialization failed: {}", e);
            eprintln!("{}", e.help_message());
            1
        }
    }
}

pub fn handle_detect(args: &DetectArgs) -> i32 {
    let path = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    let fs = RealFileSystem::new();

    let result = match Detector::new(&fs, path.clone()).detect() {
        Ok(Some(result)) => result,
        Ok(None) => {
            eprintln!("No supported project detected in {}", path.display());
            return 1;
        }
        Err(e) => {
            error!("Detection failed: {}", e);
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let formatter = OutputFormatter::new(args.format.into());
    match formatter.format(&path, &result) {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}
