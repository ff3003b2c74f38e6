use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Detects a project's stack and writes daab deployment configuration
#[derive(Parser, Debug)]
#[command(
    name = "daab",
    about = "Detects a project's stack and writes daab deployment configuration",
    version,
    author,
    long_about = "daab inspects a project directory for well-known manifest files to \
                  identify its language and framework, asks a few questions about the \
                  deployment target, and writes the answers as YAML under .init/. \
                  Monoliths get one document; microservice repositories get one document \
                  per service plus a root document listing them."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Initialize daab configuration for a project",
        long_about = "Asks for the project topology and deployment settings, detects the \
                      language and framework of the project (or of each service), and writes \
                      .init/daab.yaml documents. Rerunning overwrites previous output.\n\n\
                      Examples:\n  \
                      daab init\n  \
                      daab init --project-path ./services\n  \
                      daab init --non-interactive"
    )]
    Init(InitArgs),

    #[command(
        about = "Detect the language and framework of a directory",
        long_about = "Runs detection only and prints the result without writing anything.\n\n\
                      Examples:\n  \
                      daab detect\n  \
                      daab detect /path/to/service\n  \
                      daab detect --format json"
    )]
    Detect(DetectArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    #[arg(
        short = 'p',
        long,
        value_name = "PATH",
        default_value = ".",
        help = "Path to the project root"
    )]
    pub project_path: PathBuf,

    #[arg(long, help = "Accept the default answer for every question")]
    pub non_interactive: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct DetectArgs {
    #[arg(
        value_name = "PATH",
        help = "Path to inspect (defaults to current directory)"
    )]
    pub path: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}
