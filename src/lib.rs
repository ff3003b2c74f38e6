//! daab - deployment configuration bootstrapper
//!
//! Inspects a project directory for well-known manifest files, identifies its
//! language and framework, asks a few deployment questions, and writes the
//! answers as YAML documents under `.init/`.
//!
//! # Example Usage
//!
//! ```no_run
//! use daab::{DefaultsPrompter, Initializer, RealFileSystem, YamlConfigStore};
//!
//! let fs = RealFileSystem::new();
//! let store = YamlConfigStore::default();
//! let mut prompter = DefaultsPrompter::new();
//!
//! let report = Initializer::new(&fs, &store, &mut prompter, "./my-service").run()?;
//! for path in &report.written {
//!     println!("wrote {}", path.display());
//! }
//! # Ok::<(), daab::InitError>(())
//! ```
//!
//! # Project Structure
//!
//! - [`detection`]: Marker-file rules and the [`Detector`]
//! - [`model`]: The persisted documents
//! - [`init`]: The interactive [`Initializer`]
//! - [`prompt`]: Question-and-answer backends
//! - [`store`]: YAML persistence
//! - [`fs`]: Filesystem abstraction with an in-memory mock

pub mod cli;
pub mod config;
pub mod detection;
pub mod fs;
pub mod init;
pub mod model;
pub mod prompt;
pub mod stack;
pub mod store;
pub mod util;

pub use config::{ConfigError, DaabConfig};
pub use detection::{DetectError, DetectionResult, Detector};
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use init::{InitError, InitReport, Initializer};
pub use model::{
    BaseConfig, BaseConfigApp, CloudProvider, Document, MicroserviceConfig,
    MicroserviceRootConfig, MonolithConfig, ProjectType, ValidationError,
};
pub use prompt::{
    DefaultsPrompter, LinePrompter, PromptError, PromptMode, Prompter, ScriptedPrompter,
    TerminalPrompter,
};
pub use stack::{FrameworkId, LanguageId};
pub use store::{ConfigStore, StoreError, YamlConfigStore};
pub use util::{init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
