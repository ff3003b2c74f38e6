//! Ordered signature table for language detection
//!
//! Rules are evaluated top to bottom and the first rule with a marker present
//! wins. Some ecosystems share marker files, so the order is part of the
//! contract: a directory holding both `go.mod` and `package.json` is a Go
//! project, one holding `package.json` and `Cargo.toml` is a Node.js project.

use crate::stack::{FrameworkId, LanguageId};

/// How a rule recognises its manifest
#[derive(Debug, Clone, Copy)]
pub enum Markers {
    /// Exact filenames, tried in order
    Files(&'static [&'static str]),
    /// Filename patterns such as `*.csproj`; first match in name order wins
    Globs(&'static [&'static str]),
}

/// How a framework is read off the matched manifest
#[derive(Debug, Clone, Copy)]
pub enum FrameworkSignatures {
    /// Nothing to sniff
    None,
    /// Framework follows from which marker matched; contents are not read
    ByMarker(&'static [(&'static str, FrameworkId)]),
    /// Case-insensitive substring match on the manifest text
    Text(&'static [(&'static str, FrameworkId)]),
    /// Key present in the `dependencies` object of a JSON manifest
    JsonDependencies(&'static [(&'static str, FrameworkId)]),
    /// Key present in the `[dependencies]` table of a TOML manifest
    TomlDependencies(&'static [(&'static str, FrameworkId)]),
}

impl FrameworkSignatures {
    pub fn needs_content(&self) -> bool {
        !matches!(self, Self::None | Self::ByMarker(_))
    }
}

/// One row of the detection table
#[derive(Debug, Clone)]
pub struct SignatureRule {
    pub language: LanguageId,
    pub markers: Markers,
    pub frameworks: FrameworkSignatures,
}

pub static SIGNATURE_RULES: &[SignatureRule] = &[
    SignatureRule {
        language: LanguageId::Go,
        markers: Markers::Files(&["go.mod"]),
        frameworks: FrameworkSignatures::Text(&[
            ("github.com/gin-gonic/gin", FrameworkId::Gin),
            ("github.com/gofiber/fiber", FrameworkId::Fiber),
            ("github.com/labstack/echo", FrameworkId::Echo),
            ("github.com/gorilla/mux", FrameworkId::Gorilla),
        ]),
    },
    SignatureRule {
        language: LanguageId::NodeJs,
        markers: Markers::Files(&["package.json"]),
        frameworks: FrameworkSignatures::JsonDependencies(&[
            ("express", FrameworkId::Express),
            ("next", FrameworkId::NextJs),
            ("react", FrameworkId::React),
            ("vue", FrameworkId::Vue),
            ("@nestjs/core", FrameworkId::NestJs),
            ("nestjs", FrameworkId::NestJs),
        ]),
    },
    SignatureRule {
        language: LanguageId::Python,
        markers: Markers::Files(&["requirements.txt", "Pipfile", "pyproject.toml", "setup.py"]),
        frameworks: FrameworkSignatures::Text(&[
            ("flask", FrameworkId::Flask),
            ("django", FrameworkId::Django),
            ("fastapi", FrameworkId::FastApi),
        ]),
    },
    SignatureRule {
        language: LanguageId::Java,
        markers: Markers::Files(&["pom.xml", "build.gradle", "build.gradle.kts"]),
        frameworks: FrameworkSignatures::ByMarker(&[
            ("pom.xml", FrameworkId::Maven),
            ("build.gradle", FrameworkId::Gradle),
            ("build.gradle.kts", FrameworkId::Gradle),
        ]),
    },
    SignatureRule {
        language: LanguageId::Ruby,
        markers: Markers::Files(&["Gemfile"]),
        frameworks: FrameworkSignatures::Text(&[
            ("rails", FrameworkId::Rails),
            ("sinatra", FrameworkId::Sinatra),
        ]),
    },
    SignatureRule {
        language: LanguageId::Php,
        markers: Markers::Files(&["composer.json"]),
        frameworks: FrameworkSignatures::Text(&[
            ("laravel", FrameworkId::Laravel),
            ("symfony", FrameworkId::Symfony),
        ]),
    },
    SignatureRule {
        language: LanguageId::DotNet,
        markers: Markers::Globs(&["*.csproj", "*.fsproj", "*.vbproj"]),
        frameworks: FrameworkSignatures::Text(&[("Microsoft.NET.Sdk.Web", FrameworkId::AspNet)]),
    },
    SignatureRule {
        language: LanguageId::Rust,
        markers: Markers::Files(&["Cargo.toml"]),
        frameworks: FrameworkSignatures::TomlDependencies(&[
            ("actix-web", FrameworkId::Actix),
            ("axum", FrameworkId::Axum),
            ("rocket", FrameworkId::Rocket),
        ]),
    },
];
