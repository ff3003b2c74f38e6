crate::define_id_enum! {
    /// Primary language of a deployable unit
    LanguageId {
        Go => "go" : "Go" | "golang",
        NodeJs => "nodejs" : "Node.js" | "node" | "javascript",
        Python => "python" : "Python",
        Java => "java" : "Java",
        Ruby => "ruby" : "Ruby",
        Php => "php" : "PHP",
        DotNet => "dotnet" : ".NET" | "csharp",
        Rust => "rust" : "Rust",
    }
}

/// Port offered as the prompt default when the language has no convention
pub const FALLBACK_PORT: u16 = 8080;

impl LanguageId {
    /// Conventional listening port for services written in this language
    pub fn default_port(&self) -> u16 {
        match self {
            Self::NodeJs | Self::Ruby => 3000,
            Self::Python => 8000,
            Self::DotNet => 5000,
            Self::Go | Self::Java | Self::Php | Self::Rust => 8080,
            Self::Custom(_) => FALLBACK_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_id_serialization() {
        assert_eq!(serde_json::to_string(&LanguageId::Go).unwrap(), "\"go\"");
        assert_eq!(
            serde_json::to_string(&LanguageId::NodeJs).unwrap(),
            "\"nodejs\""
        );
        assert_eq!(
            serde_json::to_string(&LanguageId::DotNet).unwrap(),
            "\"dotnet\""
        );
    }

    #[test]
    fn test_language_id_deserialization() {
        assert_eq!(
            serde_json::from_str::<LanguageId>("\"rust\"").unwrap(),
            LanguageId::Rust
        );
        assert_eq!(
            serde_json::from_str::<LanguageId>("\"php\"").unwrap(),
            LanguageId::Php
        );
    }

    #[test]
    fn test_custom_language_round_trip() {
        let deserialized: LanguageId = serde_json::from_str("\"elixir\"").unwrap();
        assert_eq!(deserialized, LanguageId::Custom("elixir".to_string()));
        assert_eq!(serde_json::to_string(&deserialized).unwrap(), "\"elixir\"");
    }

    #[test]
    fn test_from_token_accepts_aliases() {
        assert_eq!(LanguageId::from_token("Node.js"), Some(LanguageId::NodeJs));
        assert_eq!(LanguageId::from_token("golang"), Some(LanguageId::Go));
        assert_eq!(LanguageId::from_token("GO"), Some(LanguageId::Go));
        assert_eq!(LanguageId::from_token("cobol"), None);
    }

    #[test]
    fn test_display_uses_token() {
        assert_eq!(LanguageId::DotNet.to_string(), "dotnet");
        assert_eq!(LanguageId::DotNet.name(), ".NET");
    }

    #[test]
    fn test_default_ports() {
        assert_eq!(LanguageId::NodeJs.default_port(), 3000);
        assert_eq!(LanguageId::Go.default_port(), 8080);
        assert_eq!(LanguageId::Python.default_port(), 8000);
        assert_eq!(LanguageId::Java.default_port(), 8080);
        assert_eq!(LanguageId::Ruby.default_port(), 3000);
        assert_eq!(LanguageId::Php.default_port(), 8080);
        assert_eq!(LanguageId::DotNet.default_port(), 5000);
        assert_eq!(LanguageId::Rust.default_port(), 8080);
        assert_eq!(
            LanguageId::Custom("zig".to_string()).default_port(),
            FALLBACK_PORT
        );
    }
}
