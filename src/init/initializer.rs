use super::{questions, InitError, InitReport, SkippedService, DEFAULT_PROJECT_NAME};
use crate::config::DaabConfig;
use crate::detection::Detector;
use crate::fs::{DirEntry, FileSystem};
use crate::model::{
    port_from, CloudProvider, Document, MicroserviceConfig, MicroserviceRootConfig,
    MonolithConfig, ProjectType,
};
use crate::prompt::Prompter;
use crate::store::ConfigStore;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Answers shared by every document of a run
struct ProjectAnswers {
    name: String,
    cloud_provider: CloudProvider,
    environment: String,
    region: String,
    namespace: String,
}

pub struct Initializer<'a> {
    fs: &'a dyn FileSystem,
    store: &'a dyn ConfigStore,
    prompter: &'a mut dyn Prompter,
    settings: DaabConfig,
    project_path: PathBuf,
    now: DateTime<Utc>,
}

impl<'a> Initializer<'a> {
    pub fn new(
        fs: &'a dyn FileSystem,
        store: &'a dyn ConfigStore,
        prompter: &'a mut dyn Prompter,
        project_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fs,
            store,
            prompter,
            settings: DaabConfig::builtin(),
            project_path: project_path.into(),
            now: Utc::now(),
        }
    }

    pub fn with_settings(mut self, settings: DaabConfig) -> Self {
        self.settings = settings;
        self
    }

    /// Overrides the timestamp stamped on every document of the run
    pub fn with_timestamp(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    pub fn run(&mut self) -> Result<InitReport, InitError> {
        if !self.fs.is_dir(&self.project_path) {
            return Err(InitError::NotADirectory(self.project_path.clone()));
        }
        self.settings.validate()?;

        let topology = self.prompter.ask_choice(
            questions::PROJECT_TYPE,
            &ProjectType::tokens(),
            ProjectType::Monolith.as_str(),
        )?;
        // The prompter only returns listed options
        let project_type: ProjectType = topology.parse().unwrap_or_default();

        info!(
            path = %self.project_path.display(),
            project_type = %project_type,
            "Initializing project"
        );

        match project_type {
            ProjectType::Monolith => self.run_monolith(),
            ProjectType::Microservice => self.run_microservices(),
        }
    }

    fn run_monolith(&mut self) -> Result<InitReport, InitError> {
        let answers = self.ask_project_answers()?;
        let registry = self
            .prompter
            .ask_string(questions::CONTAINER_REGISTRY, "")?;

        let detection = Detector::new(self.fs, self.project_path.clone())
            .detect()?
            .ok_or_else(|| InitError::NotDetected(self.project_path.clone()))?;
        info!(detected = %detection, "Detected project");

        let port = self
            .prompter
            .ask_int(questions::PORT, i64::from(detection.default_port()))?;

        let mut config = MonolithConfig::new(self.now);
        config.app.base.project_name = answers.name.clone();
        config.app.base.cloud_provider = answers.cloud_provider;
        config.app.apply_detection(detection.clone());
        config.app.port = port_from(port)?;
        config.app.set_container_registry(&registry);
        config.region = answers.region;
        config.environment = answers.environment;
        config.namespace = answers.namespace;

        let document = Document::from(config);
        document.validate()?;
        let path = self.store.write(&document, &self.project_path)?;
        info!(path = %path.display(), "Wrote monolith configuration");

        let mut report = InitReport::new(ProjectType::Monolith, answers.name);
        report.detection = Some(detection);
        report.written.push(path);
        Ok(report)
    }

    fn run_microservices(&mut self) -> Result<InitReport, InitError> {
        let answers = self.ask_project_answers()?;

        let mut root = MicroserviceRootConfig::new(self.now);
        root.base.project_name = answers.name.clone();
        root.base.cloud_provider = answers.cloud_provider;
        root.environment = answers.environment;
        root.region = answers.region;
        root.namespace = answers.namespace;
        root.validate_identity()?;

        let entries = self
            .fs
            .subdirectories(&self.project_path)
            .map_err(|error| InitError::ListServices {
                path: self.project_path.clone(),
                error,
            })?;

        let mut report = InitReport::new(ProjectType::Microservice, answers.name);

        for entry in entries {
            if entry.is_hidden() || entry.file_name() == self.settings.output_dir {
                debug!(dir = entry.file_name(), "Skipping directory");
                continue;
            }

            match self.init_service(&root, &entry) {
                Ok(Some(path)) => {
                    info!(service = entry.file_name(), path = %path.display(), "Wrote service configuration");
                    root.detected_microservices.push(entry.file_name().to_string());
                    report.services.push(entry.file_name().to_string());
                    report.written.push(path);
                }
                Ok(None) => {
                    warn!(service = entry.file_name(), "No supported project detected, skipping");
                    report.skipped.push(SkippedService {
                        name: entry.file_name().to_string(),
                        reason: "no supported project detected".to_string(),
                    });
                }
                Err(e) if e.is_service_local() => {
                    warn!(service = entry.file_name(), error = %e, "Skipping service");
                    report.skipped.push(SkippedService {
                        name: entry.file_name().to_string(),
                        reason: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        if root.detected_microservices.is_empty() {
            return Err(InitError::NoServices {
                path: self.project_path.clone(),
                skipped: report.skipped.len(),
            });
        }

        let document = Document::from(root);
        document.validate()?;
        let path = self.store.write(&document, &self.project_path)?;
        info!(
            path = %path.display(),
            services = report.services.len(),
            "Wrote microservice root configuration"
        );
        report.written.push(path);

        Ok(report)
    }

    /// `Ok(None)` when the directory holds no recognized project
    fn init_service(
        &mut self,
        root: &MicroserviceRootConfig,
        entry: &DirEntry,
    ) -> Result<Option<PathBuf>, InitError> {
        let name = entry.file_name();
        let Some(detection) = Detector::new(self.fs, entry.path()).detect()? else {
            return Ok(None);
        };
        info!(service = name, detected = %detection, "Detected service");

        let port = self.prompter.ask_int(
            &questions::for_service(questions::PORT, name),
            i64::from(detection.default_port()),
        )?;
        let registry = self
            .prompter
            .ask_string(&questions::for_service(questions::CONTAINER_REGISTRY, name), "")?;

        let mut config = MicroserviceConfig::for_service(root, name);
        config.app.apply_detection(detection);
        config.app.port = port_from(port)?;
        config.app.set_container_registry(&registry);

        let document = Document::from(config);
        document.validate()?;
        Ok(Some(self.store.write(&document, entry.path())?))
    }

    fn ask_project_answers(&mut self) -> Result<ProjectAnswers, InitError> {
        let default_name = self.default_project_name();
        let name = self
            .prompter
            .ask_string(questions::PROJECT_NAME, &default_name)?;

        let default_provider = self.settings.cloud_provider()?;
        let provider = self.prompter.ask_choice(
            questions::CLOUD_PROVIDER,
            &CloudProvider::tokens(),
            default_provider.as_str(),
        )?;
        let cloud_provider: CloudProvider = provider.parse().unwrap_or(default_provider);

        let environment = self
            .prompter
            .ask_string(questions::ENVIRONMENT, &self.settings.environment)?;
        let region = self
            .prompter
            .ask_string(questions::REGION, cloud_provider.default_region())?;
        let namespace = self
            .prompter
            .ask_string(questions::NAMESPACE, &self.settings.namespace)?;

        Ok(ProjectAnswers {
            name,
            cloud_provider,
            environment,
            region,
            namespace,
        })
    }

    /// Base name of the resolved project path
    fn default_project_name(&self) -> String {
        self.fs
            .canonicalize(&self.project_path)
            .ok()
            .as_deref()
            .and_then(Path::file_name)
            .and_then(|n| n.to_str())
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;
    use crate::prompt::{DefaultsPrompter, ScriptedPrompter};
    use crate::stack::{FrameworkId, LanguageId};
    use crate::store::StoreError;
    use chrono::TimeZone;
    use std::sync::Mutex;

    /// Keeps written documents in memory, keyed by their would-be path
    #[derive(Default)]
    struct MemoryStore {
        written: Mutex<Vec<(PathBuf, Document)>>,
        fail_on: Option<&'static str>,
    }

    impl MemoryStore {
        fn documents(&self) -> Vec<(PathBuf, Document)> {
            self.written.lock().unwrap().clone()
        }
    }

    impl ConfigStore for MemoryStore {
        fn write(&self, document: &Document, directory: &Path) -> Result<PathBuf, StoreError> {
            let path = directory.join(".init").join(document.file_name());
            if self.fail_on.is_some_and(|dir| directory.ends_with(dir)) {
                return Err(StoreError::Write {
                    path,
                    source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
                });
            }
            self.written
                .lock()
                .unwrap()
                .push((path.clone(), document.clone()));
            Ok(path)
        }
    }

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap()
    }

    fn run(
        fs: &MockFileSystem,
        store: &MemoryStore,
        prompter: &mut dyn Prompter,
    ) -> Result<InitReport, InitError> {
        Initializer::new(fs, store, prompter, "/mock")
            .with_timestamp(ts())
            .run()
    }

    fn microservice_script() -> ScriptedPrompter {
        ScriptedPrompter::new()
            .with_answer(questions::PROJECT_TYPE, "microservice")
            .with_answer(questions::PROJECT_NAME, "platform")
    }

    #[test]
    fn test_monolith_defaults() {
        let fs = MockFileSystem::new();
        fs.add_file("go.mod", "module shop\nrequire github.com/gin-gonic/gin v1.9.1\n");
        let store = MemoryStore::default();

        let report = run(&fs, &store, &mut DefaultsPrompter::new()).unwrap();

        assert_eq!(report.project_type, ProjectType::Monolith);
        assert_eq!(report.project_name, "mock");
        assert_eq!(report.written, vec![PathBuf::from("/mock/.init/daab.yaml")]);

        let docs = store.documents();
        let Document::Monolith(config) = &docs[0].1 else {
            panic!("expected monolith document");
        };
        assert_eq!(config.app.language, Some(LanguageId::Go));
        assert_eq!(config.app.framework, Some(FrameworkId::Gin));
        assert_eq!(config.app.port, 8080);
        assert_eq!(config.app.container_registry, None);
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.environment, "production");
        assert_eq!(config.namespace, "default");
        assert_eq!(config.app.base.created_at, ts());
        assert_eq!(config.app.base.updated_at, ts());
    }

    #[test]
    fn test_monolith_answers_echoed() {
        let fs = MockFileSystem::new();
        fs.add_file("package.json", r#"{"dependencies":{"next":"14"}}"#);
        let store = MemoryStore::default();
        let mut prompter = ScriptedPrompter::new()
            .with_answer(questions::PROJECT_NAME, "storefront")
            .with_answer(questions::CLOUD_PROVIDER, "3")
            .with_answer(questions::ENVIRONMENT, "staging")
            .with_answer(questions::NAMESPACE, "web")
            .with_answer(questions::CONTAINER_REGISTRY, "acme.azurecr.io")
            .with_answer(questions::PORT, "8080");

        run(&fs, &store, &mut prompter).unwrap();

        let docs = store.documents();
        let Document::Monolith(config) = &docs[0].1 else {
            panic!("expected monolith document");
        };
        assert_eq!(config.app.base.project_name, "storefront");
        assert_eq!(config.app.base.cloud_provider, CloudProvider::Azure);
        assert_eq!(config.region, "eastus");
        assert_eq!(config.environment, "staging");
        assert_eq!(config.namespace, "web");
        assert_eq!(config.app.framework, Some(FrameworkId::NextJs));
        assert_eq!(config.app.port, 8080);
        assert_eq!(
            config.app.container_registry.as_deref(),
            Some("acme.azurecr.io")
        );
    }

    #[test]
    fn test_monolith_question_order() {
        let fs = MockFileSystem::new();
        fs.add_file("Gemfile", "gem 'rails'");
        let store = MemoryStore::default();
        let mut prompter = ScriptedPrompter::new();

        run(&fs, &store, &mut prompter).unwrap();

        assert_eq!(
            prompter.asked(),
            [
                questions::PROJECT_TYPE,
                questions::PROJECT_NAME,
                questions::CLOUD_PROVIDER,
                questions::ENVIRONMENT,
                questions::REGION,
                questions::NAMESPACE,
                questions::CONTAINER_REGISTRY,
                questions::PORT,
            ]
        );
    }

    #[test]
    fn test_monolith_not_detected_writes_nothing() {
        let fs = MockFileSystem::new();
        fs.add_file("README.md", "# hi");
        let store = MemoryStore::default();

        let err = run(&fs, &store, &mut DefaultsPrompter::new()).unwrap_err();

        assert!(matches!(err, InitError::NotDetected(_)));
        assert!(store.documents().is_empty());
    }

    #[test]
    fn test_monolith_invalid_port() {
        let fs = MockFileSystem::new();
        fs.add_file("Cargo.toml", "[package]\nname = \"x\"\n");
        let store = MemoryStore::default();

        for answer in ["0", "70000", "http"] {
            let mut prompter = ScriptedPrompter::new().with_answer(questions::PORT, answer);
            let err = run(&fs, &store, &mut prompter).unwrap_err();
            assert!(
                matches!(err, InitError::Validation(_) | InitError::Prompt(_)),
                "port {:?} gave {:?}",
                answer,
                err
            );
        }
        assert!(store.documents().is_empty());
    }

    #[test]
    fn test_monolith_empty_name_uses_default() {
        let fs = MockFileSystem::new();
        fs.add_file("pom.xml", "<project/>");
        let store = MemoryStore::default();
        let mut prompter = ScriptedPrompter::new().with_answer(questions::PROJECT_NAME, "   ");

        let report = run(&fs, &store, &mut prompter).unwrap();
        assert_eq!(report.project_name, "mock");
    }

    #[test]
    fn test_missing_project_path() {
        let fs = MockFileSystem::new();
        let store = MemoryStore::default();
        let mut prompter = DefaultsPrompter::new();

        let err = Initializer::new(&fs, &store, &mut prompter, "/elsewhere")
            .run()
            .unwrap_err();
        assert!(matches!(err, InitError::NotADirectory(_)));
    }

    #[test]
    fn test_microservices_skip_hidden_and_undetected() {
        let fs = MockFileSystem::new();
        fs.add_file("svc-b/requirements.txt", "fastapi==0.110\n");
        fs.add_file("svc-a/go.mod", "module a");
        fs.add_file(".hidden/go.mod", "module hidden");
        fs.add_file("docs/index.md", "# docs");
        fs.add_file("README.md", "# root");
        let store = MemoryStore::default();
        let mut prompter = microservice_script();

        let report = run(&fs, &store, &mut prompter).unwrap();

        assert_eq!(report.services, vec!["svc-a", "svc-b"]);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].name, "docs");
        assert_eq!(
            report.written,
            vec![
                PathBuf::from("/mock/svc-a/.init/daab.yaml"),
                PathBuf::from("/mock/svc-b/.init/daab.yaml"),
                PathBuf::from("/mock/.init/daab.root.yaml"),
            ]
        );

        let docs = store.documents();
        let Document::Microservice(svc_b) = &docs[1].1 else {
            panic!("expected service document");
        };
        assert_eq!(svc_b.app.base.project_name, "svc-b");
        assert_eq!(svc_b.app.language, Some(LanguageId::Python));
        assert_eq!(svc_b.app.framework, Some(FrameworkId::FastApi));
        assert_eq!(svc_b.app.port, 8000);

        let Document::MicroserviceRoot(root) = &docs[2].1 else {
            panic!("expected root document");
        };
        assert_eq!(root.base.project_name, "platform");
        assert_eq!(root.detected_microservices, vec!["svc-a", "svc-b"]);
    }

    #[test]
    fn test_microservice_question_order() {
        let fs = MockFileSystem::new();
        fs.add_file("api/Cargo.toml", "[dependencies]\naxum = \"0.7\"\n");
        let store = MemoryStore::default();
        let mut prompter = microservice_script();

        run(&fs, &store, &mut prompter).unwrap();

        assert_eq!(
            prompter.asked(),
            [
                questions::PROJECT_TYPE.to_string(),
                questions::PROJECT_NAME.to_string(),
                questions::CLOUD_PROVIDER.to_string(),
                questions::ENVIRONMENT.to_string(),
                questions::REGION.to_string(),
                questions::NAMESPACE.to_string(),
                questions::for_service(questions::PORT, "api"),
                questions::for_service(questions::CONTAINER_REGISTRY, "api"),
            ]
        );
    }

    #[test]
    fn test_microservice_invalid_port_skips_only_that_service() {
        let fs = MockFileSystem::new();
        fs.add_file("api/go.mod", "module api");
        fs.add_file("web/package.json", "{}");
        let store = MemoryStore::default();
        let mut prompter = microservice_script()
            .with_answer(questions::for_service(questions::PORT, "api"), "99999")
            .with_answer(questions::for_service(questions::PORT, "web"), "3001");

        let report = run(&fs, &store, &mut prompter).unwrap();

        assert_eq!(report.services, vec!["web"]);
        assert_eq!(report.skipped[0].name, "api");
        assert!(report.skipped[0].reason.contains("99999"));
        let docs = store.documents();
        assert_eq!(docs.len(), 2);
        let Document::MicroserviceRoot(root) = &docs[1].1 else {
            panic!("expected root document");
        };
        assert_eq!(root.detected_microservices, vec!["web"]);
    }

    #[test]
    fn test_microservices_none_detected_writes_no_root() {
        let fs = MockFileSystem::new();
        fs.add_file("docs/index.md", "# docs");
        fs.add_file(".git/HEAD", "ref: refs/heads/main");
        let store = MemoryStore::default();

        let err = run(&fs, &store, &mut microservice_script()).unwrap_err();

        assert!(matches!(err, InitError::NoServices { skipped: 1, .. }));
        assert!(store.documents().is_empty());
    }

    #[test]
    fn test_microservices_zero_subdirectories() {
        let fs = MockFileSystem::new();
        fs.add_file("go.mod", "module monolith");
        let store = MemoryStore::default();

        let err = run(&fs, &store, &mut microservice_script()).unwrap_err();
        assert!(matches!(err, InitError::NoServices { skipped: 0, .. }));
    }

    #[test]
    fn test_microservice_write_failure_is_fatal() {
        let fs = MockFileSystem::new();
        fs.add_file("api/go.mod", "module api");
        fs.add_file("web/package.json", "{}");
        let store = MemoryStore {
            fail_on: Some("web"),
            ..Default::default()
        };

        let err = run(&fs, &store, &mut microservice_script()).unwrap_err();

        assert!(matches!(err, InitError::Store(_)));
        // Earlier services stay written, no root document
        let docs = store.documents();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].0, PathBuf::from("/mock/api/.init/daab.yaml"));
    }

    #[test]
    fn test_microservices_inherit_provider() {
        let fs = MockFileSystem::new();
        fs.add_file("api/go.mod", "module api");
        let store = MemoryStore::default();
        let mut prompter = microservice_script().with_answer(questions::CLOUD_PROVIDER, "gcp");

        run(&fs, &store, &mut prompter).unwrap();

        for (_, doc) in store.documents() {
            assert_eq!(doc.base().cloud_provider, CloudProvider::Gcp);
            assert_eq!(doc.base().created_at, ts());
        }
    }

    #[test]
    fn test_settings_feed_defaults() {
        let fs = MockFileSystem::new();
        fs.add_file("composer.json", r#"{"require":{"laravel/framework":"^10"}}"#);
        let store = MemoryStore::default();
        let mut prompter = DefaultsPrompter::new();
        let settings = DaabConfig {
            cloud_provider: "gcp".to_string(),
            environment: "dev".to_string(),
            namespace: "team-a".to_string(),
            ..DaabConfig::builtin()
        };

        Initializer::new(&fs, &store, &mut prompter, "/mock")
            .with_settings(settings)
            .run()
            .unwrap();

        let docs = store.documents();
        let Document::Monolith(config) = &docs[0].1 else {
            panic!("expected monolith document");
        };
        assert_eq!(config.app.base.cloud_provider, CloudProvider::Gcp);
        assert_eq!(config.region, "us-central1");
        assert_eq!(config.environment, "dev");
        assert_eq!(config.namespace, "team-a");
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let fs = MockFileSystem::new();
        let store = MemoryStore::default();
        let mut prompter = DefaultsPrompter::new();
        let settings = DaabConfig {
            cloud_provider: "heroku".to_string(),
            ..DaabConfig::builtin()
        };

        let err = Initializer::new(&fs, &store, &mut prompter, "/mock")
            .with_settings(settings)
            .run()
            .unwrap_err();
        assert!(matches!(err, InitError::Config(_)));
    }
}
