use crate::build_option::settings_string;
use crate::config_model::{ExporterConfig, default_macro_name};
use crate::error::Result;
use crate::introspect::{Introspector, OptionSource};
use crate::persistence;
use std::path::PathBuf;

// ============================================================================
// CONFIG EXPORTER
// ============================================================================

/// Produces `meson-config.h` from the options reported by a source.
pub struct ConfigExporter<S = Introspector> {
    config: ExporterConfig,
    source: S,
}

impl ConfigExporter<Introspector> {
    /// Exporter that asks Meson for the options of `config.build_root`.
    #[must_use]
    pub fn new(config: ExporterConfig) -> Self {
        let source = Introspector::new(config.introspect.clone(), config.build_root.clone());
        Self { config, source }
    }
}

impl<S: OptionSource> ConfigExporter<S> {
    #[must_use]
    pub fn with_source(config: ExporterConfig, source: S) -> Self {
        Self { config, source }
    }

    #[must_use]
    pub fn config(&self) -> &ExporterConfig {
        &self.config
    }

    /// The space separated `name=value` list.
    ///
    /// # Errors
    /// Returns error if the options cannot be collected
    pub fn settings(&self) -> Result<String> {
        let options = self.source.build_options()?;
        log::info!("Collected {} build options", options.len());
        Ok(settings_string(options, &self.config.project_prefix))
    }

    /// Full text of the generated header.
    ///
    /// # Errors
    /// Returns error if the options cannot be collected
    pub fn render(&self) -> Result<String> {
        Ok(header_contents(&self.settings()?))
    }

    /// Render and write the header, returning its path.
    ///
    /// # Errors
    /// Returns error if the options cannot be collected or the header cannot be written
    pub fn export(&self) -> Result<PathBuf> {
        let contents = self.render()?;
        let path = self.config.header_path();
        persistence::write_header(&path, &contents)?;
        Ok(path)
    }
}

#[must_use]
pub fn header_contents(settings: &str) -> String {
    format!("#define {} \"{settings}\"\n", default_macro_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_option::BuildOption;
    use crate::error::BuildToolError;

    struct Broken;

    impl OptionSource for Broken {
        fn build_options(&self) -> Result<Vec<BuildOption>> {
            Err(serde_json::from_str::<Vec<BuildOption>>("{").unwrap_err().into())
        }
    }

    fn sample() -> Vec<BuildOption> {
        vec![
            BuildOption::new("pidgin:debug", true),
            BuildOption::new("other:x", 1),
            BuildOption::new("foo", "bar"),
        ]
    }

    #[test]
    fn renders_single_define() {
        let config = ExporterConfig::new(Vec::new(), "/build", "/build");
        let exporter = ConfigExporter::with_source(config, sample());
        assert_eq!(
            exporter.render().unwrap(),
            "#define MESON_ARGS \"debug=True foo='bar'\"\n"
        );
    }

    #[test]
    fn custom_prefix_changes_promotion() {
        let config = ExporterConfig::new(Vec::new(), "/build", "/build").with_project_prefix("other");
        let exporter = ConfigExporter::with_source(config, sample());
        assert_eq!(exporter.settings().unwrap(), "foo='bar' x=1");
    }

    #[test]
    fn writes_header_into_project_build_root() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("subprojects/pidgin");
        std::fs::create_dir_all(&project).unwrap();
        std::fs::write(project.join("meson-config.h"), "stale").unwrap();

        let config = ExporterConfig::new(Vec::new(), dir.path(), &project);
        let path = ConfigExporter::with_source(config, sample()).export().unwrap();

        assert_eq!(path, project.join("meson-config.h"));
        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            "#define MESON_ARGS \"debug=True foo='bar'\"\n"
        );
    }

    #[test]
    fn source_errors_propagate_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let config = ExporterConfig::new(Vec::new(), dir.path(), dir.path());
        let err = ConfigExporter::with_source(config, Broken).export().unwrap_err();
        assert!(matches!(err, BuildToolError::Parse(_)));
        assert!(!dir.path().join("meson-config.h").exists());
    }

    #[test]
    fn empty_option_set_gives_empty_string() {
        assert_eq!(header_contents(""), "#define MESON_ARGS \"\"\n");
    }
}
