use std::path::PathBuf;

// ============================================================================
// DEFAULT VALUE FUNCTIONS
// ============================================================================

/// Wrap names Pidgin is usually vendored under start with this.
pub fn default_project_prefix() -> String {
    "pidgin".to_string()
}

pub fn default_header_name() -> &'static str {
    "meson-config.h"
}

pub fn default_macro_name() -> &'static str {
    "MESON_ARGS"
}

pub fn default_context_radius() -> usize {
    3
}

// ============================================================================
// EXPORTER CONFIG
// ============================================================================

#[derive(Debug, Clone)]
pub struct ExporterConfig {
    /// Introspection command line, already split into words
    pub introspect: Vec<String>,

    /// Top-most Meson build root (the superproject's when vendored)
    pub build_root: PathBuf,

    /// Build root of this project, where the header is written
    pub project_build_root: PathBuf,

    /// Qualifier prefix whose subproject options are promoted to globals
    pub project_prefix: String,
}

impl ExporterConfig {
    #[must_use]
    pub fn new(
        introspect: Vec<String>,
        build_root: impl Into<PathBuf>,
        project_build_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            introspect,
            build_root: build_root.into(),
            project_build_root: project_build_root.into(),
            project_prefix: default_project_prefix(),
        }
    }

    #[must_use]
    pub fn with_project_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.project_prefix = prefix.into();
        self
    }

    /// Path of the generated header.
    #[must_use]
    pub fn header_path(&self) -> PathBuf {
        self.project_build_root.join(default_header_name())
    }
}

// ============================================================================
// LICENSE CHECK CONFIG
// ============================================================================

#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Base directory; template and files are relative to it
    pub directory: PathBuf,

    pub template: PathBuf,

    pub files: Vec<PathBuf>,

    /// Unchanged lines shown around each hunk
    pub context_radius: usize,
}

impl CheckConfig {
    #[must_use]
    pub fn new(
        directory: impl Into<PathBuf>,
        template: impl Into<PathBuf>,
        files: Vec<PathBuf>,
    ) -> Self {
        Self {
            directory: directory.into(),
            template: template.into(),
            files,
            context_radius: default_context_radius(),
        }
    }

    #[must_use]
    pub fn with_context_radius(mut self, radius: usize) -> Self {
        self.context_radius = radius;
        self
    }

    #[must_use]
    pub fn template_path(&self) -> PathBuf {
        self.directory.join(&self.template)
    }
}
