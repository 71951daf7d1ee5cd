use crate::config_model::{CheckConfig, default_context_radius};
use crate::error::{BuildToolError, Result};
use crate::license_header::{LicenseHeader, rewrite};
use crate::persistence::{read_lines, split_lines};
use similar::TextDiff;
use std::path::Path;
use std::process::ExitCode;

/// Result of checking one file.
#[derive(Debug)]
pub enum FileOutcome {
    Clean,
    NeedsUpdate { diff: String },
    Unreadable { error: BuildToolError },
}

#[derive(Debug)]
pub struct FileReport {
    pub filename: String,
    pub outcome: FileOutcome,
}

#[derive(Debug, Default)]
pub struct CheckReport {
    pub files: Vec<FileReport>,
}

impl CheckReport {
    pub fn diffs(&self) -> impl Iterator<Item = &str> {
        self.files.iter().filter_map(|report| match &report.outcome {
            FileOutcome::NeedsUpdate { diff } => Some(diff.as_str()),
            _ => None,
        })
    }

    #[must_use]
    pub fn failures(&self) -> usize {
        self.files
            .iter()
            .filter(|report| !matches!(report.outcome, FileOutcome::Clean))
            .count()
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures() == 0
    }

    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        if self.is_clean() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Checks files against a canonical header.
pub struct LicenseChecker {
    header: LicenseHeader,
    context_radius: usize,
}

impl LicenseChecker {
    #[must_use]
    pub fn new(header: LicenseHeader) -> Self {
        Self {
            header,
            context_radius: default_context_radius(),
        }
    }

    #[must_use]
    pub fn with_context_radius(mut self, radius: usize) -> Self {
        self.context_radius = radius;
        self
    }

    /// Load the template named by `config`.
    ///
    /// # Errors
    /// Returns error if the template cannot be read
    pub fn from_config(config: &CheckConfig) -> Result<Self> {
        let header = LicenseHeader::new(read_lines(&config.template_path())?);
        Ok(Self::new(header).with_context_radius(config.context_radius))
    }

    /// Unified diff between `lines` and their rewrite, or `None` if the file
    /// already carries the header.
    #[must_use]
    pub fn diff_lines(&self, filename: &str, lines: &[String]) -> Option<String> {
        let rewritten = rewrite(&self.header, lines);
        if rewritten == lines {
            return None;
        }

        let old = lines.concat();
        let new = rewritten.concat();
        let diff = TextDiff::from_lines(&old, &new);
        let text = diff
            .unified_diff()
            .context_radius(self.context_radius)
            .header(&format!("a/{filename}"), &format!("b/{filename}"))
            .to_string();
        Some(text)
    }

    #[must_use]
    pub fn check_source(&self, filename: &str, contents: &str) -> FileOutcome {
        match self.diff_lines(filename, &split_lines(contents)) {
            Some(diff) => FileOutcome::NeedsUpdate { diff },
            None => FileOutcome::Clean,
        }
    }

    /// Fold over in-memory sources.
    pub fn check_sources<'a, I>(&self, sources: I) -> CheckReport
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let files = sources
            .into_iter()
            .map(|(filename, contents)| FileReport {
                filename: filename.to_string(),
                outcome: self.check_source(filename, contents),
            })
            .collect();
        CheckReport { files }
    }

    /// Check files relative to `directory`. Unreadable files are recorded
    /// and the rest are still checked.
    pub fn check_files<P: AsRef<Path>>(&self, directory: &Path, files: &[P]) -> CheckReport {
        let files = files
            .iter()
            .map(|file| {
                let file = file.as_ref();
                let filename = file.display().to_string();
                let outcome = match read_lines(&directory.join(file)) {
                    Ok(lines) => match self.diff_lines(&filename, &lines) {
                        Some(diff) => FileOutcome::NeedsUpdate { diff },
                        None => FileOutcome::Clean,
                    },
                    Err(error) => {
                        log::warn!("Skipping {filename}: {error}");
                        FileOutcome::Unreadable { error }
                    }
                };
                FileReport { filename, outcome }
            })
            .collect();
        CheckReport { files }
    }
}
