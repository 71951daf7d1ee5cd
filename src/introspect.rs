use crate::build_option::BuildOption;
use crate::error::{BuildToolError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Something that can report the configured build options.
pub trait OptionSource {
    /// # Errors
    /// Returns error if the options cannot be collected or parsed
    fn build_options(&self) -> Result<Vec<BuildOption>>;
}

/// Runs `<command...> --buildoptions <build root>` and parses its JSON.
#[derive(Debug, Clone)]
pub struct Introspector {
    command: Vec<String>,
    build_root: PathBuf,
}

impl Introspector {
    #[must_use]
    pub fn new(command: Vec<String>, build_root: impl Into<PathBuf>) -> Self {
        Self {
            command,
            build_root: build_root.into(),
        }
    }

    #[must_use]
    pub fn build_root(&self) -> &Path {
        &self.build_root
    }

    fn display_command(&self) -> String {
        let mut words = self.command.clone();
        words.push("--buildoptions".to_string());
        words.push(self.build_root.display().to_string());
        words.join(" ")
    }
}

impl OptionSource for Introspector {
    fn build_options(&self) -> Result<Vec<BuildOption>> {
        let display = self.display_command();
        let (program, args) = self
            .command
            .split_first()
            .ok_or_else(|| BuildToolError::InvalidCommandLine(String::new()))?;

        log::debug!("Running {display}");
        let output = Command::new(program)
            .args(args)
            .arg("--buildoptions")
            .arg(&self.build_root)
            .output()
            .map_err(|source| BuildToolError::Spawn {
                command: display.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(BuildToolError::Introspection {
                command: display,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        parse_build_options(&output.stdout)
    }
}

/// Options given up front, e.g. read from a saved introspection dump.
impl OptionSource for Vec<BuildOption> {
    fn build_options(&self) -> Result<Vec<BuildOption>> {
        Ok(self.clone())
    }
}

/// Parse the JSON array printed by `--buildoptions`.
pub fn parse_build_options(raw: &[u8]) -> Result<Vec<BuildOption>> {
    Ok(serde_json::from_slice(raw)?)
}
