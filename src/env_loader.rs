// ============================================================================
// ENVIRONMENT VARIABLE LOADING
// ============================================================================

use crate::error::{BuildToolError, Result};
use std::path::PathBuf;

pub const INTROSPECT_VAR: &str = "MESONINTROSPECT";
pub const BUILD_ROOT_VAR: &str = "MESON_BUILD_ROOT";

/// Load the introspection command from `MESONINTROSPECT`
/// Format: a shell-quoted command line, split the way a POSIX shell would
pub fn load_introspect_from_env() -> Result<Vec<String>> {
    let raw = std::env::var(INTROSPECT_VAR).map_err(|_| BuildToolError::MissingEnv(INTROSPECT_VAR))?;
    split_command_line(&raw)
}

/// Load the top-most build root from `MESON_BUILD_ROOT`
pub fn load_build_root_from_env() -> Result<PathBuf> {
    std::env::var_os(BUILD_ROOT_VAR)
        .map(PathBuf::from)
        .ok_or(BuildToolError::MissingEnv(BUILD_ROOT_VAR))
}

pub(crate) fn split_command_line(raw: &str) -> Result<Vec<String>> {
    match shlex::split(raw) {
        Some(words) if !words.is_empty() => Ok(words),
        _ => Err(BuildToolError::InvalidCommandLine(raw.to_string())),
    }
}
