mod build_args;
mod build_option;
mod config_model;
mod env_loader;
mod error;
mod exporter;
mod introspect;
mod license_check;
mod license_header;
mod persistence;

pub use build_args::{BuildArg, parse_build_args};
pub use build_option::{BuildOption, effective_options, render_value, settings_string};
pub use config_model::{
    CheckConfig, ExporterConfig, default_context_radius, default_header_name, default_macro_name,
    default_project_prefix,
};
pub use env_loader::{BUILD_ROOT_VAR, INTROSPECT_VAR, load_build_root_from_env, load_introspect_from_env};
pub use error::{BuildToolError, Result};
pub use exporter::{ConfigExporter, header_contents};
pub use introspect::{Introspector, OptionSource, parse_build_options};
pub use license_check::{CheckReport, FileOutcome, FileReport, LicenseChecker};
pub use license_header::{HeaderSpan, LicenseHeader, rewrite, scan_header};
pub use persistence::{read_lines, split_lines, write_header};
