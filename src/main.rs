//! Meson post-configuration step
//!
//! Writes `meson-config.h` into the project build root. The header defines
//! `MESON_ARGS`, the options the build directory was configured with, for
//! display in the About dialog.

use anyhow::{Context, Result};
use clap::Parser;
use pidgin_build_tools::{
    ConfigExporter, ExporterConfig, default_project_prefix, load_build_root_from_env,
    load_introspect_from_env,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mkmesonconf")]
#[command(about = "Produce meson-config.h in a build directory")]
struct Args {
    /// Build root of this project; differs from MESON_BUILD_ROOT when built as a subproject
    project_build_root: PathBuf,

    /// Subproject qualifier prefix whose options are treated as global
    #[arg(long, default_value_t = default_project_prefix())]
    project_prefix: String,

    /// Print the header instead of writing it
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let introspect = load_introspect_from_env()?;
    let build_root = load_build_root_from_env()?;

    let config = ExporterConfig::new(introspect, build_root, args.project_build_root)
        .with_project_prefix(args.project_prefix);
    let exporter = ConfigExporter::new(config);

    if args.dry_run {
        print!("{}", exporter.render().context("Failed to collect build options")?);
        return Ok(());
    }

    let path = exporter
        .export()
        .with_context(|| format!("Failed to generate header in {}", exporter.config().project_build_root.display()))?;
    log::debug!("Generated {}", path.display());
    Ok(())
}
