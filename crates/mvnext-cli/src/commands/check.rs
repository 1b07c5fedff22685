//! Check command implementation

use colored::Colorize;

use mvnext_core::{PathRole, Pipeline};
use mvnext_fs::{NormalizedPath, ProjectInventory};

use super::{options, output};
use crate::cli::TargetArgs;
use crate::error::{CliError, Result};

/// Run the check command
///
/// Fails with `ChangesPending` when `apply` would write anything.
pub fn run_check(target: &TargetArgs, json: bool) -> Result<()> {
    let pipeline = Pipeline::new(options::resolve(target)?)?;
    let root = NormalizedPath::new(&target.path);
    let inventory = ProjectInventory::load(root.clone(), PathRole::is_recognized)?;
    let report = pipeline.run_inventory(&inventory)?;

    if json {
        output::print_json(&report)?;
    } else {
        println!("{} Checking {}...", "=>".blue().bold(), root.as_str().cyan());
        output::print_summary(&report, true);
    }

    let pending = report.written_paths().len();
    if pending > 0 {
        return Err(CliError::ChangesPending { count: pending });
    }
    if !json {
        println!("{} Project is enrolled. No changes needed.", "OK".green().bold());
    }
    Ok(())
}
