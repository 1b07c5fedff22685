//! Apply command implementation

use colored::Colorize;

use mvnext_core::{PathRole, Pipeline};
use mvnext_fs::{NormalizedPath, ProjectInventory};

use super::{options, output};
use crate::cli::TargetArgs;
use crate::error::Result;

/// Run the apply command
///
/// Loads the project, runs the pipeline and writes the result unless
/// `dry_run` is set, in which case a unified diff is printed instead.
pub fn run_apply(target: &TargetArgs, dry_run: bool, json: bool) -> Result<()> {
    let pipeline = Pipeline::new(options::resolve(target)?)?;
    let root = NormalizedPath::new(&target.path);
    let inventory = ProjectInventory::load(root, PathRole::is_recognized)?;
    let root = inventory.root();
    let report = pipeline.run_inventory(&inventory)?;

    if json {
        output::print_json(&report)?;
        if !dry_run {
            Pipeline::apply_to_disk(&report, root)?;
        }
        return Ok(());
    }

    println!("{} Enrolling {}...", "=>".blue().bold(), root.as_str().cyan());

    if !report.has_changes() {
        output::print_summary(&report, false);
        println!("{} Already up to date.", "OK".green().bold());
        return Ok(());
    }

    if dry_run {
        output::print_summary(&report, true);
        println!();
        print!("{}", report.diff());
        println!("{} Dry run, nothing written.", "DRY-RUN".yellow().bold());
        return Ok(());
    }

    Pipeline::apply_to_disk(&report, root)?;
    output::print_summary(&report, false);
    println!("{} Project enrolled.", "OK".green().bold());
    Ok(())
}
