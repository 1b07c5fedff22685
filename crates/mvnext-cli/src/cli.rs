//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use mvnext_core::PublishCriteria;

/// mvnext - Enroll a Maven project in a build-scan service
#[derive(Parser, Debug)]
#[command(name = "mvnext")]
#[command(author, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Add the build-scan extension and settings to a project
    ///
    /// Creates .mvn/gradle-enterprise.xml when missing and declares the
    /// extension in .mvn/extensions.xml. Running it again changes nothing.
    ///
    /// Examples:
    ///   mvnext apply --server https://ge.example.com
    ///   mvnext apply ../service --server https://ge.example.com --version 1.16
    ///   mvnext apply --config mvnext.toml --dry-run
    Apply {
        #[command(flatten)]
        target: TargetArgs,

        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,

        /// Output the report as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Exit non-zero if applying would change anything
    Check {
        #[command(flatten)]
        target: TargetArgs,

        /// Output the report as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}

/// Project location and extension options
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct TargetArgs {
    /// Project root
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Build-scan server URL
    #[arg(long)]
    pub server: Option<String>,

    /// Extension version or version selector
    #[arg(long)]
    pub version: Option<String>,

    /// Accept an untrusted server certificate
    #[arg(long)]
    pub allow_untrusted: bool,

    /// Capture goal input files for build caching
    #[arg(long, value_name = "BOOL")]
    pub capture_goal_input_files: Option<bool>,

    /// Upload build scans in the background
    #[arg(long, value_name = "BOOL")]
    pub upload_in_background: Option<bool>,

    /// When to publish build scans (always, failure, demand)
    #[arg(long, value_name = "WHEN")]
    pub publish: Option<PublishCriteria>,

    /// Options file (.toml, .json or .yaml); flags override its values
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
