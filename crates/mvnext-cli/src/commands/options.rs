//! Resolve extension options from flags and an optional options file

use mvnext_core::ExtensionOptions;
use mvnext_fs::{ConfigStore, NormalizedPath};

use crate::cli::TargetArgs;
use crate::error::Result;

/// Options given on the command line; unset flags stay unset
pub fn from_flags(args: &TargetArgs) -> ExtensionOptions {
    ExtensionOptions {
        version: args.version.clone(),
        server_url: args.server.clone().unwrap_or_default(),
        allow_untrusted_server: args.allow_untrusted.then_some(true),
        capture_goal_input_files: args.capture_goal_input_files,
        upload_in_background: args.upload_in_background,
        publish_criteria: args.publish,
    }
}

/// Flags layered over the options file, if one was given.
pub fn resolve(args: &TargetArgs) -> Result<ExtensionOptions> {
    let flags = from_flags(args);
    let Some(config) = &args.config else {
        return Ok(flags);
    };

    let path = NormalizedPath::new(config);
    let file: ExtensionOptions = ConfigStore::new().load(&path)?;
    tracing::debug!(path = %path, "loaded options file");
    Ok(flags.or(file))
}
