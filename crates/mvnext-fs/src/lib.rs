//! Filesystem layer for mvnext
//!
//! Provides the project inventory walk, forward-slash logical paths,
//! atomic writes and format-agnostic config loading.

pub mod config;
pub mod error;
pub mod inventory;
pub mod io;
pub mod path;

pub use config::{ConfigFormat, ConfigStore};
pub use error::{Error, Result};
pub use inventory::{ProjectFile, ProjectInventory};
pub use path::NormalizedPath;
