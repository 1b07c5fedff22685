//! Shared test utilities for the mvnext workspace.
//!
//! This crate provides standardised Maven project fixtures so crate test
//! suites do not each hand-roll them. It is a dev-dependency only and is
//! never published.
//!
//! # Modules
//!
//! - [`content`]: document texts for the files a Maven project carries
//! - [`project`]: [`TestProject`](project::TestProject), an on-disk project builder

pub mod content;
pub mod project;
