//! User-facing options for the extension and its settings file

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// When build scans are published
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishCriteria {
    Always,
    Failure,
    Demand,
}

impl PublishCriteria {
    /// Value written to the settings document
    pub fn xml_name(&self) -> &'static str {
        match self {
            Self::Always => "ALWAYS",
            Self::Failure => "ON_FAILURE",
            Self::Demand => "ON_DEMAND",
        }
    }
}

impl FromStr for PublishCriteria {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "always" => Ok(Self::Always),
            "failure" | "on_failure" => Ok(Self::Failure),
            "demand" | "on_demand" => Ok(Self::Demand),
            other => Err(Error::invalid_option(
                "publish_criteria",
                format!("unknown value `{other}`, expected always, failure or demand"),
            )),
        }
    }
}

impl fmt::Display for PublishCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.xml_name())
    }
}

/// Options for one enrollment run.
///
/// Every optional field left unset is omitted from the generated output
/// rather than written with a default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtensionOptions {
    /// Exact version or selector for the extension, written unchanged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Build-scan server URL
    #[serde(default)]
    pub server_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_untrusted_server: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture_goal_input_files: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_in_background: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_criteria: Option<PublishCriteria>,
}

impl ExtensionOptions {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            ..Self::default()
        }
    }

    /// Fill unset fields from `base`, keeping values already set here.
    pub fn or(self, base: ExtensionOptions) -> Self {
        Self {
            version: self.version.or(base.version),
            server_url: if self.server_url.is_empty() {
                base.server_url
            } else {
                self.server_url
            },
            allow_untrusted_server: self.allow_untrusted_server.or(base.allow_untrusted_server),
            capture_goal_input_files: self
                .capture_goal_input_files
                .or(base.capture_goal_input_files),
            upload_in_background: self.upload_in_background.or(base.upload_in_background),
            publish_criteria: self.publish_criteria.or(base.publish_criteria),
        }
    }

    /// Check the options before a run.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOptions` for an empty or non-http(s) server URL, and
    /// for a blank version. Any other version text is written as given.
    pub fn validate(&self) -> Result<()> {
        let url = self.server_url.trim();
        if url.is_empty() {
            return Err(Error::invalid_option("server_url", "a server URL is required"));
        }
        let rest = url.split_once("://").and_then(|(scheme, rest)| {
            (scheme.eq_ignore_ascii_case("https") || scheme.eq_ignore_ascii_case("http"))
                .then_some(rest)
        });
        match rest {
            Some(host) if !host.is_empty() && !host.starts_with('/') => {}
            _ => {
                return Err(Error::invalid_option(
                    "server_url",
                    format!("`{url}` is not an http(s) URL"),
                ));
            }
        }

        if self.version.as_deref().is_some_and(|v| v.trim().is_empty()) {
            return Err(Error::invalid_option("version", "version must not be blank"));
        }
        Ok(())
    }
}
