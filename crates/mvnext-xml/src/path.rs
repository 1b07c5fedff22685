//! Structural path expressions over element names
//!
//! A small XPath subset, enough to address a nested position in a document.
//!
//! # Path Syntax
//!
//! - Absolute child steps: `/extensions/extension/artifactId`
//! - Descendant steps at any depth: `//artifactId`, `/project//plugin`
//! - Wildcard name test: `/extensions/*/version`
//! - Relative paths match at any depth: `extension/artifactId`
//!
//! Names are compared by local name, so a default namespace on the root does
//! not affect matching.
//!
//! # Examples
//!
//! ```
//! use mvnext_xml::path::XPath;
//!
//! let path: XPath = "/extensions/extension/artifactId".parse().unwrap();
//! assert!(path.matches(&["extensions", "extension", "artifactId"]));
//! assert!(!path.matches(&["project", "extensions", "extension", "artifactId"]));
//!
//! let anywhere: XPath = "//artifactId".parse().unwrap();
//! assert!(anywhere.matches(&["project", "dependencies", "dependency", "artifactId"]));
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// How a step relates to the previous one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Direct child (`/name`)
    Child,
    /// Any descendant (`//name`)
    Descendant,
}

/// Element name test of a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameTest {
    /// Exact local name
    Name(String),
    /// `*`
    Any,
}

impl NameTest {
    fn matches(&self, name: &str) -> bool {
        match self {
            Self::Name(expected) => expected == name,
            Self::Any => true,
        }
    }
}

/// One step of a path expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub axis: Axis,
    pub test: NameTest,
}

/// A parsed path expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XPath {
    expression: String,
    steps: Vec<Step>,
}

impl XPath {
    /// Parse a path expression.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPath` for empty expressions, empty steps (`/a///b`),
    /// a trailing slash, or names containing characters that cannot appear
    /// in an element name.
    pub fn parse(expression: &str) -> Result<Self> {
        let trimmed = expression.trim();
        if trimmed.is_empty() {
            return Err(Error::invalid_path(expression, "expression is empty"));
        }

        let mut steps = Vec::new();
        let mut rest = trimmed;

        // Relative paths behave as if prefixed with `//`
        let mut axis = if rest.starts_with('/') {
            Axis::Child
        } else {
            Axis::Descendant
        };

        loop {
            if let Some(after) = rest.strip_prefix("//") {
                axis = Axis::Descendant;
                rest = after;
            } else if let Some(after) = rest.strip_prefix('/') {
                rest = after;
            }

            let end = rest.find('/').unwrap_or(rest.len());
            let name = &rest[..end];
            if name.is_empty() {
                return Err(Error::invalid_path(expression, "empty step"));
            }
            steps.push(Step {
                axis,
                test: parse_name_test(expression, name)?,
            });
            axis = Axis::Child;

            rest = &rest[end..];
            if rest.is_empty() {
                break;
            }
            if rest == "/" || rest == "//" {
                return Err(Error::invalid_path(expression, "trailing slash"));
            }
        }

        Ok(Self {
            expression: trimmed.to_string(),
            steps,
        })
    }

    /// The expression as written
    pub fn as_str(&self) -> &str {
        &self.expression
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Check an element's ancestry against this expression.
    ///
    /// `names` lists local names from the document root down to the
    /// candidate element itself.
    pub fn matches<S: AsRef<str>>(&self, names: &[S]) -> bool {
        match_steps(&self.steps, names)
    }
}

fn match_steps<S: AsRef<str>>(steps: &[Step], names: &[S]) -> bool {
    let Some((step, rest)) = steps.split_first() else {
        return names.is_empty();
    };

    match step.axis {
        Axis::Child => match names.split_first() {
            Some((name, tail)) => step.test.matches(name.as_ref()) && match_steps(rest, tail),
            None => false,
        },
        Axis::Descendant => (0..names.len()).any(|skip| {
            step.test.matches(names[skip].as_ref()) && match_steps(rest, &names[skip + 1..])
        }),
    }
}

fn parse_name_test(expression: &str, name: &str) -> Result<NameTest> {
    if name == "*" {
        return Ok(NameTest::Any);
    }
    let valid = name
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'));
    if !valid || name.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '.') {
        return Err(Error::invalid_path(
            expression,
            format!("`{name}` is not a valid element name"),
        ));
    }
    // Prefixes are ignored; matching is by local name
    let local = name.rsplit(':').next().unwrap_or(name);
    Ok(NameTest::Name(local.to_string()))
}

impl FromStr for XPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for XPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression)
    }
}
