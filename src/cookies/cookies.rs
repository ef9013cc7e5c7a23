//! Cookie core types.
//!
//! This module defines the [`Cookie`] record consumed by the processors and the
//! type-erased [`CookieProcessorHandle`] used to share a processor between threads.
//!
//! # Concurrency model
//! - [`CookieProcessorHandle`] is `Arc<dyn CookieProcessor + Send + Sync>`.
//!   - Processors hold only their frozen configuration, so no lock is needed.
//!     Clone the handle into every thread or task that generates headers.
//!
//! ```rust
//! use gosub_cookies::cookies::Cookie;
//!
//! let c = Cookie::new("session", "abc123").with_version(1);
//! assert_eq!(c.value_or_empty(), "abc123");
//!
//! let empty = Cookie::without_value("session");
//! assert_eq!(empty.value_or_empty(), "");
//! ```

use crate::cookies::CookieProcessor;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A handle to a cookie processor trait.
///
/// This is a reference-counted pointer to a type-erased [`CookieProcessor`].
/// Typically built once from a
/// [`CookieProcessorConfig`](crate::config::CookieProcessorConfig) and then cloned.
pub type CookieProcessorHandle = Arc<dyn CookieProcessor + Send + Sync>;

/// A cookie as handed to a processor for header generation.
///
/// Only the fields that take part in generating the `name=value` fragment are
/// modeled here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cookie {
    /// Cookie name (case-sensitive).
    ///
    /// Must already be a valid token. It is written verbatim and never quoted or escaped.
    pub name: String,

    /// Raw cookie value. `None` means no value was set and is rendered like an empty value.
    #[serde(default)]
    pub value: Option<String>,

    /// Minimum cookie version requested by the caller (0 or 1 in practice).
    ///
    /// The legacy processor may raise this, it never lowers it.
    #[serde(default)]
    pub version: u32,
}

impl Cookie {
    /// Creates a version 0 cookie with the given value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            version: 0,
        }
    }

    /// Creates a version 0 cookie without a value.
    pub fn without_value(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            version: 0,
        }
    }

    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Returns the value, or `""` when absent.
    pub fn value_or_empty(&self) -> &str {
        self.value.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_without_value_or_version() {
        let cookie: Cookie = serde_json::from_str(r#"{"name": "foo"}"#).unwrap();
        assert_eq!(cookie, Cookie::without_value("foo"));
        assert_eq!(cookie.version, 0);
        assert_eq!(cookie.value_or_empty(), "");
    }

    #[test]
    fn with_version_keeps_value() {
        let cookie = Cookie::new("foo", "bar").with_version(1);
        assert_eq!(cookie.value.as_deref(), Some("bar"));
        assert_eq!(cookie.version, 1);
    }
}
