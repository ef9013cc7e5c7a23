//! Cookie processor configuration.
//!
//! [`LegacyConfig`] carries the leniency toggles of the legacy (Netscape / RFC 2109)
//! processor. It is a plain `Copy` value: a processor takes it by value when it is
//! constructed and never changes it afterward, so a processor can be shared between
//! threads without any locking.
//!
//! [`CookieProcessorConfig`] selects which processor to build. It can be loaded
//! from JSON (or any other `serde` format):
//!
//! ```rust
//! use gosub_cookies::config::{CookieProcessorConfig, LegacyConfig};
//!
//! let cfg = CookieProcessorConfig::Legacy(
//!     LegacyConfig::builder()
//!         .allow_http_separators_in_v0(true)
//!         .forward_slash_is_separator(true)
//!         .build(),
//! );
//! let processor = cfg.build();
//! assert_eq!(processor.name(), "legacy");
//! ```
//!
//! # Fields (summary)
//! - `allow_http_separators_in_v0`: Allow the HTTP separators `()<>@:\"[]?={}` in
//!   unquoted version 0 values. Comma, semicolon, space and tab still force quoting.
//! - `forward_slash_is_separator`: Treat `/` as a separator. This is checked on its
//!   own and is not relaxed by `allow_http_separators_in_v0`.

use crate::cookies::{CookieProcessorHandle, LegacyCookieProcessor, Rfc6265CookieProcessor};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Leniency toggles for the legacy cookie processor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyConfig {
    pub allow_http_separators_in_v0: bool,
    pub forward_slash_is_separator: bool,
}

impl LegacyConfig {
    pub fn builder() -> LegacyConfigBuilder {
        LegacyConfigBuilder::default()
    }
}

/// Builder for [`LegacyConfig`].
#[derive(Debug, Clone, Default)]
pub struct LegacyConfigBuilder {
    inner: LegacyConfig,
}

impl LegacyConfigBuilder {
    #[inline]
    fn map(mut self, f: impl FnOnce(&mut LegacyConfig)) -> Self {
        f(&mut self.inner);
        self
    }

    pub fn allow_http_separators_in_v0(self, on: bool) -> Self { self.map(|c| c.allow_http_separators_in_v0 = on) }
    pub fn forward_slash_is_separator(self, on: bool) -> Self { self.map(|c| c.forward_slash_is_separator = on) }

    /// Apply multiple changes in one go.
    pub fn with(self, f: impl FnOnce(&mut LegacyConfig)) -> Self { self.map(f) }

    pub fn build(self) -> LegacyConfig {
        self.inner
    }
}

/// Selects the cookie processor used to generate headers.
///
/// Serialized with an internal `processor` tag:
/// `{"processor": "rfc6265"}` or `{"processor": "legacy", "forward_slash_is_separator": true}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "processor", rename_all = "lowercase")]
pub enum CookieProcessorConfig {
    Legacy(LegacyConfig),
    Rfc6265,
}

impl Default for CookieProcessorConfig {
    fn default() -> Self {
        Self::Rfc6265
    }
}

impl CookieProcessorConfig {
    /// Constructs the selected processor. The returned handle can be cloned into as
    /// many threads as needed.
    pub fn build(&self) -> CookieProcessorHandle {
        match self {
            CookieProcessorConfig::Legacy(cfg) => Arc::new(LegacyCookieProcessor::new(*cfg)),
            CookieProcessorConfig::Rfc6265 => Arc::new(Rfc6265CookieProcessor::new()),
        }
    }
}
