//! Legacy (Netscape / RFC 2109) cookie processor.
//!
//! Values that contain characters outside the allowed set are wrapped in double
//! quotes, with `\` and `"` escaped, and the cookie is raised to version 1 so the
//! quoting is understood by the client. This processor never rejects a cookie.
//!
//! ### Allowed characters
//! Printable ASCII, except:
//! - tab, space, `,` and `;`, always;
//! - the HTTP separators `()<>@:\"[]?={}`, unless
//!   [`LegacyConfig::allow_http_separators_in_v0`] is set;
//! - `/`, when [`LegacyConfig::forward_slash_is_separator`] is set.
//!
//! ### Example
//! ```rust
//! use gosub_cookies::config::LegacyConfig;
//! use gosub_cookies::cookies::{legacy, Cookie};
//!
//! let header = legacy::render(&Cookie::new("foo", "a;b"), &LegacyConfig::default());
//! assert_eq!(header, "foo=\"a;b\"; Version=1");
//! ```

use crate::config::LegacyConfig;
use crate::cookies::chars::{
    first_violation, push_escaped, push_requoted, split_quoted, AsciiSet, CharClass, Classifier, HTTP_SEPARATORS,
    PRINTABLE, V0_SEPARATORS,
};
use crate::cookies::{Cookie, CookieProcessor};
use crate::errors::CookieError;

/// Renders `cookie` with a one-off legacy processor built from `config`.
pub fn render(cookie: &Cookie, config: &LegacyConfig) -> String {
    LegacyCookieProcessor::new(*config).render(cookie)
}

/// Cookie processor following the legacy (version 0 / version 1) rules.
///
/// The set of characters that may appear unquoted is computed once from the
/// [`LegacyConfig`] and never changes afterward.
#[derive(Debug, Clone)]
pub struct LegacyCookieProcessor {
    config: LegacyConfig,
    allowed_without_quotes: AsciiSet,
}

impl Default for LegacyCookieProcessor {
    fn default() -> Self {
        Self::new(LegacyConfig::default())
    }
}

impl LegacyCookieProcessor {
    pub fn new(config: LegacyConfig) -> Self {
        let mut allowed = PRINTABLE.difference(V0_SEPARATORS);
        if !config.allow_http_separators_in_v0 {
            allowed = allowed.difference(HTTP_SEPARATORS);
        }
        if config.forward_slash_is_separator {
            allowed = allowed.remove(b'/');
        }

        Self {
            config,
            allowed_without_quotes: allowed,
        }
    }

    pub fn config(&self) -> &LegacyConfig {
        &self.config
    }

    /// Renders `cookie` as `name=value`, followed by `; Version=n` for version 1+ cookies.
    ///
    /// An already quoted value keeps its quotes and its escaped pairs; only a bare
    /// inner `"` or a trailing lone `\` is escaped.
    pub fn render(&self, cookie: &Cookie) -> String {
        let value = cookie.value_or_empty();
        let (inner, already_quoted) = split_quoted(value);

        if let Some((pos, c)) = value
            .char_indices()
            .find(|&(_, c)| self.classify(c) == CharClass::Forbidden)
        {
            log::warn!(
                "Cookie '{}': non-printable character {:?} at position {} in value",
                cookie.name,
                c,
                pos
            );
        }

        let mut buf = String::with_capacity(cookie.name.len() + value.len() + 16);
        buf.push_str(&cookie.name);
        buf.push('=');

        let violation = if value.is_empty() {
            buf.push_str("\"\"");
            None
        } else if already_quoted {
            buf.push('"');
            let violation = push_requoted(&mut buf, inner, self);
            buf.push('"');
            violation
        } else {
            let violation = first_violation(value, self);
            if violation.is_some() {
                buf.push('"');
                push_escaped(&mut buf, value);
                buf.push('"');
            } else {
                buf.push_str(value);
            }
            violation
        };

        let mut version = cookie.version;
        if let Some((_, c)) = violation {
            if version == 0 {
                log::debug!(
                    "Cookie '{}': character {:?} requires quoting, switching to version 1",
                    cookie.name,
                    c
                );
            }
            version = version.max(1);
        }

        if version >= 1 {
            buf.push_str(&format!("; Version={version}"));
        }

        log::trace!("Generated legacy cookie header: {buf}");
        buf
    }
}

impl Classifier for LegacyCookieProcessor {
    fn classify(&self, c: char) -> CharClass {
        if self.allowed_without_quotes.contains(c) {
            CharClass::Plain
        } else if PRINTABLE.contains(c) || c == '\t' {
            CharClass::Quotable
        } else {
            CharClass::Forbidden
        }
    }
}

impl CookieProcessor for LegacyCookieProcessor {
    fn name(&self) -> &'static str {
        "legacy"
    }

    fn generate_header(&self, cookie: &Cookie) -> Result<String, CookieError> {
        Ok(self.render(cookie))
    }
}
