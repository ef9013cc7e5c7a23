//! RFC 6265 cookie processor.
//!
//! The value is written exactly as given. It is never quoted or escaped and no
//! `Version` attribute is added, because RFC 6265 has none. Values containing a
//! character outside the cookie-octet set are rejected with
//! [`CookieError::InvalidValue`], unless the offending characters are the
//! surrounding double quotes of an already quoted value.

use crate::cookies::chars::{first_violation, split_quoted, CharClass, Classifier, COOKIE_OCTETS};
use crate::cookies::{Cookie, CookieProcessor};
use crate::errors::CookieError;

/// Renders `cookie` with the RFC 6265 rules.
pub fn render(cookie: &Cookie) -> Result<String, CookieError> {
    Rfc6265CookieProcessor::new().generate_header(cookie)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Rfc6265CookieProcessor;

impl Rfc6265CookieProcessor {
    pub fn new() -> Self {
        Self
    }

    fn validate_value(&self, cookie: &Cookie) -> Result<(), CookieError> {
        let (inner, already_quoted) = split_quoted(cookie.value_or_empty());

        match first_violation(inner, self) {
            Some((pos, character)) => {
                let position = if already_quoted { pos + 1 } else { pos };
                log::debug!(
                    "Rejecting cookie '{}': invalid character {:?} at position {}",
                    cookie.name,
                    character,
                    position
                );
                Err(CookieError::InvalidValue {
                    name: cookie.name.clone(),
                    character,
                    position,
                })
            }
            None => Ok(()),
        }
    }
}

impl Classifier for Rfc6265CookieProcessor {
    fn classify(&self, c: char) -> CharClass {
        if COOKIE_OCTETS.contains(c) {
            CharClass::Plain
        } else {
            CharClass::Forbidden
        }
    }
}

impl CookieProcessor for Rfc6265CookieProcessor {
    fn name(&self) -> &'static str {
        "rfc6265"
    }

    fn generate_header(&self, cookie: &Cookie) -> Result<String, CookieError> {
        self.validate_value(cookie)?;

        let header = format!("{}={}", cookie.name, cookie.value_or_empty());
        log::trace!("Generated rfc6265 cookie header: {header}");
        Ok(header)
    }
}
