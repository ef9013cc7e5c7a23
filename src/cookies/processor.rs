//! Cookie processor abstraction.
//!
//! A **cookie processor** turns a [`Cookie`] into the `name=value` fragment of a
//! `Set-Cookie` header. Two implementations exist and are picked once, when the
//! processor is built:
//!
//! - [`LegacyCookieProcessor`](crate::cookies::LegacyCookieProcessor): Netscape /
//!   RFC 2109 rules. Never fails; quotes the value and raises the cookie to
//!   version 1 when it has to.
//! - [`Rfc6265CookieProcessor`](crate::cookies::Rfc6265CookieProcessor): RFC 6265
//!   rules. Rejects values that contain anything outside the cookie-octet set.
//!
//! ## Notes & limitations
//! - Only the `name=value` pair (and the legacy `Version` attribute) is produced.
//!   `Domain`, `Path`, `Max-Age`, `Secure` and friends are serialized elsewhere.
//! - There is no parsing in the other direction.

use crate::cookies::Cookie;
use crate::errors::CookieError;
use http::HeaderValue;
use std::fmt;

/// Renders cookies into header strings.
///
/// Implementations are immutable after construction and therefore `Send + Sync`;
/// a single instance can serve any number of threads.
pub trait CookieProcessor: fmt::Debug + Send + Sync {
    /// Short identifier used in log lines (`"legacy"`, `"rfc6265"`).
    fn name(&self) -> &'static str;

    /// Generates the header fragment for `cookie`.
    ///
    /// Fails with [`CookieError::InvalidValue`] when the processor's grammar does
    /// not allow the value. No partial output is ever returned.
    fn generate_header(&self, cookie: &Cookie) -> Result<String, CookieError>;

    /// Generates the header fragment as an [`HeaderValue`], ready to be inserted
    /// under [`http::header::SET_COOKIE`].
    fn generate_header_value(&self, cookie: &Cookie) -> Result<HeaderValue, CookieError> {
        let header = self.generate_header(cookie)?;
        Ok(HeaderValue::from_str(&header)?)
    }
}
