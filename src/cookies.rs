// src/cookies.rs
//! Cookies: [`Cookie`], the [`CookieProcessor`] trait and its two implementations.

mod chars;
mod cookies;
mod processor;
pub mod legacy;
pub mod rfc6265;

pub use cookies::Cookie;
pub use cookies::CookieProcessorHandle;

pub use processor::CookieProcessor;
pub use legacy::LegacyCookieProcessor;
pub use rfc6265::Rfc6265CookieProcessor;
