pub mod cookies;
pub mod config;
pub mod errors;

pub use config::{CookieProcessorConfig, LegacyConfig};
pub use cookies::{Cookie, CookieProcessor, CookieProcessorHandle};
pub use errors::CookieError;
