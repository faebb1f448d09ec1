//! Keyfile - Local API key validation
//!
//! Loads service API keys from flat text files and answers whether a
//! presented key is valid.
//!
//! # Key File Format
//!
//! ```text
//! # service name, separator, API key
//! billing=3f9a6c1e2b7d4a50
//! search = 9d8c7b6a5f4e3d2c
//! ```
//!
//! - Blank lines and lines starting with `#` are ignored
//! - Lines without the separator are skipped silently
//! - Lines with an empty name or key are skipped with a warning
//!
//! # Example
//!
//! ```no_run
//! use keyfile_auth::{ApiKeyValidator, LocalKeyStore};
//!
//! let store = LocalKeyStore::with_diagnostics("=")?;
//! store.load("config/api_keys.conf")?;
//!
//! fn authorize(validator: &dyn ApiKeyValidator, key: &str) -> bool {
//!     validator.is_api_key_valid(key)
//! }
//! assert!(!authorize(&store, "unknown"));
//! # Ok::<(), keyfile_auth::AuthError>(())
//! ```

mod error;
mod loader;
mod store;
mod validator;

#[cfg(test)]
mod test_utils;

pub use error::{AuthError, Result};
pub use loader::{LoadReport, MAX_LINE_LENGTH};
pub use store::{LocalKeyStore, SharedKeyStore};
pub use validator::{ApiKeyLoader, ApiKeyValidator};
