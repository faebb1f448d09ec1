//! API key validation capability
//!
//! Authentication layers depend on [`ApiKeyValidator`] only. Stores that
//! can be filled from key files also implement [`ApiKeyLoader`].

use std::path::Path;
use std::sync::Arc;

use crate::error::Result;
use crate::loader::LoadReport;

/// Answers whether an API key is valid
pub trait ApiKeyValidator: Send + Sync {
    /// Check if the API key is valid
    fn is_api_key_valid(&self, api_key: &str) -> bool;
}

/// A validator backed by key files
pub trait ApiKeyLoader: ApiKeyValidator {
    /// Load the API keys from a file, adding them to the existing ones
    fn load(&self, path: &Path) -> Result<LoadReport>;
}

impl<T: ApiKeyValidator + ?Sized> ApiKeyValidator for Arc<T> {
    #[inline]
    fn is_api_key_valid(&self, api_key: &str) -> bool {
        (**self).is_api_key_valid(api_key)
    }
}

impl<T: ApiKeyLoader + ?Sized> ApiKeyLoader for Arc<T> {
    fn load(&self, path: &Path) -> Result<LoadReport> {
        (**self).load(path)
    }
}
