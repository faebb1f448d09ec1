//! Local API key store
//!
//! The `LocalKeyStore` holds the service name → API key mapping read from
//! key files and the set of valid keys derived from it. Validation is a
//! single hash lookup under a read lock.
//!
//! Loads are additive: every call to [`LocalKeyStore::load`] merges new
//! entries into what is already there. Use [`LocalKeyStore::reload`] to
//! replace the contents instead.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use keyfile_config::KeysConfig;
use parking_lot::RwLock;
use tracing::{Span, debug, info_span};

use crate::error::{AuthError, Result};
use crate::loader::{LoadReport, ParsedKeys, parse_keys};
use crate::validator::{ApiKeyLoader, ApiKeyValidator};

/// Thread-safe API key store backed by key files
///
/// # Example
///
/// ```
/// use keyfile_auth::LocalKeyStore;
///
/// let store = LocalKeyStore::new("=", None).unwrap();
/// store
///     .load_reader("billing = 3f9a6c1e\n".as_bytes(), "inline")
///     .unwrap();
///
/// assert!(store.is_api_key_valid("3f9a6c1e"));
/// assert!(!store.is_api_key_valid(""));
/// ```
#[derive(Debug)]
pub struct LocalKeyStore {
    /// Both mappings behind one lock so readers never see them out of step
    inner: RwLock<StoreInner>,
    name_separator: String,
    /// Parent span for warnings; `None` drops all diagnostics
    diagnostics: Option<Span>,
}

#[derive(Debug, Default)]
struct StoreInner {
    valid_keys: HashSet<String>,
    keys_by_name: HashMap<String, String>,
}

impl LocalKeyStore {
    /// Create an empty store
    ///
    /// Diagnostics for rejected lines are emitted under a child of
    /// `diagnostics`; pass `None` to drop them.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::EmptyNameSeparator`] if `name_separator` is empty.
    #[must_use = "a key store does nothing unless kept"]
    pub fn new(name_separator: impl Into<String>, diagnostics: Option<Span>) -> Result<Self> {
        let name_separator = name_separator.into();
        if name_separator.is_empty() {
            return Err(AuthError::EmptyNameSeparator);
        }

        let diagnostics = diagnostics
            .map(|parent| info_span!(parent: &parent, "api_keys", service = "api_key_local"));

        Ok(Self {
            inner: RwLock::new(StoreInner::default()),
            name_separator,
            diagnostics,
        })
    }

    /// Create an empty store that reports under the current span
    #[must_use = "a key store does nothing unless kept"]
    pub fn with_diagnostics(name_separator: impl Into<String>) -> Result<Self> {
        Self::new(name_separator, Some(Span::current()))
    }

    /// Build a store from configuration and load every configured file
    ///
    /// Files are loaded in order; the first failing file aborts.
    #[must_use = "a key store does nothing unless kept"]
    pub fn from_config(config: &KeysConfig) -> Result<Self> {
        let diagnostics = config.diagnostics.then(Span::current);
        let store = Self::new(config.name_separator.as_str(), diagnostics)?;

        for path in &config.files {
            store.load(path)?;
        }

        Ok(store)
    }

    /// Separator between service name and API key
    #[inline]
    pub fn name_separator(&self) -> &str {
        &self.name_separator
    }

    /// Load API keys from a file, adding them to the existing ones
    ///
    /// Blank lines, comments and malformed lines are skipped. On error
    /// nothing from the file is kept.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Open`] if the file cannot be opened and
    /// [`AuthError::Scan`] if reading it fails.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<LoadReport> {
        let path = path.as_ref();
        let parsed = self.parse_file(path)?;
        Ok(self.merge(parsed))
    }

    /// Load API keys from any buffered reader
    ///
    /// `origin` stands in for the file path in diagnostics and errors.
    pub fn load_reader<R: BufRead>(&self, reader: R, origin: &str) -> Result<LoadReport> {
        let parsed = self.parse(reader, origin)?;
        Ok(self.merge(parsed))
    }

    /// Reload keys from a file, atomically replacing all existing keys
    ///
    /// # Errors
    ///
    /// Same as [`LocalKeyStore::load`]. On error the existing keys are preserved.
    pub fn reload<P: AsRef<Path>>(&self, path: P) -> Result<LoadReport> {
        let parsed = self.parse_file(path.as_ref())?;
        let report = parsed.report;

        // Atomic swap
        let mut inner = self.inner.write();
        inner.valid_keys = parsed.valid_keys;
        inner.keys_by_name = parsed.keys_by_name;

        Ok(report)
    }

    /// Check if the API key is valid
    ///
    /// Exact match against every key loaded so far.
    #[inline]
    pub fn is_api_key_valid(&self, api_key: &str) -> bool {
        self.inner.read().valid_keys.contains(api_key)
    }

    /// Get the API key currently recorded for a service
    pub fn service_key(&self, service_name: &str) -> Option<String> {
        self.inner.read().keys_by_name.get(service_name).cloned()
    }

    /// Get all service names, sorted
    pub fn services(&self) -> Vec<String> {
        let mut names: Vec<String> = self.inner.read().keys_by_name.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Get the number of valid keys
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.read().valid_keys.len()
    }

    /// Check if the store has no valid keys
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.read().valid_keys.is_empty()
    }

    /// Clear all keys
    pub fn clear(&self) {
        let mut inner = self.inner.write();
        inner.valid_keys.clear();
        inner.keys_by_name.clear();
    }

    fn parse_file(&self, path: &Path) -> Result<ParsedKeys> {
        let origin = path.display().to_string();
        let file = File::open(path).map_err(|e| AuthError::open(origin.as_str(), e))?;

        // The handle is closed when the reader drops, on every path
        self.parse(BufReader::new(file), &origin)
    }

    fn parse<R: BufRead>(&self, reader: R, origin: &str) -> Result<ParsedKeys> {
        let parsed = parse_keys(
            reader,
            &self.name_separator,
            origin,
            self.diagnostics.as_ref(),
        )?;

        if let Some(span) = &self.diagnostics {
            debug!(
                parent: span,
                file_path = %origin,
                loaded = parsed.report.loaded,
                skipped = parsed.report.skipped,
                rejected = parsed.report.rejected,
                "Loaded service API keys"
            );
        }

        Ok(parsed)
    }

    fn merge(&self, parsed: ParsedKeys) -> LoadReport {
        let mut inner = self.inner.write();
        // Later entries win for duplicate service names
        inner.keys_by_name.extend(parsed.keys_by_name);
        inner.valid_keys.extend(parsed.valid_keys);
        parsed.report
    }
}

impl ApiKeyValidator for LocalKeyStore {
    #[inline]
    fn is_api_key_valid(&self, api_key: &str) -> bool {
        LocalKeyStore::is_api_key_valid(self, api_key)
    }
}

impl ApiKeyLoader for LocalKeyStore {
    fn load(&self, path: &Path) -> Result<LoadReport> {
        LocalKeyStore::load(self, path)
    }
}

/// Shared store using Arc for multi-threaded access
pub type SharedKeyStore = Arc<LocalKeyStore>;
