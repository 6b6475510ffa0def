//! Load the calendar configuration once and hand out cached snapshots.
//!
//! A [`Session`] wraps a [`ConfigSource`] (a file, a datastore document, a
//! fixed value in tests). The first call to [`Session::config`] loads from the
//! source; later calls return the cached value until [`Session::invalidate`].

use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::config::CalendarConfig;
use crate::error::Result;

/// Somewhere a [`CalendarConfig`] can be fetched from.
pub trait ConfigSource: Send + Sync {
    fn load(&self) -> Result<CalendarConfig>;
}

/// A source that always returns the same configuration.
#[derive(Debug, Clone)]
pub struct StaticSource(pub CalendarConfig);

impl ConfigSource for StaticSource {
    fn load(&self) -> Result<CalendarConfig> {
        Ok(self.0.clone())
    }
}

/// A source holding a configuration document as JSON text.
#[derive(Debug, Clone)]
pub struct JsonSource(pub String);

impl ConfigSource for JsonSource {
    fn load(&self) -> Result<CalendarConfig> {
        CalendarConfig::from_json(&self.0)
    }
}

/// Memoizes the configuration of one source for the lifetime of the session.
#[derive(Debug)]
pub struct Session<S> {
    source: S,
    cached: Mutex<Option<Arc<CalendarConfig>>>,
}

impl<S: ConfigSource> Session<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cached: Mutex::new(None),
        }
    }

    /// Cached configuration, loading it from the source on first use.
    ///
    /// A failed load is not cached; the next call retries the source.
    pub fn config(&self) -> Result<Arc<CalendarConfig>> {
        let mut cached = self.cached.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(config) = cached.as_ref() {
            return Ok(Arc::clone(config));
        }
        let config = Arc::new(self.source.load()?);
        debug!(
            calendar_id = %config.calendar_id,
            timezone = %config.timezone.name(),
            "Loaded calendar configuration"
        );
        *cached = Some(Arc::clone(&config));
        Ok(config)
    }

    /// Drop the cached configuration so the next access reloads it.
    pub fn invalidate(&self) {
        *self.cached.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
