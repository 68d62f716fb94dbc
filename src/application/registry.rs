use crate::adapters::outbound::{ConsoleSink, FileSink, MultiSink};
use crate::common::{LoggerError, LoggerResult};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, Weak};

/// Maps a logger identity to the sinks attached to it.
///
/// Consulted before any sink is opened, so constructing a second logger with an
/// identity that is already configured reuses the existing sinks instead of
/// attaching a duplicate file and console handle. Entries are weak: once the
/// last logger holding a set of sinks is dropped the file handle is released
/// and the identity counts as unattached.
#[derive(Default)]
pub struct SinkRegistry {
    entries: Mutex<HashMap<String, Weak<MultiSink>>>,
}

static GLOBAL_REGISTRY: Lazy<SinkRegistry> = Lazy::new(SinkRegistry::new);

/// Process-wide registry used by `EventLogger::new`.
pub fn global_registry() -> &'static SinkRegistry {
    &GLOBAL_REGISTRY
}

impl SinkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Weak<MultiSink>>> {
        let mut entries = self.entries.lock().unwrap_or_else(|p| p.into_inner());
        entries.retain(|_, sinks| sinks.strong_count() > 0);
        entries
    }

    /// Return the sinks for `identity`, opening them if the identity is new.
    ///
    /// `console` is only attached on first registration. An identity already
    /// attached to a different file is rejected.
    pub fn attach(
        &self,
        identity: &str,
        path: &Path,
        console: ConsoleSink,
    ) -> LoggerResult<Arc<MultiSink>> {
        let mut entries = self.lock();

        if let Some(existing) = entries.get(identity).and_then(Weak::upgrade) {
            if existing.path() != path {
                return Err(LoggerError::IdentityConflict {
                    identity: identity.to_string(),
                    existing: existing.path().to_path_buf(),
                    requested: path.to_path_buf(),
                });
            }
            tracing::debug!(identity, "sinks already attached, skipping");
            return Ok(existing);
        }

        let file = FileSink::open(path)?;
        let sinks = Arc::new(MultiSink::new(file, Some(Box::new(console))));
        entries.insert(identity.to_string(), Arc::downgrade(&sinks));
        tracing::debug!(identity, path = %path.display(), "attached file and console sinks");
        Ok(sinks)
    }

    /// Forget `identity`. Returns the sinks that were attached, if any are still alive.
    pub fn detach(&self, identity: &str) -> Option<Arc<MultiSink>> {
        self.lock().remove(identity).and_then(|sinks| sinks.upgrade())
    }

    /// Forget `identity` only while it still maps to `sinks`.
    ///
    /// A logger closed late must not evict sinks attached after an earlier close.
    pub fn detach_sinks(&self, identity: &str, sinks: &Arc<MultiSink>) -> bool {
        let mut entries = self.lock();
        match entries.get(identity) {
            Some(current) if std::ptr::eq(current.as_ptr(), Arc::as_ptr(sinks)) => {
                entries.remove(identity);
                true
            }
            _ => false,
        }
    }

    pub fn is_attached(&self, identity: &str) -> bool {
        self.lock().contains_key(identity)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
