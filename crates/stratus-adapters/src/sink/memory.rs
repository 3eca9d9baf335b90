//! In-memory sink for testing.

use std::sync::{Arc, RwLock};

use stratus_core::{
    application::{ApplicationError, ports::DocumentSink},
    error::StratusResult,
};

/// Records every written document. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    inner: Arc<RwLock<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All documents written so far, oldest first.
    pub fn documents(&self) -> Vec<String> {
        self.inner.read().map(|docs| docs.clone()).unwrap_or_default()
    }

    /// The most recent document.
    pub fn last(&self) -> Option<String> {
        self.inner.read().ok()?.last().cloned()
    }

    pub fn clear(&self) -> StratusResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| lock_failed())?;
        inner.clear();
        Ok(())
    }
}

impl DocumentSink for MemorySink {
    fn write(&self, contents: &str) -> StratusResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_failed())?;
        inner.push(contents.to_string());
        Ok(())
    }

    fn destination(&self) -> String {
        "memory".into()
    }
}

fn lock_failed() -> ApplicationError {
    ApplicationError::SinkFailed {
        destination: "memory".into(),
        reason: "buffer lock poisoned".into(),
    }
}
