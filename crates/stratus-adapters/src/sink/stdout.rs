//! Standard output sink.

use std::io::{self, Write};

use stratus_core::{
    application::{ApplicationError, ports::DocumentSink},
    error::StratusResult,
};

/// Production sink: writes the document to stdout and flushes.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentSink for StdoutSink {
    fn write(&self, contents: &str) -> StratusResult<()> {
        let mut out = io::stdout().lock();
        out.write_all(contents.as_bytes())
            .and_then(|()| out.flush())
            .map_err(|e| {
                ApplicationError::SinkFailed {
                    destination: self.destination(),
                    reason: e.to_string(),
                }
                .into()
            })
    }

    fn destination(&self) -> String {
        "stdout".into()
    }
}
