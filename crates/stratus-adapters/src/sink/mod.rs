//! Document sink adapters.

pub mod file;
pub mod memory;
pub mod stdout;

pub use file::FileSink;
pub use memory::MemorySink;
pub use stdout::StdoutSink;
