//! Output destinations for formatted log lines
//!
//! - `ConsoleDestination`: writes to stdout (or any injected writer)
//! - `FileDestination`: appends to a file
//! - `MemoryWriter`: shared in-memory buffer, handy for capturing console output

mod traits;
mod console;
mod file;
mod memory;

pub use traits::{Destination, DestinationKind, BoxedDestination};
pub use console::ConsoleDestination;
pub use file::FileDestination;
pub use memory::MemoryWriter;
