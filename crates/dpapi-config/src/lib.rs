//! Configuration documents: loading, rendering and change sets, plus the
//! runtime settings of the command line tool.

pub mod changes;
pub mod loader;
pub mod runtime;
pub mod utils;

pub use changes::{ChangeAction, ChangeSet, SectionChange};
pub use loader::{DocumentFormat, load, render};
pub use runtime::{OutputFormat, RuntimeConfig};

/// How deep `load` descends into a configuration directory.
pub const MAX_DEPTH: u16 = 10;
