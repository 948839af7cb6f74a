//! Library components of the `adprep` command-line tool.

pub mod logging;
pub mod pipeline;
pub mod progress;
pub mod settings;
