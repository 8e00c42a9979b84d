pub mod cli;
pub mod config;
pub mod error;
pub mod progress;
pub mod report;
pub mod tally;
pub mod walker;

pub use crate::config::AppConfig;
pub use crate::error::{Error, Result};
pub use crate::progress::{ProgressTicker, PROGRESS_INTERVAL};
pub use crate::tally::{ExtensionTally, RankedEntry};
pub use crate::walker::{check_root, walk, ProgressState, TraversalContext, WalkOptions};
