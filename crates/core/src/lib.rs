mod collision;
mod config;
mod error;
mod filters;
mod renamer;
mod timestamp;

#[cfg(test)]
mod testutil;

pub use collision::free_target_path;
pub use config::{app_paths, load_config, AppConfig, AppPaths};
pub use error::RenameError;
pub use filters::{Convention, FilterSet};
pub use renamer::{run_batch, FileRenamer, RenameOutcome, RunTotals};
pub use timestamp::{capture_timestamp, TIMESTAMP_FORMAT};
