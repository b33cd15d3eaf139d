pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{etl::EtlEngine, pipeline::SnapshotPipeline};
pub use domain::model::{Rank, RankedEntry, Snapshot};
pub use utils::error::{EtlError, Result};
