pub mod etl;
pub mod parse;
pub mod pipeline;

pub use crate::domain::model::{Rank, RankedEntry, Snapshot, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
