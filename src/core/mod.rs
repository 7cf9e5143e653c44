pub mod aggregators;
pub mod charts;
pub mod etl;
pub mod pipeline;
pub mod source;

pub use crate::domain::model::{TransactionRow, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
