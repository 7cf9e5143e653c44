pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use crate::core::aggregators::{
    Aggregator, CategoryShareAggregator, CumulativeYearAggregator, YearTypeAggregator,
};
pub use crate::core::{etl::EtlEngine, pipeline::ChartPipeline};
pub use utils::error::{EtlError, Result};
