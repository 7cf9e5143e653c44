//! The three chart aggregations. Each is a pure function over its own typed
//! record; none depends on another.

pub mod category_share;
pub mod cumulative_year;
pub mod year_type;

pub use category_share::CategoryShareAggregator;
pub use cumulative_year::CumulativeYearAggregator;
pub use year_type::YearTypeAggregator;

use crate::utils::error::Result;

pub trait Aggregator {
    type Input;
    type Output;

    /// Fails on the first record whose numeric fields do not parse; no
    /// partial output is returned.
    fn aggregate(&self, records: &[Self::Input]) -> Result<Vec<Self::Output>>;
}
