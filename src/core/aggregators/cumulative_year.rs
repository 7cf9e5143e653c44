use super::Aggregator;
use crate::domain::model::{CumulativePoint, YearAmountRecord};
use crate::utils::error::Result;
use std::collections::BTreeMap;

/// Running total per year over the full `[min, max]` year range. Years
/// without records repeat the previous total.
#[derive(Debug, Default, Clone, Copy)]
pub struct CumulativeYearAggregator;

impl Aggregator for CumulativeYearAggregator {
    type Input = YearAmountRecord;
    type Output = CumulativePoint;

    fn aggregate(&self, records: &[YearAmountRecord]) -> Result<Vec<CumulativePoint>> {
        let mut per_year: BTreeMap<i32, f64> = BTreeMap::new();
        for record in records {
            let year = record.year.parse_year()?;
            let amount = record.amount.parse_amount()?;
            *per_year.entry(year).or_insert(0.0) += amount;
        }

        let (min_year, max_year) = match (per_year.keys().next(), per_year.keys().next_back()) {
            (Some(&min), Some(&max)) => (min, max),
            _ => return Ok(Vec::new()),
        };

        let mut points = Vec::with_capacity((max_year - min_year + 1) as usize);
        let mut running = 0.0;
        for year in min_year..=max_year {
            if let Some(amount) = per_year.get(&year) {
                running += amount;
            }
            points.push(CumulativePoint {
                year,
                value: running,
            });
        }

        tracing::debug!(
            "Accumulated {} records over {}..={} ({} points)",
            records.len(),
            min_year,
            max_year,
            points.len()
        );
        Ok(points)
    }
}
