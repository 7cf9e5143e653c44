use super::Aggregator;
use crate::domain::model::{CategoryRecord, CategorySummary};
use crate::utils::error::Result;
use std::collections::HashMap;

/// Sums strictly positive amounts per category and reports each category's
/// share of the overall positive total.
///
/// Non-positive amounts are still parsed, so malformed refunds fail the
/// call, but they never contribute. Categories whose sum stays at zero are
/// left out of the output.
#[derive(Debug, Default, Clone, Copy)]
pub struct CategoryShareAggregator;

impl Aggregator for CategoryShareAggregator {
    type Input = CategoryRecord;
    type Output = CategorySummary;

    fn aggregate(&self, records: &[CategoryRecord]) -> Result<Vec<CategorySummary>> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut sums: Vec<(&str, f64)> = Vec::new();
        let mut total = 0.0;

        for record in records {
            let amount = record.amount.parse_amount()?;

            let slot = *index.entry(record.category.as_str()).or_insert_with(|| {
                sums.push((record.category.as_str(), 0.0));
                sums.len() - 1
            });

            if amount > 0.0 {
                sums[slot].1 += amount;
                total += amount;
            }
        }

        let rows: Vec<CategorySummary> = sums
            .into_iter()
            .filter(|(_, amount)| *amount > 0.0)
            .map(|(category, amount)| CategorySummary {
                category: category.to_string(),
                amount,
                percent: amount / total,
            })
            .collect();

        tracing::debug!(
            "Computed shares for {} of {} categories (total {})",
            rows.len(),
            index.len(),
            total
        );
        Ok(rows)
    }
}
