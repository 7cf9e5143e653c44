use super::Aggregator;
use crate::domain::model::{YearTypeRecord, YearTypeSummary};
use crate::utils::error::Result;
use std::collections::HashMap;

/// Sums amounts per `(year, type)` pair. Signs are preserved.
#[derive(Debug, Default, Clone, Copy)]
pub struct YearTypeAggregator;

impl Aggregator for YearTypeAggregator {
    type Input = YearTypeRecord;
    type Output = YearTypeSummary;

    fn aggregate(&self, records: &[YearTypeRecord]) -> Result<Vec<YearTypeSummary>> {
        // Rows are kept in first-seen order; the index maps a key to its row.
        let mut index: HashMap<(i32, String), usize> = HashMap::new();
        let mut rows: Vec<YearTypeSummary> = Vec::new();

        for record in records {
            let year = record.year.parse_year()?;
            let amount = record.amount.parse_amount()?;

            let key = (year, record.kind.clone());
            match index.get(&key) {
                Some(&i) => rows[i].amount += amount,
                None => {
                    index.insert(key, rows.len());
                    rows.push(YearTypeSummary {
                        year,
                        kind: record.kind.clone(),
                        amount,
                    });
                }
            }
        }

        tracing::debug!(
            "Grouped {} records into {} year/type rows",
            records.len(),
            rows.len()
        );
        Ok(rows)
    }
}
