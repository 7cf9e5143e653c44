use crate::domain::model::{InputFormat, NumericValue, TransactionRow};
use crate::utils::error::Result;
use serde::{Deserialize, Deserializer};

/// CSV cells are always text; numeric parsing happens in the aggregators.
/// An absent column is `None`, an empty cell is `Some("")`.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default, deserialize_with = "cell")]
    year: Option<String>,
    #[serde(default, deserialize_with = "cell")]
    date: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "cell")]
    kind: Option<String>,
    #[serde(default, deserialize_with = "cell")]
    category: Option<String>,
    #[serde(default, deserialize_with = "cell")]
    amount: Option<String>,
}

fn cell<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Some)
}

impl From<CsvRow> for TransactionRow {
    fn from(row: CsvRow) -> Self {
        TransactionRow {
            year: row.year.map(NumericValue::Text),
            date: row.date,
            kind: row.kind,
            category: row.category,
            amount: row.amount.map(NumericValue::Text),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonDocument {
    Rows(Vec<TransactionRow>),
    Wrapped { records: Vec<TransactionRow> },
}

pub fn parse_rows(data: &[u8], format: InputFormat) -> Result<Vec<TransactionRow>> {
    match format {
        InputFormat::Csv => parse_csv(data),
        InputFormat::Json => parse_json(data),
    }
}

fn parse_csv(data: &[u8]) -> Result<Vec<TransactionRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(data);

    let mut rows = Vec::new();
    for result in reader.deserialize::<CsvRow>() {
        rows.push(result?.into());
    }
    Ok(rows)
}

fn parse_json(data: &[u8]) -> Result<Vec<TransactionRow>> {
    let document: JsonDocument = serde_json::from_slice(data)?;
    Ok(match document {
        JsonDocument::Rows(rows) => rows,
        JsonDocument::Wrapped { records } => records,
    })
}
