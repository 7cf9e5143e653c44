use crate::domain::chart::ChartSpec;
use crate::utils::error::{EtlError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MIN_YEAR: i32 = 0;
pub const MAX_YEAR: i32 = 9999;

/// A numeric cell that may arrive as a native number or as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl NumericValue {
    pub fn parse_amount(&self) -> Result<f64> {
        let value = match self {
            NumericValue::Integer(i) => *i as f64,
            NumericValue::Float(f) => *f,
            NumericValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(EtlError::parse("amount", s.as_str(), "empty value"));
                }
                trimmed
                    .parse::<f64>()
                    .map_err(|e| EtlError::parse("amount", s.as_str(), e.to_string()))?
            }
        };

        if !value.is_finite() {
            return Err(EtlError::parse(
                "amount",
                self.to_string(),
                "amount must be a finite number",
            ));
        }
        Ok(value)
    }

    /// Integer years, whole floats, integer text, or text starting with a
    /// `YYYY-MM-DD` date.
    pub fn parse_year(&self) -> Result<i32> {
        let year: i64 = match self {
            NumericValue::Integer(i) => *i,
            NumericValue::Float(f) => {
                if !f.is_finite() || f.fract() != 0.0 {
                    return Err(EtlError::parse(
                        "year",
                        self.to_string(),
                        "year must be a whole number",
                    ));
                }
                *f as i64
            }
            NumericValue::Text(s) => parse_year_text(s)?,
        };

        if year < MIN_YEAR as i64 || year > MAX_YEAR as i64 {
            return Err(EtlError::parse(
                "year",
                self.to_string(),
                format!("year must be between {} and {}", MIN_YEAR, MAX_YEAR),
            ));
        }
        Ok(year as i32)
    }
}

fn parse_year_text(raw: &str) -> Result<i64> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(EtlError::parse("year", raw, "empty value"));
    }
    if let Ok(year) = s.parse::<i64>() {
        return Ok(year);
    }
    s.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        .map(|date| date.year() as i64)
        .ok_or_else(|| EtlError::parse("year", raw, "expected a year or a YYYY-MM-DD date"))
}

impl std::fmt::Display for NumericValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumericValue::Integer(i) => write!(f, "{}", i),
            NumericValue::Float(v) => write!(f, "{}", v),
            NumericValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for NumericValue {
    fn from(value: i64) -> Self {
        NumericValue::Integer(value)
    }
}

impl From<f64> for NumericValue {
    fn from(value: f64) -> Self {
        NumericValue::Float(value)
    }
}

impl From<&str> for NumericValue {
    fn from(value: &str) -> Self {
        NumericValue::Text(value.to_string())
    }
}

/// One transaction as read from the input file. Which fields are required
/// depends on the chart being built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<NumericValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<NumericValue>,
}

impl TransactionRow {
    fn year_value(&self, record: usize) -> Result<NumericValue> {
        match (&self.year, &self.date) {
            (Some(NumericValue::Text(year)), Some(date)) if year.trim().is_empty() => {
                Ok(NumericValue::Text(date.clone()))
            }
            (Some(year), _) => Ok(year.clone()),
            (None, Some(date)) => Ok(NumericValue::Text(date.clone())),
            (None, None) => Err(missing(record, "year")),
        }
    }

    fn amount_value(&self, record: usize) -> Result<NumericValue> {
        self.amount.clone().ok_or_else(|| missing(record, "amount"))
    }

    /// `record` is the 1-based position used in error messages.
    pub fn to_year_type(&self, record: usize) -> Result<YearTypeRecord> {
        Ok(YearTypeRecord {
            year: self.year_value(record)?,
            kind: self.kind.clone().ok_or_else(|| missing(record, "type"))?,
            amount: self.amount_value(record)?,
        })
    }

    pub fn to_category(&self, record: usize) -> Result<CategoryRecord> {
        Ok(CategoryRecord {
            category: self
                .category
                .clone()
                .ok_or_else(|| missing(record, "category"))?,
            amount: self.amount_value(record)?,
        })
    }

    pub fn to_year_amount(&self, record: usize) -> Result<YearAmountRecord> {
        Ok(YearAmountRecord {
            year: self.year_value(record)?,
            amount: self.amount_value(record)?,
        })
    }
}

fn missing(record: usize, field: &str) -> EtlError {
    EtlError::MissingField {
        record,
        field: field.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct YearTypeRecord {
    pub year: NumericValue,
    pub kind: String,
    pub amount: NumericValue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRecord {
    pub category: String,
    pub amount: NumericValue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct YearAmountRecord {
    pub year: NumericValue,
    pub amount: NumericValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearTypeSummary {
    pub year: i32,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub amount: f64,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CumulativePoint {
    pub year: i32,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    YearType,
    CategoryShare,
    Cumulative,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [
        ChartKind::YearType,
        ChartKind::CategoryShare,
        ChartKind::Cumulative,
    ];

    pub fn file_stem(&self) -> &'static str {
        match self {
            ChartKind::YearType => "year_type",
            ChartKind::CategoryShare => "category_share",
            ChartKind::Cumulative => "cumulative",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::YearType => "Amount by year and type",
            ChartKind::CategoryShare => "Share by category",
            ChartKind::Cumulative => "Accumulated amount by year",
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ChartKind::YearType => "year-type",
            ChartKind::CategoryShare => "category-share",
            ChartKind::Cumulative => "cumulative",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    Csv,
    Json,
}

impl InputFormat {
    pub fn from_path(path: &str) -> Option<Self> {
        let extension = Path::new(path).extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Some(InputFormat::Csv),
            "json" => Some(InputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Csv,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChartDataset {
    YearType(Vec<YearTypeSummary>),
    CategoryShare(Vec<CategorySummary>),
    Cumulative(Vec<CumulativePoint>),
}

impl ChartDataset {
    pub fn len(&self) -> usize {
        match self {
            ChartDataset::YearType(rows) => rows.len(),
            ChartDataset::CategoryShare(rows) => rows.len(),
            ChartDataset::Cumulative(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Dataset plus the declarative description a charting library needs to
/// draw it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDocument {
    pub kind: ChartKind,
    pub title: String,
    pub spec: ChartSpec,
    pub data: ChartDataset,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub documents: Vec<ChartDocument>,
    pub record_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_accepts_numbers_and_text() {
        assert_eq!(NumericValue::from(12i64).parse_amount().unwrap(), 12.0);
        assert_eq!(NumericValue::from(-3.5).parse_amount().unwrap(), -3.5);
        assert_eq!(NumericValue::from(" 10.25 ").parse_amount().unwrap(), 10.25);
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        for raw in ["", "abc", "12abc", "NaN", "inf"] {
            let err = NumericValue::from(raw).parse_amount().unwrap_err();
            assert!(
                matches!(err, EtlError::ParseError { ref field, .. } if field == "amount"),
                "{} should fail to parse",
                raw
            );
        }
    }

    #[test]
    fn test_parse_year_variants() {
        assert_eq!(NumericValue::from(2020i64).parse_year().unwrap(), 2020);
        assert_eq!(NumericValue::from(2021.0).parse_year().unwrap(), 2021);
        assert_eq!(NumericValue::from("2019").parse_year().unwrap(), 2019);
        assert_eq!(NumericValue::from("2018-07-14").parse_year().unwrap(), 2018);
        assert_eq!(
            NumericValue::from("2017-01-02T08:00:00Z").parse_year().unwrap(),
            2017
        );
    }

    #[test]
    fn test_parse_year_rejects_invalid() {
        assert!(NumericValue::from(2020.5).parse_year().is_err());
        assert!(NumericValue::from("twenty").parse_year().is_err());
        assert!(NumericValue::from("").parse_year().is_err());
        assert!(NumericValue::from(10000i64).parse_year().is_err());
        assert!(NumericValue::from(-1i64).parse_year().is_err());
    }

    #[test]
    fn test_row_deserializes_mixed_json_types() {
        let row: TransactionRow = serde_json::from_str(
            r#"{"year": "2020", "type": "salary", "amount": 1200.5, "note": "ignored"}"#,
        )
        .unwrap();

        assert_eq!(row.year, Some(NumericValue::Text("2020".to_string())));
        assert_eq!(row.kind.as_deref(), Some("salary"));
        assert_eq!(row.amount, Some(NumericValue::Float(1200.5)));
        assert_eq!(row.category, None);
    }

    #[test]
    fn test_row_uses_date_when_year_missing() {
        let row = TransactionRow {
            date: Some("2022-03-01".to_string()),
            amount: Some(NumericValue::from(5i64)),
            ..Default::default()
        };

        let record = row.to_year_amount(1).unwrap();
        assert_eq!(record.year.parse_year().unwrap(), 2022);
    }

    #[test]
    fn test_row_conversion_reports_missing_field() {
        let row = TransactionRow {
            year: Some(NumericValue::from(2020i64)),
            amount: Some(NumericValue::from(5i64)),
            ..Default::default()
        };

        let err = row.to_year_type(3).unwrap_err();
        assert!(matches!(
            err,
            EtlError::MissingField { record: 3, ref field } if field == "type"
        ));
        assert!(row.to_category(3).is_err());
        assert!(row.to_year_amount(3).is_ok());
    }

    #[test]
    fn test_input_format_from_path() {
        assert_eq!(InputFormat::from_path("data/income.csv"), Some(InputFormat::Csv));
        assert_eq!(InputFormat::from_path("income.JSON"), Some(InputFormat::Json));
        assert_eq!(InputFormat::from_path("income.txt"), None);
        assert_eq!(InputFormat::from_path("income"), None);
    }

    #[test]
    fn test_chart_kind_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&ChartKind::CategoryShare).unwrap(),
            "\"category-share\""
        );
        assert_eq!(ChartKind::CategoryShare.to_string(), "category-share");
    }
}
