use crate::core::aggregators::{
    Aggregator, CategoryShareAggregator, CumulativeYearAggregator, YearTypeAggregator,
};
use crate::core::charts::chart_spec;
use crate::core::source::parse_rows;
use crate::core::{ConfigProvider, Pipeline, Storage, TransactionRow, TransformResult};
use crate::domain::model::{ChartDataset, ChartDocument, ChartKind, InputFormat, OutputFormat};
use crate::utils::error::{EtlError, Result};
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub struct ChartPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ChartPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn input_format(&self) -> Result<InputFormat> {
        self.config
            .input_format()
            .or_else(|| InputFormat::from_path(self.config.input_path()))
            .ok_or_else(|| EtlError::InvalidConfigValueError {
                field: "input".to_string(),
                value: self.config.input_path().to_string(),
                reason: "Cannot infer input format; use a .csv or .json file or set the format explicitly"
                    .to_string(),
            })
    }

    fn build_dataset(&self, kind: ChartKind, rows: &[TransactionRow]) -> Result<ChartDataset> {
        Ok(match kind {
            ChartKind::YearType => {
                let records = convert(rows, TransactionRow::to_year_type)?;
                ChartDataset::YearType(YearTypeAggregator.aggregate(&records)?)
            }
            ChartKind::CategoryShare => {
                let records = convert(rows, TransactionRow::to_category)?;
                ChartDataset::CategoryShare(CategoryShareAggregator.aggregate(&records)?)
            }
            ChartKind::Cumulative => {
                let records = convert(rows, TransactionRow::to_year_amount)?;
                ChartDataset::Cumulative(CumulativeYearAggregator.aggregate(&records)?)
            }
        })
    }

    /// Serialized files for every document in every configured format.
    fn render_files(&self, result: &TransformResult) -> Result<Vec<(String, Vec<u8>)>> {
        let mut files = Vec::new();
        for document in &result.documents {
            for format in self.config.output_formats() {
                let name = format!("{}.{}", document.kind.file_stem(), format.extension());
                let bytes = match format {
                    OutputFormat::Json => serde_json::to_vec_pretty(document)?,
                    OutputFormat::Csv => dataset_csv(&document.data)?,
                };
                files.push((name, bytes));
            }
        }
        Ok(files)
    }
}

fn convert<T>(
    rows: &[TransactionRow],
    f: impl Fn(&TransactionRow, usize) -> Result<T>,
) -> Result<Vec<T>> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| f(row, i + 1))
        .collect()
}

pub fn dataset_csv(dataset: &ChartDataset) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    // Headers are written by hand so that empty datasets still get one.
    match dataset {
        ChartDataset::YearType(rows) => {
            writer.write_record(["year", "type", "amount"])?;
            for row in rows {
                writer.write_record([
                    row.year.to_string(),
                    row.kind.clone(),
                    row.amount.to_string(),
                ])?;
            }
        }
        ChartDataset::CategoryShare(rows) => {
            writer.write_record(["category", "amount", "percent"])?;
            for row in rows {
                writer.write_record([
                    row.category.clone(),
                    row.amount.to_string(),
                    row.percent.to_string(),
                ])?;
            }
        }
        ChartDataset::Cumulative(rows) => {
            writer.write_record(["year", "value"])?;
            for row in rows {
                writer.write_record([row.year.to_string(), row.value.to_string()])?;
            }
        }
    }
    writer
        .into_inner()
        .map_err(|e| EtlError::IoError(e.into_error()))
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ChartPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<TransactionRow>> {
        let format = self.input_format()?;
        tracing::debug!(
            "Reading {:?} input from: {}",
            format,
            self.config.input_path()
        );

        let data = self.storage.read_file(self.config.input_path()).await?;
        let rows = parse_rows(&data, format)?;

        if rows.is_empty() {
            tracing::warn!("Input contains no transaction records; charts will be empty");
        }
        Ok(rows)
    }

    async fn transform(&self, data: Vec<TransactionRow>) -> Result<TransformResult> {
        let mut documents = Vec::with_capacity(self.config.charts().len());

        for &kind in self.config.charts() {
            let dataset = self.build_dataset(kind, &data)?;
            tracing::debug!("Chart {} has {} rows", kind, dataset.len());

            documents.push(ChartDocument {
                kind,
                title: kind.title().to_string(),
                spec: chart_spec(kind, self.config.palette()),
                data: dataset,
            });
        }

        Ok(TransformResult {
            documents,
            record_count: data.len(),
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let files = self.render_files(&result)?;

        let Some(archive) = self.config.archive() else {
            for (name, bytes) in &files {
                tracing::debug!("Writing {} ({} bytes)", name, bytes.len());
                self.storage.write_file(name, bytes).await?;
            }
            return Ok(self.config.output_path().to_string());
        };

        tracing::debug!("Creating ZIP file {} with {} files", archive, files.len());
        let zip_data = {
            let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
            for (name, bytes) in &files {
                zip.start_file::<_, ()>(name.as_str(), FileOptions::default())?;
                zip.write_all(bytes)?;
            }
            let cursor = zip.finish()?;
            cursor.into_inner()
        };

        tracing::debug!("Writing ZIP file ({} bytes) to storage", zip_data.len());
        self.storage.write_file(archive, &zip_data).await?;

        Ok(format!("{}/{}", self.config.output_path(), archive))
    }
}
