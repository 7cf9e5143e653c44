use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting chart ETL process");

        tracing::info!("Extracting transaction records...");
        let raw_data = self.pipeline.extract().await?;
        tracing::info!("Extracted {} records", raw_data.len());

        tracing::info!("Aggregating chart datasets...");
        let transformed = self.pipeline.transform(raw_data).await?;
        for document in &transformed.documents {
            tracing::info!("Chart {}: {} rows", document.kind, document.data.len());
        }

        tracing::info!("Writing chart documents...");
        let output_path = self.pipeline.load(transformed).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
