use crate::domain::model::{ChartKind, InputFormat, OutputFormat, TransactionRow, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    /// Explicit input format; `None` means infer it from the file extension.
    fn input_format(&self) -> Option<InputFormat>;
    fn output_path(&self) -> &str;
    fn charts(&self) -> &[ChartKind];
    fn output_formats(&self) -> &[OutputFormat];
    fn palette(&self) -> Option<&[String]>;
    /// Archive filename when the outputs are bundled into one ZIP.
    fn archive(&self) -> Option<&str>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<TransactionRow>>;
    async fn transform(&self, data: Vec<TransactionRow>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}
