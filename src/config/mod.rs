pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use crate::core::ConfigProvider;
    use crate::domain::model::{ChartKind, InputFormat, OutputFormat};
    use crate::utils::error::Result;
    use crate::utils::validation::{
        validate_file_extensions, validate_hex_colors, validate_non_empty_list, validate_path,
        Validate,
    };
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "income-charts")]
    #[command(about = "Aggregate transaction records into chart datasets")]
    pub struct CliConfig {
        /// CSV or JSON file with year/type/category/amount columns
        #[arg(short, long)]
        pub input: String,

        /// Input format; inferred from the file extension when omitted
        #[arg(long, value_enum)]
        pub input_format: Option<InputFormat>,

        #[arg(long, default_value = "./output")]
        pub output_path: String,

        #[arg(long, value_enum, value_delimiter = ',', default_values_t = ChartKind::ALL)]
        pub charts: Vec<ChartKind>,

        #[arg(long, value_enum, value_delimiter = ',', default_values_t = [OutputFormat::Json])]
        pub formats: Vec<OutputFormat>,

        /// Comma-separated hex colors for categorical series
        #[arg(long, value_delimiter = ',')]
        pub palette: Option<Vec<String>>,

        /// Bundle every output file into this ZIP archive
        #[arg(long)]
        pub archive: Option<String>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON lines")]
        pub log_json: bool,
    }

    impl ConfigProvider for CliConfig {
        fn input_path(&self) -> &str {
            &self.input
        }

        fn input_format(&self) -> Option<InputFormat> {
            self.input_format
        }

        fn output_path(&self) -> &str {
            &self.output_path
        }

        fn charts(&self) -> &[ChartKind] {
            &self.charts
        }

        fn output_formats(&self) -> &[OutputFormat] {
            &self.formats
        }

        fn palette(&self) -> Option<&[String]> {
            self.palette.as_deref()
        }

        fn archive(&self) -> Option<&str> {
            self.archive.as_deref()
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_path("input", &self.input)?;
            if self.input_format.is_none() {
                validate_file_extensions("input", std::slice::from_ref(&self.input), &["csv", "json"])?;
            }
            validate_path("output_path", &self.output_path)?;
            validate_non_empty_list("charts", &self.charts)?;
            validate_non_empty_list("formats", &self.formats)?;
            if let Some(palette) = &self.palette {
                validate_non_empty_list("palette", palette)?;
                validate_hex_colors("palette", palette)?;
            }
            if let Some(archive) = &self.archive {
                validate_file_extensions("archive", std::slice::from_ref(archive), &["zip"])?;
            }
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_defaults() {
            let config = CliConfig::try_parse_from(["income-charts", "--input", "income.csv"]).unwrap();

            assert_eq!(config.output_path, "./output");
            assert_eq!(config.charts, ChartKind::ALL.to_vec());
            assert_eq!(config.formats, vec![OutputFormat::Json]);
            assert!(config.palette.is_none());
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_comma_separated_lists() {
            let config = CliConfig::try_parse_from([
                "income-charts",
                "-i",
                "income.json",
                "--charts",
                "cumulative,category-share",
                "--formats",
                "json,csv",
                "--palette",
                "#000000,#FFFFFF",
                "--archive",
                "charts.zip",
            ])
            .unwrap();

            assert_eq!(
                config.charts,
                vec![ChartKind::Cumulative, ChartKind::CategoryShare]
            );
            assert_eq!(config.formats, vec![OutputFormat::Json, OutputFormat::Csv]);
            assert_eq!(config.palette().unwrap().len(), 2);
            assert_eq!(config.archive(), Some("charts.zip"));
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_validation_rejects_bad_values() {
            let config = CliConfig::try_parse_from(["income-charts", "-i", "income.xlsx"]).unwrap();
            assert!(config.validate().is_err());

            let config = CliConfig::try_parse_from([
                "income-charts",
                "-i",
                "income.xlsx",
                "--input-format",
                "csv",
            ])
            .unwrap();
            assert!(config.validate().is_ok());

            let config = CliConfig::try_parse_from([
                "income-charts",
                "-i",
                "income.csv",
                "--palette",
                "red",
            ])
            .unwrap();
            assert!(config.validate().is_err());

            let config = CliConfig::try_parse_from([
                "income-charts",
                "-i",
                "income.csv",
                "--archive",
                "charts.tar",
            ])
            .unwrap();
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_unknown_chart_kind_is_rejected() {
            let result =
                CliConfig::try_parse_from(["income-charts", "-i", "a.csv", "--charts", "radar"]);
            assert!(result.is_err());
        }
    }
}
