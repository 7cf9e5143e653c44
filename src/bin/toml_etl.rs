use clap::Parser;
use income_charts::core::ConfigProvider;
use income_charts::utils::{logger, validation::Validate};
use income_charts::{ChartPipeline, EtlEngine, LocalStorage, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-etl")]
#[command(about = "Chart ETL driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "income-charts.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the archive filename from config
    #[arg(long)]
    archive: Option<String>,

    /// Dry run - show what would be processed without executing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 載入 TOML 配置
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 初始化日誌
    let logging = config.logging();
    if logging.json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose || logging.verbose);
    }

    tracing::info!("🚀 Starting TOML-based chart ETL");
    tracing::info!("📁 Configuration loaded from: {}", args.config);

    // 應用命令列覆蓋設定
    if let Some(filename) = args.archive.clone() {
        tracing::info!("🔧 Archive overridden to: {}", filename);
        config.load.archive = Some(income_charts::config::toml_config::ArchiveConfig {
            enabled: true,
            filename,
        });
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be written");
        perform_dry_run(&config);
        return Ok(());
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = ChartPipeline::new(storage, config);
    let engine = EtlEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Chart ETL completed successfully!");
            println!("✅ Chart ETL completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Chart ETL failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            std::process::exit(e.severity().exit_code());
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!(
        "  Pipeline: {} v{}",
        config.pipeline.name, config.pipeline.version
    );
    if let Some(description) = &config.pipeline.description {
        println!("  Description: {}", description);
    }
    println!("  Source: {}", config.input_path());
    println!("  Output: {}", config.output_path());
    println!("  Charts: {}", join(config.charts()));
    println!("  Formats: {}", join(config.output_formats()));

    if let Some(archive) = config.archive() {
        println!("  Archive: {}", archive);
    }

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &TomlConfig) {
    println!("🔍 Dry Run Analysis:");
    println!();

    println!("📡 Data Source:");
    println!("  Path: {}", config.input_path());
    match config.input_format() {
        Some(format) => println!("  Format: {:?} (configured)", format),
        None => println!("  Format: inferred from file extension"),
    }

    println!();
    println!("💾 Planned Output:");
    for kind in config.charts() {
        for format in config.output_formats() {
            println!("  {}.{}  ({})", kind.file_stem(), format.extension(), kind.title());
        }
    }
    if let Some(archive) = config.archive() {
        println!("  Bundled into: {}/{}", config.output_path(), archive);
    }

    if let Some(palette) = config.palette() {
        println!();
        println!("🎨 Palette: {}", palette.join(" "));
    }

    println!();
    println!("✅ Dry run analysis complete. Use --verbose for more details during actual run.");
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
