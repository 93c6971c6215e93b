use anyhow::Context;
use clap::Parser;
use composite_gateway::config::toml_config::TomlConfig;
use composite_gateway::domain::ports::ConfigProvider;
use composite_gateway::utils::{logger, validation::Validate};
use composite_gateway::{CompositeGateway, ViewService};

#[derive(Parser)]
#[command(name = "toml-gateway")]
#[command(about = "Composite gateway driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "gateway-config.toml")]
    config: String,

    /// Product id to look up
    #[arg(short, long, default_value = "1")]
    product_id: i32,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON (for log collectors)
    #[arg(long)]
    json_logs: bool,

    /// Dry run - show the resolved configuration without calling anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting TOML-based composite gateway");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("failed to load config file '{}'", args.config))?;

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No downstream calls will be made");
        return Ok(());
    }

    let gateway = CompositeGateway::from_config(&config);
    let view_service = ViewService::new(gateway);

    match view_service.get_product_view(args.product_id).await {
        Ok(view) => {
            tracing::info!(
                "✅ Composite lookup completed for product: {}",
                args.product_id
            );
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        Err(e) => {
            tracing::error!("❌ Composite lookup failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!("  Gateway: {}", config.gateway.name);
    println!("  Product service: {}", config.product_service_url());
    println!(
        "  Recommendation service: {}",
        config.recommendation_service_url()
    );
    println!("  Review service: {}", config.review_service_url());
    println!("  Request timeout: {}s", config.request_timeout_seconds());

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}
