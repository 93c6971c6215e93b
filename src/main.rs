use clap::Parser;
use composite_gateway::utils::{logger, validation::Validate};
use composite_gateway::{CliConfig, CompositeGateway, ViewService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting composite-gateway CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let product_id = config.product_id;

    // 建立三個下游服務的閘道
    let gateway = CompositeGateway::from_config(&config);
    let view_service = ViewService::new(gateway);

    match view_service.get_product_view(product_id).await {
        Ok(view) => {
            tracing::info!("✅ Composite lookup completed for product: {}", product_id);
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
