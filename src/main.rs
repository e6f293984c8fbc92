use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use word_lookup::domain::ports::ConfigProvider;
use word_lookup::utils::{logger, validation::Validate};
use word_lookup::{server, AppState, CliArgs, LookupProxy, ReqwestClient, ServiceConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let mut config = ServiceConfig::load_or_default(&args.config)
        .with_context(|| format!("Failed to load config file '{}'", args.config))?;
    args.apply_overrides(&mut config);

    logger::init_logger(&config.logging.level, args.verbose, config.logging.json);

    tracing::info!("Starting word-lookup");
    tracing::debug!("Effective config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        return Err(e).context("Invalid configuration");
    }

    let client = ReqwestClient::from_config(&config).context("Failed to build HTTP client")?;
    let proxy = LookupProxy::new(client, config.upstream_base_url())?;
    let state = Arc::new(AppState::new(proxy, config.max_body_size()));

    let listener = server::bind(&config.bind_address()).await?;
    tracing::info!(
        "Listening on http://{} (upstream: {}, timeout: {}s)",
        listener.local_addr()?,
        config.upstream_base_url(),
        config.request_timeout().as_secs()
    );

    server::serve(listener, state, shutdown_signal()).await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
