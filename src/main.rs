use catalog_admin::AdminConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_admin=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AdminConfig::from_env().unwrap_or_else(|e| {
        tracing::warn!("invalid configuration, using defaults: {e}");
        AdminConfig::default()
    });
    tracing::info!(?config, "starting");

    catalog_admin::run_gui(config)
}
