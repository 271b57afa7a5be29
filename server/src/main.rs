use server::build_app;
use server::settings::{load_config, load_dotenv, read_api_key};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    info!("Initializing GenAI playground");

    load_dotenv();
    let settings = load_config()?;

    let app = build_app(&settings, read_api_key()).inspect_err(|e| error!("⚠️ {}", e))?;
    info!("Routes configured, binding to {}:{}", settings.host, settings.port);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", settings.host, settings.port)).await?;
    info!(
        "Server started successfully, open http://{}:{}/",
        settings.host, settings.port
    );

    axum::serve(listener, app).await?;

    Ok(())
}
