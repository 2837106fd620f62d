use eventboard::startup;
use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Load configuration; logging goes to the file it names
    let config = startup::load_config().await?;

    // Initialize logging
    let log_file = config.read().await.log_file.clone();
    startup::init_logging(&log_file)?;

    info!("Starting eventboard");

    // Start the dashboard
    startup::start_dashboard(config).await
}
