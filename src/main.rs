use economic_calendar::startup;
use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting economic calendar");

    // Load configuration
    let config = startup::load_config()?;

    // Fetch and print
    startup::run(config).await
}
