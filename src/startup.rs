use crate::components::economic_calendar::countries::unsupported_countries;
use crate::components::economic_calendar::{CalendarClient, CalendarOutput};
use crate::config::Config;
use crate::error::{other_error, CalendarResult};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,reqwest=warn,hyper=warn")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| other_error(&format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load the application config
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Fetch the calendar once with the configured inputs
pub async fn fetch(config: &Config) -> CalendarResult<Option<CalendarOutput>> {
    let client = CalendarClient::with_endpoint(&config.endpoint)?;

    let unknown = unsupported_countries(&config.countries);
    if !unknown.is_empty() {
        warn!("Requesting unsupported country codes: {}", unknown.join(","));
    }

    let return_type = config.return_type();
    info!(
        "Fetching economic calendar from {} as {}",
        client.endpoint(),
        return_type
    );

    client
        .get_calendar(&config.window_input(), config.country_filter(), &return_type)
        .await
}

/// Render an output the way the binary prints it
pub fn render(output: Option<&CalendarOutput>) -> CalendarResult<String> {
    match output {
        None => Ok("None".to_string()),
        Some(CalendarOutput::Table(table)) => Ok(table.to_string()),
        Some(CalendarOutput::Status(serde_json::Value::String(status))) => Ok(status.clone()),
        Some(output) => Ok(serde_json::to_string_pretty(&output.to_json())?),
    }
}

/// Fetch and print the calendar
pub async fn run(config: Config) -> miette::Result<()> {
    let output = fetch(&config).await?;
    println!("{}", render(output.as_ref())?);

    info!("Done");
    Ok(())
}
