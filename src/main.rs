use clap::Parser;
use courier_match::cli::Cli;
use courier_match::config::{LogFormat, LoggingSettings, Settings};
use courier_match::output::{render, OutputFormat};
use courier_match::services::{load_addresses, load_drivers};
use courier_match::{AppError, Matcher, PrimeCache};
use std::io::Write;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use validator::Validate;

fn main() {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize logging on stderr; RUST_LOG wins over the configured level
fn init_logging(logging: &LoggingSettings, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    match format {
        LogFormat::Pretty => subscriber.pretty().init(),
        LogFormat::Compact => subscriber.compact().init(),
        LogFormat::Full => subscriber.init(),
    }
}

fn run(cli: Cli) -> courier_match::Result<()> {
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    settings.validate()?;

    let log_format = settings.logging.log_format().map_err(AppError::InvalidInput)?;
    init_logging(&settings.logging, log_format);
    debug!("Configuration loaded: {:?}", settings);

    let format = match cli.format {
        Some(format) => format,
        None => settings
            .output
            .format
            .parse::<OutputFormat>()
            .map_err(AppError::InvalidInput)?,
    };

    // One cache per run, shared by driver construction and scoring
    let mut cache = PrimeCache::new();

    let mut addresses = load_addresses(&cli.addresses)?;
    let mut drivers = load_drivers(&cli.drivers, &mut cache)?;
    info!("Loaded {} addresses and {} drivers", addresses.len(), drivers.len());

    let matcher = Matcher::new(settings.scoring_weights());
    let report = matcher.report(&mut addresses, &mut drivers, &mut cache)?;
    debug!("Prime cache holds {} primes up to {}", cache.len(), cache.watermark());

    let rendered = render(&report, format)?;
    std::io::stdout().write_all(rendered.as_bytes())?;

    Ok(())
}
