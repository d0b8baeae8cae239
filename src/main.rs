//! # adhancast — Prayer Time Caster
//!
//! Fetches today's prayer times and installs cron triggers that cast the
//! adhan to a Chromecast device at each prayer time.
//!
//! Usage:
//!   adhancast --device "Living Room"                  # Default prayers (fajr dhuhr maghrib)
//!   adhancast --device Kitchen --prayers fajr sunset  # Custom selection
//!   adhancast --device Kitchen --test                 # One trigger, 1 minute from now

use clap::Parser;
use tracing_subscriber::EnvFilter;

use adhancast_core::{AdhanConfig, AdhanError};
use adhancast_schedule::{compile, compile_test, CastCommand, Crontab, OWNER_TAG};
use adhancast_timings::TimingsClient;

#[derive(Parser)]
#[command(
    name = "adhancast",
    version,
    about = "🕌 adhancast — cast the adhan at each prayer time"
)]
struct Cli {
    /// Chromecast device name (required here or in the config file)
    #[arg(short, long)]
    device: Option<String>,

    /// Sound file or stream URL to cast
    #[arg(long)]
    sound: Option<String>,

    /// Prayers to schedule (default: fajr dhuhr maghrib)
    #[arg(long, num_args = 1..)]
    prayers: Vec<String>,

    /// Seek offset into the media, in seconds
    #[arg(long)]
    seek_to: Option<u32>,

    /// Test mode: schedule one trigger to fire 1 minute from now
    #[arg(long)]
    test: bool,

    /// Config file (default: ~/.adhancast/config.toml)
    #[arg(long)]
    config: Option<String>,

    /// Write a plain crontab file at this path instead of the user crontab
    #[arg(long)]
    crontab_file: Option<String>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn expand_path(p: &str) -> String {
    shellexpand::tilde(p).to_string()
}

/// Exit taxonomy: fetch failures are 1, everything else fatal is 2.
fn exit_code(err: &AdhanError) -> i32 {
    match err {
        AdhanError::Fetch(_) => 1,
        _ => 2,
    }
}

fn fatal(err: AdhanError) -> ! {
    eprintln!("❌ {err}");
    std::process::exit(exit_code(&err));
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "adhancast=debug,adhancast_timings=debug,adhancast_schedule=debug"
    } else {
        "adhancast=info,adhancast_timings=info,adhancast_schedule=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_target(false)
        .init();

    // Load config, then let CLI flags override it
    let config = match &cli.config {
        Some(path) => AdhanConfig::load_from(std::path::Path::new(&expand_path(path))),
        None => AdhanConfig::load(),
    }
    .unwrap_or_else(|e| fatal(e));
    tracing::debug!("Using provider endpoint {}", config.api_url);

    let device = cli
        .device
        .clone()
        .or_else(|| (!config.device.is_empty()).then(|| config.device.clone()))
        .unwrap_or_else(|| {
            fatal(AdhanError::Config(
                "No Chromecast device given (use --device or set `device` in config)".into(),
            ))
        });

    let log_file = match config.log_file.as_str() {
        "" => None,
        path => Some(expand_path(path)),
    };
    let cast = CastCommand {
        device,
        sound: expand_path(cli.sound.as_deref().unwrap_or(&config.sound)),
        seek_secs: cli.seek_to.unwrap_or(config.seek_secs),
        log_file,
    };
    let prayers = if cli.prayers.is_empty() {
        config.prayers.clone()
    } else {
        cli.prayers.clone()
    };

    let crontab = match &cli.crontab_file {
        Some(path) => Crontab::file(expand_path(path)),
        None => Crontab::user(),
    };

    // Fetch prayer times
    println!("Fetching prayer times...");
    let times = TimingsClient::new(&config.api_url)
        .fetch()
        .await
        .unwrap_or_else(|e| fatal(e));
    println!("Prayer times for today: {times:?}");

    let entries = if cli.test {
        println!("TEST MODE ENABLED: scheduling one trigger to run 1 minute from now");
        vec![compile_test(chrono::Local::now(), &cast)]
    } else {
        println!("Scheduling the following prayers: {}", prayers.join(", "));
        compile(&times, &prayers, &cast).unwrap_or_else(|e| fatal(e))
    };

    crontab
        .replace_all(OWNER_TAG, &entries)
        .unwrap_or_else(|e| fatal(e));

    println!(
        "✅ {} cron entr{} written",
        entries.len(),
        if entries.len() == 1 { "y" } else { "ies" }
    );
}
