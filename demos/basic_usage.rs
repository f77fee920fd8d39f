//! Basic usage: required fields loaded from the environment.
//!
//! Run with no variables set to see the rendered report:
//! `cargo run --example basic_usage`

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize)]
struct Settings {
    database_url: String,
    api_key: String,
    #[serde(default = "default_port")]
    port: u16,
}

fn default_port() -> u16 {
    8080
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings: Settings = match envalid::from_env() {
        Ok(settings) => settings,
        Err(report) => {
            eprintln!("{report}");
            std::process::exit(1);
        }
    };

    println!("Connected to {} (port {})", settings.database_url, settings.port);
    let _ = settings.api_key;
}
