//! Constrained values: enum-typed fields restrict what the environment
//! may contain. `ENVIRONMENT=warp` renders as invalid, not missing.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Environment {
    #[default]
    Dev,
    Staging,
    Prod,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

#[derive(Debug, Deserialize)]
struct Settings {
    api_key: String,
    #[serde(default)]
    environment: Environment,
    #[serde(default)]
    log_level: LogLevel,
}

fn main() {
    let settings: Settings = match envalid::from_env() {
        Ok(settings) => settings,
        Err(report) => {
            eprintln!("{report}");
            std::process::exit(1);
        }
    };

    println!(
        "Running in {:?} mode at log level {:?}",
        settings.environment, settings.log_level
    );
    let _ = settings.api_key;
}
