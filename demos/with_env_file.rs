//! Load settings from a `.env` file in the working directory.
//!
//! Variables already present in the environment win over the file.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Settings {
    secret_key: String,
    database_url: String,
}

fn main() -> anyhow::Result<()> {
    let settings: Settings = envalid::from_env_file(".env")?;

    println!("Loaded database {}", settings.database_url);
    let _ = settings.secret_key;
    Ok(())
}
