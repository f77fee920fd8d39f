//! # envalid
//!
//! Readable validation errors for environment-driven configuration.
//!
//! Wraps figment-based settings extraction so that when required
//! environment variables are missing or malformed, the caller gets a
//! bordered, terminal-width-aware report naming each offending field
//! and how to fix it, instead of a raw error chain.
//!
//! ```no_run
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize)]
//! struct Settings {
//!     api_key: String,
//!     database_url: String,
//! }
//!
//! match envalid::from_env::<Settings>() {
//!     Ok(settings) => println!("loaded {settings:?}"),
//!     Err(report) => eprintln!("{report}"),
//! }
//! ```

pub mod layout;
pub mod report;
pub mod validate;

pub use layout::BoxLayout;
pub use report::{ConfigurationError, DEFAULT_HINT, DEFAULT_TITLE, FailureRecord, WidthSource};
pub use validate::{from_env, from_env_file, from_env_prefixed, validate};
