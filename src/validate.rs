//! Validation glue over figment.
//!
//! Extracts a typed settings struct from environment (and optionally
//! dotenv-file) providers. On failure, walks figment's per-field errors and
//! translates each into a [`FailureRecord`], producing a
//! [`ConfigurationError`] report. Nothing else is caught or suppressed.

use crate::report::{ConfigurationError, FailureRecord, KIND_MISSING};
use figment::providers::Env;
use figment::{Figment, error::Kind};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::warn;

/// Extract settings from an arbitrary figment.
///
/// Use this when the application composes its own providers (files,
/// profiles, prefixed env). The convenience functions below cover the
/// common environment-only cases.
pub fn validate<T: DeserializeOwned>(figment: &Figment) -> Result<T, ConfigurationError> {
    figment.extract().map_err(|err| {
        let report = ConfigurationError::from(err);
        warn!(
            failures = report.errors().len(),
            "configuration validation failed"
        );
        report
    })
}

/// Extract settings from environment variables.
///
/// Variable names are case-folded to field names, so `DATABASE_URL` fills
/// a `database_url` field.
pub fn from_env<T: DeserializeOwned>() -> Result<T, ConfigurationError> {
    validate(&Figment::from(Env::raw()))
}

/// Extract settings from environment variables sharing a prefix.
///
/// `from_env_prefixed::<T>("APP_")` reads `APP_PORT` into `port`.
pub fn from_env_prefixed<T: DeserializeOwned>(prefix: &str) -> Result<T, ConfigurationError> {
    validate(&Figment::from(Env::prefixed(prefix)))
}

/// Load a dotenv file into the process environment, then extract settings.
///
/// A missing file is not an error; variables already present in the
/// environment win over the file's values.
pub fn from_env_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigurationError> {
    let _ = dotenvy::from_path(path.as_ref());
    from_env()
}

impl From<figment::Error> for ConfigurationError {
    fn from(err: figment::Error) -> Self {
        let records: Vec<FailureRecord> = err.into_iter().map(|e| record_for(&e)).collect();
        ConfigurationError::new(records)
    }
}

fn record_for(error: &figment::Error) -> FailureRecord {
    let kind = kind_tag(&error.kind);
    let field = match &error.kind {
        Kind::MissingField(name) => name.to_string(),
        _ => error
            .path
            .last()
            .cloned()
            .unwrap_or_else(|| "unknown".to_string()),
    };
    FailureRecord::new(field, kind)
}

/// Map figment's error kinds onto pass-through category tags. Downstream,
/// only `"missing"` changes how a record renders.
fn kind_tag(kind: &Kind) -> &'static str {
    match kind {
        Kind::MissingField(_) => KIND_MISSING,
        Kind::InvalidType(..) => "invalid_type",
        Kind::InvalidValue(..) => "invalid_value",
        Kind::InvalidLength(..) => "invalid_length",
        Kind::UnknownField(..) => "unknown_field",
        Kind::UnknownVariant(..) => "unknown_variant",
        Kind::DuplicateField(_) => "duplicate_field",
        _ => "value_error",
    }
}
