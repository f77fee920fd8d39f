//! Configuration failure reporting.
//!
//! Collects (field, kind) failure records and renders them as a bordered,
//! terminal-width-aware report. Only the `"missing"` kind gets its own
//! marker; every other kind renders as invalid.

use crate::layout::BoxLayout;
use serde::Serialize;
use thiserror::Error;

/// Default report title.
pub const DEFAULT_TITLE: &str = "CONFIGURATION ERROR";
/// Default remediation hint shown at the bottom of the report.
pub const DEFAULT_HINT: &str = "Set these in your .env file or environment";

/// Kind tag for absent values. The only tag the renderer special-cases.
pub const KIND_MISSING: &str = "missing";

const FALLBACK_TERM_WIDTH: usize = 80;

// ---------------------------------------------------------------------------
// Failure record
// ---------------------------------------------------------------------------

/// One invalid or absent configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureRecord {
    /// Configuration field name, exactly as reported by the validator.
    /// May be empty or contain whitespace, hyphens, mixed case.
    pub field: String,
    /// Open-ended failure category; only `"missing"` is distinguished.
    pub kind: String,
}

impl FailureRecord {
    pub fn new(field: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: kind.into(),
        }
    }

    fn marker(&self) -> char {
        if self.kind == KIND_MISSING { '✗' } else { '!' }
    }
}

impl<F: Into<String>, K: Into<String>> From<(F, K)> for FailureRecord {
    fn from((field, kind): (F, K)) -> Self {
        Self::new(field, kind)
    }
}

// ---------------------------------------------------------------------------
// Width source
// ---------------------------------------------------------------------------

/// Where the report gets its display width at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidthSource {
    /// Ask the terminal on every render; falls back to 80 columns when
    /// stdout is not a terminal or the query fails.
    #[default]
    Auto,
    /// A fixed width, for deterministic output.
    Fixed(usize),
}

impl WidthSource {
    fn resolve(self) -> usize {
        match self {
            WidthSource::Auto => console::Term::stdout()
                .size_checked()
                .map(|(_rows, cols)| cols as usize)
                .unwrap_or(FALLBACK_TERM_WIDTH),
            WidthSource::Fixed(width) => width,
        }
    }
}

// ---------------------------------------------------------------------------
// Configuration error
// ---------------------------------------------------------------------------

/// Validation failure carrying the full batch of offending fields.
///
/// Immutable once constructed. `Display` renders the bordered report fresh
/// on every call, so the box always tracks the terminal width at the moment
/// it is printed.
#[derive(Debug, Clone, Error)]
#[error("{}", self.render())]
pub struct ConfigurationError {
    errors: Vec<FailureRecord>,
    title: String,
    hint: String,
    width: WidthSource,
}

impl ConfigurationError {
    /// Capture a batch of failures.
    ///
    /// Records are taken by value, so later changes to the caller's
    /// collection cannot affect an already-constructed report.
    pub fn new<I, R>(errors: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<FailureRecord>,
    {
        Self {
            errors: errors.into_iter().map(Into::into).collect(),
            title: DEFAULT_TITLE.to_string(),
            hint: DEFAULT_HINT.to_string(),
            width: WidthSource::default(),
        }
    }

    /// Override the report title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Override the remediation hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    /// Render at a fixed width instead of querying the terminal.
    pub fn with_width(self, width: usize) -> Self {
        self.with_width_source(WidthSource::Fixed(width))
    }

    /// Override where the display width comes from.
    pub fn with_width_source(mut self, source: WidthSource) -> Self {
        self.width = source;
        self
    }

    /// The recorded failures, in the order they were supplied.
    pub fn errors(&self) -> &[FailureRecord] {
        &self.errors
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// Field names of every recorded failure, in input order.
    ///
    /// Covers all kinds, not just `"missing"` — the name is kept for
    /// compatibility with callers that predate invalid-value reporting.
    pub fn missing_fields(&self) -> Vec<&str> {
        self.errors
            .iter()
            .map(|record| record.field.as_str())
            .collect()
    }

    /// Render the full report.
    ///
    /// Recomputed on every call, never cached.
    pub fn render(&self) -> String {
        if self.errors.is_empty() {
            return format!("\n{}: No errors\n", self.title);
        }

        let layout = BoxLayout::new(self.width.resolve());

        let mut lines = vec![
            String::new(),
            layout.top(),
            layout.line(&self.title),
            layout.separator(),
            layout.blank(),
            layout.line("The following environment variables have issues:"),
            layout.blank(),
        ];

        for record in &self.errors {
            lines.push(layout.line(&format!(
                "  {} {} ({})",
                record.marker(),
                record.field.to_uppercase(),
                record.kind
            )));
        }

        lines.extend([
            layout.blank(),
            layout.separator(),
            layout.line(&self.hint),
            layout.bottom(),
            String::new(),
        ]);

        lines.join("\n")
    }
}
