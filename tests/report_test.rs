//! Tests for the configuration error report.

use envalid::{ConfigurationError, FailureRecord, WidthSource};

fn report(pairs: &[(&str, &str)]) -> ConfigurationError {
    ConfigurationError::new(pairs.iter().copied()).with_width(100)
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

// ---------------------------------------------------------------------------
// Record capture
// ---------------------------------------------------------------------------

#[test]
fn stores_records_in_input_order() {
    let err = report(&[("b", "missing"), ("a", "invalid_type"), ("b", "value_error")]);
    let fields: Vec<_> = err.errors().iter().map(|r| r.field.as_str()).collect();
    assert_eq!(fields, ["b", "a", "b"]);
}

#[test]
fn missing_fields_returns_every_field_regardless_of_kind() {
    let records: Vec<FailureRecord> = (0..100)
        .map(|i| {
            let kind = if i % 2 == 0 { "missing" } else { "invalid_type" };
            FailureRecord::new(format!("field_{i}"), kind)
        })
        .collect();
    let err = ConfigurationError::new(records);

    let fields = err.missing_fields();
    assert_eq!(fields.len(), 100);
    for (i, field) in fields.iter().enumerate() {
        assert_eq!(*field, format!("field_{i}"));
    }
}

#[test]
fn construction_copies_caller_records() {
    let mut pairs = vec![("api_key".to_string(), "missing".to_string())];
    let err = ConfigurationError::new(pairs.iter().cloned());

    pairs.clear();
    assert_eq!(err.errors().len(), 1);
    assert_eq!(err.missing_fields(), ["api_key"]);
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[test]
fn empty_batch_renders_short_message() {
    let err = ConfigurationError::new(Vec::<FailureRecord>::new());
    let rendered = err.render();
    assert_eq!(rendered, "\nCONFIGURATION ERROR: No errors\n");
    assert!(!rendered.contains('│'));
    assert!(!rendered.contains('┌'));
}

#[test]
fn missing_field_gets_cross_marker() {
    let rendered = report(&[("api_key", "missing")]).render();
    assert!(rendered.contains("✗ API_KEY (missing)"));
    assert_eq!(rendered.matches('✗').count(), 1);
    assert!(!rendered.contains("! API_KEY"));
}

#[test]
fn invalid_field_gets_bang_marker() {
    let rendered = report(&[("port", "int_parsing")]).render();
    assert!(rendered.contains("! PORT (int_parsing)"));
    assert!(!rendered.contains('✗'));
}

#[test]
fn two_failures_end_to_end() {
    let rendered = report(&[("database_url", "missing"), ("port", "int_parsing")]).render();

    assert!(rendered.contains("✗ DATABASE_URL (missing)"));
    assert!(rendered.contains("! PORT (int_parsing)"));
    assert_eq!(rendered.matches('✗').count(), 1);
    assert_eq!(rendered.matches("! ").count(), 1);
    assert!(rendered.starts_with('\n'));
    assert!(rendered.ends_with('\n'));
}

#[test]
fn report_has_box_structure() {
    let rendered = report(&[("a", "missing")]).render();
    let lines: Vec<_> = rendered.split('\n').collect();

    // blank, top, title, separator, blank line, instruction, blank line,
    // 1 record, blank line, separator, hint, bottom, blank
    assert_eq!(lines.len(), 13);
    assert_eq!(lines[0], "");
    assert!(lines[1].starts_with('┌'));
    assert!(lines[11].starts_with('└'));
    assert_eq!(lines[12], "");
    assert_eq!(rendered.matches('├').count(), 2);
    assert!(rendered.contains("The following environment variables have issues:"));
}

#[test]
fn rendered_lines_share_a_single_width() {
    let rendered = report(&[("a", "missing"), ("b", "bool_parsing")]).render();
    let widths: Vec<_> = rendered
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(char_len)
        .collect();
    assert!(widths.iter().all(|w| *w == widths[0]));
    assert_eq!(widths[0], 80);
}

#[test]
fn fixed_width_drives_box_width() {
    let narrow = report(&[("a", "missing")]).with_width(10).render();
    assert!(narrow.split('\n').filter(|l| !l.is_empty()).all(|l| char_len(l) == 30));

    let wide = report(&[("a", "missing")]).with_width(64).render();
    assert!(wide.split('\n').filter(|l| !l.is_empty()).all(|l| char_len(l) == 60));
}

#[test]
fn auto_width_always_renders_within_limits() {
    // Whether or not stdout is a terminal here, the width lands in 30..=80.
    let err = ConfigurationError::new([("api_key", "missing")])
        .with_width_source(WidthSource::Auto);
    let rendered = err.render();
    let width = char_len(rendered.split('\n').nth(1).unwrap());
    assert!((30..=80).contains(&width), "box width {width} out of range");
}

#[test]
fn render_is_recomputed_per_call() {
    let err = report(&[("a", "missing")]);
    assert_eq!(err.render(), err.render());
    // A different width on the same data produces a different box.
    assert_ne!(err.render(), err.clone().with_width(10).render());
}

#[test]
fn field_names_are_uppercased_with_passthrough() {
    let rendered = report(&[("db-host.name", "missing")]).render();
    assert!(rendered.contains("DB-HOST.NAME"));
}

#[test]
fn overlong_field_name_is_truncated_not_overflowed() {
    let long_field = "very_long_field_name_".repeat(10);
    let rendered = report(&[(long_field.as_str(), "missing")]).render();
    assert!(rendered.split('\n').filter(|l| !l.is_empty()).all(|l| char_len(l) == 80));
    assert!(rendered.contains("..."));
}

// ---------------------------------------------------------------------------
// Title, hint, error trait
// ---------------------------------------------------------------------------

#[test]
fn custom_title_and_hint_appear() {
    let rendered = report(&[("a", "missing")])
        .with_title("STARTUP FAILED")
        .with_hint("See docs/config.md")
        .render();
    assert!(rendered.contains("STARTUP FAILED"));
    assert!(rendered.contains("See docs/config.md"));
    assert!(!rendered.contains("CONFIGURATION ERROR"));
}

#[test]
fn custom_title_used_for_empty_batch() {
    let err = ConfigurationError::new(Vec::<FailureRecord>::new()).with_title("BOOT");
    assert_eq!(err.render(), "\nBOOT: No errors\n");
}

#[test]
fn display_matches_render() {
    let err = report(&[("api_key", "missing")]);
    assert_eq!(err.to_string(), err.render());
}

#[test]
fn usable_as_std_error() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ConfigurationError>();

    let err: Box<dyn std::error::Error> = Box::new(report(&[("a", "missing")]));
    assert!(err.to_string().contains("✗ A (missing)"));
}
