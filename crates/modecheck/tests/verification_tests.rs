//! End-to-end verification against realistic sketch text.

use modecheck::{CheckSpec, ModeCheckError, TableKind, TableSpec, verify_source};

/// A page-scale sketch in the shape the checker is pointed at in practice:
/// definitions scattered through unrelated firmware code, comments in the
/// enum and both tables.
const SKETCH: &str = r#"
#include <AccelStepper.h>

#define STEP_PIN 2
#define DIR_PIN  3

enum TestMode {
    MODE_SLOW,          // slow continuous rotation
    MODE_FAST,          // fast continuous rotation
    MODE_SWEEP = 4,     // back-and-forth sweep
    MODE_STEP_TEST,     // single-step accuracy test
    MODE_COUNT
};

const char *modeNames[] = {
    "Slow",
    "Fast",
    "Sweep",      // oscillating
    "Step Test",
};

const uint32_t modeSpeeds[] = {
    100,
    0x1F4,        // 500, hex to exercise the parser
    250,
    0b1100100,    // 100
};

AccelStepper stepper(AccelStepper::DRIVER, STEP_PIN, DIR_PIN);

void setup() {
    stepper.setMaxSpeed(1000);
}
"#;

#[test]
fn test_realistic_sketch_fails_on_rebased_enum() {
    // MODE_SWEEP = 4 re-bases the enum, so MODE_COUNT lands on 6 while
    // both tables hold 4 entries. Exactly the drift this tool exists for.
    let (expected, actuals) = match verify_source(SKETCH, &CheckSpec::default()) {
        Err(ModeCheckError::Mismatch(report)) => (
            report.expected,
            report.drifts.iter().map(|d| d.actual).collect::<Vec<_>>(),
        ),
        _ => (0, Vec::new()),
    };
    assert_eq!(expected, 6);
    assert_eq!(actuals, vec![4, 4]);
}

#[test]
fn test_aligned_sketch_passes() -> Result<(), ModeCheckError> {
    let sketch = SKETCH.replace("MODE_SWEEP = 4", "MODE_SWEEP");
    let report = verify_source(&sketch, &CheckSpec::default())?;
    assert_eq!(report.mode_count, 4);
    assert_eq!(report.tables.len(), 2);
    assert!(report.tables.iter().all(|t| t.entries == 4));
    Ok(())
}

#[test]
fn test_dropping_one_name_is_pinpointed() {
    let sketch = SKETCH
        .replace("MODE_SWEEP = 4", "MODE_SWEEP")
        .replace("    \"Sweep\",      // oscillating\n", "");
    let message = match verify_source(&sketch, &CheckSpec::default()) {
        Err(err @ ModeCheckError::Mismatch(_)) => err.to_string(),
        other => format!("expected mismatch, got {other:?}"),
    };
    assert!(message.contains("`modeNames` has 3 entries, expected 4"), "{message}");
    assert!(!message.contains("`modeSpeeds` has"), "{message}");
}

#[test]
fn test_members_after_sentinel_are_ignored() -> Result<(), ModeCheckError> {
    let sketch = r#"
enum TestMode { A, B, MODE_COUNT, LEGACY_MODE = not_a_number };
const char *modeNames[] = { "A", "B" };
const uint32_t modeSpeeds[] = { 1, 2 };
"#;
    let report = verify_source(sketch, &CheckSpec::default())?;
    assert_eq!(report.mode_count, 2);
    Ok(())
}

#[test]
fn test_null_placeholder_shrinks_the_names_table() {
    // The quote-only rule drops NULL rather than counting it, so a table
    // padded with placeholders reads short.
    let sketch = r#"
enum TestMode { IDLE, CAL, RUN, MODE_COUNT };
const char *modeNames[] = { "Idle", NULL, "Run" };
const uint32_t modeSpeeds[] = { 0, 50, 200 };
"#;
    let drifted = match verify_source(sketch, &CheckSpec::default()) {
        Err(ModeCheckError::Mismatch(report)) => report
            .drifts
            .iter()
            .map(|d| (d.table.clone(), d.actual))
            .collect(),
        _ => Vec::new(),
    };
    assert_eq!(drifted, vec![("modeNames".to_string(), 2)]);
}

#[test]
fn test_custom_check_spec() -> Result<(), ModeCheckError> {
    let sketch = r#"
enum RampProfile { LINEAR, SCURVE, PROFILE_COUNT };
const char *profileNames[] = { "Linear", "S-Curve" };
const uint32_t profileAccel[] = { 200, 150 };
const uint32_t profileJerk[] = { 10, 5 };
"#;
    let check = CheckSpec {
        enum_name: "RampProfile".to_string(),
        sentinel: "PROFILE_COUNT".to_string(),
        tables: vec![
            TableSpec::new("profileNames", TableKind::Text),
            TableSpec::new("profileAccel", TableKind::Unsigned),
            TableSpec::new("profileJerk", TableKind::Unsigned),
        ],
    };
    let report = verify_source(sketch, &check)?;
    assert_eq!(report.mode_count, 2);
    assert_eq!(report.tables.len(), 3);
    Ok(())
}

#[test]
fn test_renamed_enum_is_a_hard_authoring_error() {
    let sketch = r#"
enum DriveMode { SLOW, FAST, MODE_COUNT };
const char *modeNames[] = { "Slow", "Fast" };
const uint32_t modeSpeeds[] = { 100, 500 };
"#;
    let result = verify_source(sketch, &CheckSpec::default());
    assert!(matches!(result, Err(ModeCheckError::EnumNotFound { .. })));
}
