//! Tests for the booking file and notifier adapters

use std::fs;

use tempfile::TempDir;
use tourgate::adapters::{BookingFileError, LogNotifier, MemoryNotifier, load_booking};
use tourgate::core::models::{Notice, NoticeLevel, Policy};
use tourgate::core::ports::Notifier;
use tourgate::core::services::Gate;

use crate::common::{booking, complete_traveler, package, today, traveler};

const BOOKING_JSON: &str = r#"{
  "account_phone": "+56 2 2345 6789",
  "packages": [
    {
      "package_id": 3,
      "package_name": "Torres del Paine",
      "available_seats": 4,
      "passengers": 2,
      "travelers": [
        { "full_name": "María José", "national_id": "12.345.678-5", "birth_date": "05/03/1987" },
        { "full_name": "Ana Rojas", "national_id": "7-8", "email": "" }
      ]
    }
  ]
}"#;

// =============================================================================
// JSON BOOKING FILES
// =============================================================================

#[test]
fn test_load_booking_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("booking.json");
    fs::write(&path, BOOKING_JSON).unwrap();

    let form = load_booking(&path).unwrap();

    assert_eq!(form.account_phone.as_deref(), Some("+56 2 2345 6789"));
    assert_eq!(form.packages.len(), 1);
    assert_eq!(form.packages[0].package_name, "Torres del Paine");
    assert_eq!(form.packages[0].travelers.len(), 2);
    assert_eq!(form.packages[0].travelers[1].email.as_deref(), Some(""));
}

#[test]
fn test_load_invalid_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("booking.json");
    fs::write(&path, "{ not json").unwrap();

    let err = load_booking(&path).unwrap_err();
    assert!(matches!(err, BookingFileError::Parse { .. }));
    assert!(err.to_string().contains("booking.json"));
}

#[test]
fn test_loaded_booking_passes_gate() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("booking.json");
    fs::write(&path, BOOKING_JSON).unwrap();

    let notifier = MemoryNotifier::new();
    let gate = Gate::new(&notifier, Policy::default());
    let report = gate.check_booking(&load_booking(&path).unwrap(), today());

    assert!(report.passed);
    assert!(notifier.is_empty());
    assert_eq!(report.contact_phone.as_deref(), Some("+56 2 2345 6789"));
}

// =============================================================================
// NOTIFIERS
// =============================================================================

#[test]
fn test_memory_notifier_collects_gate_issues() {
    let notifier = MemoryNotifier::new();
    let gate = Gate::new(&notifier, Policy::default());

    let form = booking(vec![package(
        8,
        4,
        2,
        vec![complete_traveler(), traveler("Ana", "12345678-4")],
    )]);
    let report = gate.check_booking(&form, today());

    assert!(!report.passed);
    assert_eq!(notifier.len(), 1);

    let notices = notifier.take();
    assert_eq!(notices[0].level, NoticeLevel::Error);
    assert!(notices[0].message.starts_with("package 8, traveler 2:"));
    assert!(notifier.is_empty());
}

#[test]
fn test_memory_notifier_direct() {
    let notifier = MemoryNotifier::new();
    notifier.notify(&Notice::info("Saved", "booking sent"));
    notifier.notify(&Notice::error("seats ran out"));

    let notices = notifier.notices();
    assert_eq!(notices.len(), 2);
    assert_eq!(notices[0].title, "Saved");
    assert_eq!(notices[1].title, "Error");
    assert_eq!(notifier.len(), 2);
}

#[test]
fn test_log_notifier_accepts_notices() {
    let gate = Gate::new(LogNotifier, Policy::default());
    let form = booking(vec![package(1, 1, 1, vec![complete_traveler()])]);

    assert!(gate.check_booking(&form, today()).passed);
    gate.notifier().notify(&Notice::info("Done", "nothing to report"));
}

#[test]
fn test_boxed_notifier() {
    let notifier: Box<dyn Notifier> = Box::new(MemoryNotifier::new());
    let gate = Gate::new(notifier, Policy::default());

    assert!(!gate.check_field(tourgate::core::models::Field::Email, Some("x"), today()));
}
