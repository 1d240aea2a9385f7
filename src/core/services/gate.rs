//! Validation gate - runs the checks and tells the user what failed
//!
//! Wraps the pure validators with a [`Notifier`] so every problem found
//! is surfaced once, the way a form shows one toast per error.

use chrono::NaiveDate;

use super::booking::validate_booking;
use super::fields::validate_field;
use crate::core::models::{BookingForm, BookingReport, Field, Issue, IssueKind, Notice, Policy};
use crate::core::ports::Notifier;

/// Booking gate bound to a notifier and a policy
#[derive(Debug)]
pub struct Gate<N> {
    notifier: N,
    policy: Policy,
}

impl<N: Notifier> Gate<N> {
    /// Create a gate
    pub const fn new(notifier: N, policy: Policy) -> Self {
        Self { notifier, policy }
    }

    /// Policy in effect
    pub const fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Underlying notifier
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Check a booking form, sending one error notice per issue
    pub fn check_booking(&self, form: &BookingForm, today: NaiveDate) -> BookingReport {
        let report = validate_booking(form, &self.policy, today);

        for issue in &report.issues {
            self.notifier.notify(&Notice::from(issue));
        }

        if report.passed {
            log::debug!("booking passed: {} package(s)", report.packages.len());
        } else {
            log::debug!("booking blocked: {} issue(s)", report.issues.len());
        }

        report
    }

    /// Check a single field value, sending an error notice when it fails
    pub fn check_field(&self, field: Field, value: Option<&str>, today: NaiveDate) -> bool {
        let valid = validate_field(field, value, today);
        if !valid {
            let kind = if field.is_required() && value.is_none_or(|v| v.trim().is_empty()) {
                IssueKind::Missing
            } else {
                IssueKind::Invalid
            };
            self.notifier.notify(&Notice::from(&Issue::on_field(field, kind)));
        }
        valid
    }
}
