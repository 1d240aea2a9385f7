//! Booking gate - checks a checkout form before the reservation call
//!
//! Pure business logic: the caller supplies the form, the policy and the
//! date to treat as "today", and receives a [`BookingReport`]. Nothing here
//! performs I/O or notifies anyone; see [`Gate`](super::Gate) for that.

use chrono::NaiveDate;

use super::fields::{
    is_valid_birth_date_on, is_valid_email, is_valid_name, is_valid_phone, non_blank,
    parse_birth_date,
};
use super::national_id::is_valid_national_id;
use crate::core::models::{
    BookingForm, BookingReport, Field, Issue, IssueKind, PackageBooking, PackageReservation,
    Policy, TravelerForm, TravelerRecord,
};

/// Validate one traveler form
///
/// Fields are checked in form order: name and RUT are required, email,
/// phone and birth date are optional (phone becomes required under
/// [`Policy::require_phone`]). Every failing field produces one issue.
///
/// # Returns
///
/// The normalized record when every field passes, otherwise the issues
/// found (without package or traveler numbers attached).
pub fn validate_traveler(
    form: &TravelerForm,
    policy: &Policy,
    today: NaiveDate,
) -> Result<TravelerRecord, Vec<Issue>> {
    let mut issues = Vec::new();

    let name = non_blank(form.value(Field::Name));
    if name.is_none() {
        issues.push(Issue::on_field(Field::Name, IssueKind::Missing));
    } else if !is_valid_name(name) {
        issues.push(Issue::on_field(Field::Name, IssueKind::Invalid));
    }

    let national_id = non_blank(form.value(Field::NationalId));
    if national_id.is_none() {
        issues.push(Issue::on_field(Field::NationalId, IssueKind::Missing));
    } else if !is_valid_national_id(national_id) {
        issues.push(Issue::on_field(Field::NationalId, IssueKind::Invalid));
    }

    let email = non_blank(form.value(Field::Email));
    if !is_valid_email(email) {
        issues.push(Issue::on_field(Field::Email, IssueKind::Invalid));
    }

    let phone = non_blank(form.value(Field::Phone));
    if phone.is_none() && policy.require_phone {
        issues.push(Issue::on_field(Field::Phone, IssueKind::Missing));
    } else if !is_valid_phone(phone) {
        issues.push(Issue::on_field(Field::Phone, IssueKind::Invalid));
    }

    let birth_date = non_blank(form.value(Field::BirthDate));
    if !is_valid_birth_date_on(birth_date, today) {
        issues.push(Issue::on_field(Field::BirthDate, IssueKind::Invalid));
    }

    match (name, national_id) {
        (Some(name), Some(national_id)) if issues.is_empty() => Ok(TravelerRecord {
            full_name: name.to_string(),
            national_id: national_id.to_string(),
            birth_date: birth_date.and_then(parse_birth_date),
            phone: phone.map(str::to_string),
            email: email.map(str::to_string),
        }),
        _ => Err(issues),
    }
}

/// Validate every package of a booking form
///
/// Per package, in order:
/// - at least one passenger
/// - no more passengers than available seats
/// - one valid traveler form per passenger (extra forms are ignored)
///
/// A package that fails the passenger or seat rule is not inspected
/// further. The contact phone (see [`contact_phone`]) is only filled in
/// when the booking passes.
#[must_use]
pub fn validate_booking(form: &BookingForm, policy: &Policy, today: NaiveDate) -> BookingReport {
    let mut issues = Vec::new();
    let mut packages = Vec::new();

    if form.packages.is_empty() {
        issues.push(Issue::general(IssueKind::EmptyBooking, "the cart is empty"));
    }

    for package in &form.packages {
        match validate_package(package, policy, today) {
            Ok(reservation) => packages.push(reservation),
            Err(mut found) => {
                log::debug!("package {} failed with {} issue(s)", package.package_id, found.len());
                issues.append(&mut found);
            },
        }
    }

    let passed = issues.is_empty();
    BookingReport {
        passed,
        issues,
        packages,
        contact_phone: if passed { contact_phone(form) } else { None },
    }
}

/// Phone to attach to the reservation
#[must_use]
pub fn contact_phone(form: &BookingForm) -> Option<String> {
    form.packages
        .first()
        .and_then(|package| package.travelers.first())
        .and_then(|traveler| non_blank(traveler.phone.as_deref()))
        .or_else(|| non_blank(form.account_phone.as_deref()))
        .map(str::to_string)
}

fn validate_package(
    package: &PackageBooking,
    policy: &Policy,
    today: NaiveDate,
) -> Result<PackageReservation, Vec<Issue>> {
    let id = package.package_id;
    let name = package_label(package);

    if package.passengers == 0 {
        return Err(vec![
            Issue::general(
                IssueKind::InvalidPassengerCount,
                format!("at least one passenger is required for {name}"),
            )
            .in_package(id),
        ]);
    }

    if package.available_seats < package.passengers {
        return Err(vec![
            Issue::general(
                IssueKind::NoSeats,
                format!(
                    "not enough seats in {name}: {} available, {} requested",
                    package.available_seats, package.passengers
                ),
            )
            .in_package(id),
        ]);
    }

    let requested = usize::try_from(package.passengers).unwrap_or(usize::MAX);
    let mut issues = Vec::new();
    let mut travelers = Vec::with_capacity(package.travelers.len().min(requested));

    for (index, form) in package.travelers.iter().take(requested).enumerate() {
        match validate_traveler(form, policy, today) {
            Ok(record) => travelers.push(record),
            Err(found) => issues.extend(
                found
                    .into_iter()
                    .map(|issue| issue.in_package(id).for_traveler(index + 1)),
            ),
        }
    }

    if package.travelers.len() < requested {
        issues.push(
            Issue::general(
                IssueKind::IncompleteTravelers,
                format!(
                    "complete the details of all {} traveler(s) for {name}",
                    package.passengers
                ),
            )
            .in_package(id),
        );
    }

    if issues.is_empty() {
        Ok(PackageReservation {
            package_id: id,
            package_name: package.package_name.clone(),
            passengers: package.passengers,
            travelers,
        })
    } else {
        Err(issues)
    }
}

fn package_label(package: &PackageBooking) -> String {
    if package.package_name.trim().is_empty() {
        format!("package {}", package.package_id)
    } else {
        package.package_name.clone()
    }
}
