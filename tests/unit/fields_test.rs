//! Tests for the traveler field validators

use chrono::{Days, Local};
use tourgate::core::models::Field;
use tourgate::core::services::{
    birth_date_to_iso, is_valid_birth_date, is_valid_birth_date_on, is_valid_email,
    is_valid_name, is_valid_phone, parse_birth_date, validate_field,
};

use crate::common::today;

mod name {
    use super::*;

    #[test]
    fn accepts_accented_names() {
        assert!(is_valid_name(Some("María José")));
        assert!(is_valid_name(Some("O'Higgins-Pérez")));
        assert!(is_valid_name(Some("Güemes Ñúñez")));
    }

    #[test]
    fn rejects_single_character() {
        assert!(!is_valid_name(Some("A")));
        assert!(!is_valid_name(Some("  A  ")));
    }

    #[test]
    fn rejects_digits() {
        assert!(!is_valid_name(Some("Juan 2")));
    }

    #[test]
    fn rejects_other_punctuation() {
        assert!(!is_valid_name(Some("Juan.Pérez")));
        assert!(!is_valid_name(Some("Juan@Pérez")));
    }

    #[test]
    fn required() {
        assert!(!is_valid_name(None));
        assert!(!is_valid_name(Some("")));
        assert!(!is_valid_name(Some("   ")));
    }
}

mod email {
    use super::*;

    #[test]
    fn optional() {
        assert!(is_valid_email(None));
        assert!(is_valid_email(Some("")));
    }

    #[test]
    fn accepts_minimal_shape() {
        assert!(is_valid_email(Some("a@b.c")));
        assert!(is_valid_email(Some(" ana.perez@viajes.example.cl ")));
    }

    #[test]
    fn rejects_malformed() {
        assert!(!is_valid_email(Some("not-an-email")));
        assert!(!is_valid_email(Some("@viajes.cl")));
        assert!(!is_valid_email(Some("ana@.")));
        assert!(!is_valid_email(Some("ana@@viajes.cl")));
    }
}

mod phone {
    use super::*;

    #[test]
    fn optional() {
        assert!(is_valid_phone(None));
        assert!(is_valid_phone(Some("  ")));
    }

    #[test]
    fn accepts_common_formats() {
        assert!(is_valid_phone(Some("912345678")));
        assert!(is_valid_phone(Some("+56912345678")));
        assert!(is_valid_phone(Some("+56 9 1234 5678")));
        assert!(is_valid_phone(Some("(+56) 2-2345-6789")));
    }

    #[test]
    fn rejects_letters_and_bad_length() {
        assert!(!is_valid_phone(Some("abc")));
        assert!(!is_valid_phone(Some("9123 456a")));
        assert!(!is_valid_phone(Some("1234567")));
        assert!(!is_valid_phone(Some(&"1".repeat(21))));
    }
}

mod birth_date {
    use super::*;

    #[test]
    fn optional() {
        assert!(is_valid_birth_date(None));
        assert!(is_valid_birth_date(Some("")));
    }

    #[test]
    fn leap_years() {
        assert!(is_valid_birth_date_on(Some("29/02/2020"), today()));
        assert!(!is_valid_birth_date_on(Some("29/02/2021"), today()));
        assert!(is_valid_birth_date_on(Some("29/02/2000"), today()));
        assert!(!is_valid_birth_date_on(Some("29/02/1900"), today()));
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(!is_valid_birth_date_on(Some("31/02/2020"), today()));
        assert!(!is_valid_birth_date_on(Some("31/06/2020"), today()));
        assert!(!is_valid_birth_date_on(Some("00/01/2020"), today()));
        assert!(!is_valid_birth_date_on(Some("01/13/2020"), today()));
    }

    #[test]
    fn rejects_wrong_shape() {
        assert!(!is_valid_birth_date_on(Some("1/2/2020"), today()));
        assert!(!is_valid_birth_date_on(Some("01-02-2020"), today()));
        assert!(!is_valid_birth_date_on(Some("2020-02-01"), today()));
        assert!(!is_valid_birth_date_on(Some("01/02/20"), today()));
    }

    #[test]
    fn today_is_valid_tomorrow_is_not() {
        let now = Local::now().date_naive();
        let tomorrow = now.checked_add_days(Days::new(1)).unwrap();

        assert!(is_valid_birth_date(Some(&now.format("%d/%m/%Y").to_string())));
        assert!(!is_valid_birth_date(Some(&tomorrow.format("%d/%m/%Y").to_string())));
    }

    #[test]
    fn early_years_are_literal() {
        assert_eq!(parse_birth_date("01/01/0050"), chrono::NaiveDate::from_ymd_opt(50, 1, 1));
        assert!(is_valid_birth_date_on(Some("01/01/0050"), today()));
    }

    #[test]
    fn parse_and_iso() {
        assert_eq!(parse_birth_date("15/06/2024"), Some(today()));
        assert_eq!(birth_date_to_iso(" 01/12/1999 ").as_deref(), Some("1999-12-01"));
        assert_eq!(birth_date_to_iso("31/11/1999"), None);
    }
}

#[test]
fn validate_field_matches_individual_validators() {
    let samples = [
        None,
        Some(""),
        Some("María"),
        Some("12.345.678-5"),
        Some("a@b.c"),
        Some("01/01/2000"),
    ];
    for value in samples {
        assert_eq!(validate_field(Field::Name, value, today()), is_valid_name(value));
        assert_eq!(validate_field(Field::Email, value, today()), is_valid_email(value));
        assert_eq!(validate_field(Field::Phone, value, today()), is_valid_phone(value));
        assert_eq!(
            validate_field(Field::BirthDate, value, today()),
            is_valid_birth_date_on(value, today())
        );
    }
}
