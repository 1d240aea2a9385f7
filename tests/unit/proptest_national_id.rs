//! Property-based tests for the RUT validator
//!
//! Uses proptest to verify properties that should hold for all inputs.

use proptest::prelude::*;
use tourgate::core::models::Rut;
use tourgate::core::services::{compute_check_digit, is_valid_national_id};

proptest! {
    /// Any string terminates with a boolean, never a panic
    #[test]
    fn never_panics(input in any::<String>()) {
        let _ = is_valid_national_id(Some(&input));
        let _ = Rut::parse(&input);
    }

    /// Same input, same answer
    #[test]
    fn is_deterministic(input in "[0-9kK.\\- ]{0,16}") {
        prop_assert_eq!(
            is_valid_national_id(Some(&input)),
            is_valid_national_id(Some(&input))
        );
    }

    /// A body followed by its computed check digit always validates
    #[test]
    fn computed_digit_validates(body in "[0-9]{1,12}") {
        let check = compute_check_digit(&body).unwrap();
        let rut = format!("{body}-{check}");
        prop_assert!(is_valid_national_id(Some(&rut)));
    }

    /// Exactly one of the eleven check characters validates
    #[test]
    fn exactly_one_check_character(body in "[0-9]{1,12}") {
        let accepted = "0123456789K"
            .chars()
            .filter(|c| is_valid_national_id(Some(&format!("{body}{c}"))))
            .count();
        prop_assert_eq!(accepted, 1);
    }

    /// Dots between digits do not change the outcome
    #[test]
    fn dots_are_ignored(body in "[0-9]{1,9}", check in "[0-9kK]") {
        let plain = format!("{body}-{check}");
        let dotted: String = body.chars().flat_map(|c| [c, '.']).collect::<String>() + "-" + &check;
        prop_assert_eq!(is_valid_national_id(Some(&plain)), is_valid_national_id(Some(&dotted)));
    }

    /// Check character case does not change the outcome
    #[test]
    fn check_case_is_ignored(body in "[0-9]{1,9}") {
        prop_assert_eq!(
            is_valid_national_id(Some(&format!("{body}-k"))),
            is_valid_national_id(Some(&format!("{body}-K")))
        );
    }

    /// Display form reparses to the same RUT
    #[test]
    fn display_form_reparses(body in "[1-9][0-9]{0,8}") {
        let check = compute_check_digit(&body).unwrap();
        let rut = Rut::parse(&format!("{body}{check}")).unwrap();
        prop_assert_eq!(Rut::parse(&rut.to_string()).unwrap(), rut);
    }
}

#[cfg(test)]
mod deterministic_tests {
    use super::*;

    #[test]
    fn leading_zeros_are_part_of_the_body() {
        // Zeros weigh nothing, so padding keeps the check digit
        assert_eq!(compute_check_digit("0012345678"), compute_check_digit("12345678"));
    }
}
