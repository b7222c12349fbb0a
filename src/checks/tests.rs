//! Tests for the check catalogue.

use super::*;
use crate::engine::check_that;
use proptest::prelude::*;
use std::panic::catch_unwind;
use std::time::Duration;

fn raises(run: impl FnOnce() + std::panic::UnwindSafe) -> bool {
    catch_unwind(run).is_err()
}

// =========================================================================
// Ordering
// =========================================================================

#[test]
fn test_less_than_passes_below_and_at_the_limit() {
    check_that(2u8).is_less_than(5);
    check_that(5u8).is_less_than(5);
}

#[test]
#[should_panic(expected = "The checked value is more than the limit.")]
fn test_less_than_rejects_a_larger_value() {
    check_that(7u8).is_less_than(5);
}

#[test]
fn test_strict_comparisons_exclude_equality() {
    check_that(2u8).is_strictly_less_than(3);
    check_that(3u8).is_strictly_greater_than(2);

    assert!(raises(|| {
        check_that(3u8).is_strictly_less_than(3);
    }));
    assert!(raises(|| {
        check_that(3u8).is_strictly_greater_than(3);
    }));
}

#[test]
fn test_ordering_covers_strings_and_chars() {
    check_that("alpha").is_less_than("beta");
    check_that('a').is_before('b');
    check_that("omega".to_string()).is_after("alpha".to_string());
}

#[test]
#[should_panic(expected = "The checked value is not before the reference value.")]
fn test_before_has_its_own_wording() {
    check_that('b').is_before('a');
}

#[test]
#[should_panic(expected = "The checked value is not after the reference value.")]
fn test_after_has_its_own_wording() {
    check_that('a').is_after('b');
}

#[test]
fn test_negated_ordering_inverts_the_verdict() {
    check_that(9u8).not().is_less_than(5);
    check_that(1u8).not().is_strictly_greater_than(5);
}

#[test]
#[should_panic(expected = "The checked value is less than the limit whereas it must not.")]
fn test_negated_ordering_rejects_a_passing_comparison() {
    check_that(2u8).not().is_less_than(5);
}

#[cfg(feature = "chrono")]
#[test]
fn test_dates_and_times_are_comparable() {
    use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};

    let earlier = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let later = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    check_that(earlier).is_before(later);
    check_that(later).is_after(earlier);

    let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
    let evening = NaiveTime::from_hms_opt(18, 30, 0).unwrap();
    check_that(noon).is_before(evening);

    let opened = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    let closed = Utc.with_ymd_and_hms(2024, 3, 1, 17, 30, 0).unwrap();
    check_that(closed).is_after(opened).and().is_strictly_greater_than(opened);
}

// =========================================================================
// Equality
// =========================================================================

#[test]
fn test_equality_across_types() {
    check_that(42).is_equal_to(42).and().is_not_equal_to(41);
    check_that("same").is_equal_to("same");
    check_that(Some(3u8)).is_equal_to(Some(3u8));
    check_that(Duration::from_secs(2)).is_equal_to(Duration::from_secs(2));
}

#[test]
#[should_panic(expected = "The checked value is different from the expected one.")]
fn test_equality_failure_quotes_both_values() {
    check_that("abc").is_equal_to("abd");
}

#[test]
#[should_panic(expected = "The checked value is equal to the given one whereas it must not.")]
fn test_inequality_rejects_equal_values() {
    check_that(7).is_not_equal_to(7);
}

#[test]
fn test_negated_equality() {
    check_that(7).not().is_equal_to(8);
    check_that(7).not().is_not_equal_to(7);
}

// =========================================================================
// Numbers
// =========================================================================

#[test]
fn test_zero_checks_across_numeric_types() {
    check_that(0u8).is_zero();
    check_that(0i64).is_zero();
    check_that(0.0f64).is_zero();
    check_that(3u16).is_not_zero();
    check_that(2u8).not().is_zero();
}

#[test]
#[should_panic(expected = "The checked value is equal to zero, whereas it must not.")]
fn test_not_zero_rejects_zero() {
    check_that(0u8).is_not_zero();
}

#[test]
#[should_panic(expected = "The checked value is different from zero.")]
fn test_zero_rejects_a_non_zero_value() {
    check_that(2u8).is_zero();
}

#[test]
fn test_sign_checks() {
    check_that(5i32).is_strictly_positive();
    check_that(-5i32).is_strictly_negative();
    check_that(0.5f64).is_strictly_positive();
}

#[test]
#[should_panic(expected = "The checked value is not strictly positive.")]
fn test_zero_is_not_strictly_positive() {
    check_that(0i32).is_strictly_positive();
}

#[test]
#[should_panic(expected = "The checked value is not strictly negative.")]
fn test_zero_is_not_strictly_negative() {
    check_that(0i32).is_strictly_negative();
}

// =========================================================================
// Strings
// =========================================================================

#[test]
fn test_string_content_checks_chain() {
    check_that("fluent assertion chains")
        .contains("assertion")
        .and()
        .starts_with("fluent")
        .and()
        .ends_with("chains");
}

#[test]
fn test_string_checks_accept_owned_strings() {
    check_that(String::from("owned")).contains("own");
    check_that(String::new()).is_empty();
}

#[test]
#[should_panic(expected = "The checked string does not contain the expected substring.")]
fn test_contains_failure_uses_the_string_entity() {
    check_that("abc").contains("xyz");
}

#[test]
fn test_regex_and_wildcard_dialects() {
    check_that("build-2024-03-01.log").matches(r"^build-\d{4}-\d{2}-\d{2}\.log$");
    check_that("build-2024-03-01.log").matches_wildcards("build-*.log");
    check_that("readme.md").not().matches_wildcards("*.log");
}

#[test]
#[should_panic(expected = "invalid regex pattern")]
fn test_broken_regex_is_a_usage_error() {
    check_that("abc").matches("[unclosed");
}

#[test]
#[should_panic(expected = "invalid wildcard pattern")]
fn test_broken_wildcard_is_a_usage_error_even_negated() {
    // Negation must not absorb a pattern that does not compile
    check_that("abc").not().matches_wildcards("[unclosed");
}

#[test]
#[should_panic(expected = "The checked string is not empty.")]
fn test_is_empty_rejects_content() {
    check_that("x").is_empty();
}

// =========================================================================
// Options
// =========================================================================

#[test]
fn test_option_presence_checks() {
    check_that(Some(2u8)).has_a_value();
    check_that(None::<u8>).has_no_value();
    check_that(Some(2u8)).not().has_no_value();
    check_that(None::<u8>).not().has_a_value();
}

#[test]
#[should_panic(expected = "The checked optional has no value, which is unexpected.")]
fn test_has_a_value_rejects_an_empty_optional() {
    check_that(None::<u8>).has_a_value();
}

#[test]
#[should_panic(expected = "The checked optional has a value, whereas it must not.")]
fn test_has_no_value_rejects_a_present_value() {
    check_that(Some(2u8)).has_no_value();
}

#[test]
fn test_pivot_reaches_the_contained_value() {
    check_that(Some(250u8))
        .has_a_value()
        .which()
        .is_strictly_positive()
        .and()
        .is_instance_of::<u8>();
}

#[test]
#[should_panic(expected = "There is no value to be checked.")]
fn test_pivot_after_negation_on_an_empty_optional_raises() {
    // The negated presence check passes; the pivot then has nothing to offer
    check_that(None::<u8>).not().has_a_value().which().is_zero();
}

// =========================================================================
// Instance
// =========================================================================

#[test]
fn test_instance_checks_match_the_static_type() {
    check_that(2u8).is_instance_of::<u8>().and().is_not_instance_of::<u16>();
    check_that("text").is_instance_of::<&str>();
    check_that(String::from("text")).is_instance_of::<String>();
}

#[test]
fn test_optionals_are_not_their_inner_type() {
    check_that(None::<u8>).is_instance_of::<Option<u8>>();
    check_that(Some(1u8)).is_not_instance_of::<u8>();

    // Complement holds for the empty optional too
    assert!(raises(|| {
        check_that(None::<u8>).is_not_instance_of::<Option<u8>>();
    }));
}

#[test]
#[should_panic(expected = "The checked value is not an instance of [u16].")]
fn test_instance_mismatch_raises() {
    check_that(2u8).is_instance_of::<u16>();
}

#[test]
#[should_panic(expected = "is an instance of [u8] whereas it must not")]
fn test_unwanted_instance_raises() {
    check_that(2u8).is_not_instance_of::<u8>();
}

#[test]
fn test_negation_composes_with_instance_checks() {
    check_that(2u8).not().is_instance_of::<i64>();
    check_that(2u8).not().is_not_instance_of::<u8>();
}

// =========================================================================
// Durations
// =========================================================================

#[test]
fn test_duration_comparisons_normalize_units() {
    check_that(Duration::from_millis(1000)).is_less_than(Duration::from_secs(2));
    check_that(Duration::from_secs(2)).is_greater_than(Duration::from_millis(1000));
}

#[test]
#[should_panic(expected = "The checked duration is more than the limit.")]
fn test_duration_failure_uses_the_duration_entity() {
    check_that(Duration::from_secs(3)).is_less_than(Duration::from_secs(2));
}

#[test]
fn test_negated_duration_checks() {
    check_that(Duration::from_secs(3)).not().is_less_than(Duration::from_secs(2));
}

// =========================================================================
// Code
// =========================================================================

#[test]
fn test_code_that_runs_cleanly() {
    check_that_code(|| {}).does_not_fail();
    check_that_code(|| {}).not().fails();
}

#[test]
fn test_code_failure_is_captured_with_its_message() {
    check_that_code(|| panic!("boom at {}", 42))
        .fails()
        .and()
        .fails_with_message_containing("boom at 42");
}

#[test]
fn test_code_checks_recover_catalogue_failures() {
    // The library checking itself: the inner failure feeds the outer check
    check_that_code(|| {
        check_that(0u8).is_not_zero();
    })
    .fails_with_message_containing("equal to zero, whereas it must not");
}

#[test]
#[should_panic(expected = "The checked code ran without raising a failure, which is unexpected.")]
fn test_fails_rejects_clean_code() {
    check_that_code(|| {}).fails();
}

#[test]
#[should_panic(expected = "whose message does not contain the expected fragment")]
fn test_fragment_mismatch_raises() {
    check_that_code(|| panic!("boom")).fails_with_message_containing("bang");
}

#[test]
fn test_fast_code_meets_its_limit() {
    check_that_code(|| {}).lasts_less_than(Duration::from_secs(5));
}

#[test]
#[should_panic(expected = "The checked code took too much time to run.")]
fn test_slow_code_misses_the_limit() {
    check_that_code(|| std::thread::sleep(Duration::from_millis(30)))
        .lasts_less_than(Duration::from_millis(5));
}

// =========================================================================
// Properties
// =========================================================================

/// Arbitrary generator for durations (mixed constructor units, so pairs cross unit boundaries)
fn arb_duration() -> impl Strategy<Value = Duration> {
    prop_oneof![
        (0u64..10_000).prop_map(Duration::from_nanos),
        (0u64..10_000).prop_map(Duration::from_micros),
        (0u64..10_000).prop_map(Duration::from_millis),
        (0u64..10_000).prop_map(Duration::from_secs),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The plain comparison raises exactly when the value exceeds the
    /// comparand.
    #[test]
    fn less_than_verdict_matches_the_comparison(value in any::<i64>(), comparand in any::<i64>()) {
        let raised = raises(move || {
            check_that(value).is_less_than(comparand);
        });

        prop_assert_eq!(raised, value > comparand);
    }

    /// Negation inverts every verdict.
    #[test]
    fn negation_inverts_the_verdict(value in any::<i64>(), comparand in any::<i64>()) {
        let plain = raises(move || {
            check_that(value).is_strictly_less_than(comparand);
        });
        let negated = raises(move || {
            check_that(value).not().is_strictly_less_than(comparand);
        });

        prop_assert_ne!(plain, negated);
    }

    /// The negation flag never survives past one check.
    #[test]
    fn negation_never_leaks_into_the_next_check(value in any::<i64>()) {
        let raised = raises(move || {
            check_that(value)
                .not()
                .is_equal_to(value.wrapping_add(1))
                .and()
                .is_equal_to(value);
        });

        prop_assert!(!raised);
    }

    /// The instance check pair partitions every value.
    #[test]
    fn instance_checks_are_complements(value in any::<u32>()) {
        check_that(value).is_instance_of::<u32>();
        check_that(value).is_not_instance_of::<i32>();

        let mismatch_raises = raises(move || {
            check_that(value).is_instance_of::<i64>();
        });

        prop_assert!(mismatch_raises);
    }

    /// Strict and plain orderings only disagree on equality.
    #[test]
    fn strictness_only_matters_on_equality(value in any::<i32>()) {
        let plain = raises(move || {
            check_that(value).is_less_than(value);
        });
        let strict = raises(move || {
            check_that(value).is_strictly_less_than(value);
        });

        prop_assert!(!plain);
        prop_assert!(strict);
    }

    /// Duration verdicts follow nanosecond ordering, whatever units the
    /// operands were built in.
    #[test]
    fn duration_verdicts_ignore_construction_units(
        checked in arb_duration(),
        limit in arb_duration(),
    ) {
        let raised = raises(move || {
            check_that(checked).is_less_than(limit);
        });

        prop_assert_eq!(raised, checked > limit);
    }

    /// Both duration bounds hold at once only on equality.
    #[test]
    fn duration_bounds_overlap_only_on_equality(
        checked in arb_duration(),
        limit in arb_duration(),
    ) {
        let below = !raises(move || {
            check_that(checked).is_less_than(limit);
        });
        let above = !raises(move || {
            check_that(checked).is_greater_than(limit);
        });

        prop_assert_eq!(below && above, checked == limit);
    }

    /// The same failing check renders the same message every time.
    #[test]
    fn failure_messages_are_deterministic(value in any::<i16>(), comparand in any::<i16>()) {
        prop_assume!(value > comparand);

        let render = || {
            catch_unwind(move || {
                check_that(value).is_less_than(comparand);
            })
            .expect_err("the check should raise")
            .downcast::<String>()
            .expect("failure payloads are strings")
        };

        prop_assert_eq!(render(), render());
    }
}
