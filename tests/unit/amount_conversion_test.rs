use proptest::prelude::*;
use rust_decimal::Decimal;
use sberpay::core::amount::{to_minor_units, truncate_description, DESCRIPTION_MAX_CHARS};
use sberpay::gateways::{PaymentRequest, RegisterOrder};

/// Property-based tests for the registration wire transforms
///
/// Validates:
/// - minor units are the ceiling of amount × 100, never rounded to nearest
/// - amounts already in whole minor units are unchanged
/// - descriptions keep at most 24 characters and are a prefix of the input
/// - omitting the currency is the same as sending RUB

#[cfg(test)]
mod amount_conversion_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_minor_units_are_ceiling(thousandths in 0i64..1_000_000_000_000i64) {
            // amount = thousandths / 1000, so amount × 100 = thousandths / 10
            let amount = Decimal::new(thousandths, 3);
            let minor = to_minor_units(amount).unwrap();

            prop_assert_eq!(minor, (thousandths + 9) / 10);
            prop_assert!(Decimal::from(minor) >= amount * Decimal::from(100));
        }

        #[test]
        fn test_whole_minor_units_unchanged(cents in 0i64..1_000_000_000_000i64) {
            let amount = Decimal::new(cents, 2);
            prop_assert_eq!(to_minor_units(amount).unwrap(), cents);
        }

        #[test]
        fn test_description_bounded_prefix(description in "\\PC{0,60}") {
            let truncated = truncate_description(&description);
            let expected_len = description.chars().count().min(DESCRIPTION_MAX_CHARS);

            prop_assert_eq!(truncated.chars().count(), expected_len);
            prop_assert!(description.starts_with(&truncated));
        }

        #[test]
        fn test_default_currency_is_rub(cents in 1i64..100_000_000i64) {
            let request = PaymentRequest::new(
                "order",
                Decimal::new(cents, 2),
                "https://shop.example/ok",
                "https://shop.example/fail",
                "Test order",
                "en",
            );

            let implicit = RegisterOrder::try_from(request.clone()).unwrap();
            let explicit = RegisterOrder::try_from(request.with_currency("RUB")).unwrap();

            prop_assert_eq!(implicit.currency, 643);
            prop_assert_eq!(implicit, explicit);
        }
    }

    #[test]
    fn test_reference_values() {
        assert_eq!(to_minor_units(Decimal::new(10001, 3)).unwrap(), 1001);
        assert_eq!(to_minor_units(Decimal::new(1000, 2)).unwrap(), 1000);
    }
}
