// Project imports
use crate::resolver::LookupResult;

// Current module imports
use super::types::CheckOutcome;

/// Classifies a lookup result against the expected address.
///
/// Comparison is exact string equality: no normalization of address forms
/// (e.g. IPv4-mapped IPv6) is performed.
pub fn classify(result: &LookupResult, expected: &str) -> CheckOutcome {
    if result.error.is_some() || result.addresses.is_empty() {
        CheckOutcome::NoAddressesOrError
    } else if !result.addresses.iter().any(|address| address == expected) {
        CheckOutcome::AddressMismatch
    } else {
        CheckOutcome::Matched
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::resolver::ResolveError;

    fn with_error(addresses: &[&str]) -> LookupResult {
        LookupResult {
            addresses: addresses.iter().map(|a| a.to_string()).collect(),
            error: Some(ResolveError::Timeout(Duration::from_secs(5))),
        }
    }

    #[test]
    fn test_error_always_no_addresses_or_error() {
        // Even a stray address alongside an error does not count as a match.
        for addresses in [&[][..], &["192.168.1.1"][..], &["10.0.0.5", "192.168.1.1"][..]] {
            let result = with_error(addresses);
            assert_eq!(
                classify(&result, "192.168.1.1"),
                CheckOutcome::NoAddressesOrError
            );
        }
    }

    #[test]
    fn test_empty_without_error() {
        let result = LookupResult::default();
        assert_eq!(classify(&result, "192.168.1.1"), CheckOutcome::NoAddressesOrError);
        assert_eq!(classify(&result, ""), CheckOutcome::NoAddressesOrError);
    }

    #[test]
    fn test_membership_decides_match() {
        let result = LookupResult::resolved(["10.0.0.5", "192.168.1.1"]);
        assert_eq!(classify(&result, "192.168.1.1"), CheckOutcome::Matched);
        assert_eq!(classify(&result, "10.0.0.5"), CheckOutcome::Matched);
        assert_eq!(classify(&result, "10.0.0.6"), CheckOutcome::AddressMismatch);
    }

    #[test]
    fn test_exact_string_equality() {
        let result = LookupResult::resolved(["::ffff:192.168.1.1"]);
        assert_eq!(classify(&result, "192.168.1.1"), CheckOutcome::AddressMismatch);

        let result = LookupResult::resolved(["192.168.1.1"]);
        assert_eq!(classify(&result, " 192.168.1.1"), CheckOutcome::AddressMismatch);
    }

    #[test]
    fn test_classify_is_repeatable() {
        let result = LookupResult::resolved(["10.0.0.5"]);
        let first = classify(&result, "192.168.1.1");
        let second = classify(&result, "192.168.1.1");
        assert_eq!(first, second);
        assert_eq!(first, CheckOutcome::AddressMismatch);
    }
}
