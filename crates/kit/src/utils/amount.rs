// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Exact parsing and summation of balance amounts.
//!
//! The RPC transmits amounts as signed decimal strings. They are parsed into
//! `i128`, which holds any `u64` balance and its negation. Sums are
//! accumulated without bound and only the final total has to fit in `i128`,
//! so the result does not depend on the order of the amounts. Nothing here
//! goes through floating point.

use num_bigint::BigInt;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("Amount '{value}' is not a signed decimal integer: {source}")]
    Invalid {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Amount sum overflowed")]
    Overflow,
}

/// Parse a signed decimal amount such as `"-1000"` or `"250"`.
pub fn parse_amount(value: &str) -> Result<i128, AmountError> {
    value.parse::<i128>().map_err(|source| AmountError::Invalid {
        value: value.to_string(),
        source,
    })
}

/// Sum amounts exactly; `Overflow` only when the total does not fit in `i128`.
pub fn checked_sum<I>(amounts: I) -> Result<i128, AmountError>
where
    I: IntoIterator<Item = i128>,
{
    let total: BigInt = amounts.into_iter().map(BigInt::from).sum();
    i128::try_from(&total).map_err(|_| AmountError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_signed() {
        assert_eq!(parse_amount("100").unwrap(), 100);
        assert_eq!(parse_amount("-2000000").unwrap(), -2_000_000);
        assert_eq!(parse_amount("+7").unwrap(), 7);
    }

    #[test]
    fn test_parse_beyond_f64_precision() {
        // 2^53 + 1 is not representable as f64
        assert_eq!(parse_amount("9007199254740993").unwrap(), 9_007_199_254_740_993);
        assert_eq!(
            parse_amount("18446744073709551615").unwrap(),
            u64::MAX as i128
        );
    }

    #[test]
    fn test_parse_rejects_non_integers() {
        for value in ["", " 1", "1.5", "1e3", "0x10", "abc"] {
            assert!(
                matches!(parse_amount(value), Err(AmountError::Invalid { .. })),
                "'{}' should be rejected",
                value
            );
        }
    }

    #[test]
    fn test_checked_sum() {
        assert_eq!(checked_sum(Vec::<i128>::new()).unwrap(), 0);
        assert_eq!(checked_sum([100, -40, 5]).unwrap(), 65);
    }

    #[test]
    fn test_checked_sum_overflow() {
        assert_eq!(checked_sum([i128::MAX, 1]), Err(AmountError::Overflow));
        assert_eq!(checked_sum([i128::MIN, -1]), Err(AmountError::Overflow));
    }

    #[test]
    fn test_checked_sum_intermediate_overflow_is_not_an_error() {
        let orders = [
            [i128::MAX, 1, -1],
            [i128::MAX, -1, 1],
            [1, i128::MAX, -1],
            [1, -1, i128::MAX],
            [-1, i128::MAX, 1],
            [-1, 1, i128::MAX],
        ];
        for order in orders {
            assert_eq!(checked_sum(order), Ok(i128::MAX), "{:?}", order);
        }
        assert_eq!(checked_sum([i128::MIN, -1, 1]), Ok(i128::MIN));
    }
}
