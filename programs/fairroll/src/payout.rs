use anchor_lang::prelude::*;

use crate::errors::BetError;

/// House edge in basis points, kept by the vault on every winning payout.
pub const HOUSE_EDGE_BPS: u128 = 150; // 1.5%

/// Inclusive bounds for the win threshold (percent chance of winning).
pub const MIN_THRESHOLD: u8 = 1;
pub const MAX_THRESHOLD: u8 = 99;

pub fn validate_threshold(threshold: u8) -> Result<()> {
    require!(
        (MIN_THRESHOLD..=MAX_THRESHOLD).contains(&threshold),
        BetError::ThresholdOutOfRange
    );
    Ok(())
}

/// Lamports paid out on a win: `amount * 100 / threshold` reduced by the
/// house edge, i.e. `amount * (10_000 - edge_bps) / (threshold * 100)`.
/// This is also the vault's exposure per pending bet, reserved at placement.
pub fn win_payout(amount: u64, threshold: u8) -> Result<u64> {
    let payout = (amount as u128)
        .checked_mul(10_000 - HOUSE_EDGE_BPS)
        .ok_or(BetError::ArithmeticOverflow)?
        .checked_div(threshold as u128)
        .ok_or(BetError::ArithmeticOverflow)?
        .checked_div(100)
        .ok_or(BetError::ArithmeticOverflow)?;
    u64::try_from(payout).map_err(|_| error!(BetError::ArithmeticOverflow))
}

/// Lamports reserved against the vault while a bet is pending. At high
/// thresholds the edge pushes the win payout below the stake, but a timed-out
/// bet still owes the full stake back, so the exposure is the larger of the
/// two settlement paths.
pub fn reserved_exposure(amount: u64, threshold: u8) -> Result<u64> {
    Ok(win_payout(amount, threshold)?.max(amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1_000_000, 50, 1_970_000)]
    #[case(1_000_000, 1, 98_500_000)]
    #[case(1_000_000, 99, 994_949)]
    #[case(10_000, 33, 29_848)]
    #[case(10_000_000, 25, 39_400_000)]
    #[case(1, 99, 0)]
    fn payout_specific_cases(
        #[case] amount: u64,
        #[case] threshold: u8,
        #[case] expected: u64,
    ) {
        assert_eq!(win_payout(amount, threshold).unwrap(), expected);
    }

    #[test]
    fn payout_matches_formula_over_full_threshold_range() {
        let amount = 123_456_789u64;
        for threshold in MIN_THRESHOLD..=MAX_THRESHOLD {
            let expected =
                (amount as u128 * 9_850 / threshold as u128 / 100) as u64;
            assert_eq!(win_payout(amount, threshold).unwrap(), expected);
        }
    }

    #[test]
    fn payout_decreases_as_threshold_rises() {
        let amount = 1_000_000_000u64;
        let mut prev = u64::MAX;
        for threshold in MIN_THRESHOLD..=MAX_THRESHOLD {
            let payout = win_payout(amount, threshold).unwrap();
            assert!(
                payout <= prev,
                "threshold {} paid {} > previous {}",
                threshold,
                payout,
                prev
            );
            prev = payout;
        }
    }

    #[test]
    fn payout_never_reaches_true_odds() {
        // The edge guarantees payout < amount * 100 / threshold, always.
        for threshold in MIN_THRESHOLD..=MAX_THRESHOLD {
            let amount = 1_000_000u64;
            let true_odds = amount as u128 * 100 / threshold as u128;
            assert!((win_payout(amount, threshold).unwrap() as u128) < true_odds);
        }
    }

    #[test]
    fn exposure_covers_refund_when_payout_dips_below_stake() {
        // At threshold 99 the win payout is edge-reduced below the stake,
        // but a refund still returns the full stake.
        assert_eq!(win_payout(1_000, 99).unwrap(), 994);
        assert_eq!(reserved_exposure(1_000, 99).unwrap(), 1_000);
    }

    #[test]
    fn exposure_covers_both_settlement_paths() {
        let amount = 1_000u64;
        for threshold in MIN_THRESHOLD..=MAX_THRESHOLD {
            let exposure = reserved_exposure(amount, threshold).unwrap();
            assert!(exposure >= amount, "threshold {} under-reserves refund", threshold);
            assert!(exposure >= win_payout(amount, threshold).unwrap());
        }
    }

    #[test]
    fn payout_overflow_is_an_error_not_a_wrap() {
        assert!(win_payout(u64::MAX, 1).is_err());
    }

    #[rstest]
    #[case(0)]
    #[case(100)]
    #[case(255)]
    fn threshold_out_of_range_rejected(#[case] threshold: u8) {
        assert!(validate_threshold(threshold).is_err());
    }

    #[rstest]
    #[case(1)]
    #[case(50)]
    #[case(99)]
    fn threshold_in_range_accepted(#[case] threshold: u8) {
        assert!(validate_threshold(threshold).is_ok());
    }
}
