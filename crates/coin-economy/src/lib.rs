// coin-economy/src/lib.rs

//! Coin economy calculators for the marketplace platform
//!
//! This crate implements the platform's virtual-coin arithmetic:
//! - Coin/USD conversion
//! - Sale commission splits (seller vs platform)
//! - Withdrawal fee quotes
//! - Referral commissions
//! - Content price floors
//! - Monthly earning projections
//!
//! Every calculator is pure and deterministic: the same inputs always
//! produce the same integer coin outputs, so the UI preview and the
//! transaction ledger agree exactly. All rates are basis points and all
//! USD amounts are decimals; no floating point is involved anywhere.

pub mod commission;
pub mod config;
pub mod engine;
pub mod exchange;
pub mod potential;
pub mod pricing;
pub mod referral;
pub mod withdrawal;

pub use commission::{CommissionClass, CommissionEngine, CommissionSplit, ContentType};
pub use config::{
    CoinPackage, CommissionRate, CommissionSchedule, DailyLimits, EarningRewards, EconomyConfig,
    MinPrices, ReferralConfig, WithdrawalConfig,
};
pub use engine::CoinEconomy;
pub use exchange::Exchange;
pub use potential::{ActivityLevel, BreakdownItem, MonthlyPotential, PotentialEstimator};
pub use pricing::PriceRules;
pub use referral::{ReferralEngine, ReferralEvent};
pub use withdrawal::{WithdrawalEngine, WithdrawalQuote};

/// Result type for economy operations
pub type EconomyResult<T> = Result<T, EconomyError>;

/// Errors that can occur in economy operations
#[derive(Debug, thiserror::Error)]
pub enum EconomyError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Negative amount: {0}")]
    NegativeAmount(String),

    #[error("Amount overflow: {0}")]
    Overflow(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Basis-point denominator used by every rate in the crate (10_000 = 100%)
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Multiply a coin amount by a basis-point rate, rounding down.
///
/// The widening to `u128` keeps the product exact for any `u64` amount.
pub(crate) fn apply_bps(amount: u64, bps: u16) -> u64 {
    ((amount as u128 * bps as u128) / BPS_DENOMINATOR as u128) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_bps_rounds_down() {
        assert_eq!(apply_bps(999, 500), 49); // 49.95 -> 49
        assert_eq!(apply_bps(1000, 500), 50);
        assert_eq!(apply_bps(0, 10_000), 0);
    }

    #[test]
    fn test_apply_bps_no_overflow_at_max() {
        // u64::MAX * 10_000 exceeds u64 but fits the u128 intermediate
        assert_eq!(apply_bps(u64::MAX, 10_000), u64::MAX);
    }
}
