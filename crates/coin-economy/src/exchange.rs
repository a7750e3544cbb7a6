// coin-economy/src/exchange.rs

use crate::{EconomyError, EconomyResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Coins per anchor bundle (100 coins = $5.50)
pub const ANCHOR_COINS: u64 = 100;

/// USD price of the anchor bundle, in cents
pub const ANCHOR_USD_CENTS: i64 = 550;

/// Coin/USD converter anchored at a fixed exchange rate
///
/// Both directions derive from the same anchor, but they are intentionally
/// NOT inverses of each other: `coins_to_usd` rounds to whole cents while
/// `usd_to_coins` floors to a whole coin count, so the platform never pays
/// out or credits more than the exact rate implies. That asymmetry is the
/// deployed rounding policy and must not be "fixed".
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Exchange {
    usd_per_coin: Decimal,
}

impl Default for Exchange {
    fn default() -> Self {
        // 5.50 / 100 = 0.055 USD per coin, exact
        Self {
            usd_per_coin: Decimal::new(ANCHOR_USD_CENTS, 2) / Decimal::from(ANCHOR_COINS),
        }
    }
}

impl Exchange {
    /// Build a converter from an anchor of `coins` costing `usd`
    pub fn from_anchor(coins: u64, usd: Decimal) -> EconomyResult<Self> {
        if coins == 0 {
            return Err(EconomyError::InvalidConfiguration(
                "Exchange anchor requires a non-zero coin count".into(),
            ));
        }
        if usd <= Decimal::ZERO {
            return Err(EconomyError::InvalidConfiguration(format!(
                "Exchange anchor requires a positive USD price, got {}",
                usd
            )));
        }

        Ok(Self {
            usd_per_coin: usd / Decimal::from(coins),
        })
    }

    /// USD per coin
    pub fn usd_per_coin(&self) -> Decimal {
        self.usd_per_coin
    }

    /// Convert a coin amount to USD, rounded to whole cents
    pub fn coins_to_usd(&self, coins: u64) -> Decimal {
        (Decimal::from(coins) * self.usd_per_coin)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Convert a USD amount to coins, rounding down to a whole coin
    ///
    /// Rejects negative USD.
    pub fn usd_to_coins(&self, usd: Decimal) -> EconomyResult<u64> {
        if usd.is_sign_negative() {
            return Err(EconomyError::NegativeAmount(format!(
                "Cannot convert {} USD to coins",
                usd
            )));
        }

        (usd / self.usd_per_coin)
            .floor()
            .to_u64()
            .ok_or_else(|| EconomyError::Overflow(format!("{} USD exceeds the coin range", usd)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_coins_to_usd() {
        let exchange = Exchange::default();
        assert_eq!(exchange.coins_to_usd(100), Decimal::new(550, 2)); // $5.50
    }

    #[test]
    fn test_anchor_usd_to_coins() {
        let exchange = Exchange::default();
        assert_eq!(exchange.usd_to_coins(Decimal::new(550, 2)).unwrap(), 100);
    }

    #[test]
    fn test_usd_to_coins_floors() {
        let exchange = Exchange::default();
        // $5.49 buys 99.8... coins -> 99
        assert_eq!(exchange.usd_to_coins(Decimal::new(549, 2)).unwrap(), 99);
        // $0.05 buys 0.90 coins -> 0
        assert_eq!(exchange.usd_to_coins(Decimal::new(5, 2)).unwrap(), 0);
    }

    #[test]
    fn test_round_trip_favors_the_platform() {
        let exchange = Exchange::default();
        // 99 coins -> $5.45 (rounded) -> 99 coins; 101 coins -> $5.56 -> 101
        for coins in [1u64, 7, 99, 101, 12345] {
            let usd = exchange.coins_to_usd(coins);
            let back = exchange.usd_to_coins(usd).unwrap();
            // Rounding never manufactures more than one extra coin's worth
            assert!(back <= coins + 1, "{} coins round-tripped to {}", coins, back);
        }
    }

    #[test]
    fn test_cent_rounding_is_half_away_from_zero() {
        let exchange = Exchange::default();
        // 1 coin = $0.055 -> $0.06
        assert_eq!(exchange.coins_to_usd(1), Decimal::new(6, 2));
        // 3 coins = $0.165 -> $0.17
        assert_eq!(exchange.coins_to_usd(3), Decimal::new(17, 2));
    }

    #[test]
    fn test_negative_usd_rejected() {
        let exchange = Exchange::default();
        assert!(exchange.usd_to_coins(Decimal::new(-550, 2)).is_err());
    }

    #[test]
    fn test_zero_anchor_rejected() {
        assert!(Exchange::from_anchor(0, Decimal::ONE).is_err());
        assert!(Exchange::from_anchor(100, Decimal::ZERO).is_err());
    }
}
