// coin-economy/src/referral.rs

use crate::config::ReferralConfig;
use crate::{apply_bps, EconomyResult};
use serde::{Deserialize, Serialize};

/// Referral-earning events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferralEvent {
    /// The referred user made their first coin purchase
    FirstPurchase,
    /// The referred user sold content (lifetime commission)
    Sale,
}

/// Referral commission calculator
///
/// The two event kinds are deliberately asymmetric: first-purchase
/// commissions are hard-capped, lifetime sale commissions are not. That is
/// business policy, not an oversight.
pub struct ReferralEngine {
    config: ReferralConfig,
}

impl ReferralEngine {
    /// Create an engine over a validated config
    pub fn new(config: ReferralConfig) -> EconomyResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration
    pub fn config(&self) -> &ReferralConfig {
        &self.config
    }

    /// Commission in coins for a referral event over `amount` coins
    pub fn commission(&self, amount: u64, event: ReferralEvent) -> u64 {
        match event {
            ReferralEvent::FirstPurchase => {
                apply_bps(amount, self.config.first_purchase_bps)
                    .min(self.config.first_purchase_cap)
            }
            ReferralEvent::Sale => apply_bps(amount, self.config.lifetime_bps),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> ReferralEngine {
        ReferralEngine::new(ReferralConfig::default()).unwrap()
    }

    #[test]
    fn test_first_purchase_capped_at_50() {
        // 5% of 2000 = 100, capped to 50
        assert_eq!(engine().commission(2000, ReferralEvent::FirstPurchase), 50);
    }

    #[test]
    fn test_first_purchase_below_cap() {
        // 5% of 600 = 30
        assert_eq!(engine().commission(600, ReferralEvent::FirstPurchase), 30);
    }

    #[test]
    fn test_sale_commission_uncapped() {
        // 2% of 100_000 = 2000, no cap
        assert_eq!(engine().commission(100_000, ReferralEvent::Sale), 2000);
    }

    #[test]
    fn test_commissions_round_down() {
        // 5% of 30 = 1.5 -> 1; 2% of 49 = 0.98 -> 0
        assert_eq!(engine().commission(30, ReferralEvent::FirstPurchase), 1);
        assert_eq!(engine().commission(49, ReferralEvent::Sale), 0);
    }
}
