// coin-economy/src/engine.rs

use crate::commission::{CommissionEngine, CommissionSplit};
use crate::config::{CoinPackage, DailyLimits, EarningRewards, EconomyConfig, WithdrawalConfig};
use crate::exchange::Exchange;
use crate::potential::{ActivityLevel, MonthlyPotential, PotentialEstimator};
use crate::pricing::PriceRules;
use crate::referral::{ReferralEngine, ReferralEvent};
use crate::withdrawal::{WithdrawalEngine, WithdrawalQuote};
use crate::EconomyResult;
use rust_decimal::Decimal;

/// The platform coin economy
///
/// Owns one validated, immutable [`EconomyConfig`] and exposes every
/// calculator over it. Construct once at startup and share freely: all
/// operations are pure reads, so `&CoinEconomy` is safe to use from any
/// number of threads without locking.
pub struct CoinEconomy {
    config: EconomyConfig,
    exchange: Exchange,
    commission: CommissionEngine,
    withdrawal: WithdrawalEngine,
    referral: ReferralEngine,
    pricing: PriceRules,
    potential: PotentialEstimator,
}

impl CoinEconomy {
    /// Build the economy from a configuration, validating every table
    ///
    /// This is the single failure point: once construction succeeds, every
    /// operation is total.
    pub fn new(config: EconomyConfig) -> EconomyResult<Self> {
        config.validate()?;

        let exchange = Exchange::default();
        let commission = CommissionEngine::new(config.commissions.clone())?;
        let withdrawal = WithdrawalEngine::new(config.withdrawal.clone(), exchange)?;
        let referral = ReferralEngine::new(config.referral.clone())?;
        let pricing = PriceRules::new(config.min_prices.clone());
        let potential = PotentialEstimator::new(exchange);

        tracing::debug!(
            "Economy configuration accepted: {} packages, {} payout currencies",
            config.packages.len(),
            config.withdrawal.supported_crypto.len()
        );

        Ok(Self {
            config,
            exchange,
            commission,
            withdrawal,
            referral,
            pricing,
            potential,
        })
    }

    /// The deployed economy
    pub fn deployed() -> EconomyResult<Self> {
        Self::new(EconomyConfig::deployed())
    }

    /// Convert coins to USD (rounded to cents)
    pub fn coins_to_usd(&self, coins: u64) -> Decimal {
        self.exchange.coins_to_usd(coins)
    }

    /// Convert USD to coins (floored to a whole coin)
    pub fn usd_to_coins(&self, usd: Decimal) -> EconomyResult<u64> {
        self.exchange.usd_to_coins(usd)
    }

    /// Split a sale price between seller and platform
    pub fn split_sale(&self, price_coins: u64, content_type: &str) -> CommissionSplit {
        self.commission.split(price_coins, content_type)
    }

    /// Quote a withdrawal (callers gate on [`Self::meets_withdrawal_minimum`])
    pub fn quote_withdrawal(&self, amount: u64) -> WithdrawalQuote {
        self.withdrawal.quote(amount)
    }

    /// Whether `amount` clears the minimum withdrawal
    pub fn meets_withdrawal_minimum(&self, amount: u64) -> bool {
        self.withdrawal.meets_minimum(amount)
    }

    /// Referral commission for an event over `amount` coins
    pub fn referral_commission(&self, amount: u64, event: ReferralEvent) -> u64 {
        self.referral.commission(amount, event)
    }

    /// Minimum listing price for a content type
    pub fn min_price(&self, content_type: &str) -> u64 {
        self.pricing.min_price(content_type)
    }

    /// Whether a listing price clears its floor
    pub fn validate_price(&self, content_type: &str, price: u64) -> bool {
        self.pricing.validate_price(content_type, price)
    }

    /// Projected monthly income for an activity level
    pub fn monthly_potential(&self, level: ActivityLevel) -> MonthlyPotential {
        self.potential.estimate(level)
    }

    /// Recharge package catalog
    pub fn packages(&self) -> &[CoinPackage] {
        &self.config.packages
    }

    /// Flat activity rewards
    pub fn rewards(&self) -> &EarningRewards {
        &self.config.rewards
    }

    /// Daily reward caps
    pub fn daily_limits(&self) -> &DailyLimits {
        &self.config.daily_limits
    }

    /// Withdrawal configuration
    pub fn withdrawal_config(&self) -> &WithdrawalConfig {
        self.withdrawal.config()
    }

    /// The coin/USD exchange
    pub fn exchange(&self) -> &Exchange {
        &self.exchange
    }
}
