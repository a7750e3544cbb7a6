// coin-economy/src/config.rs

use crate::{EconomyError, EconomyResult, BPS_DENOMINATOR};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A purchasable coin recharge package
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinPackage {
    /// Stable package identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Coins bought at the base exchange rate
    pub base_coins: u64,
    /// Free bonus coins included with the package
    pub bonus_coins: u64,
    /// Price in USD
    pub price_usd: Decimal,
    /// Highlighted as the most popular choice
    pub popular: bool,
    /// Highlighted as the best value choice
    pub best_value: bool,
    /// Advertised savings percentage
    pub savings_percent: u8,
}

impl CoinPackage {
    /// Total coins credited on purchase (base + bonus, by construction)
    pub fn total_coins(&self) -> u64 {
        self.base_coins + self.bonus_coins
    }
}

/// Flat coin rewards for forum activity
///
/// All rewards are non-negative except `false_report_penalty`, which is a
/// deduction and must be strictly negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EarningRewards {
    /// Daily login reward
    pub daily_login: i64,
    /// Posting a new thread
    pub new_thread: i64,
    /// Posting a reply
    pub reply: i64,
    /// Having a reply marked as the best answer
    pub best_answer: i64,
    /// Having submitted content approved by moderation
    pub content_approved: i64,
    /// Receiving a helpful vote
    pub helpful_vote: i64,
    /// Filing a content report that moderation upholds
    pub approved_report: i64,
    /// Filing a report that moderation rejects (negative)
    pub false_report_penalty: i64,
}

impl Default for EarningRewards {
    fn default() -> Self {
        Self {
            daily_login: 2,
            new_thread: 5,
            reply: 1,
            best_answer: 15,
            content_approved: 10,
            helpful_vote: 1,
            approved_report: 5,
            false_report_penalty: -10,
        }
    }
}

impl EarningRewards {
    /// Validate reward sign invariants
    pub fn validate(&self) -> EconomyResult<()> {
        let non_negative = [
            ("daily_login", self.daily_login),
            ("new_thread", self.new_thread),
            ("reply", self.reply),
            ("best_answer", self.best_answer),
            ("content_approved", self.content_approved),
            ("helpful_vote", self.helpful_vote),
            ("approved_report", self.approved_report),
        ];

        for (name, value) in non_negative {
            if value < 0 {
                return Err(EconomyError::InvalidConfiguration(format!(
                    "Reward {} must be non-negative, got {}",
                    name, value
                )));
            }
        }

        if self.false_report_penalty >= 0 {
            return Err(EconomyError::InvalidConfiguration(format!(
                "false_report_penalty must be negative, got {}",
                self.false_report_penalty
            )));
        }

        Ok(())
    }
}

/// Daily caps on rewarded activity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyLimits {
    /// Rewarded replies per day
    pub replies: u32,
    /// Rewarded new threads per day
    pub threads: u32,
    /// Rewarded helpful votes per day
    pub helpful_votes: u32,
    /// Rewarded content reports per day
    pub reports: u32,
}

impl Default for DailyLimits {
    fn default() -> Self {
        Self {
            replies: 20,
            threads: 5,
            helpful_votes: 30,
            reports: 10,
        }
    }
}

/// Seller/platform split for one commission class (basis points)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CommissionRate {
    /// Seller share in basis points
    pub seller_bps: u16,
    /// Platform share in basis points
    pub platform_bps: u16,
}

impl CommissionRate {
    /// Validate that the shares sum to exactly 100%
    pub fn validate(&self) -> EconomyResult<()> {
        let sum = self.seller_bps as u64 + self.platform_bps as u64;
        if sum != BPS_DENOMINATOR {
            return Err(EconomyError::InvalidConfiguration(format!(
                "Commission shares must sum to {} bps, got {}",
                BPS_DENOMINATOR, sum
            )));
        }
        Ok(())
    }
}

/// Commission rates per commission class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommissionSchedule {
    /// EAs and indicators; also the fallback for unrecognized content types
    pub ea_indicator: CommissionRate,
    /// Set files
    pub set_file: CommissionRate,
    /// Articles
    pub article: CommissionRate,
    /// Source code listings
    pub source_code: CommissionRate,
}

impl Default for CommissionSchedule {
    fn default() -> Self {
        Self {
            ea_indicator: CommissionRate {
                seller_bps: 8000, // 80%
                platform_bps: 2000,
            },
            set_file: CommissionRate {
                seller_bps: 7500, // 75%
                platform_bps: 2500,
            },
            article: CommissionRate {
                seller_bps: 9000, // 90%
                platform_bps: 1000,
            },
            source_code: CommissionRate {
                seller_bps: 7000, // 70%
                platform_bps: 3000,
            },
        }
    }
}

impl CommissionSchedule {
    /// Validate every class rate
    pub fn validate(&self) -> EconomyResult<()> {
        self.ea_indicator.validate()?;
        self.set_file.validate()?;
        self.article.validate()?;
        self.source_code.validate()?;
        Ok(())
    }
}

/// Withdrawal (coin to crypto payout) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawalConfig {
    /// Minimum withdrawable amount in coins
    pub min_amount: u64,
    /// Processing fee in basis points
    pub fee_bps: u16,
    /// Supported payout currency codes
    pub supported_crypto: BTreeSet<String>,
}

impl Default for WithdrawalConfig {
    fn default() -> Self {
        Self {
            min_amount: 1000,
            fee_bps: 500, // 5%
            supported_crypto: ["BTC", "ETH", "USDT", "USDC"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl WithdrawalConfig {
    /// Validate the fee rate and payout currency set
    pub fn validate(&self) -> EconomyResult<()> {
        if self.fee_bps as u64 > BPS_DENOMINATOR {
            return Err(EconomyError::InvalidConfiguration(format!(
                "Withdrawal fee cannot exceed {} bps, got {}",
                BPS_DENOMINATOR, self.fee_bps
            )));
        }
        if self.supported_crypto.is_empty() {
            return Err(EconomyError::InvalidConfiguration(
                "At least one payout currency is required".into(),
            ));
        }
        Ok(())
    }
}

/// Referral commission configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferralConfig {
    /// Rate on a referred user's first purchase (basis points)
    pub first_purchase_bps: u16,
    /// Hard cap on the first-purchase commission, in coins
    pub first_purchase_cap: u64,
    /// Lifetime rate on a referred user's sales (basis points), uncapped
    pub lifetime_bps: u16,
}

impl Default for ReferralConfig {
    fn default() -> Self {
        Self {
            first_purchase_bps: 500, // 5%
            first_purchase_cap: 50,
            lifetime_bps: 200, // 2%
        }
    }
}

impl ReferralConfig {
    /// Validate both rates
    pub fn validate(&self) -> EconomyResult<()> {
        for (name, bps) in [
            ("first_purchase_bps", self.first_purchase_bps),
            ("lifetime_bps", self.lifetime_bps),
        ] {
            if bps as u64 > BPS_DENOMINATOR {
                return Err(EconomyError::InvalidConfiguration(format!(
                    "Referral rate {} cannot exceed {} bps, got {}",
                    name, BPS_DENOMINATOR, bps
                )));
            }
        }
        Ok(())
    }
}

/// Minimum listing price per content type, in coins
///
/// Unrecognized content types have no floor; the engine resolves them to 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinPrices {
    pub ea: u64,
    pub indicator: u64,
    pub set_file: u64,
    pub article: u64,
    pub source_code: u64,
}

impl Default for MinPrices {
    fn default() -> Self {
        Self {
            ea: 20,
            indicator: 20,
            set_file: 10,
            article: 5,
            source_code: 50,
        }
    }
}

/// The complete deployed economy configuration
///
/// Built once at startup (normally via `Default`, which carries the
/// deployed tables) and handed to [`crate::CoinEconomy`], which validates
/// it and never mutates it afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EconomyConfig {
    /// Recharge package catalog
    pub packages: Vec<CoinPackage>,
    /// Flat activity rewards
    pub rewards: EarningRewards,
    /// Daily reward caps
    pub daily_limits: DailyLimits,
    /// Sale commission schedule
    pub commissions: CommissionSchedule,
    /// Withdrawal configuration
    pub withdrawal: WithdrawalConfig,
    /// Referral commission configuration
    pub referral: ReferralConfig,
    /// Listing price floors
    pub min_prices: MinPrices,
}

impl EconomyConfig {
    /// The deployed configuration, including the recharge catalog
    pub fn deployed() -> Self {
        Self {
            packages: default_packages(),
            ..Self::default()
        }
    }

    /// Validate every table
    pub fn validate(&self) -> EconomyResult<()> {
        let mut seen_ids = BTreeSet::new();
        for package in &self.packages {
            if package.id.is_empty() {
                return Err(EconomyError::InvalidConfiguration(
                    "Package id cannot be empty".into(),
                ));
            }
            if !seen_ids.insert(package.id.as_str()) {
                return Err(EconomyError::InvalidConfiguration(format!(
                    "Duplicate package id {}",
                    package.id
                )));
            }
            if package.savings_percent > 100 {
                return Err(EconomyError::InvalidConfiguration(format!(
                    "Package {} savings exceed 100%",
                    package.id
                )));
            }
            if package.price_usd.is_sign_negative() {
                return Err(EconomyError::InvalidConfiguration(format!(
                    "Package {} has a negative price",
                    package.id
                )));
            }
        }

        self.rewards.validate()?;
        self.commissions.validate()?;
        self.withdrawal.validate()?;
        self.referral.validate()?;

        Ok(())
    }

    /// Serialize the tables for the platform API to publish to clients
    pub fn to_json(&self) -> EconomyResult<String> {
        serde_json::to_string(self).map_err(|e| EconomyError::Serialization(e.to_string()))
    }
}

/// The deployed recharge catalog
fn default_packages() -> Vec<CoinPackage> {
    vec![
        CoinPackage {
            id: "starter".into(),
            name: "Starter".into(),
            base_coins: 100,
            bonus_coins: 0,
            price_usd: Decimal::new(550, 2), // $5.50
            popular: false,
            best_value: false,
            savings_percent: 0,
        },
        CoinPackage {
            id: "basic".into(),
            name: "Basic".into(),
            base_coins: 500,
            bonus_coins: 25,
            price_usd: Decimal::new(2750, 2), // $27.50
            popular: false,
            best_value: false,
            savings_percent: 5,
        },
        CoinPackage {
            id: "popular".into(),
            name: "Popular".into(),
            base_coins: 1000,
            bonus_coins: 100,
            price_usd: Decimal::new(5500, 2), // $55.00
            popular: true,
            best_value: false,
            savings_percent: 10,
        },
        CoinPackage {
            id: "pro".into(),
            name: "Pro".into(),
            base_coins: 2000,
            bonus_coins: 300,
            price_usd: Decimal::new(11000, 2), // $110.00
            popular: false,
            best_value: false,
            savings_percent: 15,
        },
        CoinPackage {
            id: "whale".into(),
            name: "Whale".into(),
            base_coins: 5000,
            bonus_coins: 1000,
            price_usd: Decimal::new(27500, 2), // $275.00
            popular: false,
            best_value: true,
            savings_percent: 20,
        },
    ]
}
