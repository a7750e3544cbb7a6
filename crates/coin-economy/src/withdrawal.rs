// coin-economy/src/withdrawal.rs

use crate::config::WithdrawalConfig;
use crate::exchange::Exchange;
use crate::{apply_bps, EconomyResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A withdrawal preview: fee and net payout for a requested amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalQuote {
    /// Requested amount in coins
    pub gross_amount: u64,
    /// Processing fee in coins
    pub fee: u64,
    /// Coins paid out after the fee
    pub net_amount: u64,
    /// Payout value in USD
    pub net_usd: Decimal,
}

/// Withdrawal fee calculator
pub struct WithdrawalEngine {
    config: WithdrawalConfig,
    exchange: Exchange,
}

impl WithdrawalEngine {
    /// Create an engine over a validated config
    pub fn new(config: WithdrawalConfig, exchange: Exchange) -> EconomyResult<Self> {
        config.validate()?;
        Ok(Self { config, exchange })
    }

    /// Get the configuration
    pub fn config(&self) -> &WithdrawalConfig {
        &self.config
    }

    /// Whether `amount` clears the minimum withdrawal
    pub fn meets_minimum(&self, amount: u64) -> bool {
        amount >= self.config.min_amount
    }

    /// Quote the fee and net payout for a withdrawal
    ///
    /// This is a pure calculator: it quotes ANY amount, including amounts
    /// below the minimum, so forms can render live previews as the user
    /// types. Callers MUST gate real withdrawal requests on
    /// [`Self::meets_minimum`] first.
    ///
    /// The fee is floored, so `fee + net_amount == gross_amount` exactly.
    pub fn quote(&self, amount: u64) -> WithdrawalQuote {
        let fee = apply_bps(amount, self.config.fee_bps);
        let net_amount = amount - fee;

        WithdrawalQuote {
            gross_amount: amount,
            fee,
            net_amount,
            net_usd: self.exchange.coins_to_usd(net_amount),
        }
    }
}
