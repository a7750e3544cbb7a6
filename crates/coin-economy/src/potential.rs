// coin-economy/src/potential.rs

use crate::exchange::Exchange;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How active a member is on the forum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    /// Logs in, reads, occasionally replies
    Passive,
    /// Regular poster
    Moderate,
    /// Daily poster, reporter, answerer
    Active,
    /// Active member who also sells content
    Creator,
}

/// One line of a monthly projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownItem {
    pub label: String,
    pub coins: u64,
}

/// Projected monthly income for an activity level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPotential {
    pub coins_per_month: u64,
    pub usd_value: Decimal,
    pub breakdown: Vec<BreakdownItem>,
}

// Marketing projection tables. These are illustrative figures shown on the
// earn page; they are reproduced verbatim, never recomputed from the
// reward table.
const PASSIVE: &[(&str, u64)] = &[
    ("Daily Login", 60),
    ("Replies", 30),
    ("Helpful Votes", 10),
];

const MODERATE: &[(&str, u64)] = &[
    ("Daily Login", 60),
    ("Replies", 150),
    ("New Threads", 80),
    ("Best Answers", 50),
];

const ACTIVE: &[(&str, u64)] = &[
    ("Daily Login", 60),
    ("Replies", 300),
    ("New Threads", 160),
    ("Best Answers", 150),
    ("Approved Reports", 30),
];

const CREATOR: &[(&str, u64)] = &[
    ("Daily Login", 60),
    ("Replies", 300),
    ("New Threads", 160),
    ("Best Answers", 150),
    ("Content Sales", 2000),
    ("Referral Commissions", 330),
];

/// Monthly income projection calculator
pub struct PotentialEstimator {
    exchange: Exchange,
}

impl PotentialEstimator {
    pub fn new(exchange: Exchange) -> Self {
        Self { exchange }
    }

    /// Projected monthly income for an activity level
    pub fn estimate(&self, level: ActivityLevel) -> MonthlyPotential {
        let table = match level {
            ActivityLevel::Passive => PASSIVE,
            ActivityLevel::Moderate => MODERATE,
            ActivityLevel::Active => ACTIVE,
            ActivityLevel::Creator => CREATOR,
        };

        let breakdown: Vec<BreakdownItem> = table
            .iter()
            .map(|(label, coins)| BreakdownItem {
                label: (*label).to_string(),
                coins: *coins,
            })
            .collect();

        let coins_per_month: u64 = breakdown.iter().map(|item| item.coins).sum();

        MonthlyPotential {
            coins_per_month,
            usd_value: self.exchange.coins_to_usd(coins_per_month),
            breakdown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimator() -> PotentialEstimator {
        PotentialEstimator::new(Exchange::default())
    }

    #[test]
    fn test_breakdown_sums_to_total() {
        let estimator = estimator();
        for level in [
            ActivityLevel::Passive,
            ActivityLevel::Moderate,
            ActivityLevel::Active,
            ActivityLevel::Creator,
        ] {
            let potential = estimator.estimate(level);
            let sum: u64 = potential.breakdown.iter().map(|item| item.coins).sum();
            assert_eq!(sum, potential.coins_per_month);
        }
    }

    #[test]
    fn test_passive_projection() {
        let potential = estimator().estimate(ActivityLevel::Passive);
        assert_eq!(potential.coins_per_month, 100);
        assert_eq!(potential.usd_value, Decimal::new(550, 2)); // $5.50
    }

    #[test]
    fn test_creator_projection() {
        let potential = estimator().estimate(ActivityLevel::Creator);
        assert_eq!(potential.coins_per_month, 3000);
        assert_eq!(potential.usd_value, Decimal::new(16500, 2)); // $165.00
        assert_eq!(potential.breakdown.len(), 6);
    }

    #[test]
    fn test_levels_are_ordered() {
        let estimator = estimator();
        let passive = estimator.estimate(ActivityLevel::Passive).coins_per_month;
        let moderate = estimator.estimate(ActivityLevel::Moderate).coins_per_month;
        let active = estimator.estimate(ActivityLevel::Active).coins_per_month;
        let creator = estimator.estimate(ActivityLevel::Creator).coins_per_month;
        assert!(passive < moderate && moderate < active && active < creator);
    }
}
