// coin-economy/src/commission.rs

use crate::config::{CommissionRate, CommissionSchedule};
use crate::{apply_bps, EconomyResult};
use serde::{Deserialize, Serialize};

/// Marketplace content types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    /// Expert advisor
    Ea,
    /// Chart indicator
    Indicator,
    /// Strategy parameter set file
    SetFile,
    /// Article
    Article,
    /// Source code listing
    SourceCode,
}

impl ContentType {
    /// Parse the wire identifier used by the platform API
    ///
    /// Returns `None` for unrecognized identifiers; callers decide the
    /// fallback (commission dispatch uses the EA/indicator class, price
    /// floors use 0).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ea" => Some(Self::Ea),
            "indicator" => Some(Self::Indicator),
            "set_file" => Some(Self::SetFile),
            "article" => Some(Self::Article),
            "source_code" => Some(Self::SourceCode),
            _ => None,
        }
    }

    /// Wire identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ea => "ea",
            Self::Indicator => "indicator",
            Self::SetFile => "set_file",
            Self::Article => "article",
            Self::SourceCode => "source_code",
        }
    }

    /// Commission class this content type is billed under
    pub fn commission_class(&self) -> CommissionClass {
        match self {
            Self::Ea | Self::Indicator => CommissionClass::EaIndicator,
            Self::SetFile => CommissionClass::SetFile,
            Self::Article => CommissionClass::Article,
            Self::SourceCode => CommissionClass::SourceCode,
        }
    }
}

/// Commission classes in the schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommissionClass {
    /// EAs and indicators; also the fallback for unknown content types
    EaIndicator,
    SetFile,
    Article,
    SourceCode,
}

/// Result of splitting a sale price between seller and platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionSplit {
    /// Coins credited to the seller
    pub seller_amount: u64,
    /// Coins retained by the platform
    pub platform_amount: u64,
}

/// Sale commission calculator
pub struct CommissionEngine {
    schedule: CommissionSchedule,
}

impl CommissionEngine {
    /// Create an engine over a validated schedule
    pub fn new(schedule: CommissionSchedule) -> EconomyResult<Self> {
        schedule.validate()?;
        Ok(Self { schedule })
    }

    /// Get the schedule
    pub fn schedule(&self) -> &CommissionSchedule {
        &self.schedule
    }

    /// Rate for a commission class
    pub fn rate_for(&self, class: CommissionClass) -> CommissionRate {
        match class {
            CommissionClass::EaIndicator => self.schedule.ea_indicator,
            CommissionClass::SetFile => self.schedule.set_file,
            CommissionClass::Article => self.schedule.article,
            CommissionClass::SourceCode => self.schedule.source_code,
        }
    }

    /// Resolve a wire content type to its commission class
    ///
    /// Unknown identifiers fall back to the EA/indicator class and are
    /// logged.
    pub fn class_for(&self, content_type: &str) -> CommissionClass {
        match ContentType::parse(content_type) {
            Some(content_type) => content_type.commission_class(),
            None => {
                tracing::warn!(
                    "Unknown content type {:?}, falling back to EA/indicator commission rate",
                    content_type
                );
                CommissionClass::EaIndicator
            }
        }
    }

    /// Split a sale price between seller and platform
    ///
    /// The seller share is floored; the platform absorbs the remainder, so
    /// `seller_amount + platform_amount == price_coins` always holds and no
    /// coin is created or destroyed.
    pub fn split(&self, price_coins: u64, content_type: &str) -> CommissionSplit {
        let rate = self.rate_for(self.class_for(content_type));
        let seller_amount = apply_bps(price_coins, rate.seller_bps);

        CommissionSplit {
            seller_amount,
            platform_amount: price_coins - seller_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> CommissionEngine {
        CommissionEngine::new(CommissionSchedule::default()).unwrap()
    }

    #[test]
    fn test_ea_split_80_20() {
        let split = engine().split(500, "ea");
        assert_eq!(split.seller_amount, 400);
        assert_eq!(split.platform_amount, 100);
    }

    #[test]
    fn test_set_file_split_75_25() {
        let split = engine().split(500, "set_file");
        assert_eq!(split.seller_amount, 375);
        assert_eq!(split.platform_amount, 125);
    }

    #[test]
    fn test_indicator_uses_ea_rate() {
        assert_eq!(engine().split(500, "indicator"), engine().split(500, "ea"));
    }

    #[test]
    fn test_unknown_type_falls_back_to_ea_rate() {
        let engine = engine();
        assert_eq!(engine.class_for("video_course"), CommissionClass::EaIndicator);
        assert_eq!(engine.split(500, "video_course"), engine.split(500, "ea"));
    }

    #[test]
    fn test_platform_absorbs_remainder() {
        // 333 * 0.80 = 266.4 -> seller 266, platform 67
        let split = engine().split(333, "ea");
        assert_eq!(split.seller_amount, 266);
        assert_eq!(split.platform_amount, 67);
        assert_eq!(split.seller_amount + split.platform_amount, 333);
    }

    #[test]
    fn test_zero_price() {
        let split = engine().split(0, "article");
        assert_eq!(split.seller_amount, 0);
        assert_eq!(split.platform_amount, 0);
    }

    #[test]
    fn test_content_type_round_trip() {
        for s in ["ea", "indicator", "set_file", "article", "source_code"] {
            assert_eq!(ContentType::parse(s).unwrap().as_str(), s);
        }
        assert!(ContentType::parse("EA").is_none());
    }
}
