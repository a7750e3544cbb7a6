// coin-economy/src/pricing.rs

use crate::commission::ContentType;
use crate::config::MinPrices;
use serde::{Deserialize, Serialize};

/// Listing price floor rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRules {
    floors: MinPrices,
}

impl PriceRules {
    pub fn new(floors: MinPrices) -> Self {
        Self { floors }
    }

    /// Minimum listing price for a content type, in coins
    ///
    /// Unknown content types have no floor (0); new types get a floor only
    /// once this table learns about them.
    pub fn min_price(&self, content_type: &str) -> u64 {
        match ContentType::parse(content_type) {
            Some(ContentType::Ea) => self.floors.ea,
            Some(ContentType::Indicator) => self.floors.indicator,
            Some(ContentType::SetFile) => self.floors.set_file,
            Some(ContentType::Article) => self.floors.article,
            Some(ContentType::SourceCode) => self.floors.source_code,
            None => {
                tracing::warn!(
                    "Unknown content type {:?}, applying no price floor",
                    content_type
                );
                0
            }
        }
    }

    /// Whether `price` clears the floor for its content type
    pub fn validate_price(&self, content_type: &str, price: u64) -> bool {
        price >= self.min_price(content_type)
    }
}
