//! Price suggestions for menu items and the strategy review run on save.

/// Positioning of a single menu item against the market.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketPosition {
    Premium,
    Standard,
    Value,
    Economy,
    Unspecified,
}

impl MarketPosition {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Premium" => MarketPosition::Premium,
            "Standard" => MarketPosition::Standard,
            "Value" => MarketPosition::Value,
            "Economy" => MarketPosition::Economy,
            _ => MarketPosition::Unspecified,
        }
    }

    pub fn markup(self) -> f64 {
        match self {
            MarketPosition::Premium => 1.5,
            MarketPosition::Value => 1.2,
            MarketPosition::Economy => 1.1,
            MarketPosition::Standard | MarketPosition::Unspecified => 1.3,
        }
    }

    /// Multiplier applied to the competitor average.
    pub fn competitor_factor(self) -> f64 {
        match self {
            MarketPosition::Premium => 1.1,
            _ => 0.9,
        }
    }
}

/// Inputs of one priced item.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint<'a> {
    pub item_name: &'a str,
    pub cost_price: f64,
    pub competitor_prices: &'a [f64],
    pub position: MarketPosition,
}

impl PricePoint<'_> {
    pub fn competitor_average(&self) -> Option<f64> {
        if self.competitor_prices.is_empty() {
            return None;
        }
        let sum: f64 = self.competitor_prices.iter().sum();
        Some(sum / self.competitor_prices.len() as f64)
    }

    /// Larger of the cost-plus price and the competitor-anchored price.
    /// Items without competitor prices anchor at zero.
    pub fn suggested_price(&self) -> f64 {
        let anchored = self.competitor_average().unwrap_or(0.0) * self.position.competitor_factor();
        (self.cost_price * self.position.markup()).max(anchored)
    }

    /// Review notes for this item given the strategy's minimum margin.
    ///
    /// Competitor checks are skipped when the item has no competitor prices.
    pub fn recommendations(&self, suggested_price: f64, minimum_margin: f64) -> Vec<String> {
        let mut notes = Vec::new();
        let margin = (suggested_price - self.cost_price) / suggested_price * 100.0;
        if margin < minimum_margin {
            notes.push(format!(
                "Increase price for {} to meet minimum margin requirements",
                self.item_name
            ));
        }
        if let Some(average) = self.competitor_average() {
            if suggested_price > average * 1.2 {
                notes.push(format!(
                    "Consider reviewing high price point for {}",
                    self.item_name
                ));
            }
            if self.position == MarketPosition::Premium && suggested_price <= average {
                notes.push(format!(
                    "Adjust pricing strategy for {} to maintain premium positioning",
                    self.item_name
                ));
            }
        }
        notes
    }
}
