use super::round_cents;

/// Cost inputs of a recipe after its ingredient lines are summed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecipeCosting {
    pub ingredients_total: f64,
    pub labor_cost: f64,
    pub overhead_cost: f64,
    pub serving_size: f64,
    /// Desired margin in percent of the selling price.
    pub target_margin: f64,
}

pub fn line_total(unit_cost: f64, quantity: f64) -> f64 {
    unit_cost * quantity
}

impl RecipeCosting {
    pub fn total_cost(&self) -> f64 {
        self.ingredients_total + self.labor_cost + self.overhead_cost
    }

    /// Not guarded: a zero serving size yields an infinite cost.
    pub fn cost_per_serving(&self) -> f64 {
        self.total_cost() / self.serving_size
    }

    /// Price that keeps `target_margin` percent of revenue, rounded to cents.
    pub fn suggested_price(&self) -> f64 {
        round_cents(self.cost_per_serving() / (1.0 - self.target_margin / 100.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn costing(target_margin: f64, serving_size: f64) -> RecipeCosting {
        RecipeCosting {
            ingredients_total: 10.0,
            labor_cost: 2.0,
            overhead_cost: 1.0,
            serving_size,
            target_margin,
        }
    }

    #[test]
    fn suggested_price_covers_margin() {
        assert_eq!(costing(35.0, 2.0).suggested_price(), 10.0);
        assert_eq!(costing(0.0, 1.0).suggested_price(), 13.0);
    }

    #[test]
    fn degenerate_inputs_are_not_guarded() {
        assert!(costing(35.0, 0.0).suggested_price().is_infinite());
        assert!(costing(100.0, 1.0).suggested_price().is_infinite());
    }

    #[test]
    fn line_totals_multiply() {
        assert_eq!(line_total(2.5, 4.0), 10.0);
    }
}
