//! Pure derived-metric heuristics evaluated when a tool record is saved.

pub mod concept;
pub mod equipment;
pub mod location;
pub mod menu;
pub mod pricing;
pub mod recipe;
pub mod staffing;

pub use concept::{ConceptSignals, ValidationScores};
pub use location::{LocationFactors, LocationScores};
pub use equipment::EquipmentCost;
pub use menu::{classify_items, MenuAnalysis, MenuClass, MenuItemFigures};
pub use pricing::{MarketPosition, PricePoint};
pub use recipe::RecipeCosting;
pub use staffing::{ShiftPlan, StaffBudget};

/// Rounds half-way values towards positive infinity, matching the rounding
/// used by the browser build (`-2.5` rounds to `-2`).
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Rounds to two decimals. Infinite and NaN inputs pass through.
pub fn round_cents(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    round_half_up(value * 100.0) / 100.0
}

/// `count / max * 100`, without clamping.
pub fn share(count: usize, max: f64) -> f64 {
    count as f64 / max * 100.0
}
