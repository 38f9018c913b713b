//! The wizard tools offered on the dashboard and the stage catalogue that
//! decides which of them a business sees.

use std::fmt;

use mise_domain::{BusinessStage, Entry, FieldValue, Fields};

use crate::schema::ToolSchema;

mod brand_identity;
mod concept_builder;
mod concept_validator;
mod content_calendar;
mod customer_persona;
mod demand_forecaster;
mod equipment_guide;
mod location_analyzer;
mod market_gap;
mod menu_engineering;
mod price_optimizer;
mod recipe_cost;
mod staff_planner;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ToolKind {
    MarketGapAnalyzer,
    DemandForecaster,
    CustomerPersonaBuilder,
    RestaurantConceptBuilder,
    BrandIdentityDesigner,
    ConceptValidator,
    MenuEngineering,
    RecipeCostCalculator,
    PriceOptimizer,
    StaffPlanner,
    LocationAnalyzer,
    EquipmentGuide,
    ContentCalendar,
}

impl ToolKind {
    pub const ALL: [ToolKind; 13] = [
        ToolKind::MarketGapAnalyzer,
        ToolKind::DemandForecaster,
        ToolKind::CustomerPersonaBuilder,
        ToolKind::RestaurantConceptBuilder,
        ToolKind::BrandIdentityDesigner,
        ToolKind::ConceptValidator,
        ToolKind::MenuEngineering,
        ToolKind::RecipeCostCalculator,
        ToolKind::PriceOptimizer,
        ToolKind::StaffPlanner,
        ToolKind::LocationAnalyzer,
        ToolKind::EquipmentGuide,
        ToolKind::ContentCalendar,
    ];

    pub fn schema(self) -> &'static ToolSchema {
        match self {
            ToolKind::MarketGapAnalyzer => market_gap::schema(),
            ToolKind::DemandForecaster => demand_forecaster::schema(),
            ToolKind::CustomerPersonaBuilder => customer_persona::schema(),
            ToolKind::RestaurantConceptBuilder => concept_builder::schema(),
            ToolKind::BrandIdentityDesigner => brand_identity::schema(),
            ToolKind::ConceptValidator => concept_validator::schema(),
            ToolKind::MenuEngineering => menu_engineering::schema(),
            ToolKind::RecipeCostCalculator => recipe_cost::schema(),
            ToolKind::PriceOptimizer => price_optimizer::schema(),
            ToolKind::StaffPlanner => staff_planner::schema(),
            ToolKind::LocationAnalyzer => location_analyzer::schema(),
            ToolKind::EquipmentGuide => equipment_guide::schema(),
            ToolKind::ContentCalendar => content_calendar::schema(),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ToolKind::MarketGapAnalyzer => "Market Gap Analyzer",
            ToolKind::DemandForecaster => "Demand Forecaster",
            ToolKind::CustomerPersonaBuilder => "Customer Persona Builder",
            ToolKind::RestaurantConceptBuilder => "Restaurant Concept Builder",
            ToolKind::BrandIdentityDesigner => "Brand Identity Designer",
            ToolKind::ConceptValidator => "Concept Validator",
            ToolKind::MenuEngineering => "Menu Engineering",
            ToolKind::RecipeCostCalculator => "Recipe Cost Calculator",
            ToolKind::PriceOptimizer => "Price Optimizer",
            ToolKind::StaffPlanner => "Staff Planner",
            ToolKind::LocationAnalyzer => "Location Analyzer",
            ToolKind::EquipmentGuide => "Equipment Guide",
            ToolKind::ContentCalendar => "Content Calendar",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Tools shown for a business stage, in dashboard order.
///
/// The established stage only shows operations cards. The persona builder is
/// not placed on any stage.
pub fn tools_for_stage(stage: BusinessStage) -> &'static [ToolKind] {
    match stage {
        BusinessStage::Ideation => &[
            ToolKind::MarketGapAnalyzer,
            ToolKind::DemandForecaster,
            ToolKind::RestaurantConceptBuilder,
            ToolKind::BrandIdentityDesigner,
            ToolKind::ConceptValidator,
            ToolKind::MenuEngineering,
            ToolKind::RecipeCostCalculator,
            ToolKind::PriceOptimizer,
        ],
        BusinessStage::Planning => &[
            ToolKind::StaffPlanner,
            ToolKind::LocationAnalyzer,
            ToolKind::EquipmentGuide,
        ],
        BusinessStage::Established => &[],
        BusinessStage::Social => &[ToolKind::ContentCalendar],
    }
}

/// `derive` hook for tools without computed fields.
fn no_derived_fields(_: &mut Fields) {}

/// Entries of a list field, for derive hooks that rewrite item fields.
fn entries_mut<'a>(fields: &'a mut Fields, key: &str) -> &'a mut [Entry] {
    match fields.lookup_mut(key) {
        Some(FieldValue::List(entries)) => entries.as_mut_slice(),
        _ => Default::default(),
    }
}
