use std::sync::OnceLock;

use mise_domain::{FieldAccess, FieldValue, Fields};

use super::{entries_mut, ToolKind};
use crate::metrics::pricing::{MarketPosition, PricePoint};
use crate::schema::{FieldDescriptor, StepDescriptor, ToolSchema};

const SEGMENTS: &[&str] = &["High-End", "Mid-Market", "Value", "Mixed"];
const POSITIONS: &[&str] = &[
    "Premium Leader",
    "Quality Mid-Range",
    "Value Provider",
    "Hybrid",
];
const ITEM_POSITIONS: &[&str] = &["Premium", "Standard", "Value", "Economy"];
const ELASTICITY: &[&str] = &["High", "Medium", "Low"];
// Pricing factors and promotional opportunities share one selection.
const FACTORS: &[&str] = &[
    "Competition",
    "Seasonality",
    "Time of Day",
    "Customer Segment",
    "Location",
    "Events",
    "Cost Changes",
    "Demand Patterns",
    "Happy Hour",
    "Early Bird",
    "Weekend Special",
    "Seasonal Menu",
    "Volume Discount",
    "Premium Time",
    "Event Pricing",
    "Package Deals",
];

pub(super) fn schema() -> &'static ToolSchema {
    static SCHEMA: OnceLock<ToolSchema> = OnceLock::new();
    SCHEMA.get_or_init(|| ToolSchema {
        kind: ToolKind::PriceOptimizer,
        title: "Price Optimizer",
        subject: "pricing strategy",
        title_field: "name",
        steps: vec![
            StepDescriptor::new(
                "Market Position",
                "Competitive analysis",
                vec![
                    FieldDescriptor::text("name", "Strategy Name").required(),
                    FieldDescriptor::choice("market_segment", "Market Segment", SEGMENTS),
                    FieldDescriptor::choice(
                        "competitive_position",
                        "Competitive Position",
                        POSITIONS,
                    ),
                ],
            ),
            StepDescriptor::new(
                "Price Points",
                "Item pricing",
                vec![FieldDescriptor::list(
                    "price_points",
                    "Price Points",
                    vec![
                        FieldDescriptor::text("item_name", "Item Name"),
                        FieldDescriptor::number("cost_price", "Cost Price"),
                        FieldDescriptor::numbers("competitor_prices", "Competitor Prices"),
                        FieldDescriptor::choice("market_position", "Market Position", ITEM_POSITIONS),
                        FieldDescriptor::choice("elasticity", "Price Elasticity", ELASTICITY),
                        FieldDescriptor::number("projected_volume", "Projected Volume"),
                        FieldDescriptor::number("suggested_price", "Suggested Price").derived(),
                    ],
                )],
            ),
            StepDescriptor::new(
                "Margins",
                "Profit targets",
                vec![
                    FieldDescriptor::number("margins.target", "Target Margin (%)"),
                    FieldDescriptor::number("margins.minimum", "Minimum Margin (%)"),
                    FieldDescriptor::number("margins.maximum", "Maximum Margin (%)"),
                ],
            ),
            StepDescriptor::new(
                "Optimization",
                "Price optimization",
                vec![FieldDescriptor::multi(
                    "optimization.factors",
                    "Pricing Factors",
                    FACTORS,
                )],
            ),
        ],
        derived: vec![FieldDescriptor::lines(
            "optimization.recommendations",
            "Recommendations",
        )
        .derived()],
        missing_message: "Please provide a name for your pricing strategy",
        success_message: "Pricing strategy saved successfully!",
        task_template: "Review pricing strategy for {}",
        derive,
    })
}

fn derive(fields: &mut Fields) {
    let minimum_margin = fields.number("margins.minimum");
    let mut recommendations = Vec::new();
    for entry in entries_mut(fields, "price_points") {
        let point = PricePoint {
            item_name: entry.text("item_name"),
            cost_price: entry.number("cost_price"),
            competitor_prices: entry.numbers("competitor_prices"),
            position: MarketPosition::from_label(entry.text("market_position")),
        };
        let suggested = point.suggested_price();
        recommendations.extend(point.recommendations(suggested, minimum_margin));
        entry
            .fields
            .insert("suggested_price", FieldValue::Number(suggested));
    }
    fields.assign(
        "optimization.recommendations",
        FieldValue::Lines(recommendations),
    );
}
