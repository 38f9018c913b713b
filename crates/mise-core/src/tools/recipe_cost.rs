use std::sync::OnceLock;

use mise_domain::{FieldAccess, FieldValue, Fields};

use super::{entries_mut, ToolKind};
use crate::metrics::recipe::{line_total, RecipeCosting};
use crate::schema::{FieldDescriptor, StepDescriptor, ToolSchema};

const CATEGORIES: &[&str] = &[
    "Appetizers",
    "Main Course",
    "Desserts",
    "Beverages",
    "Sides",
    "Specials",
];
const UNITS: &[&str] = &["g", "kg", "ml", "l", "pcs", "oz", "lb", "cup"];

pub(super) fn schema() -> &'static ToolSchema {
    static SCHEMA: OnceLock<ToolSchema> = OnceLock::new();
    SCHEMA.get_or_init(|| ToolSchema {
        kind: ToolKind::RecipeCostCalculator,
        title: "Recipe Cost Calculator",
        subject: "recipe",
        title_field: "name",
        steps: vec![
            StepDescriptor::new(
                "Recipe Info",
                "Basic details",
                vec![
                    FieldDescriptor::text("name", "Recipe Name").required(),
                    FieldDescriptor::choice("category", "Category", CATEGORIES),
                    FieldDescriptor::number("serving_size", "Serving Size")
                        .with_default(1.0)
                        .with_help("Portions produced by one batch."),
                ],
            ),
            StepDescriptor::new(
                "Ingredients",
                "Add ingredients",
                vec![FieldDescriptor::list(
                    "ingredients",
                    "Ingredients",
                    vec![
                        FieldDescriptor::text("name", "Ingredient"),
                        FieldDescriptor::choice("unit", "Unit", UNITS),
                        FieldDescriptor::number("unit_cost", "Cost per Unit"),
                        FieldDescriptor::number("quantity", "Quantity"),
                        FieldDescriptor::number("total_cost", "Total").derived(),
                    ],
                )],
            ),
            StepDescriptor::new(
                "Costs",
                "Labor & overhead",
                vec![
                    FieldDescriptor::number("labor_cost", "Labor Cost"),
                    FieldDescriptor::number("overhead_cost", "Overhead Cost"),
                ],
            ),
            StepDescriptor::new(
                "Pricing",
                "Set margins",
                vec![FieldDescriptor::number("target_margin", "Target Margin (%)")
                    .with_help("Share of the selling price kept as profit.")],
            ),
        ],
        derived: vec![
            FieldDescriptor::number("ingredients_total", "Ingredients Total").derived(),
            FieldDescriptor::number("suggested_price", "Suggested Price").derived(),
        ],
        missing_message: "Please provide a name for your recipe",
        success_message: "Recipe cost calculation saved successfully!",
        task_template: "Review recipe costs for {}",
        derive,
    })
}

fn derive(fields: &mut Fields) {
    let mut ingredients_total = 0.0;
    for entry in entries_mut(fields, "ingredients") {
        let total = line_total(entry.number("unit_cost"), entry.number("quantity"));
        entry.fields.insert("total_cost", FieldValue::Number(total));
        ingredients_total += total;
    }

    let costing = RecipeCosting {
        ingredients_total,
        labor_cost: fields.number("labor_cost"),
        overhead_cost: fields.number("overhead_cost"),
        serving_size: fields.number("serving_size"),
        target_margin: fields.number("target_margin"),
    };
    fields.assign("ingredients_total", FieldValue::Number(ingredients_total));
    fields.assign(
        "suggested_price",
        FieldValue::Number(costing.suggested_price()),
    );
}
