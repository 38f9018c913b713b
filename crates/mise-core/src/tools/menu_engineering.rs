use std::sync::OnceLock;

use mise_domain::{FieldAccess, FieldValue, Fields};

use super::{entries_mut, ToolKind};
use crate::metrics::menu::{classify_items, MenuItemFigures};
use crate::schema::{FieldDescriptor, StepDescriptor, ToolSchema};

const LAYOUTS: &[&str] = &[
    "Single Page",
    "Bi-fold",
    "Tri-fold",
    "Multi-page",
    "Digital Display",
];
const STYLES: &[&str] = &[
    "Modern",
    "Classic",
    "Minimalist",
    "Rustic",
    "Elegant",
    "Playful",
    "Traditional",
    "Contemporary",
];
const DESCRIPTIONS: &[&str] = &[
    "Detailed",
    "Concise",
    "Story-telling",
    "Ingredients-focused",
    "Preparation-method",
    "Cultural-context",
    "Allergen-info",
    "Dietary-labels",
];
const PRICING: &[&str] = &[
    "Simple Numbers",
    "Currency Symbol",
    "Decimal Points",
    "No Zeros",
    "Right-aligned",
    "Size Variations",
    "Price Anchoring",
    "Bundle Pricing",
];

pub(super) fn schema() -> &'static ToolSchema {
    static SCHEMA: OnceLock<ToolSchema> = OnceLock::new();
    SCHEMA.get_or_init(|| ToolSchema {
        kind: ToolKind::MenuEngineering,
        title: "Menu Engineering",
        subject: "menu",
        title_field: "name",
        steps: vec![
            StepDescriptor::new(
                "Menu Categories",
                "Define menu sections",
                vec![
                    FieldDescriptor::text("name", "Menu Name").required(),
                    FieldDescriptor::list(
                        "categories",
                        "Categories",
                        vec![
                            FieldDescriptor::text("name", "Category Name"),
                            FieldDescriptor::text("description", "Description"),
                            FieldDescriptor::list(
                                "items",
                                "Items",
                                vec![
                                    FieldDescriptor::text("name", "Item Name"),
                                    FieldDescriptor::number("price", "Price"),
                                    FieldDescriptor::number("cost", "Cost"),
                                    FieldDescriptor::number("popularity", "Popularity (%)"),
                                    FieldDescriptor::number("contribution", "Contribution Margin"),
                                    FieldDescriptor::text("classification", "Classification")
                                        .derived(),
                                ],
                            ),
                        ],
                    ),
                ],
            ),
            // Items are edited inside their categories on this page.
            StepDescriptor::new("Menu Items", "Add dishes & details", Vec::new()),
            StepDescriptor::new("Analysis", "Performance metrics", Vec::new()),
            StepDescriptor::new(
                "Design",
                "Layout & style",
                vec![
                    FieldDescriptor::choice("layout", "Menu Layout", LAYOUTS),
                    FieldDescriptor::multi("style", "Visual Style", STYLES),
                    FieldDescriptor::multi("descriptions", "Item Descriptions", DESCRIPTIONS),
                    FieldDescriptor::multi("pricing", "Price Display", PRICING),
                ],
            ),
        ],
        derived: vec![
            FieldDescriptor::number("analysis.item_count", "Items").derived(),
            FieldDescriptor::number("analysis.average_popularity", "Average Popularity").derived(),
            FieldDescriptor::number("analysis.average_contribution", "Average Contribution")
                .derived(),
        ],
        missing_message: "Please provide a name for your menu",
        success_message: "Menu design saved successfully!",
        task_template: "Review menu design for {}",
        derive,
    })
}

fn derive(fields: &mut Fields) {
    let figures: Vec<MenuItemFigures> = fields
        .entries("categories")
        .iter()
        .flat_map(|category| category.entries("items"))
        .map(|item| MenuItemFigures {
            popularity: item.number("popularity"),
            contribution: item.number("contribution"),
        })
        .collect();
    let analysis = classify_items(&figures);

    let mut classes = analysis.classes.iter();
    for category in entries_mut(fields, "categories") {
        for item in entries_mut(&mut category.fields, "items") {
            if let Some(class) = classes.next() {
                item.fields
                    .insert("classification", FieldValue::text(class.label()));
            }
        }
    }

    fields.assign("analysis.item_count", FieldValue::Number(figures.len() as f64));
    fields.assign(
        "analysis.average_popularity",
        FieldValue::Number(analysis.average_popularity),
    );
    fields.assign(
        "analysis.average_contribution",
        FieldValue::Number(analysis.average_contribution),
    );
}
