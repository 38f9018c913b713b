use std::sync::OnceLock;

use mise_domain::{FieldAccess, FieldValue, Fields};

use super::ToolKind;
use crate::metrics::equipment::{plan_total, EquipmentCost};
use crate::schema::{FieldDescriptor, StepDescriptor, ToolSchema};

const RESTAURANT_TYPES: &[&str] = &[
    "Full Service",
    "Quick Service",
    "Cafe",
    "Ghost Kitchen",
    "Food Truck",
];
const CATEGORIES: &[&str] = &[
    "Cooking",
    "Refrigeration",
    "Food Prep",
    "Storage",
    "Cleaning",
    "Service",
];
const PRIORITIES: &[&str] = &["Essential", "Important", "Optional"];
const SPECS: &[&str] = &[
    "Energy Efficient",
    "Space Saving",
    "High Capacity",
    "Digital Controls",
    "NSF Certified",
    "UL Listed",
    "Commercial Grade",
    "Easy Clean",
];
const LAYOUT: &[&str] = &[
    "Work Triangle",
    "Prep Station Flow",
    "Storage Access",
    "Safety Zones",
    "Ventilation",
    "Cleaning Areas",
    "Service Flow",
    "Emergency Access",
];
const MAINTENANCE: &[&str] = &[
    "Daily Cleaning",
    "Weekly Inspection",
    "Monthly Service",
    "Quarterly Maintenance",
    "Annual Certification",
    "Emergency Repairs",
    "Staff Training",
    "Documentation",
];

pub(super) fn schema() -> &'static ToolSchema {
    static SCHEMA: OnceLock<ToolSchema> = OnceLock::new();
    SCHEMA.get_or_init(|| ToolSchema {
        kind: ToolKind::EquipmentGuide,
        title: "Equipment Guide",
        subject: "equipment plan",
        title_field: "name",
        steps: vec![
            StepDescriptor::new(
                "Basic Info",
                "Plan details",
                vec![
                    FieldDescriptor::text("name", "Plan Name").required(),
                    FieldDescriptor::choice("restaurant_type", "Restaurant Type", RESTAURANT_TYPES),
                    FieldDescriptor::number("budget", "Total Budget"),
                ],
            ),
            StepDescriptor::new(
                "Equipment List",
                "Required items",
                vec![FieldDescriptor::list(
                    "equipment",
                    "Equipment",
                    vec![
                        FieldDescriptor::text("name", "Equipment Name"),
                        FieldDescriptor::choice("category", "Category", CATEGORIES),
                        FieldDescriptor::choice("priority", "Priority", PRIORITIES),
                        FieldDescriptor::multi("specs", "Specifications", SPECS),
                        FieldDescriptor::lines("features", "Features"),
                        FieldDescriptor::number("cost.purchase", "Purchase Cost"),
                        FieldDescriptor::number("cost.installation", "Installation Cost"),
                        FieldDescriptor::number("cost.maintenance", "Annual Maintenance"),
                        FieldDescriptor::lines("suppliers", "Suppliers"),
                    ],
                )],
            ),
            StepDescriptor::new(
                "Layout & Space",
                "Equipment layout",
                vec![FieldDescriptor::multi("layout", "Layout Considerations", LAYOUT)],
            ),
            StepDescriptor::new(
                "Maintenance",
                "Upkeep planning",
                vec![FieldDescriptor::multi("maintenance", "Maintenance Plan", MAINTENANCE)],
            ),
        ],
        derived: vec![FieldDescriptor::number("total_cost", "Total Cost").derived()],
        missing_message: "Please provide a name for your equipment plan",
        success_message: "Equipment plan saved successfully!",
        task_template: "Review equipment plan for {}",
        derive,
    })
}

fn derive(fields: &mut Fields) {
    let total = plan_total(fields.entries("equipment").iter().map(|item| EquipmentCost {
        purchase: item.number("cost.purchase"),
        installation: item.number("cost.installation"),
        maintenance: item.number("cost.maintenance"),
    }));
    fields.assign("total_cost", FieldValue::Number(total));
}
