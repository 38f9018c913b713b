use std::sync::OnceLock;

use super::{no_derived_fields, ToolKind};
use crate::schema::{FieldDescriptor, StepDescriptor, ToolSchema};

const LEVELS: &[&str] = &["High", "Medium", "Low"];
const AGE_GROUPS: &[&str] = &["18-24", "25-34", "35-44", "45-54", "55+"];
const OCCUPATIONS: &[&str] = &[
    "Students",
    "Professionals",
    "Entrepreneurs",
    "Service Workers",
    "Retirees",
];
const COMPETITOR_TYPES: &[&str] = &["Restaurant", "Cafe", "Fast Food", "Food Truck"];
const STRENGTHS: &[&str] = &["Location", "Price", "Quality", "Service", "Ambiance"];
const WEAKNESSES: &[&str] = &[
    "Limited Menu",
    "High Prices",
    "Poor Service",
    "Location",
    "Hours",
];
const GAPS: &[&str] = &[
    "Healthy Options",
    "Late Night Dining",
    "Family-Friendly",
    "Quick Service",
    "Premium Experience",
    "Authentic Cuisine",
    "Dietary Restrictions",
    "Value Meals",
];
const TRENDS: &[&str] = &[
    "Plant-Based",
    "Global Fusion",
    "Health-Conscious",
    "Instagram-Worthy",
    "Sustainable",
    "Local Sourcing",
    "Ghost Kitchen",
    "Experience Dining",
];
const PEAK_HOURS: &[&str] = &[
    "Early Morning (6-9)",
    "Morning (9-11)",
    "Lunch (11-2)",
    "Afternoon (2-5)",
    "Dinner (5-8)",
    "Late Night (8-12)",
];
const SEASONALITY: &[&str] = &[
    "Summer Peak",
    "Winter Peak",
    "Holiday Season",
    "School Season",
    "Tourist Season",
    "Year-Round",
];
const EVENTS: &[&str] = &[
    "Sports Events",
    "Festivals",
    "Conventions",
    "Business District",
    "Shopping Season",
    "Cultural Events",
];

pub(super) fn schema() -> &'static ToolSchema {
    static SCHEMA: OnceLock<ToolSchema> = OnceLock::new();
    SCHEMA.get_or_init(|| ToolSchema {
        kind: ToolKind::MarketGapAnalyzer,
        title: "Market Gap Analyzer",
        subject: "market analysis",
        title_field: "location.area",
        steps: vec![
            StepDescriptor::new(
                "Location Analysis",
                "Area demographics",
                vec![
                    FieldDescriptor::text("location.area", "Area").required(),
                    FieldDescriptor::choice("location.population", "Population Density", LEVELS),
                    FieldDescriptor::choice("location.income", "Income Level", LEVELS),
                    FieldDescriptor::lines("location.competition", "Nearby Competition"),
                    FieldDescriptor::multi("demographics.age_groups", "Age Groups", AGE_GROUPS),
                    FieldDescriptor::multi("demographics.occupations", "Occupations", OCCUPATIONS),
                    FieldDescriptor::lines("demographics.lifestyles", "Lifestyles"),
                ],
            ),
            StepDescriptor::new(
                "Competition",
                "Competitor analysis",
                vec![
                    FieldDescriptor::list(
                        "competition.direct_competitors",
                        "Direct Competitors",
                        vec![
                            FieldDescriptor::text("name", "Competitor Name"),
                            FieldDescriptor::choice("type", "Type", COMPETITOR_TYPES),
                            FieldDescriptor::multi("strengths", "Strengths", STRENGTHS),
                            FieldDescriptor::multi("weaknesses", "Weaknesses", WEAKNESSES),
                        ],
                    ),
                    FieldDescriptor::lines(
                        "competition.indirect_competitors",
                        "Indirect Competitors",
                    ),
                ],
            ),
            StepDescriptor::new(
                "Market Gaps",
                "Opportunity identification",
                vec![
                    FieldDescriptor::multi("opportunities.gaps", "Market Gaps", GAPS),
                    FieldDescriptor::multi("opportunities.trends", "Emerging Trends", TRENDS),
                    FieldDescriptor::text("opportunities.unique_value", "Unique Value Proposition"),
                ],
            ),
            StepDescriptor::new(
                "Demand Analysis",
                "Customer demand patterns",
                vec![
                    FieldDescriptor::multi("demand.peak_hours", "Peak Hours", PEAK_HOURS),
                    FieldDescriptor::multi("demand.seasonality", "Seasonality", SEASONALITY),
                    FieldDescriptor::multi("demand.events", "Demand Events", EVENTS),
                ],
            ),
        ],
        derived: Vec::new(),
        missing_message: "Please provide a location area for the analysis",
        success_message: "Market analysis saved successfully!",
        task_template: "Review market analysis for {}",
        derive: no_derived_fields,
    })
}
