use std::sync::OnceLock;

use super::{no_derived_fields, ToolKind};
use crate::schema::{FieldDescriptor, StepDescriptor, ToolSchema};

const AGES: &[&str] = &["18-24", "25-34", "35-44", "45-54", "55+"];
const INCOMES: &[&str] = &["Under $30k", "$30k-$50k", "$50k-$75k", "$75k-$100k", "$100k+"];
const VISIT_FREQUENCY: &[&str] = &[
    "Daily",
    "2-3 times a week",
    "Weekly",
    "Monthly",
    "Occasionally",
];
const SPEND: &[&str] = &["Under $15", "$15-$30", "$30-$50", "$50-$100", "$100+"];
const TIMES: &[&str] = &["Breakfast", "Lunch", "Dinner", "Late Night"];
const GROUP_SIZES: &[&str] = &[
    "Solo",
    "Couple",
    "Small Group (3-4)",
    "Medium Group (5-8)",
    "Large Group (8+)",
];
const CUISINES: &[&str] = &[
    "Asian Fusion",
    "Italian",
    "American",
    "Mexican",
    "Japanese",
    "Mediterranean",
    "Indian",
    "Thai",
];
const MOTIVATIONS: &[&str] = &[
    "Quick Meals",
    "Social Gatherings",
    "Special Occasions",
    "Business Meetings",
    "Family Time",
];
const DIETARY: &[&str] = &[
    "Vegetarian",
    "Vegan",
    "Gluten-Free",
    "Dairy-Free",
    "Halal",
    "Organic",
    "Low-Carb",
];
const SERVICE: &[&str] = &[
    "Quick Service",
    "Fine Dining",
    "Casual",
    "Self-Service",
    "Delivery",
];
const PAIN_POINTS: &[&str] = &[
    "Wait Times",
    "Price",
    "Parking",
    "Food Quality",
    "Service Speed",
    "Menu Variety",
];
const LIFESTYLE: &[&str] = &[
    "Health-Conscious",
    "Foodie",
    "Busy Professional",
    "Family-Oriented",
    "Social",
    "Budget-Minded",
];
const CHANNELS: &[&str] = &["Email", "SMS", "Social Media", "Push Notifications", "Print Media"];
const PROMOTIONS: &[&str] = &[
    "Discounts",
    "BOGO",
    "Points",
    "Free Items",
    "Early Access",
    "Special Events",
];

pub(super) fn schema() -> &'static ToolSchema {
    static SCHEMA: OnceLock<ToolSchema> = OnceLock::new();
    SCHEMA.get_or_init(|| ToolSchema {
        kind: ToolKind::CustomerPersonaBuilder,
        title: "Customer Persona Builder",
        subject: "customer persona",
        title_field: "name",
        steps: vec![
            StepDescriptor::new(
                "Basic Info",
                "Personal details",
                vec![
                    FieldDescriptor::text("name", "Persona Name").required(),
                    FieldDescriptor::choice("age", "Age Range", AGES),
                    FieldDescriptor::text("occupation", "Occupation"),
                    FieldDescriptor::choice("income", "Income Level", INCOMES),
                    FieldDescriptor::text("location", "Location"),
                ],
            ),
            StepDescriptor::new(
                "Dining Habits",
                "Preferences & behavior",
                vec![
                    FieldDescriptor::choice(
                        "dining_behavior.visit_frequency",
                        "Visit Frequency",
                        VISIT_FREQUENCY,
                    ),
                    FieldDescriptor::choice("dining_behavior.average_spend", "Average Spend", SPEND),
                    FieldDescriptor::multi(
                        "dining_behavior.preferred_times",
                        "Preferred Times",
                        TIMES,
                    ),
                    FieldDescriptor::choice("dining_behavior.group_size", "Group Size", GROUP_SIZES),
                ],
            ),
            StepDescriptor::new(
                "Preferences",
                "Dietary & service needs",
                vec![
                    FieldDescriptor::multi(
                        "attributes.cuisine_preferences",
                        "Cuisine Preferences",
                        CUISINES,
                    ),
                    FieldDescriptor::multi(
                        "attributes.dining_motivations",
                        "Dining Motivations",
                        MOTIVATIONS,
                    ),
                    FieldDescriptor::multi(
                        "attributes.dietary_preferences",
                        "Dietary Preferences",
                        DIETARY,
                    ),
                    FieldDescriptor::multi(
                        "attributes.service_expectations",
                        "Service Expectations",
                        SERVICE,
                    ),
                    FieldDescriptor::multi("attributes.pain_points", "Pain Points", PAIN_POINTS),
                    FieldDescriptor::multi("attributes.lifestyle", "Lifestyle", LIFESTYLE),
                ],
            ),
            StepDescriptor::new(
                "Marketing",
                "Channel preferences",
                vec![
                    FieldDescriptor::multi(
                        "marketing_preferences.channels",
                        "Preferred Channels",
                        CHANNELS,
                    ),
                    FieldDescriptor::multi(
                        "marketing_preferences.promotion_types",
                        "Promotion Types",
                        PROMOTIONS,
                    ),
                    FieldDescriptor::text(
                        "marketing_preferences.loyalty_preference",
                        "Loyalty Preference",
                    ),
                ],
            ),
            StepDescriptor::new(
                "Competition",
                "Market insights",
                vec![FieldDescriptor::lines(
                    "competitor_insights",
                    "Competitor Insights",
                )],
            ),
        ],
        derived: Vec::new(),
        missing_message: "Please provide a name for the persona",
        success_message: "Customer persona saved successfully!",
        task_template: "Review customer persona: {}",
        derive: no_derived_fields,
    })
}
