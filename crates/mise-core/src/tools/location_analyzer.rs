use std::sync::OnceLock;

use mise_domain::{FieldAccess, FieldValue, Fields};

use super::ToolKind;
use crate::metrics::location::LocationFactors;
use crate::schema::{FieldDescriptor, StepDescriptor, ToolSchema};

const LEVELS: &[&str] = &["High", "Medium", "Low"];
const AGE_GROUPS: &[&str] = &["18-24", "25-34", "35-44", "45-54", "55+"];
const OCCUPATIONS: &[&str] = &[
    "Office Workers",
    "Students",
    "Professionals",
    "Tourists",
    "Families",
    "Retirees",
];
const PARKING: &[&str] = &[
    "Street Parking",
    "Private Lot",
    "Public Garage",
    "Valet Service",
    "Bike Racks",
    "Loading Zone",
];
const TRANSPORT: &[&str] = &[
    "Bus Stop",
    "Train Station",
    "Subway",
    "Taxi Stand",
    "Ride Share",
    "Walking Distance",
];
const VISIBILITY: &[&str] = &[
    "Main Street",
    "Corner Location",
    "Signage Allowed",
    "Window Display",
    "Landmark Area",
    "High Foot Traffic",
];
const TRAFFIC: &[&str] = &[
    "Morning Rush",
    "Lunch Hour",
    "Evening Rush",
    "Weekend Flow",
    "Event Traffic",
    "Tourist Season",
];
const GAPS: &[&str] = &[
    "Fine Dining",
    "Fast Casual",
    "Healthy Options",
    "Ethnic Cuisine",
    "Breakfast/Brunch",
    "Late Night",
    "Delivery Focus",
    "Family Friendly",
];
const LICENSES: &[&str] = &[
    "Business License",
    "Food Service Permit",
    "Health Permit",
    "Liquor License",
    "Sign Permit",
    "Building Permit",
    "Fire Safety",
    "Outdoor Seating",
];

const ACCESSIBILITY_KEYS: [&str; 4] = [
    "accessibility.parking",
    "accessibility.transport",
    "accessibility.visibility",
    "accessibility.traffic",
];

pub(super) fn schema() -> &'static ToolSchema {
    static SCHEMA: OnceLock<ToolSchema> = OnceLock::new();
    SCHEMA.get_or_init(|| ToolSchema {
        kind: ToolKind::LocationAnalyzer,
        title: "Location Analyzer",
        subject: "location",
        title_field: "name",
        steps: vec![
            StepDescriptor::new(
                "Basic Info",
                "Location details",
                vec![
                    FieldDescriptor::text("name", "Location Name").required(),
                    FieldDescriptor::text("address", "Address").required(),
                ],
            ),
            StepDescriptor::new(
                "Demographics",
                "Target market",
                vec![
                    FieldDescriptor::choice("demographics.population", "Population Density", LEVELS),
                    FieldDescriptor::choice("demographics.income", "Income Level", LEVELS),
                    FieldDescriptor::multi("demographics.age_groups", "Age Groups", AGE_GROUPS),
                    FieldDescriptor::multi("demographics.occupations", "Occupations", OCCUPATIONS),
                ],
            ),
            StepDescriptor::new(
                "Accessibility",
                "Location access",
                vec![
                    FieldDescriptor::multi("accessibility.parking", "Parking", PARKING),
                    FieldDescriptor::multi("accessibility.transport", "Public Transport", TRANSPORT),
                    FieldDescriptor::multi("accessibility.visibility", "Visibility", VISIBILITY),
                    FieldDescriptor::multi("accessibility.traffic", "Traffic Patterns", TRAFFIC),
                ],
            ),
            StepDescriptor::new(
                "Competition",
                "Market analysis",
                vec![
                    FieldDescriptor::number("competition.direct", "Direct Competitors"),
                    FieldDescriptor::number("competition.indirect", "Indirect Competitors"),
                    FieldDescriptor::choice("competition.saturation", "Market Saturation", LEVELS),
                    FieldDescriptor::multi("competition.gaps", "Market Gaps", GAPS),
                ],
            ),
            StepDescriptor::new(
                "Costs",
                "Financial factors",
                vec![
                    FieldDescriptor::number("costs.rent", "Monthly Rent"),
                    FieldDescriptor::number("costs.utilities", "Monthly Utilities"),
                    FieldDescriptor::number("costs.renovation", "Renovation Budget"),
                    FieldDescriptor::multi("costs.licenses", "Required Licenses", LICENSES),
                ],
            ),
        ],
        derived: vec![
            FieldDescriptor::number("score.demographic", "Demographic Score").derived(),
            FieldDescriptor::number("score.accessibility", "Accessibility Score").derived(),
            FieldDescriptor::number("score.competition", "Competition Score").derived(),
            FieldDescriptor::number("score.financial", "Financial Score").derived(),
            FieldDescriptor::number("score.overall", "Overall Score").derived(),
        ],
        missing_message: "Please provide both name and address for the location",
        success_message: "Location analysis saved successfully!",
        task_template: "Review location analysis for {}",
        derive,
    })
}

fn derive(fields: &mut Fields) {
    let factors = LocationFactors {
        age_groups: fields.tag_count("demographics.age_groups"),
        occupations: fields.tag_count("demographics.occupations"),
        accessibility_tags: ACCESSIBILITY_KEYS
            .iter()
            .map(|key| fields.tag_count(key))
            .sum(),
        direct_competitors: fields.number("competition.direct"),
        market_gaps: fields.tag_count("competition.gaps"),
        monthly_rent: fields.number("costs.rent"),
    };
    let scores = factors.scores();
    for (key, value) in [
        ("score.demographic", scores.demographic),
        ("score.accessibility", scores.accessibility),
        ("score.competition", scores.competition),
        ("score.financial", scores.financial),
        ("score.overall", scores.overall),
    ] {
        fields.assign(key, FieldValue::Number(value));
    }
}
