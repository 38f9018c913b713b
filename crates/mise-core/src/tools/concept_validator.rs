use std::sync::OnceLock;

use mise_domain::{FieldAccess, FieldValue, Fields};

use super::ToolKind;
use crate::metrics::concept::ConceptSignals;
use crate::schema::{FieldDescriptor, StepDescriptor, ToolSchema};

const TARGET_MARKETS: &[&str] = &[
    "Young Professionals",
    "Families",
    "Students",
    "Business Crowd",
    "Tourists",
    "Health Conscious",
    "Foodies",
    "Special Occasion",
];
const STRENGTHS: &[&str] = &[
    "Location",
    "Price",
    "Quality",
    "Service",
    "Ambiance",
    "Menu",
    "Brand",
    "Experience",
];
const COMPETITOR_GAPS: &[&str] = &[
    "Price Point",
    "Service Quality",
    "Menu Variety",
    "Atmosphere",
    "Innovation",
    "Convenience",
    "Health Options",
    "Experience",
];
const MARKET_SIZES: &[&str] = &[
    "Small (Under 50k)",
    "Medium (50k-200k)",
    "Large (200k-500k)",
    "Very Large (500k+)",
];
const STARTUP_COSTS: &[&str] = &[
    "Location Renovation",
    "Kitchen Equipment",
    "Furniture & Decor",
    "Licenses & Permits",
    "Initial Inventory",
    "Marketing & Branding",
    "Technology Systems",
    "Working Capital",
];
const REVENUE_STREAMS: &[&str] = &[
    "Dine-in",
    "Takeout",
    "Delivery",
    "Catering",
    "Events",
    "Merchandise",
    "Subscriptions",
    "Partnerships",
];
const PROFIT_MARGINS: &[&str] = &[
    "Low (0-10%)",
    "Medium (10-20%)",
    "High (20-30%)",
    "Premium (30%+)",
];
const BREAK_EVEN: &[&str] = &["6 months", "1 year", "1.5 years", "2+ years"];
const FEEDBACK_METHODS: &[&str] = &[
    "Focus Groups",
    "Surveys",
    "Pop-up Events",
    "Social Media",
    "Expert Reviews",
    "Taste Testing",
    "Concept Presentation",
    "Market Research",
];
const TEST_GROUPS: &[&str] = &[
    "Target Demographics",
    "Industry Experts",
    "Local Community",
    "Food Critics",
    "Potential Investors",
    "Restaurant Staff",
    "Food Bloggers",
    "General Public",
];
const KEY_FINDINGS: &[&str] = &[
    "Price Sensitivity",
    "Menu Preferences",
    "Service Expectations",
    "Atmosphere Feedback",
    "Location Concerns",
    "Competition Analysis",
    "Market Demand",
    "Concept Appeal",
];
const RISKS: &[&str] = &[
    "Market Competition",
    "Financial Risk",
    "Location Risk",
    "Operational Risk",
    "Staff Turnover",
    "Supply Chain",
    "Regulatory Changes",
    "Economic Factors",
];
const MITIGATIONS: &[&str] = &[
    "Unique Value Proposition",
    "Financial Buffers",
    "Location Analysis",
    "Staff Training",
    "Supplier Diversity",
    "Legal Compliance",
    "Insurance Coverage",
    "Market Research",
];
const IMPACTS: &[&str] = &[
    "Revenue Impact",
    "Cost Impact",
    "Brand Impact",
    "Operational Impact",
    "Market Share",
    "Customer Base",
    "Staff Morale",
    "Growth Plans",
];

pub(super) fn schema() -> &'static ToolSchema {
    static SCHEMA: OnceLock<ToolSchema> = OnceLock::new();
    SCHEMA.get_or_init(|| ToolSchema {
        kind: ToolKind::ConceptValidator,
        title: "Concept Validator",
        subject: "concept validation",
        title_field: "concept_name",
        steps: vec![
            StepDescriptor::new(
                "Market Research",
                "Target market & competition",
                vec![
                    FieldDescriptor::text("concept_name", "Concept Name").required(),
                    FieldDescriptor::multi(
                        "market_research.target_market",
                        "Target Market",
                        TARGET_MARKETS,
                    ),
                    FieldDescriptor::list(
                        "market_research.competitors",
                        "Competitors",
                        vec![
                            FieldDescriptor::text("name", "Competitor Name"),
                            FieldDescriptor::multi("strengths", "Strengths", STRENGTHS),
                            FieldDescriptor::multi("gaps", "Gaps", COMPETITOR_GAPS),
                        ],
                    ),
                    FieldDescriptor::choice(
                        "market_research.market_size",
                        "Market Size",
                        MARKET_SIZES,
                    ),
                ],
            ),
            StepDescriptor::new(
                "Financial Validation",
                "Costs & projections",
                vec![
                    FieldDescriptor::multi(
                        "financial_validation.startup_costs",
                        "Startup Costs",
                        STARTUP_COSTS,
                    ),
                    FieldDescriptor::multi(
                        "financial_validation.revenue_streams",
                        "Revenue Streams",
                        REVENUE_STREAMS,
                    ),
                    FieldDescriptor::choice(
                        "financial_validation.profit_margins",
                        "Expected Profit Margins",
                        PROFIT_MARGINS,
                    ),
                    FieldDescriptor::choice(
                        "financial_validation.break_even_time",
                        "Break-even Time",
                        BREAK_EVEN,
                    ),
                ],
            ),
            StepDescriptor::new(
                "Concept Testing",
                "Feedback & testing",
                vec![
                    FieldDescriptor::multi(
                        "concept_testing.feedback_methods",
                        "Feedback Methods",
                        FEEDBACK_METHODS,
                    ),
                    FieldDescriptor::multi("concept_testing.test_groups", "Test Groups", TEST_GROUPS),
                    FieldDescriptor::multi(
                        "concept_testing.key_findings",
                        "Key Findings",
                        KEY_FINDINGS,
                    ),
                ],
            ),
            StepDescriptor::new(
                "Risk Assessment",
                "Identify & mitigate risks",
                vec![
                    FieldDescriptor::multi("risk_assessment.identified", "Identified Risks", RISKS),
                    FieldDescriptor::multi(
                        "risk_assessment.mitigation",
                        "Mitigation Strategies",
                        MITIGATIONS,
                    ),
                    FieldDescriptor::multi("risk_assessment.impact", "Potential Impact", IMPACTS),
                ],
            ),
        ],
        derived: vec![
            FieldDescriptor::number("validation_score.market", "Market Score").derived(),
            FieldDescriptor::number("validation_score.financial", "Financial Score").derived(),
            FieldDescriptor::number("validation_score.operational", "Operational Score").derived(),
            FieldDescriptor::number("validation_score.overall", "Overall Score").derived(),
        ],
        missing_message: "Please provide a name for your concept",
        success_message: "Concept validation saved successfully!",
        task_template: "Review concept validation for {}",
        derive,
    })
}

fn derive(fields: &mut Fields) {
    let signals = ConceptSignals {
        target_markets: fields.tag_count("market_research.target_market"),
        competitors: fields.entries("market_research.competitors").len(),
        startup_costs: fields.tag_count("financial_validation.startup_costs"),
        revenue_streams: fields.tag_count("financial_validation.revenue_streams"),
        feedback_methods: fields.tag_count("concept_testing.feedback_methods"),
        risks_identified: fields.tag_count("risk_assessment.identified"),
        risks_mitigated: fields.tag_count("risk_assessment.mitigation"),
    };
    let scores = signals.scores();
    for (key, value) in [
        ("validation_score.market", scores.market),
        ("validation_score.financial", scores.financial),
        ("validation_score.operational", scores.operational),
        ("validation_score.overall", scores.overall),
    ] {
        fields.assign(key, FieldValue::Number(value));
    }
}
