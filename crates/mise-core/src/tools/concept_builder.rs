use std::sync::OnceLock;

use super::{no_derived_fields, ToolKind};
use crate::schema::{FieldDescriptor, StepDescriptor, ToolSchema};

const CONCEPT_TYPES: &[&str] = &[
    "Fine Dining",
    "Casual Dining",
    "Fast Casual",
    "Quick Service",
    "Cafe",
    "Bistro",
    "Food Hall",
    "Ghost Kitchen",
];
const UNIQUE_FEATURES: &[&str] = &[
    "Open Kitchen",
    "Chef's Table",
    "Outdoor Seating",
    "Live Entertainment",
    "Interactive Experience",
    "Sustainable Practices",
    "Local Sourcing",
    "Themed Events",
];
const CORE_VALUES: &[&str] = &[
    "Quality",
    "Innovation",
    "Sustainability",
    "Community",
    "Authenticity",
    "Hospitality",
    "Tradition",
    "Excellence",
];
const EMOTIONS: &[&str] = &[
    "Comfort",
    "Excitement",
    "Nostalgia",
    "Joy",
    "Wonder",
    "Relaxation",
    "Energy",
    "Connection",
];
const STYLES: &[&str] = &[
    "Modern",
    "Industrial",
    "Rustic",
    "Minimalist",
    "Traditional",
    "Eclectic",
    "Coastal",
    "Urban",
];
const LIGHTING: &[&str] = &[
    "Natural", "Warm", "Dim", "Bright", "Accent", "Dramatic", "Ambient", "Dynamic",
];
const MUSIC: &[&str] = &[
    "Live Music",
    "Ambient",
    "Jazz",
    "Contemporary",
    "World",
    "Classical",
    "Silent",
    "Dynamic",
];
const SEATING: &[&str] = &[
    "Intimate",
    "Communal",
    "Booth",
    "Bar",
    "Outdoor",
    "Private Rooms",
    "Flexible",
    "Mixed",
];
const SERVICE_TYPES: &[&str] = &[
    "Full Service",
    "Counter Service",
    "Hybrid",
    "Self Service",
    "Buffet",
    "Food Hall",
];
const INTERACTIONS: &[&str] = &[
    "Tableside Service",
    "Order at Counter",
    "Digital Ordering",
    "Table Technology",
    "Personal Greeting",
    "Interactive Experience",
    "Self-Guided",
    "Mixed Format",
];
const SPECIAL_FEATURES: &[&str] = &[
    "Table-Side Preparation",
    "Chef Interaction",
    "Digital Menu",
    "Customization Options",
    "Loyalty Program",
    "Special Events",
    "Cooking Classes",
    "Private Dining",
];
const COLORS: &[&str] = &[
    "Earth Tones",
    "Vibrant",
    "Monochrome",
    "Pastels",
    "Bold",
    "Neutral",
    "Warm",
    "Cool",
];
const PERSONALITY: &[&str] = &[
    "Sophisticated",
    "Friendly",
    "Innovative",
    "Traditional",
    "Playful",
    "Professional",
    "Authentic",
    "Bold",
];

pub(super) fn schema() -> &'static ToolSchema {
    static SCHEMA: OnceLock<ToolSchema> = OnceLock::new();
    SCHEMA.get_or_init(|| ToolSchema {
        kind: ToolKind::RestaurantConceptBuilder,
        title: "Restaurant Concept Builder",
        subject: "restaurant concept",
        title_field: "name",
        steps: vec![
            StepDescriptor::new(
                "Basic Concept",
                "Core restaurant idea",
                vec![
                    FieldDescriptor::text("name", "Restaurant Name").required(),
                    FieldDescriptor::choice("concept_type", "Concept Type", CONCEPT_TYPES)
                        .required(),
                    FieldDescriptor::multi("unique_features", "Unique Features", UNIQUE_FEATURES),
                ],
            ),
            StepDescriptor::new(
                "Vision & Values",
                "Mission and values",
                vec![
                    FieldDescriptor::text("vision.mission_statement", "Mission Statement"),
                    FieldDescriptor::multi("vision.core_values", "Core Values", CORE_VALUES),
                    FieldDescriptor::multi("vision.target_emotion", "Target Emotions", EMOTIONS),
                ],
            ),
            StepDescriptor::new(
                "Atmosphere",
                "Look and feel",
                vec![
                    FieldDescriptor::multi("atmosphere.style", "Design Style", STYLES),
                    FieldDescriptor::multi("atmosphere.lighting", "Lighting", LIGHTING),
                    FieldDescriptor::multi("atmosphere.music", "Music", MUSIC),
                    FieldDescriptor::multi("atmosphere.seating", "Seating", SEATING),
                ],
            ),
            StepDescriptor::new(
                "Service Style",
                "Customer experience",
                vec![
                    FieldDescriptor::choice("service_style.type", "Service Type", SERVICE_TYPES),
                    FieldDescriptor::multi(
                        "service_style.interactions",
                        "Customer Interactions",
                        INTERACTIONS,
                    ),
                    FieldDescriptor::multi(
                        "service_style.special_features",
                        "Special Features",
                        SPECIAL_FEATURES,
                    ),
                ],
            ),
            StepDescriptor::new(
                "Brand Identity",
                "Visual elements",
                vec![
                    FieldDescriptor::multi("brand_identity.colors", "Color Palette", COLORS),
                    FieldDescriptor::multi(
                        "brand_identity.personality",
                        "Brand Personality",
                        PERSONALITY,
                    ),
                    FieldDescriptor::text("brand_identity.story", "Brand Story"),
                ],
            ),
        ],
        derived: Vec::new(),
        missing_message: "Please provide both name and concept type",
        success_message: "Restaurant concept saved successfully!",
        task_template: "Review restaurant concept: {}",
        derive: no_derived_fields,
    })
}
