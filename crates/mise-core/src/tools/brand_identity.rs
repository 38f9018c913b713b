use std::sync::OnceLock;

use super::{no_derived_fields, ToolKind};
use crate::schema::{FieldDescriptor, StepDescriptor, ToolSchema};

const PRIMARY: &[&str] = &[
    "Warm & Earthy",
    "Cool & Calm",
    "Bold & Vibrant",
    "Neutral & Elegant",
    "Dark & Moody",
    "Light & Fresh",
];
const SECONDARY: &[&str] = &[
    "Natural Wood",
    "Terracotta",
    "Sage Green",
    "Ocean Blue",
    "Warm Gray",
    "Soft Gold",
    "Deep Purple",
    "Rustic Red",
];
const ACCENT: &[&str] = &[
    "Metallic Gold",
    "Copper",
    "Emerald",
    "Ruby",
    "Sapphire",
    "Bronze",
    "Pearl",
    "Charcoal",
];
const HEADING_FONTS: &[&str] = &[
    "Modern Sans-Serif",
    "Classic Serif",
    "Elegant Script",
    "Bold Display",
    "Artisanal",
];
const BODY_FONTS: &[&str] = &[
    "Clean Sans-Serif",
    "Readable Serif",
    "Modern Geometric",
    "Friendly Rounded",
];
const TYPE_STYLES: &[&str] = &[
    "Bold Headers",
    "Elegant Spacing",
    "Mixed Weights",
    "Minimal",
    "Dynamic Scale",
    "Handwritten Accents",
    "Classic Hierarchy",
    "Modern Contrast",
];
const LOGO_STYLES: &[&str] = &[
    "Minimalist",
    "Illustrative",
    "Typography-Based",
    "Icon + Text",
    "Emblem",
    "Abstract",
    "Vintage",
    "Modern",
];
const IMAGERY: &[&str] = &[
    "Food Close-ups",
    "Lifestyle",
    "Ingredient-Focused",
    "Action Shots",
    "Environmental",
    "People-Centric",
    "Artistic",
    "Documentary",
];
const PATTERNS: &[&str] = &[
    "Geometric",
    "Organic",
    "Cultural",
    "Natural",
    "Abstract",
    "Textural",
    "Minimal",
    "Repeating",
];
const KEYWORDS: &[&str] = &[
    "Authentic",
    "Modern",
    "Welcoming",
    "Sophisticated",
    "Artisanal",
    "Vibrant",
    "Cozy",
    "Innovative",
];
const INSPIRATIONS: &[&str] = &[
    "Nature",
    "Urban Life",
    "Travel",
    "Architecture",
    "Art",
    "Culture",
    "Craft",
    "Heritage",
];
const FEELINGS: &[&str] = &[
    "Comfort",
    "Excitement",
    "Trust",
    "Luxury",
    "Nostalgia",
    "Energy",
    "Calm",
    "Joy",
];
const MENU: &[&str] = &[
    "Clean Layout",
    "Photo-Rich",
    "Minimalist",
    "Illustrated",
    "Story-Driven",
    "Interactive",
    "Traditional",
    "Modern Grid",
];
const SIGNAGE: &[&str] = &[
    "Illuminated",
    "Dimensional",
    "Hand-Painted",
    "Digital Display",
    "Architectural",
    "Window Graphics",
    "Minimal",
    "Statement",
];
const PACKAGING: &[&str] = &[
    "Eco-Friendly",
    "Premium",
    "Branded Pattern",
    "Simple & Clean",
    "Storytelling",
    "Custom Stamps",
    "Color-Coded",
    "Artistic",
];
const DIGITAL: &[&str] = &[
    "Website Design",
    "Social Media",
    "Email Templates",
    "Mobile App",
    "Digital Menu",
    "Online Ordering",
    "Virtual Tour",
    "Content Style",
];

pub(super) fn schema() -> &'static ToolSchema {
    static SCHEMA: OnceLock<ToolSchema> = OnceLock::new();
    SCHEMA.get_or_init(|| ToolSchema {
        kind: ToolKind::BrandIdentityDesigner,
        title: "Brand Identity Designer",
        subject: "brand identity",
        title_field: "name",
        steps: vec![
            StepDescriptor::new(
                "Colors",
                "Color palette selection",
                vec![
                    FieldDescriptor::text("name", "Brand Name").required(),
                    FieldDescriptor::choice("color_palette.primary", "Primary Palette", PRIMARY),
                    FieldDescriptor::multi(
                        "color_palette.secondary",
                        "Secondary Colors",
                        SECONDARY,
                    ),
                    FieldDescriptor::multi("color_palette.accent", "Accent Colors", ACCENT),
                ],
            ),
            StepDescriptor::new(
                "Typography",
                "Font and text styles",
                vec![
                    FieldDescriptor::choice("typography.heading_font", "Heading Font", HEADING_FONTS),
                    FieldDescriptor::choice("typography.body_font", "Body Font", BODY_FONTS),
                    FieldDescriptor::multi("typography.style", "Typography Style", TYPE_STYLES),
                ],
            ),
            StepDescriptor::new(
                "Visual Elements",
                "Logo and imagery",
                vec![
                    FieldDescriptor::multi("visual_elements.logo_style", "Logo Style", LOGO_STYLES),
                    FieldDescriptor::multi("visual_elements.imagery", "Imagery", IMAGERY),
                    FieldDescriptor::multi("visual_elements.patterns", "Patterns", PATTERNS),
                ],
            ),
            StepDescriptor::new(
                "Mood & Style",
                "Brand personality",
                vec![
                    FieldDescriptor::multi("mood_board.keywords", "Keywords", KEYWORDS),
                    FieldDescriptor::multi("mood_board.inspirations", "Inspirations", INSPIRATIONS),
                    FieldDescriptor::multi("mood_board.feelings", "Feelings", FEELINGS),
                ],
            ),
            StepDescriptor::new(
                "Applications",
                "Brand usage",
                vec![
                    FieldDescriptor::multi("applications.menu", "Menu Design", MENU),
                    FieldDescriptor::multi("applications.signage", "Signage", SIGNAGE),
                    FieldDescriptor::multi("applications.packaging", "Packaging", PACKAGING),
                    FieldDescriptor::multi("applications.digital", "Digital Presence", DIGITAL),
                ],
            ),
        ],
        derived: Vec::new(),
        missing_message: "Please provide a name for your brand identity",
        success_message: "Brand identity saved successfully!",
        task_template: "Review brand identity for {}",
        derive: no_derived_fields,
    })
}
