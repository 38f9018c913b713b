use std::sync::OnceLock;

use super::{no_derived_fields, ToolKind};
use crate::schema::{FieldDescriptor, StepDescriptor, ToolSchema};

const TIMEFRAMES: &[&str] = &["Next Month", "Next Quarter", "Next 6 Months", "Next Year"];
const WEATHER: &[&str] = &[
    "Hot Summer",
    "Mild Weather",
    "Cold Winter",
    "Rainy Season",
    "Perfect Patio",
    "Indoor Focus",
];
const EVENTS: &[&str] = &[
    "Sports Games",
    "Festivals",
    "Conventions",
    "Concerts",
    "Markets",
    "School Events",
];
const HOLIDAYS: &[&str] = &[
    "Christmas",
    "New Year",
    "Valentine's",
    "Summer Break",
    "Thanksgiving",
    "Spring Break",
];
const SEGMENTS: &[&str] = &[
    "Office Workers",
    "Students",
    "Families",
    "Tourists",
    "Young Professionals",
    "Retirees",
];
const PEAK_HOURS: &[&str] = &[
    "Early Morning",
    "Breakfast",
    "Lunch Rush",
    "Afternoon",
    "Dinner",
    "Late Night",
];

pub(super) fn schema() -> &'static ToolSchema {
    static SCHEMA: OnceLock<ToolSchema> = OnceLock::new();
    SCHEMA.get_or_init(|| ToolSchema {
        kind: ToolKind::DemandForecaster,
        title: "Demand Forecaster",
        subject: "demand forecast",
        title_field: "location",
        steps: vec![
            StepDescriptor::new(
                "Basic Info",
                "Location & timeframe",
                vec![
                    FieldDescriptor::text("location", "Location").required(),
                    FieldDescriptor::choice("timeframe", "Forecast Timeframe", TIMEFRAMES)
                        .required(),
                ],
            ),
            StepDescriptor::new(
                "Seasonal Factors",
                "Weather & events",
                vec![
                    FieldDescriptor::multi("seasonal_factors.weather", "Weather Patterns", WEATHER),
                    FieldDescriptor::multi("seasonal_factors.events", "Local Events", EVENTS),
                    FieldDescriptor::multi("seasonal_factors.holidays", "Holidays", HOLIDAYS),
                ],
            ),
            StepDescriptor::new(
                "Customer Flow",
                "Peak times & segments",
                vec![
                    FieldDescriptor::multi(
                        "customer_segments.primary",
                        "Primary Segments",
                        SEGMENTS,
                    ),
                    FieldDescriptor::multi(
                        "customer_segments.secondary",
                        "Secondary Segments",
                        SEGMENTS,
                    ),
                    FieldDescriptor::multi("customer_segments.peak_hours", "Peak Hours", PEAK_HOURS),
                    FieldDescriptor::lines("demand_drivers.internal", "Internal Demand Drivers"),
                    FieldDescriptor::lines("demand_drivers.external", "External Demand Drivers"),
                ],
            ),
            StepDescriptor::new(
                "Projections",
                "Expected demand",
                vec![
                    FieldDescriptor::number("projections.weekday.morning", "Weekday Morning"),
                    FieldDescriptor::number("projections.weekday.afternoon", "Weekday Afternoon"),
                    FieldDescriptor::number("projections.weekday.evening", "Weekday Evening"),
                    FieldDescriptor::number("projections.weekend.morning", "Weekend Morning"),
                    FieldDescriptor::number("projections.weekend.afternoon", "Weekend Afternoon"),
                    FieldDescriptor::number("projections.weekend.evening", "Weekend Evening"),
                ],
            ),
        ],
        derived: Vec::new(),
        missing_message: "Please provide both location and timeframe",
        success_message: "Demand forecast saved successfully!",
        task_template: "Review demand forecast for {}",
        derive: no_derived_fields,
    })
}
