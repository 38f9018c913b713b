use std::sync::OnceLock;

use super::{no_derived_fields, ToolKind};
use crate::schema::{FieldDescriptor, StepDescriptor, ToolSchema};

const FREQUENCIES: &[&str] = &["Daily", "2-3 times/week", "Weekly", "Bi-weekly", "Monthly"];
const THEMES: &[&str] = &[
    "Behind the Scenes",
    "Recipe Showcase",
    "Customer Stories",
    "Food Tips",
    "Team Spotlight",
    "Special Offers",
    "Events",
    "Local Community",
];
const GOALS: &[&str] = &[
    "Increase Engagement",
    "Boost Brand Awareness",
    "Drive Website Traffic",
    "Generate Leads",
    "Increase Sales",
    "Build Community",
    "Showcase Products",
    "Educational Content",
];
const POST_TYPES: &[&str] = &["Photo", "Video", "Story", "Carousel", "Reel"];
const PLATFORMS: &[&str] = &["Instagram", "Facebook", "Twitter", "YouTube"];
const STATUSES: &[&str] = &["Draft", "In Progress", "Ready", "Published"];

pub(super) fn schema() -> &'static ToolSchema {
    static SCHEMA: OnceLock<ToolSchema> = OnceLock::new();
    SCHEMA.get_or_init(|| ToolSchema {
        kind: ToolKind::ContentCalendar,
        title: "Content Calendar",
        subject: "content plan",
        title_field: "name",
        steps: vec![
            StepDescriptor::new(
                "Plan Details",
                "Basic information",
                vec![
                    FieldDescriptor::text("name", "Plan Name").required(),
                    FieldDescriptor::date("start_date", "Start Date"),
                    FieldDescriptor::date("end_date", "End Date"),
                ],
            ),
            StepDescriptor::new(
                "Content Strategy",
                "Themes & goals",
                vec![
                    FieldDescriptor::multi("themes", "Content Themes", THEMES),
                    FieldDescriptor::multi("goals", "Content Goals", GOALS),
                ],
            ),
            StepDescriptor::new(
                "Post Planning",
                "Create content posts",
                vec![FieldDescriptor::list(
                    "posts",
                    "Posts",
                    vec![
                        FieldDescriptor::text("title", "Post Title"),
                        FieldDescriptor::choice("type", "Post Type", POST_TYPES),
                        FieldDescriptor::multi("platforms", "Platforms", PLATFORMS),
                        FieldDescriptor::date("date", "Date"),
                        FieldDescriptor::time("time", "Time"),
                        FieldDescriptor::lines("hashtags", "Hashtags"),
                        FieldDescriptor::lines("media_type", "Media"),
                        FieldDescriptor::text("description", "Description"),
                        FieldDescriptor::choice("status", "Status", STATUSES).with_default("Draft"),
                    ],
                )],
            ),
            StepDescriptor::new(
                "Schedule",
                "Timing & frequency",
                vec![FieldDescriptor::choice("frequency", "Posting Frequency", FREQUENCIES)],
            ),
        ],
        derived: Vec::new(),
        missing_message: "Please provide a name for your content plan",
        success_message: "Content plan saved successfully!",
        task_template: "Review content plan: {}",
        derive: no_derived_fields,
    })
}
