use std::sync::OnceLock;

use mise_domain::{FieldAccess, FieldValue, Fields};

use super::ToolKind;
use crate::metrics::staffing::{budget, ShiftPlan};
use crate::schema::{FieldDescriptor, StepDescriptor, ToolSchema};

const ROLE_TYPES: &[&str] = &["Full-time", "Part-time", "Seasonal", "Contract"];
const SKILLS: &[&str] = &[
    "Food Preparation",
    "Customer Service",
    "Food Safety",
    "Time Management",
    "Team Leadership",
    "POS Systems",
    "Inventory Management",
    "Communication",
];
const RESPONSIBILITIES: &[&str] = &[
    "Food Prep",
    "Cooking",
    "Serving",
    "Cleaning",
    "Inventory",
    "Training",
    "Supervision",
    "Customer Care",
];
const ROLE_SHIFTS: &[&str] = &[
    "Morning (6AM-2PM)",
    "Mid (10AM-6PM)",
    "Afternoon (2PM-10PM)",
    "Evening (4PM-12AM)",
    "Night (10PM-6AM)",
    "Weekend AM",
    "Weekend PM",
    "On-Call",
];
const CERTIFICATIONS: &[&str] = &[
    "Food Handler's Certificate",
    "ServSafe Manager",
    "Alcohol Service",
    "First Aid",
    "Food Safety",
    "Health & Safety",
    "Fire Safety",
    "Allergen Awareness",
];
const TRAINING: &[&str] = &[
    "Onboarding",
    "Food Preparation",
    "Customer Service",
    "POS System",
    "Safety Procedures",
    "Quality Control",
    "Team Building",
    "Leadership",
];
const POLICIES: &[&str] = &[
    "Dress Code",
    "Attendance",
    "Break Policy",
    "Phone Usage",
    "Hygiene Standards",
    "Time Off",
    "Scheduling",
    "Performance Review",
];

pub(super) fn schema() -> &'static ToolSchema {
    static SCHEMA: OnceLock<ToolSchema> = OnceLock::new();
    SCHEMA.get_or_init(|| ToolSchema {
        kind: ToolKind::StaffPlanner,
        title: "Staff Planner",
        subject: "staffing schedule",
        title_field: "name",
        steps: vec![
            StepDescriptor::new(
                "Roles & Skills",
                "Define positions",
                vec![
                    FieldDescriptor::text("name", "Schedule Name").required(),
                    FieldDescriptor::list(
                        "roles",
                        "Roles",
                        vec![
                            FieldDescriptor::text("title", "Role Title"),
                            FieldDescriptor::choice("type", "Employment Type", ROLE_TYPES),
                            FieldDescriptor::multi("skills", "Required Skills", SKILLS),
                            FieldDescriptor::multi(
                                "responsibilities",
                                "Responsibilities",
                                RESPONSIBILITIES,
                            ),
                            FieldDescriptor::multi("shifts", "Shifts", ROLE_SHIFTS),
                            FieldDescriptor::number("headcount", "Headcount").with_default(1.0),
                            FieldDescriptor::number("hourly_rate", "Hourly Rate"),
                        ],
                    ),
                ],
            ),
            StepDescriptor::new(
                "Scheduling",
                "Shift planning",
                vec![
                    FieldDescriptor::number("shifts.morning", "Morning Shift Hours"),
                    FieldDescriptor::number("shifts.afternoon", "Afternoon Shift Hours"),
                    FieldDescriptor::number("shifts.evening", "Evening Shift Hours"),
                    FieldDescriptor::number("shifts.weekend", "Weekend Shift Hours"),
                ],
            ),
            // Review-only page; the budget is computed on save.
            StepDescriptor::new("Budget", "Cost planning", Vec::new()),
            StepDescriptor::new(
                "Requirements",
                "Staff policies",
                vec![
                    FieldDescriptor::multi(
                        "requirements.certifications",
                        "Required Certifications",
                        CERTIFICATIONS,
                    ),
                    FieldDescriptor::multi("requirements.training", "Training Programs", TRAINING),
                    FieldDescriptor::multi("requirements.policies", "Staff Policies", POLICIES),
                ],
            ),
        ],
        derived: vec![
            FieldDescriptor::number("budget.hourly", "Hourly Labor Cost").derived(),
            FieldDescriptor::number("budget.weekly", "Weekly Labor Cost").derived(),
            FieldDescriptor::number("budget.monthly", "Monthly Labor Cost").derived(),
        ],
        missing_message: "Please provide a name for your staffing schedule",
        success_message: "Staff schedule saved successfully!",
        task_template: "Review staffing plan for {}",
        derive,
    })
}

fn derive(fields: &mut Fields) {
    let shifts = ShiftPlan {
        morning: fields.number("shifts.morning"),
        afternoon: fields.number("shifts.afternoon"),
        evening: fields.number("shifts.evening"),
        weekend: fields.number("shifts.weekend"),
    };
    let roles = fields
        .entries("roles")
        .iter()
        .map(|role| (role.number("hourly_rate"), role.number("headcount")));
    let result = budget(roles, &shifts);
    fields.assign("budget.hourly", FieldValue::Number(result.hourly));
    fields.assign("budget.weekly", FieldValue::Number(result.weekly));
    fields.assign("budget.monthly", FieldValue::Number(result.monthly));
}
