use mise_domain::{FieldAccess, FieldValue, NoticeLevel, RecordId};

use crate::{CoreError, TaskList, ToolKind, Wizard};

fn recipe_wizard() -> Wizard {
    let mut wizard = Wizard::for_tool(ToolKind::RecipeCostCalculator);
    wizard.set_field("name", "Margherita").expect("name");
    wizard.set_field("serving_size", 2.0).expect("serving size");
    let index = wizard.add_entry("ingredients").expect("add ingredient");
    wizard
        .set_field(&format!("ingredients[{index}].name"), "Mozzarella")
        .expect("ingredient name");
    wizard
        .set_field(&format!("ingredients[{index}].unit_cost"), 10.0)
        .expect("unit cost");
    wizard
        .set_field(&format!("ingredients[{index}].quantity"), 1.0)
        .expect("quantity");
    wizard.set_field("labor_cost", 2.0).expect("labor");
    wizard.set_field("overhead_cost", 1.0).expect("overhead");
    wizard.set_field("target_margin", 35.0).expect("margin");
    wizard
}

#[test]
fn recipe_save_computes_price_and_resets_draft() {
    let mut wizard = recipe_wizard();
    wizard.go_next();
    wizard.go_next();

    let receipt = wizard.save().expect("save recipe");
    assert_eq!(receipt.index, 0);
    assert_eq!(receipt.follow_up, "Review recipe costs for Margherita");

    let saved = wizard.collection().get(0).expect("saved record");
    assert_eq!(saved.id, receipt.id);
    assert_eq!(saved.number("ingredients_total"), 10.0);
    assert_eq!(saved.number("suggested_price"), 10.0);
    assert_eq!(saved.entries("ingredients")[0].number("total_cost"), 10.0);

    assert_eq!(wizard.current_step(), 1);
    assert_eq!(wizard.draft().record().text("name"), "");
    assert_eq!(wizard.draft().record().number("serving_size"), 1.0);
    assert!(wizard.draft().record().entries("ingredients").is_empty());
    assert_ne!(wizard.draft().id(), receipt.id);

    let notices = wizard.take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Success);
    assert_eq!(notices[0].description, "Recipe cost calculation saved successfully!");
    assert!(wizard.notices().is_empty());
}

#[test]
fn blank_title_blocks_save_without_side_effects() {
    let mut wizard = recipe_wizard();
    wizard.set_field("name", "   ").expect("blank name");
    wizard.go_next();
    let before = wizard.draft().clone();

    let err = wizard.save().expect_err("blank name must be rejected");
    assert_eq!(err.missing, vec!["name".to_string()]);
    assert_eq!(err.message, "Please provide a name for your recipe");

    assert!(wizard.collection().is_empty());
    assert_eq!(wizard.draft(), &before);
    assert_eq!(wizard.current_step(), 2);

    let notices = wizard.take_notices();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].is_error());
    assert_eq!(notices[0].title, "Error");
    assert_eq!(notices[0].description, "Please provide a name for your recipe");
}

#[test]
fn navigation_stops_at_both_ends() {
    let mut wizard = Wizard::for_tool(ToolKind::RecipeCostCalculator);
    assert_eq!(wizard.step_count(), 4);
    assert!(!wizard.go_previous());
    assert_eq!(wizard.current_step(), 1);
    assert_eq!(wizard.progress_percent(), 25.0);
    assert_eq!(wizard.active_step().map(|step| step.title), Some("Recipe Info"));

    while wizard.go_next() {}
    assert_eq!(wizard.current_step(), 4);
    assert!(wizard.is_last_step());
    assert_eq!(wizard.progress_percent(), 100.0);
    assert!(!wizard.go_next());
    assert_eq!(wizard.active_step().map(|step| step.title), Some("Pricing"));

    assert!(wizard.go_previous());
    assert_eq!(wizard.current_step(), 3);
}

#[test]
fn derived_fields_are_read_only() {
    let mut wizard = recipe_wizard();
    assert_eq!(
        wizard.set_field("suggested_price", 99.0),
        Err(CoreError::ReadOnlyField("suggested_price".into()))
    );
    assert_eq!(
        wizard.set_field("ingredients[0].total_cost", 1.0),
        Err(CoreError::ReadOnlyField("ingredients[0].total_cost".into()))
    );
    assert!(matches!(
        wizard.set_field("garnish", "basil"),
        Err(CoreError::UnknownField(_))
    ));
}

#[test]
fn compute_derived_leaves_draft_alone() {
    let wizard = recipe_wizard();
    let preview = wizard.compute_derived();
    assert_eq!(preview.number("suggested_price"), 10.0);
    assert_eq!(wizard.draft().record().number("suggested_price"), 0.0);
    assert!(wizard.collection().is_empty());
}

#[test]
fn saves_append_in_order_with_fresh_ids() {
    let mut wizard = Wizard::for_tool(ToolKind::RecipeCostCalculator);
    let mut ids: Vec<RecordId> = Vec::new();
    for name in ["Soup", "Salad", "Tart"] {
        wizard.set_field("name", name).expect("name");
        ids.push(wizard.save().expect("save").id);
    }
    let names: Vec<&str> = wizard
        .collection()
        .iter()
        .map(|record| record.text("name"))
        .collect();
    assert_eq!(names, vec!["Soup", "Salad", "Tart"]);
    assert_ne!(ids[0], ids[1]);
    assert_ne!(ids[1], ids[2]);
    assert_eq!(wizard.collection().last().map(|record| record.id), Some(ids[2]));
}

#[test]
fn toggling_a_tag_twice_restores_the_selection() {
    let mut wizard = Wizard::for_tool(ToolKind::LocationAnalyzer);
    wizard
        .toggle_tag("demographics.age_groups", "25-34")
        .expect("toggle");
    let before = wizard.value("demographics.age_groups").cloned().expect("tags");

    assert!(wizard.toggle_tag("demographics.age_groups", "18-24").unwrap());
    assert!(!wizard.toggle_tag("demographics.age_groups", "18-24").unwrap());
    assert_eq!(wizard.value("demographics.age_groups").unwrap(), &before);

    assert!(matches!(
        wizard.toggle_tag("demographics.age_groups", "Toddlers"),
        Err(CoreError::InvalidValue { .. })
    ));
    assert!(matches!(
        wizard.toggle_tag("name", "x"),
        Err(CoreError::FieldKind { .. })
    ));
}

#[test]
fn choices_are_stored_with_declared_spelling() {
    let mut wizard = Wizard::for_tool(ToolKind::RecipeCostCalculator);
    wizard.set_field("category", "main course").unwrap();
    assert_eq!(wizard.value("category").unwrap(), &FieldValue::text("Main Course"));
    assert!(wizard.set_field("category", "Brunch").is_err());
}

#[test]
fn price_points_get_suggestions_and_review_notes() {
    let mut wizard = Wizard::for_tool(ToolKind::PriceOptimizer);
    wizard.set_field("name", "Summer").unwrap();
    wizard.set_field("margins.minimum", 30.0).unwrap();

    let burger = wizard.add_entry("price_points").unwrap();
    wizard.set_field("price_points[0].item_name", "Burger").unwrap();
    wizard.set_field("price_points[0].cost_price", 4.0).unwrap();
    wizard
        .set_field("price_points[0].market_position", "Premium")
        .unwrap();
    wizard.push_number("price_points[0].competitor_prices", 8.0).unwrap();
    wizard.push_number("price_points[0].competitor_prices", 10.0).unwrap();
    assert_eq!(burger, 0);

    wizard.add_entry("price_points").unwrap();
    wizard.set_field("price_points[1].item_name", "Fries").unwrap();
    wizard.set_field("price_points[1].cost_price", 9.0).unwrap();
    wizard
        .set_field("price_points[1].market_position", "Standard")
        .unwrap();
    wizard.push_number("price_points[1].competitor_prices", 0.0).unwrap();
    wizard.set_number("price_points[1].competitor_prices", 0, 5.0).unwrap();

    wizard.save().expect("save strategy");
    let saved = wizard.collection().get(0).unwrap();
    let points = saved.entries("price_points");
    assert!((points[0].number("suggested_price") - 9.9).abs() < 1e-9);
    assert!((points[1].number("suggested_price") - 11.7).abs() < 1e-9);
    assert_eq!(
        saved.lines("optimization.recommendations"),
        &[
            "Increase price for Fries to meet minimum margin requirements".to_string(),
            "Consider reviewing high price point for Fries".to_string(),
        ]
    );
    assert!(matches!(
        wizard.push_line("optimization.recommendations", "manual"),
        Err(CoreError::ReadOnlyField(_))
    ));
}

#[test]
fn location_scores_follow_selections() {
    let mut wizard = Wizard::for_tool(ToolKind::LocationAnalyzer);
    wizard.set_field("name", "Harbour").unwrap();
    let err = wizard.save().expect_err("address is required");
    assert_eq!(err.missing, vec!["address".to_string()]);
    assert_eq!(
        err.message,
        "Please provide both name and address for the location"
    );

    wizard.set_field("address", "1 Quay St").unwrap();
    for tag in ["18-24", "25-34"] {
        wizard.toggle_tag("demographics.age_groups", tag).unwrap();
    }
    wizard.toggle_tag("demographics.occupations", "Students").unwrap();
    wizard.toggle_tag("accessibility.parking", "Bike Racks").unwrap();
    wizard.toggle_tag("accessibility.transport", "Subway").unwrap();
    wizard.set_field("competition.direct", 4.0).unwrap();
    wizard.toggle_tag("competition.gaps", "Late Night").unwrap();
    wizard.set_field("costs.rent", 2500.0).unwrap();

    let receipt = wizard.save().unwrap();
    assert_eq!(receipt.follow_up, "Review location analysis for Harbour");
    let saved = wizard.collection().get(0).unwrap();
    assert_eq!(saved.number("score.demographic"), 60.0);
    assert_eq!(saved.number("score.accessibility"), 10.0);
    assert_eq!(saved.number("score.competition"), 40.0);
    assert_eq!(saved.number("score.financial"), 75.0);
    assert_eq!(saved.number("score.overall"), 46.0);
}

#[test]
fn concept_scores_count_selections() {
    let mut wizard = Wizard::for_tool(ToolKind::ConceptValidator);
    wizard.set_field("concept_name", "Night Market").unwrap();
    wizard
        .toggle_tag("market_research.target_market", "Foodies")
        .unwrap();
    wizard.add_entry("market_research.competitors").unwrap();
    wizard
        .toggle_tag("market_research.competitors[0].strengths", "Price")
        .unwrap();
    wizard
        .toggle_tag("risk_assessment.identified", "Supply Chain")
        .unwrap();
    wizard
        .toggle_tag("risk_assessment.identified", "Staff Turnover")
        .unwrap();
    wizard
        .toggle_tag("risk_assessment.mitigation", "Staff Training")
        .unwrap();

    let receipt = wizard.save().unwrap();
    assert_eq!(receipt.follow_up, "Review concept validation for Night Market");
    let saved = wizard.collection().get(0).unwrap();
    // (20 + 33.3) / 2
    assert_eq!(saved.number("validation_score.market"), 27.0);
    assert_eq!(saved.number("validation_score.financial"), 0.0);
    assert_eq!(saved.number("validation_score.operational"), 25.0);
    assert_eq!(saved.number("validation_score.overall"), 17.0);
}

#[test]
fn staff_budget_uses_role_defaults() {
    let mut wizard = Wizard::for_tool(ToolKind::StaffPlanner);
    wizard.set_field("name", "Summer roster").unwrap();
    wizard.add_entry("roles").unwrap();
    assert_eq!(
        wizard.value("roles[0].headcount").unwrap(),
        &FieldValue::Number(1.0)
    );
    wizard.set_field("roles[0].hourly_rate", 20.0).unwrap();
    wizard.set_field("shifts.morning", 8.0).unwrap();

    wizard.save().unwrap();
    let saved = wizard.collection().get(0).unwrap();
    assert_eq!(saved.number("budget.hourly"), 20.0);
    assert_eq!(saved.number("budget.weekly"), 800.0);
    assert!((saved.number("budget.monthly") - 3464.0).abs() < 1e-6);
}

#[test]
fn equipment_total_sums_item_costs() {
    let mut wizard = Wizard::for_tool(ToolKind::EquipmentGuide);
    wizard.set_field("name", "Line kitchen").unwrap();
    for (purchase, installation) in [(4000.0, 500.0), (1500.0, 0.0)] {
        let index = wizard.add_entry("equipment").unwrap();
        wizard
            .set_field(&format!("equipment[{index}].cost.purchase"), purchase)
            .unwrap();
        wizard
            .set_field(&format!("equipment[{index}].cost.installation"), installation)
            .unwrap();
    }
    wizard.set_field("equipment[1].cost.maintenance", 120.0).unwrap();
    wizard.push_line("equipment[0].suppliers", "Acme").unwrap();

    wizard.save().unwrap();
    assert_eq!(wizard.collection().get(0).unwrap().number("total_cost"), 6120.0);
}

#[test]
fn menu_items_are_classified_on_save() {
    let mut wizard = Wizard::for_tool(ToolKind::MenuEngineering);
    wizard.set_field("name", "Dinner").unwrap();
    wizard.add_entry("categories").unwrap();
    for (popularity, contribution) in [(80.0, 12.0), (20.0, 2.0)] {
        let index = wizard.add_entry("categories[0].items").unwrap();
        wizard
            .set_field(&format!("categories[0].items[{index}].popularity"), popularity)
            .unwrap();
        wizard
            .set_field(
                &format!("categories[0].items[{index}].contribution"),
                contribution,
            )
            .unwrap();
    }
    assert!(matches!(
        wizard.set_field("categories[0].items[0].classification", "star"),
        Err(CoreError::ReadOnlyField(_))
    ));

    wizard.save().unwrap();
    let saved = wizard.collection().get(0).unwrap();
    let items = saved.entries("categories")[0].entries("items");
    assert_eq!(items[0].text("classification"), "star");
    assert_eq!(items[1].text("classification"), "dog");
    assert_eq!(saved.number("analysis.item_count"), 2.0);
    assert_eq!(saved.number("analysis.average_popularity"), 50.0);
}

#[test]
fn demand_forecast_needs_location_and_timeframe() {
    let mut wizard = Wizard::for_tool(ToolKind::DemandForecaster);
    wizard.set_field("location", "Downtown").unwrap();
    let err = wizard.save().unwrap_err();
    assert_eq!(err.missing, vec!["timeframe".to_string()]);

    wizard.set_field("timeframe", "Next Quarter").unwrap();
    let receipt = wizard.save().unwrap();
    assert_eq!(receipt.follow_up, "Review demand forecast for Downtown");
}

#[test]
fn market_gap_is_named_by_area() {
    let mut wizard = Wizard::for_tool(ToolKind::MarketGapAnalyzer);
    wizard.set_field("location.area", "Old Town").unwrap();
    wizard.push_line("demographics.lifestyles", "Night owls").unwrap();
    wizard.set_line("demographics.lifestyles", 0, "Early risers").unwrap();
    assert_eq!(
        wizard.remove_line("demographics.lifestyles", 0).unwrap(),
        "Early risers"
    );
    let receipt = wizard.save().unwrap();
    assert_eq!(receipt.follow_up, "Review market analysis for Old Town");
}

#[test]
fn content_posts_validate_dates_and_times() {
    let mut wizard = Wizard::for_tool(ToolKind::ContentCalendar);
    wizard.add_entry("posts").unwrap();
    assert_eq!(
        wizard.value("posts[0].status").unwrap(),
        &FieldValue::text("Draft")
    );
    wizard.set_field("posts[0].date", "2024-06-01").unwrap();
    wizard.set_field("posts[0].time", "18:30").unwrap();
    assert!(matches!(
        wizard.set_field("posts[0].date", "June 1st"),
        Err(CoreError::InvalidValue { .. })
    ));
    wizard.remove_entry("posts", 0).unwrap();
    assert!(matches!(
        wizard.remove_entry("posts", 0),
        Err(CoreError::IndexOutOfRange { .. })
    ));
}

#[test]
fn task_list_tracks_completion() {
    let mut tasks = TaskList::new();
    let first = tasks.add("Review recipe costs for Soup");
    let second = tasks.add("Review menu design for Dinner");

    assert!(tasks.toggle(first).unwrap());
    assert_eq!(tasks.pending().count(), 1);
    assert!(!tasks.toggle(first).unwrap());
    assert_eq!(tasks.pending().count(), 2);

    let removed = tasks.remove(second).unwrap();
    assert_eq!(removed.text, "Review menu design for Dinner");
    assert_eq!(tasks.len(), 1);

    let unknown = RecordId::new();
    assert_eq!(tasks.toggle(unknown), Err(CoreError::TaskNotFound(unknown)));
    assert!(tasks.remove(second).is_err());
}
