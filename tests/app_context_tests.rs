mod common;

use mise::{AppContext, AppError, BusinessStage, FieldAccess, PreferenceBackend, ToolKind};
use mise_config::ConfigError;
use mise_core::CoreError;
use mise_domain::RecordId;

use common::{context_in, setup_context, test_dir};

#[test]
fn fresh_context_starts_in_ideation() {
    let ctx = setup_context();
    assert_eq!(ctx.stage(), BusinessStage::Ideation);
    assert_eq!(ctx.available_tools().len(), 8);
    assert!(ctx.available_tools().contains(&ToolKind::RecipeCostCalculator));
    assert!(!ctx.preferences().is_dark_mode);
    assert!(ctx.tasks().is_empty());
}

#[test]
fn saving_a_tool_queues_its_follow_up_task() {
    let mut ctx = setup_context();
    let wizard = ctx.open_tool(ToolKind::RecipeCostCalculator);
    wizard.set_field("name", "Margherita").expect("name");

    let receipt = ctx
        .save_tool(ToolKind::RecipeCostCalculator)
        .expect("save recipe");
    let task = ctx.tasks().iter().next().expect("task queued");
    assert_eq!(task.text, "Review recipe costs for Margherita");
    assert_eq!(task.text, receipt.follow_up);
    assert!(!task.completed);

    let task_id = task.id;
    assert!(ctx.tasks_mut().toggle(task_id).expect("toggle task"));
    assert_eq!(ctx.tasks().pending().count(), 0);
}

#[test]
fn failed_save_adds_no_task() {
    let mut ctx = setup_context();
    ctx.open_tool(ToolKind::MenuEngineering);

    let err = ctx
        .save_tool(ToolKind::MenuEngineering)
        .expect_err("unnamed menu");
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(err.to_string(), "Validation failed: Please provide a name for your menu");
    assert!(ctx.tasks().is_empty());

    let wizard = ctx.tool_mut(ToolKind::MenuEngineering).expect("still open");
    let notices = wizard.take_notices();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].is_error());
}

#[test]
fn closed_tools_lose_their_drafts() {
    let mut ctx = setup_context();
    ctx.open_tool(ToolKind::BrandIdentityDesigner)
        .set_field("name", "Ember")
        .expect("name");
    ctx.open_tool(ToolKind::BrandIdentityDesigner)
        .go_next();
    assert_eq!(
        ctx.tool(ToolKind::BrandIdentityDesigner)
            .expect("open")
            .current_step(),
        2
    );

    assert!(ctx.close_tool(ToolKind::BrandIdentityDesigner));
    assert!(!ctx.close_tool(ToolKind::BrandIdentityDesigner));
    assert!(matches!(
        ctx.save_tool(ToolKind::BrandIdentityDesigner),
        Err(AppError::ToolNotOpen(ToolKind::BrandIdentityDesigner))
    ));

    let reopened = ctx.open_tool(ToolKind::BrandIdentityDesigner);
    assert_eq!(reopened.current_step(), 1);
    assert_eq!(reopened.draft().record().text("name"), "");
    assert!(reopened.collection().is_empty());
}

#[test]
fn stage_change_unmounts_unavailable_tools() {
    let mut ctx = setup_context();
    ctx.open_tool(ToolKind::PriceOptimizer);
    ctx.open_tool(ToolKind::ContentCalendar);

    ctx.set_stage(BusinessStage::Social).expect("set stage");
    assert_eq!(ctx.available_tools(), &[ToolKind::ContentCalendar]);
    assert!(!ctx.is_open(ToolKind::PriceOptimizer));
    assert!(ctx.is_open(ToolKind::ContentCalendar));

    ctx.set_stage(BusinessStage::Established).expect("set stage");
    assert!(ctx.available_tools().is_empty());
    assert_eq!(ctx.open_tools().count(), 0);
}

#[test]
fn preferences_persist_between_contexts() {
    let base = test_dir();
    {
        let mut ctx = context_in(&base);
        ctx.set_stage(BusinessStage::Planning).expect("stage");
        ctx.set_show_ai_agents(true).expect("agents");
        assert!(ctx.toggle_dark_mode().expect("dark mode"));
        ctx.open_tool(ToolKind::StaffPlanner)
            .set_field("name", "Weekend crew")
            .expect("name");
        ctx.save_tool(ToolKind::StaffPlanner).expect("save");
    }

    let ctx = context_in(&base);
    assert_eq!(ctx.stage(), BusinessStage::Planning);
    assert!(ctx.preferences().show_ai_agents);
    assert!(ctx.preferences().is_dark_mode);
    // Tasks and tool records are session state.
    assert!(ctx.tasks().is_empty());
    assert!(!ctx.is_open(ToolKind::StaffPlanner));

    let raw = std::fs::read_to_string(base.join("preferences.json")).expect("preferences file");
    let json: serde_json::Value = serde_json::from_str(&raw).expect("json");
    let envelope: serde_json::Value =
        serde_json::from_str(json["app-storage"].as_str().expect("envelope")).expect("envelope");
    assert_eq!(envelope["state"]["businessStage"], "planning");
    assert_eq!(envelope["version"], 0);
}

#[test]
fn second_context_sees_writes_after_reload() {
    let base = test_dir();
    let mut first = context_in(&base);
    let mut second = context_in(&base);

    first.open_tool(ToolKind::RecipeCostCalculator);
    second.set_stage(BusinessStage::Social).expect("stage");
    assert_eq!(first.stage(), BusinessStage::Ideation);
    first.reload_preferences().expect("reload");
    assert_eq!(first.stage(), BusinessStage::Social);
    assert!(!first.is_open(ToolKind::RecipeCostCalculator));
}

/// Backend that reads as empty and refuses every write.
struct ReadOnlyDisk;

impl PreferenceBackend for ReadOnlyDisk {
    fn read(&self, _key: &str) -> Result<Option<String>, ConfigError> {
        Ok(None)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), ConfigError> {
        Err(ConfigError::Backend("disk full".into()))
    }

    fn remove(&self, _key: &str) -> Result<(), ConfigError> {
        Ok(())
    }
}

#[test]
fn failed_stage_write_still_unmounts_unavailable_tools() {
    let mut ctx = AppContext::with_backend(ReadOnlyDisk).expect("open context");
    ctx.open_tool(ToolKind::RecipeCostCalculator);
    ctx.open_tool(ToolKind::ContentCalendar);

    let err = ctx
        .set_stage(BusinessStage::Social)
        .expect_err("write must fail");
    assert!(matches!(err, AppError::Config(ConfigError::Backend(_))));

    assert_eq!(ctx.stage(), BusinessStage::Social);
    assert!(!ctx.is_open(ToolKind::RecipeCostCalculator));
    assert!(ctx.is_open(ToolKind::ContentCalendar));
    for kind in ctx.open_tools() {
        assert!(ctx.available_tools().contains(&kind));
    }
}

#[test]
fn task_actions_report_unknown_ids() {
    let mut ctx = setup_context();
    ctx.open_tool(ToolKind::PriceOptimizer)
        .set_field("name", "Lunch menu")
        .expect("name");
    ctx.save_tool(ToolKind::PriceOptimizer).expect("save");

    let id = ctx.tasks().iter().next().expect("task").id;
    assert!(ctx.toggle_task(id).expect("toggle"));
    assert!(!ctx.toggle_task(id).expect("toggle back"));
    let removed = ctx.remove_task(id).expect("remove");
    assert_eq!(removed.id, id);

    let missing = RecordId::new();
    assert!(matches!(
        ctx.toggle_task(missing),
        Err(AppError::Core(CoreError::TaskNotFound(found))) if found == missing
    ));
    assert!(matches!(
        ctx.remove_task(id),
        Err(AppError::Core(CoreError::TaskNotFound(_)))
    ));
}
