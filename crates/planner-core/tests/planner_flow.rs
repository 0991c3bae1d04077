use chrono::NaiveDate;
use planner_core::{
    Dialog, EventFormInput, MemoryStorage, ModalGate, PlannerConfig, PlannerStore, ThemeColor,
    ThemeStore,
};

#[test]
fn project_calendar_flow() {
    let config = PlannerConfig::default();
    let mut store = PlannerStore::new();
    let mut gate = ModalGate::new();

    gate.open_project();
    let project = store.add_project("Thesis");
    gate.close_project();

    gate.open_event();
    let day = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");
    let mut input = EventFormInput::new(day, false);
    input.title = "Draft chapter 2".to_string();
    input.set_multi_day(true);
    input.end_date = "2026-10-21".to_string();
    let draft = input.into_draft().expect("valid draft");
    let event = store.add_event(draft, Some(project.id.clone()));
    gate.close_event();

    assert!(gate.open_dialogs().is_empty());
    assert!(!gate.is_open(Dialog::AddEvent));
    assert_eq!(event.project_id, Some(project.id.clone()));

    let scoped = store
        .events_on(
            NaiveDate::from_ymd_opt(2026, 10, 20).expect("valid date"),
            Some(&project.id),
        )
        .count();
    assert_eq!(scoped, 1);

    let storage = MemoryStorage::new();
    let mut themes = ThemeStore::new(
        storage.clone(),
        config.theme_storage_key.clone(),
        config.default_color(),
    );
    assert_eq!(themes.get(), ThemeColor::new("#003cff"));
    themes.set(ThemeColor::new("#333"));

    let reloaded = ThemeStore::new(
        storage,
        config.theme_storage_key.clone(),
        config.default_color(),
    );
    assert_eq!(reloaded.get(), ThemeColor::new("#333"));
}
