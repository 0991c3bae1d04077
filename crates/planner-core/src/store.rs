use chrono::NaiveDate;
use tracing::debug;

use crate::model::{
  Event,
  EventDraft,
  Project,
  ProjectId
};

/// In-memory projects and events for
/// the lifetime of the page.
///
/// Events live in one flat sequence
/// carrying their project id; the
/// per-project view is a scan over it.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct PlannerStore {
  projects: Vec<Project>,
  events:   Vec<Event>
}

impl PlannerStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn projects(&self) -> &[Project] {
    &self.projects
  }

  pub fn events(&self) -> &[Event] {
    &self.events
  }

  pub fn add_project(
    &mut self,
    name: impl Into<String>
  ) -> Project {
    let project = Project {
      id:   ProjectId::generate(),
      name: name.into()
    };
    self.projects.push(project.clone());
    debug!(
      project_id = %project.id,
      name = %project.name,
      project_count = self.projects.len(),
      "added project"
    );
    project
  }

  pub fn add_event(
    &mut self,
    draft: EventDraft,
    project_id: Option<ProjectId>
  ) -> Event {
    let event =
      Event::from_draft(draft, project_id);
    self.events.push(event.clone());
    debug!(
      project_id = ?event.project_id,
      multi_day = event.multi_day,
      event_count = self.events.len(),
      "added event"
    );
    event
  }

  pub fn project(
    &self,
    id: &ProjectId
  ) -> Option<&Project> {
    self
      .projects
      .iter()
      .find(|project| &project.id == id)
  }

  pub fn events_for<'a>(
    &'a self,
    filter: Option<&'a ProjectId>
  ) -> impl Iterator<Item = &'a Event> + 'a
  {
    self
      .events
      .iter()
      .filter(move |event| {
        event.belongs_to(filter)
      })
  }

  pub fn events_on<'a>(
    &'a self,
    day: NaiveDate,
    filter: Option<&'a ProjectId>
  ) -> impl Iterator<Item = &'a Event> + 'a
  {
    self
      .events_for(filter)
      .filter(move |event| {
        event.occurs_on(day)
      })
  }

  pub fn event_count_for(
    &self,
    id: &ProjectId
  ) -> usize {
    self.events_for(Some(id)).count()
  }
}

#[cfg(test)]
mod tests {
  use std::collections::BTreeSet;

  use chrono::NaiveDate;

  use super::*;

  fn draft(
    title: &str,
    day: u32
  ) -> EventDraft {
    let start =
      NaiveDate::from_ymd_opt(2026, 5, day)
        .expect("valid date")
        .and_hms_opt(10, 0, 0)
        .expect("valid time");
    EventDraft {
      title: title.to_string(),
      start,
      end: start,
      multi_day: false
    }
  }

  #[test]
  fn projects_keep_call_order_with_unique_ids(
  ) {
    let mut store = PlannerStore::new();
    let names =
      ["alpha", "beta", "gamma", "beta"];
    for name in names {
      store.add_project(name);
    }

    let stored = store
      .projects()
      .iter()
      .map(|project| project.name.as_str())
      .collect::<Vec<_>>();
    assert_eq!(stored, names);

    let ids = store
      .projects()
      .iter()
      .map(|project| project.id.clone())
      .collect::<BTreeSet<_>>();
    assert_eq!(ids.len(), names.len());
  }

  #[test]
  fn add_event_keeps_the_given_project_id() {
    let mut store = PlannerStore::new();
    let work = store.add_project("work");
    let home = store.add_project("home");

    store.add_event(
      draft("review", 4),
      Some(work.id.clone())
    );
    store.add_event(
      draft("groceries", 4),
      Some(home.id.clone())
    );
    store.add_event(draft("loose", 5), None);

    assert_eq!(store.events().len(), 3);
    assert_eq!(
      store.events()[0].project_id,
      Some(work.id.clone())
    );
    assert_eq!(
      store.events()[1].project_id,
      Some(home.id.clone())
    );
    assert_eq!(
      store.events()[2].project_id,
      None
    );
    assert_eq!(
      store.event_count_for(&work.id),
      1
    );
  }

  #[test]
  fn unknown_project_filter_yields_no_events(
  ) {
    let mut store = PlannerStore::new();
    let work = store.add_project("work");
    store.add_event(
      draft("review", 4),
      Some(work.id)
    );

    let unknown = ProjectId::generate();
    assert!(store.project(&unknown).is_none());
    assert_eq!(
      store.events_for(Some(&unknown)).count(),
      0
    );
    assert_eq!(
      store.events_for(None).count(),
      1
    );
  }

  #[test]
  fn events_on_combines_day_and_project_filter(
  ) {
    let mut store = PlannerStore::new();
    let work = store.add_project("work");
    store.add_event(
      draft("review", 4),
      Some(work.id.clone())
    );
    store.add_event(draft("loose", 4), None);
    store.add_event(
      draft("retro", 6),
      Some(work.id.clone())
    );

    let may_4 =
      NaiveDate::from_ymd_opt(2026, 5, 4)
        .expect("valid date");
    let titles = store
      .events_on(may_4, Some(&work.id))
      .map(|event| event.title.as_str())
      .collect::<Vec<_>>();
    assert_eq!(titles, vec!["review"]);
    assert_eq!(
      store.events_on(may_4, None).count(),
      2
    );
  }
}
