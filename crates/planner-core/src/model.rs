use std::fmt;

use chrono::{
  NaiveDate,
  NaiveDateTime
};
use serde::{
  Deserialize,
  Serialize
};
use uuid::Uuid;

/// Project identifier. Generated ids are
/// UUID v4 strings; ids read back from a
/// route are taken verbatim.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
  pub fn generate() -> Self {
    Self(Uuid::new_v4().to_string())
  }

  pub fn new(raw: impl Into<String>) -> Self {
    Self(raw.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for ProjectId {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(&self.0)
  }
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct Project {
  pub id:   ProjectId,
  pub name: String
}

/// Completed event-form payload, before
/// a project is attached at save time.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct EventDraft {
  pub title:     String,
  pub start:     NaiveDateTime,
  pub end:       NaiveDateTime,
  #[serde(default)]
  pub multi_day: bool
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct Event {
  pub title:      String,
  pub start:      NaiveDateTime,
  pub end:        NaiveDateTime,
  pub multi_day:  bool,
  pub project_id: Option<ProjectId>
}

impl Event {
  pub fn from_draft(
    draft: EventDraft,
    project_id: Option<ProjectId>
  ) -> Self {
    Self {
      title: draft.title,
      start: draft.start,
      end: draft.end,
      multi_day: draft.multi_day,
      project_id
    }
  }

  pub fn occurs_on(
    &self,
    day: NaiveDate
  ) -> bool {
    let first = self.start.date();
    if !self.multi_day {
      return first == day;
    }
    let last = self.end.date().max(first);
    first <= day && day <= last
  }

  pub fn belongs_to(
    &self,
    filter: Option<&ProjectId>
  ) -> bool {
    match filter {
      | None => true,
      | Some(id) => {
        self.project_id.as_ref() == Some(id)
      }
    }
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CalendarViewMode {
  Month,
  Week,
  Day
}

impl CalendarViewMode {
  pub fn all() -> [Self; 3] {
    [Self::Month, Self::Week, Self::Day]
  }

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::Month => "month",
      | Self::Week => "week",
      | Self::Day => "day"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::Month => "Month",
      | Self::Week => "Week",
      | Self::Day => "Day"
    }
  }

  pub fn from_key(
    key: &str
  ) -> Option<Self> {
    match key
      .trim()
      .to_ascii_lowercase()
      .as_str()
    {
      | "month" => Some(Self::Month),
      | "week" => Some(Self::Week),
      | "day" => Some(Self::Day),
      | _ => None
    }
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;

  fn at(
    y: i32,
    m: u32,
    d: u32,
    h: u32
  ) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
      .expect("valid date")
      .and_hms_opt(h, 0, 0)
      .expect("valid time")
  }

  fn day(
    y: i32,
    m: u32,
    d: u32
  ) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d)
      .expect("valid date")
  }

  #[test]
  fn multi_day_event_spans_every_day_inclusive(
  ) {
    let event = Event {
      title:      "offsite".to_string(),
      start:      at(2026, 3, 30, 9),
      end:        at(2026, 4, 2, 17),
      multi_day:  true,
      project_id: None
    };

    assert!(!event.occurs_on(day(2026, 3, 29)));
    assert!(event.occurs_on(day(2026, 3, 30)));
    assert!(event.occurs_on(day(2026, 4, 1)));
    assert!(event.occurs_on(day(2026, 4, 2)));
    assert!(!event.occurs_on(day(2026, 4, 3)));
  }

  #[test]
  fn single_day_event_ignores_end_date() {
    let event = Event {
      title:      "standup".to_string(),
      start:      at(2026, 3, 30, 9),
      end:        at(2026, 4, 2, 9),
      multi_day:  false,
      project_id: None
    };

    assert!(event.occurs_on(day(2026, 3, 30)));
    assert!(!event.occurs_on(day(2026, 3, 31)));
  }

  #[test]
  fn generated_project_ids_are_uuid_strings(
  ) {
    let id = ProjectId::generate();
    assert!(
      Uuid::parse_str(id.as_str()).is_ok()
    );
    assert_ne!(id, ProjectId::generate());

    let json = serde_json::to_string(&id)
      .expect("serialize project id");
    assert_eq!(json, format!("\"{id}\""));
  }

  #[test]
  fn view_mode_keys_are_case_insensitive() {
    assert_eq!(
      CalendarViewMode::from_key(" Week "),
      Some(CalendarViewMode::Week)
    );
    assert_eq!(
      CalendarViewMode::from_key("year"),
      None
    );
    for view in CalendarViewMode::all() {
      assert_eq!(
        CalendarViewMode::from_key(
          view.as_key()
        ),
        Some(view)
      );
    }
  }
}
