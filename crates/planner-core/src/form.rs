use anyhow::{
  Context,
  bail
};
use chrono::{
  NaiveDate,
  NaiveDateTime,
  NaiveTime
};

use crate::model::EventDraft;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw field values of the event form,
/// as typed into `<input>` elements.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct EventFormInput {
  pub title:      String,
  pub start_date: String,
  pub start_time: String,
  pub end_date:   String,
  pub end_time:   String,
  pub multi_day:  bool
}

impl EventFormInput {
  pub fn new(
    day: NaiveDate,
    multi_day: bool
  ) -> Self {
    let date =
      day.format(DATE_FORMAT).to_string();
    Self {
      title: String::new(),
      start_date: date.clone(),
      start_time: String::new(),
      end_date: date,
      end_time: String::new(),
      multi_day
    }
  }

  pub fn set_multi_day(
    &mut self,
    multi_day: bool
  ) {
    self.multi_day = multi_day;
  }

  pub fn into_draft(
    self
  ) -> anyhow::Result<EventDraft> {
    let title = self.title.trim();
    if title.is_empty() {
      bail!("title is required");
    }

    let start = parse_date_time(
      &self.start_date,
      &self.start_time,
      NaiveTime::MIN
    )
    .context("invalid start")?;

    let end = if self.multi_day {
      let end = parse_date_time(
        &self.end_date,
        &self.end_time,
        end_of_day()
      )
      .context("invalid end")?;
      if end < start {
        bail!("end must not precede start");
      }
      end
    } else {
      let time = parse_time(&self.end_time)
        .context("invalid end time")?
        .unwrap_or_else(end_of_day);
      start.date().and_time(time).max(start)
    };

    Ok(EventDraft {
      title: title.to_string(),
      start,
      end,
      multi_day: self.multi_day
    })
  }
}

fn end_of_day() -> NaiveTime {
  NaiveTime::from_hms_opt(23, 59, 0)
    .unwrap_or(NaiveTime::MIN)
}

fn parse_date_time(
  date: &str,
  time: &str,
  default_time: NaiveTime
) -> anyhow::Result<NaiveDateTime> {
  let date = NaiveDate::parse_from_str(
    date.trim(),
    DATE_FORMAT
  )
  .with_context(|| {
    format!("`{}` is not a date", date.trim())
  })?;
  let time = parse_time(time)?
    .unwrap_or(default_time);
  Ok(date.and_time(time))
}

fn parse_time(
  raw: &str
) -> anyhow::Result<Option<NaiveTime>> {
  let raw = raw.trim();
  if raw.is_empty() {
    return Ok(None);
  }
  NaiveTime::parse_from_str(raw, "%H:%M")
    .or_else(|_| {
      NaiveTime::parse_from_str(
        raw, "%H:%M:%S"
      )
    })
    .map(Some)
    .with_context(|| {
      format!("`{raw}` is not a time")
    })
}

/// Name of the project to create, or
/// `None` while the field is blank.
pub fn project_name(
  raw: &str
) -> Option<String> {
  let name = raw.trim();
  (!name.is_empty())
    .then(|| name.to_string())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn filled(multi_day: bool) -> EventFormInput {
    EventFormInput {
      title: "  Launch  ".to_string(),
      start_date: "2026-04-10".to_string(),
      start_time: "09:30".to_string(),
      end_date: "2026-04-12".to_string(),
      end_time: "18:00".to_string(),
      multi_day
    }
  }

  #[test]
  fn last_multi_day_toggle_wins() {
    let mut input = filled(false);
    input.set_multi_day(true);
    input.set_multi_day(false);

    let draft =
      input.into_draft().expect("valid draft");
    assert!(!draft.multi_day);
    assert_eq!(draft.title, "Launch");
    assert_eq!(
      draft.end.date(),
      draft.start.date()
    );
  }

  #[test]
  fn multi_day_keeps_end_date() {
    let draft = filled(true)
      .into_draft()
      .expect("valid draft");
    assert!(draft.multi_day);
    assert_eq!(
      draft.end.format("%Y-%m-%d %H:%M").to_string(),
      "2026-04-12 18:00"
    );
  }

  #[test]
  fn rejects_blank_title_and_bad_dates() {
    let mut input = filled(false);
    input.title = "   ".to_string();
    assert!(input.into_draft().is_err());

    let mut input = filled(false);
    input.start_date = "April 10".to_string();
    let error = input
      .into_draft()
      .expect_err("bad date rejected");
    assert!(
      format!("{error:#}").contains("invalid start")
    );

    let mut input = filled(true);
    input.end_date = "2026-04-01".to_string();
    assert!(input.into_draft().is_err());
  }

  #[test]
  fn missing_times_cover_the_whole_day() {
    let mut input = filled(false);
    input.start_time.clear();
    input.end_time.clear();
    let draft =
      input.into_draft().expect("valid draft");
    assert_eq!(
      draft.start.format("%H:%M").to_string(),
      "00:00"
    );
    assert_eq!(
      draft.end.format("%H:%M").to_string(),
      "23:59"
    );
  }

  #[test]
  fn project_name_trims_and_rejects_blank() {
    assert_eq!(
      project_name("  Garden "),
      Some("Garden".to_string())
    );
    assert_eq!(project_name("   "), None);
  }
}
