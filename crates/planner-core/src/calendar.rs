use chrono::{
  Datelike,
  Duration,
  Local,
  NaiveDate,
  Utc,
  Weekday
};
use chrono_tz::Tz;

use crate::model::CalendarViewMode;

pub const MONTH_GRID_CELLS: i64 = 42;

pub fn today(
  timezone: Option<Tz>
) -> NaiveDate {
  match timezone {
    | Some(tz) => {
      Utc::now().with_timezone(&tz).date_naive()
    }
    | None => Local::now().date_naive()
  }
}

pub fn shift_focus(
  current: NaiveDate,
  view: CalendarViewMode,
  step: i64
) -> NaiveDate {
  match view {
    | CalendarViewMode::Month => {
      shift_months(current, step)
    }
    | CalendarViewMode::Week => {
      add_days(
        current,
        step.saturating_mul(7)
      )
    }
    | CalendarViewMode::Day => {
      add_days(current, step)
    }
  }
}

/// Move by whole months, clamping the
/// day to the target month's length.
/// Out-of-range targets leave `date`
/// unchanged.
pub fn shift_months(
  date: NaiveDate,
  months: i64
) -> NaiveDate {
  let total = (i64::from(date.year()) * 12
    + i64::from(date.month0()))
  .saturating_add(months);

  let Ok(year) =
    i32::try_from(total.div_euclid(12))
  else {
    return date;
  };
  let Ok(month0) =
    u32::try_from(total.rem_euclid(12))
  else {
    return date;
  };

  let month = month0 + 1;
  let day = date
    .day()
    .min(days_in_month(year, month));
  NaiveDate::from_ymd_opt(
    year, month, day
  )
  .unwrap_or(date)
}

pub fn first_day_of_month(
  year: i32,
  month: u32
) -> NaiveDate {
  NaiveDate::from_ymd_opt(
    year, month, 1
  )
  .unwrap_or(NaiveDate::MIN)
}

pub fn last_day_of_month(
  year: i32,
  month: u32
) -> NaiveDate {
  let (next_year, next_month) =
    if month >= 12 {
      (year.saturating_add(1), 1_u32)
    } else {
      (year, month + 1)
    };
  add_days(
    first_day_of_month(
      next_year, next_month
    ),
    -1
  )
}

pub fn days_in_month(
  year: i32,
  month: u32
) -> u32 {
  last_day_of_month(year, month).day()
}

pub fn add_days(
  date: NaiveDate,
  days: i64
) -> NaiveDate {
  Duration::try_days(days)
    .and_then(|delta| {
      date.checked_add_signed(delta)
    })
    .unwrap_or(date)
}

pub fn start_of_week(
  day: NaiveDate,
  week_start: Weekday
) -> NaiveDate {
  let day_idx = day
    .weekday()
    .num_days_from_monday()
    as i64;
  let start_idx = week_start
    .num_days_from_monday()
    as i64;
  let diff =
    (7 + day_idx - start_idx) % 7;
  add_days(day, -diff)
}

/// Every day shown by the 6x7 month
/// grid around `focus`.
pub fn month_grid(
  focus: NaiveDate,
  week_start: Weekday
) -> Vec<NaiveDate> {
  let first = first_day_of_month(
    focus.year(),
    focus.month()
  );
  let grid_start =
    start_of_week(first, week_start);
  (0..MONTH_GRID_CELLS)
    .map(|offset| {
      add_days(grid_start, offset)
    })
    .collect()
}

pub fn week_days(
  focus: NaiveDate,
  week_start: Weekday
) -> Vec<NaiveDate> {
  let start =
    start_of_week(focus, week_start);
  (0_i64..7_i64)
    .map(|offset| add_days(start, offset))
    .collect()
}

pub fn weekday_labels(
  week_start: Weekday
) -> Vec<&'static str> {
  match week_start {
    | Weekday::Mon => {
      vec![
        "Mon", "Tue", "Wed", "Thu",
        "Fri", "Sat", "Sun",
      ]
    }
    | _ => {
      vec![
        "Sun", "Mon", "Tue", "Wed",
        "Thu", "Fri", "Sat",
      ]
    }
  }
}

pub fn period_title(
  view: CalendarViewMode,
  focus: NaiveDate,
  week_start: Weekday
) -> String {
  match view {
    | CalendarViewMode::Month => {
      focus.format("%B %Y").to_string()
    }
    | CalendarViewMode::Week => {
      let start =
        start_of_week(focus, week_start);
      let end = add_days(start, 6);
      format!(
        "{} - {}",
        start.format("%b %d"),
        end.format("%b %d, %Y")
      )
    }
    | CalendarViewMode::Day => {
      focus
        .format("%A, %B %d, %Y")
        .to_string()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn date(
    y: i32,
    m: u32,
    d: u32
  ) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d)
      .expect("valid date")
  }

  #[test]
  fn month_shift_clamps_to_short_months() {
    assert_eq!(
      shift_focus(
        date(2026, 1, 31),
        CalendarViewMode::Month,
        1
      ),
      date(2026, 2, 28)
    );
    assert_eq!(
      shift_focus(
        date(2026, 1, 15),
        CalendarViewMode::Month,
        -1
      ),
      date(2025, 12, 15)
    );
  }

  #[test]
  fn oversized_month_steps_do_not_wrap() {
    let focus = date(2026, 1, 15);
    assert_eq!(
      shift_focus(
        focus,
        CalendarViewMode::Month,
        (1_i64 << 32) + 1
      ),
      focus
    );
    assert_eq!(
      shift_focus(
        focus,
        CalendarViewMode::Week,
        i64::MIN
      ),
      focus
    );
    assert_eq!(
      shift_months(focus, -25),
      date(2023, 12, 15)
    );
  }

  #[test]
  fn week_and_day_shift_by_days() {
    assert_eq!(
      shift_focus(
        date(2026, 2, 18),
        CalendarViewMode::Week,
        -1
      ),
      date(2026, 2, 11)
    );
    assert_eq!(
      shift_focus(
        date(2026, 2, 28),
        CalendarViewMode::Day,
        1
      ),
      date(2026, 3, 1)
    );
  }

  #[test]
  fn month_grid_starts_on_week_start_and_covers_month(
  ) {
    let focus = date(2026, 2, 15);
    let grid =
      month_grid(focus, Weekday::Sun);

    assert_eq!(
      grid.len(),
      MONTH_GRID_CELLS as usize
    );
    assert_eq!(grid[0], date(2026, 2, 1));
    assert_eq!(
      grid[0].weekday(),
      Weekday::Sun
    );
    assert!(grid.contains(&date(2026, 2, 28)));

    let monday_grid =
      month_grid(focus, Weekday::Mon);
    assert_eq!(
      monday_grid[0],
      date(2026, 1, 26)
    );
  }

  #[test]
  fn week_title_spans_seven_days() {
    assert_eq!(
      period_title(
        CalendarViewMode::Week,
        date(2026, 2, 18),
        Weekday::Mon
      ),
      "Feb 16 - Feb 22, 2026"
    );
    assert_eq!(
      period_title(
        CalendarViewMode::Month,
        date(2026, 2, 18),
        Weekday::Mon
      ),
      "February 2026"
    );
  }
}
