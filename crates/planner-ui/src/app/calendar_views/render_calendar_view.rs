fn render_calendar_view(
  view: CalendarViewMode,
  focus: NaiveDate,
  today: NaiveDate,
  week_start: Weekday,
  store: &PlannerStore,
  scope: Option<&ProjectId>,
  on_drill: Callback<(
    NaiveDate,
    CalendarViewMode
  )>
) -> Html {
  match view {
    | CalendarViewMode::Month => {
      render_calendar_month_view(
        focus, today, week_start, store,
        scope, on_drill
      )
    }
    | CalendarViewMode::Week => {
      render_calendar_week_view(
        focus, today, week_start, store,
        scope, on_drill
      )
    }
    | CalendarViewMode::Day => {
      render_calendar_day_view(
        focus, store, scope
      )
    }
  }
}
