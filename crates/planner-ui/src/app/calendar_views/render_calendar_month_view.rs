fn render_calendar_month_view(
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
  let labels =
    weekday_labels(week_start);

  html! {
      <>
          <div class="calendar-weekday-row">
              {
                  for labels.into_iter().map(|label| html! {
                      <div class="calendar-weekday">{ label }</div>
                  })
              }
          </div>
          <div class="calendar-grid calendar-month-grid">
              {
                  for month_grid(focus, week_start).into_iter().map(|day| {
                      let day_events = events_for_day(store, scope, day);
                      let outside = day.month() != focus.month();
                      let is_today = day == today;
                      let has_events = !day_events.is_empty();
                      let on_drill = on_drill.clone();
                      html! {
                          <div
                              class={classes!(
                                  "calendar-day-cell",
                                  outside.then_some("outside"),
                                  is_today.then_some("today"),
                                  has_events.then_some("has-events")
                              )}
                              onclick={Callback::from(move |_| on_drill.emit((day, CalendarViewMode::Day)))}
                          >
                              <div class="calendar-day-label">{ day.day() }</div>
                              { render_event_badges(&day_events) }
                          </div>
                      }
                  })
              }
          </div>
      </>
  }
}
