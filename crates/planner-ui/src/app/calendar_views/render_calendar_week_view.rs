fn render_calendar_week_view(
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
  html! {
      <div class="calendar-grid calendar-week-grid">
          {
              for week_days(focus, week_start).into_iter().map(|day| {
                  let day_events = events_for_day(store, scope, day);
                  let count = day_events.len();
                  let is_today = day == today;
                  let on_drill = on_drill.clone();

                  html! {
                      <div
                          class={classes!("calendar-week-day-card", is_today.then_some("today"), (count > 0).then_some("has-events"))}
                          onclick={Callback::from(move |_| on_drill.emit((day, CalendarViewMode::Day)))}
                      >
                          <div class="calendar-week-day-head">
                              <span>{ day.format("%a %d").to_string() }</span>
                          </div>
                          { render_event_badges(&day_events) }
                      </div>
                  }
              })
          }
      </div>
  }
}
