fn render_calendar_day_view(
  focus: NaiveDate,
  store: &PlannerStore,
  scope: Option<&ProjectId>
) -> Html {
  let day_events =
    events_for_day(store, scope, focus);

  if day_events.is_empty() {
    return html! {
        <div class="calendar-day-view empty">{ "No events." }</div>
    };
  }

  html! {
      <div class="calendar-day-view">
          {
              for day_events.into_iter().map(|event| {
                  let span = if event.multi_day {
                      format!(
                          "{} → {}",
                          event.start.format("%b %d %H:%M"),
                          event.end.format("%b %d %H:%M")
                      )
                  } else {
                      format!(
                          "{} - {}",
                          event.start.format("%H:%M"),
                          event.end.format("%H:%M")
                      )
                  };
                  html! {
                      <div class={classes!("calendar-day-event", event.multi_day.then_some("multi-day"))}>
                          <span class="badge">{ event.title.clone() }</span>
                          <span class="calendar-day-event-time">{ span }</span>
                      </div>
                  }
              })
          }
      </div>
  }
}
