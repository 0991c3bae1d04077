fn events_for_day<'a>(
  store: &'a PlannerStore,
  scope: Option<&'a ProjectId>,
  day: NaiveDate
) -> Vec<&'a Event> {
  store.events_on(day, scope).collect()
}

fn overflow_label(
  count: usize
) -> Option<String> {
  (count > MAX_BADGES_PER_CELL).then(|| {
    format!(
      "+{} more",
      count - MAX_BADGES_PER_CELL
    )
  })
}

fn render_event_badges(
  day_events: &[&Event]
) -> Html {
  html! {
      <div class="calendar-event-list">
          {
              for day_events.iter().take(MAX_BADGES_PER_CELL).map(|event| html! {
                  <span class={classes!("badge", event.multi_day.then_some("multi-day"))}>
                      { event.title.clone() }
                  </span>
              })
          }
          {
              if let Some(label) = overflow_label(day_events.len()) {
                  html! { <span class="calendar-event-more">{ label }</span> }
              } else {
                  html! {}
              }
          }
      </div>
  }
}
