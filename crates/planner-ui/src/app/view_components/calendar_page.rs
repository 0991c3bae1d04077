/// Calendar over every event, or over
/// one project's events when `scope` is
/// set. An unknown project still gets a
/// calendar, just an empty one.
fn render_calendar_page(
  props: &AppShellProps,
  scope: Option<ProjectId>
) -> Html {
  let heading = scope.as_ref().map(|id| {
    props
      .store
      .project(id)
      .map(|project| project.name.clone())
      .unwrap_or_else(|| {
        "Unknown project".to_string()
      })
  });

  html! {
      <div class={classes!("content-wrapper", "calendar-content-wrapper", props.sidebar_open.then_some("sidebar-open"))}>
          <CalendarPanel
              focus={props.focus_date}
              today={props.today}
              view={props.view}
              week_start={props.week_start()}
              store={props.store.clone()}
              scope={scope.clone()}
              heading={heading}
              on_navigate={props.on_navigate.clone()}
              on_view={props.on_view_change.clone()}
              on_add_event={props.on_open_event.clone()}
          />
          <AddEventModal
              open={props.modals.is_open(Dialog::AddEvent)}
              project_id={scope}
              initial_date={props.focus_date}
              multi_day={props.multi_day}
              on_set_multi_day={props.on_set_multi_day.clone()}
              on_save={props.on_save_event.clone()}
              on_close={props.on_close_event.clone()}
          />
      </div>
  }
}
